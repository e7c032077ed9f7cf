//! # Schema Navigator
//!
//! Pure traversal over a schema document. At each path segment the
//! navigator looks under the current node's definitions first, then its
//! `properties`; anything else ends traversal with `None`. Absence is the
//! normal answer for optional or unknown paths, not an error.
//!
//! The projections [`Navigator::defaults_of`], [`Navigator::required_of`]
//! and [`Navigator::examples_of`] are deterministic: the same document and
//! path always produce the same output.

use std::collections::BTreeMap;

use feo_core::SchemaPath;
use serde_json::Value;

use crate::node::SchemaNode;

/// Read-only walker over one schema document.
#[derive(Debug, Clone, Copy)]
pub struct Navigator<'a> {
    root: SchemaNode<'a>,
}

impl<'a> Navigator<'a> {
    pub fn new(document: &'a Value) -> Self {
        Self {
            root: SchemaNode::new(document),
        }
    }

    /// The document root.
    pub fn root(&self) -> SchemaNode<'a> {
        self.root
    }

    /// Follow `path` from the root.
    pub fn resolve(&self, path: &SchemaPath) -> Option<SchemaNode<'a>> {
        path.segments()
            .iter()
            .try_fold(self.root, |node, segment| node.child(segment))
    }

    /// Declared `default` of every child property of the node at `path`.
    pub fn defaults_of(&self, path: &SchemaPath) -> BTreeMap<String, Value> {
        self.resolve(path)
            .map(|node| {
                node.properties()
                    .filter_map(|(name, prop)| {
                        prop.default_value().map(|d| (name.to_string(), d.clone()))
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    /// `required` field names of the node at `path`.
    pub fn required_of(&self, path: &SchemaPath) -> Vec<String> {
        self.resolve(path)
            .map(|node| node.required().into_iter().map(str::to_string).collect())
            .unwrap_or_default()
    }

    /// `examples` of the node at `path`.
    pub fn examples_of(&self, path: &SchemaPath) -> Vec<Value> {
        self.resolve(path)
            .map(|node| node.examples().to_vec())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn schema() -> Value {
        json!({
            "$defs": {
                "frontendSpec": {
                    "required": ["title", "envName"],
                    "properties": {
                        "title": { "type": "string" },
                        "module": {
                            "required": ["manifestLocation"],
                            "examples": [{ "manifestLocation": "/apps/x/fed-mods.json" }],
                            "properties": {
                                "manifestLocation": { "type": "string" },
                                "defaultDocumentTitle": { "type": "string", "default": "Console" },
                                "isFedramp": { "type": "boolean", "default": false }
                            }
                        }
                    }
                }
            }
        })
    }

    #[test]
    fn resolves_definitions_then_properties() {
        let doc = schema();
        let nav = Navigator::new(&doc);
        let module = nav.resolve(&SchemaPath::spec_field("module")).unwrap();
        assert!(module.has_property("manifestLocation"));
    }

    #[test]
    fn unknown_segment_is_absent() {
        let doc = schema();
        let nav = Navigator::new(&doc);
        assert!(nav.resolve(&SchemaPath::spec_field("nope")).is_none());
        assert!(nav.resolve(&SchemaPath::from_dotted("title")).is_none());
    }

    #[test]
    fn empty_path_resolves_to_root() {
        let doc = schema();
        let nav = Navigator::new(&doc);
        assert_eq!(nav.resolve(&SchemaPath::root()), Some(nav.root()));
    }

    #[test]
    fn collects_declared_defaults_only() {
        let doc = schema();
        let nav = Navigator::new(&doc);
        let defaults = nav.defaults_of(&SchemaPath::spec_field("module"));
        assert_eq!(defaults.len(), 2);
        assert_eq!(defaults["defaultDocumentTitle"], "Console");
        assert_eq!(defaults["isFedramp"], false);
    }

    #[test]
    fn required_and_examples() {
        let doc = schema();
        let nav = Navigator::new(&doc);
        assert_eq!(
            nav.required_of(&SchemaPath::frontend_spec()),
            vec!["title", "envName"]
        );
        let examples = nav.examples_of(&SchemaPath::spec_field("module"));
        assert_eq!(examples.len(), 1);
        assert_eq!(examples[0]["manifestLocation"], "/apps/x/fed-mods.json");
    }

    #[test]
    fn projections_are_empty_for_absent_nodes() {
        let doc = schema();
        let nav = Navigator::new(&doc);
        let missing = SchemaPath::spec_field("serviceTiles");
        assert!(nav.defaults_of(&missing).is_empty());
        assert!(nav.required_of(&missing).is_empty());
        assert!(nav.examples_of(&missing).is_empty());
    }

    #[test]
    fn projections_are_deterministic() {
        let doc = schema();
        let nav = Navigator::new(&doc);
        let path = SchemaPath::spec_field("module");
        assert_eq!(nav.defaults_of(&path), nav.defaults_of(&path));
        assert_eq!(nav.required_of(&path), nav.required_of(&path));
    }
}
