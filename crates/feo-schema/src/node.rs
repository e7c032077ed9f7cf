//! # Schema Nodes
//!
//! [`SchemaNode`] is a borrowed, read-only view over one node of a JSON
//! Schema document. It exposes only the keywords the engine cares about
//! (`$defs`/`definitions`, `properties`, `items`, `required`, `default`,
//! `examples`, `description`) and every accessor is total: a missing or
//! mistyped keyword reads as absent, never as an error.

use serde_json::{Map, Value};

/// Keywords holding named reusable subschemas, in lookup order.
const DEFINITION_KEYWORDS: [&str; 2] = ["$defs", "definitions"];

/// Read-only view over one schema node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SchemaNode<'a> {
    value: &'a Value,
}

impl<'a> SchemaNode<'a> {
    pub fn new(value: &'a Value) -> Self {
        Self { value }
    }

    /// The raw JSON behind this node.
    pub fn value(&self) -> &'a Value {
        self.value
    }

    fn keyword_map(&self, keyword: &str) -> Option<&'a Map<String, Value>> {
        self.value.get(keyword).and_then(Value::as_object)
    }

    /// A named definition under `$defs` (or legacy `definitions`).
    pub fn definition(&self, name: &str) -> Option<SchemaNode<'a>> {
        DEFINITION_KEYWORDS
            .iter()
            .filter_map(|kw| self.keyword_map(kw))
            .find_map(|defs| defs.get(name))
            .map(SchemaNode::new)
    }

    /// Names of all definitions on this node, sorted.
    pub fn definition_names(&self) -> Vec<&'a str> {
        let mut names: Vec<&'a str> = DEFINITION_KEYWORDS
            .iter()
            .filter_map(|kw| self.keyword_map(kw))
            .flat_map(|defs| defs.keys().map(String::as_str))
            .collect();
        names.sort_unstable();
        names.dedup();
        names
    }

    /// A child property schema.
    pub fn property(&self, name: &str) -> Option<SchemaNode<'a>> {
        self.keyword_map("properties")
            .and_then(|props| props.get(name))
            .map(SchemaNode::new)
    }

    /// True when the node declares a property called `name`.
    pub fn has_property(&self, name: &str) -> bool {
        self.property(name).is_some()
    }

    /// All child properties, in key order.
    pub fn properties(&self) -> impl Iterator<Item = (&'a str, SchemaNode<'a>)> + 'a {
        self.keyword_map("properties")
            .into_iter()
            .flat_map(|props| props.iter().map(|(k, v)| (k.as_str(), SchemaNode::new(v))))
    }

    /// The item schema of an array node. Only the single-schema form of
    /// `items` is followed; tuple forms read as absent.
    pub fn items(&self) -> Option<SchemaNode<'a>> {
        self.value
            .get("items")
            .filter(|items| items.is_object())
            .map(SchemaNode::new)
    }

    /// Either a definition or a property named `segment`, definitions first.
    pub fn child(&self, segment: &str) -> Option<SchemaNode<'a>> {
        self.definition(segment).or_else(|| self.property(segment))
    }

    /// Names listed under `required`. Non-string entries are skipped.
    pub fn required(&self) -> Vec<&'a str> {
        self.value
            .get("required")
            .and_then(Value::as_array)
            .map(|names| names.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default()
    }

    /// The declared `default`, if any.
    pub fn default_value(&self) -> Option<&'a Value> {
        self.value.get("default")
    }

    /// The declared `default` when it is a string.
    pub fn default_str(&self) -> Option<&'a str> {
        self.default_value().and_then(Value::as_str)
    }

    /// The declared `default` when it is an integer.
    pub fn default_i64(&self) -> Option<i64> {
        self.default_value().and_then(Value::as_i64)
    }

    /// Entries of `examples`, empty when absent.
    pub fn examples(&self) -> &'a [Value] {
        self.value
            .get("examples")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn description(&self) -> Option<&'a str> {
        self.value.get("description").and_then(Value::as_str)
    }
}
