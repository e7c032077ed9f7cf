//! # Config Validation
//!
//! Validates a candidate `frontend.yaml` against the cached FEO schema.
//!
//! ## Flow
//!
//! Parse YAML → ensure the schema is fresh (best effort) → compile and run
//! the `jsonschema` validator → append advisory checks. Each step that can
//! fail degrades to a reported outcome; nothing is thrown past
//! [`ConfigValidator::validate`].
//!
//! ## Error order
//!
//! Violations are reported in the validator's own iteration order. They are
//! never re-sorted.
//!
//! ## Schema Resolution
//!
//! Internal `$ref`s (`#/$defs/...`) are resolved by the jsonschema crate.
//! External `$ref`s are answered by a local retriever with a permissive
//! schema so validation never goes to the network on its own.

use std::fmt;

use feo_core::FeoError;
use jsonschema::{Retrieve, Uri, Validator};
use serde_json::Value;

use crate::store::SchemaStore;

/// Token whose presence marks a schema-reference comment in a document.
pub const SCHEMA_REFERENCE_TOKEN: &str = "yaml-language-server";

/// Advisory reported when no schema could be obtained.
pub const SCHEMA_UNAVAILABLE: &str = "schema unavailable";

/// Advisory for a spec without `feoConfigEnabled: true`.
pub const ADVISORY_FEO_DISABLED: &str =
    "Consider adding `feoConfigEnabled: true` to enable FEO features";

/// Advisory for a document without a schema reference comment.
pub const ADVISORY_NO_SCHEMA_REFERENCE: &str =
    "Add a `# yaml-language-server: $schema=...` reference at the top of the file for IDE validation";

/// Answers every external `$ref` with an accept-anything schema.
struct OfflineRetriever;

impl Retrieve for OfflineRetriever {
    fn retrieve(
        &self,
        uri: &Uri<&str>,
    ) -> Result<Value, Box<dyn std::error::Error + Send + Sync>> {
        tracing::debug!(uri = uri.as_str(), "external $ref answered with permissive schema");
        Ok(serde_json::json!({}))
    }
}

/// A single validation violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// JSON Pointer to the violating value; empty for the document root.
    pub path: String,
    /// Human-readable description of the violation.
    pub message: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "(root): {}", self.message)
        } else {
            write!(f, "{}: {}", self.path, self.message)
        }
    }
}

/// Result of validating one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationOutcome {
    /// The document was well-formed YAML.
    pub parsed: bool,
    /// `Some(true)`/`Some(false)` once the schema ran; `None` when it could not.
    pub schema_valid: Option<bool>,
    /// Violations in validator order. Holds the parse error when `parsed` is false.
    pub errors: Vec<Violation>,
    /// Heuristic recommendations; never affect `schema_valid`.
    pub advisories: Vec<String>,
}

impl ValidationOutcome {
    fn parse_failure(err: &FeoError) -> Self {
        Self {
            parsed: false,
            schema_valid: Some(false),
            errors: vec![Violation {
                path: String::new(),
                message: err.to_string(),
            }],
            advisories: Vec::new(),
        }
    }

    fn schema_unavailable(advisory: String) -> Self {
        Self {
            parsed: true,
            schema_valid: None,
            errors: Vec::new(),
            advisories: vec![advisory],
        }
    }

    /// True when the document parsed and passed the schema.
    pub fn is_valid(&self) -> bool {
        self.parsed && self.schema_valid == Some(true)
    }
}

/// Validates documents against the schema held by a [`SchemaStore`].
#[derive(Debug, Clone)]
pub struct ConfigValidator {
    store: SchemaStore,
}

impl ConfigValidator {
    pub fn new(store: SchemaStore) -> Self {
        Self { store }
    }

    /// Validate `text`.
    ///
    /// Unless `skip_fetch` is set, the store is refreshed first; a failed
    /// refresh is logged and validation continues with whatever is cached.
    pub async fn validate(&self, text: &str, skip_fetch: bool) -> ValidationOutcome {
        if !skip_fetch {
            if let Err(e) = self.store.ensure_fresh().await {
                tracing::warn!(error = %e, "validating without a fresh schema");
            }
        }
        let entry = self.store.current();
        validate_against(entry.as_ref().map(|e| e.document()), text)
    }
}

/// Validate `text` against `schema`. The synchronous core of
/// [`ConfigValidator::validate`].
pub fn validate_against(schema: Option<&Value>, text: &str) -> ValidationOutcome {
    let instance = match parse_document(text) {
        Ok(instance) => instance,
        Err(e) => {
            tracing::debug!(error = %e, "document is not valid YAML");
            return ValidationOutcome::parse_failure(&e);
        }
    };

    let Some(schema) = schema else {
        return ValidationOutcome::schema_unavailable(SCHEMA_UNAVAILABLE.to_string());
    };

    let validator = match compile(schema) {
        Ok(v) => v,
        Err(e) => {
            tracing::warn!(error = %e, "cached schema does not compile");
            return ValidationOutcome::schema_unavailable(format!("{SCHEMA_UNAVAILABLE}: {e}"));
        }
    };

    let errors: Vec<Violation> = validator
        .iter_errors(&instance)
        .map(|e| Violation {
            path: e.instance_path.to_string(),
            message: e.to_string(),
        })
        .collect();

    tracing::debug!(violations = errors.len(), "schema validation finished");

    ValidationOutcome {
        parsed: true,
        schema_valid: Some(errors.is_empty()),
        errors,
        advisories: advisories(&instance, text),
    }
}

/// Compile `schema` into a validator that never resolves remote references.
pub fn compile(schema: &Value) -> Result<Validator, FeoError> {
    let mut opts = jsonschema::options();
    opts.with_retriever(OfflineRetriever);
    opts.build(schema)
        .map_err(|e| FeoError::SchemaStructure(format!("schema does not compile: {e}")))
}

/// Parse YAML text into a JSON value.
pub fn parse_document(text: &str) -> Result<Value, FeoError> {
    let yaml: serde_yaml::Value =
        serde_yaml::from_str(text).map_err(|e| FeoError::Parse(e.to_string()))?;
    yaml_to_json_value(&yaml).map_err(FeoError::Parse)
}

/// Heuristic checks that run regardless of schema outcome.
///
/// `text` is the document as submitted: the schema reference lives in a
/// comment, which parsing discards.
pub fn advisories(instance: &Value, text: &str) -> Vec<String> {
    let mut out = Vec::new();

    let feo_enabled = instance
        .pointer("/objects/0/spec/feoConfigEnabled")
        .is_some_and(is_truthy);
    if !feo_enabled {
        out.push(ADVISORY_FEO_DISABLED.to_string());
    }

    if !text.contains(SCHEMA_REFERENCE_TOKEN) {
        out.push(ADVISORY_NO_SCHEMA_REFERENCE.to_string());
    }

    out
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Convert a parsed frontend.yaml document into the JSON instance the schema
/// is checked against.
///
/// Custom tags are dropped and their value kept. Mapping keys go through
/// [`mapping_key`]. Non-finite floats have no JSON form and are reported as
/// parse errors.
fn yaml_to_json_value(yaml: &serde_yaml::Value) -> Result<Value, String> {
    match yaml {
        serde_yaml::Value::Null => Ok(Value::Null),
        serde_yaml::Value::Bool(b) => Ok(Value::Bool(*b)),
        serde_yaml::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(Value::from(i))
            } else if let Some(u) = n.as_u64() {
                Ok(Value::from(u))
            } else if let Some(f) = n.as_f64() {
                serde_json::Number::from_f64(f)
                    .map(Value::Number)
                    .ok_or_else(|| format!("cannot represent {f} in JSON"))
            } else {
                Err(format!("unsupported YAML number: {n}"))
            }
        }
        serde_yaml::Value::String(s) => Ok(Value::String(s.clone())),
        serde_yaml::Value::Sequence(seq) => seq
            .iter()
            .map(yaml_to_json_value)
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array),
        serde_yaml::Value::Mapping(map) => {
            let mut json_map = serde_json::Map::new();
            for (k, v) in map {
                json_map.insert(mapping_key(k)?, yaml_to_json_value(v)?);
            }
            Ok(Value::Object(json_map))
        }
        serde_yaml::Value::Tagged(tagged) => yaml_to_json_value(&tagged.value),
    }
}

/// Property name for a YAML mapping key.
///
/// JSON objects only have string keys, so scalar keys are read as their
/// scalar text: `800:` becomes `"800"` and `true:` becomes `"true"`. The
/// schema then judges them like any other property name. Sequence and
/// mapping keys have no such reading and fail the parse.
fn mapping_key(key: &serde_yaml::Value) -> Result<String, String> {
    match key {
        serde_yaml::Value::String(s) => Ok(s.clone()),
        serde_yaml::Value::Number(n) => Ok(n.to_string()),
        serde_yaml::Value::Bool(b) => Ok(b.to_string()),
        serde_yaml::Value::Null => Ok("null".to_string()),
        serde_yaml::Value::Tagged(tagged) => mapping_key(&tagged.value),
        other => Err(format!("unsupported mapping key: {other:?}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn schema() -> Value {
        json!({
            "$schema": "https://json-schema.org/draft/2020-12/schema",
            "type": "object",
            "required": ["objects"],
            "properties": {
                "objects": {
                    "type": "array",
                    "items": {
                        "type": "object",
                        "properties": {
                            "spec": { "$ref": "#/$defs/frontendSpec" }
                        }
                    }
                }
            },
            "$defs": {
                "frontendSpec": {
                    "type": "object",
                    "required": ["title"],
                    "properties": {
                        "title": { "type": "string" },
                        "feoConfigEnabled": { "type": "boolean" }
                    }
                }
            }
        })
    }

    const VALID: &str = "# yaml-language-server: $schema=https://example.com/schema.json
objects:
  - spec:
      title: Learning Resources
      feoConfigEnabled: true
";

    #[test]
    fn valid_document_has_no_errors_or_advisories() {
        let outcome = validate_against(Some(&schema()), VALID);
        assert!(outcome.parsed);
        assert_eq!(outcome.schema_valid, Some(true));
        assert!(outcome.errors.is_empty());
        assert!(outcome.advisories.is_empty(), "{:?}", outcome.advisories);
        assert!(outcome.is_valid());
    }

    #[test]
    fn malformed_yaml_is_reported_not_thrown() {
        let outcome = validate_against(Some(&schema()), "not: [valid");
        assert!(!outcome.parsed);
        assert_eq!(outcome.schema_valid, Some(false));
        assert_eq!(outcome.errors.len(), 1);
        assert!(outcome.errors[0].message.starts_with("YAML parse error"));
    }

    #[test]
    fn missing_schema_is_undetermined() {
        let outcome = validate_against(None, VALID);
        assert!(outcome.parsed);
        assert_eq!(outcome.schema_valid, None);
        assert!(outcome.errors.is_empty());
        assert_eq!(outcome.advisories, vec![SCHEMA_UNAVAILABLE.to_string()]);
    }

    #[test]
    fn violation_carries_instance_path() {
        let doc = "objects:\n  - spec:\n      title: 42\n";
        let outcome = validate_against(Some(&schema()), doc);
        assert_eq!(outcome.schema_valid, Some(false));
        assert_eq!(outcome.errors.len(), 1);
        assert_eq!(outcome.errors[0].path, "/objects/0/spec/title");
    }

    #[test]
    fn advisories_do_not_affect_validity() {
        let doc = "objects:\n  - spec:\n      title: Plain\n";
        let outcome = validate_against(Some(&schema()), doc);
        assert_eq!(outcome.schema_valid, Some(true));
        assert_eq!(
            outcome.advisories,
            vec![
                ADVISORY_FEO_DISABLED.to_string(),
                ADVISORY_NO_SCHEMA_REFERENCE.to_string()
            ]
        );
    }

    #[test]
    fn uncompilable_schema_degrades_to_undetermined() {
        let broken = json!({ "type": 12 });
        let outcome = validate_against(Some(&broken), VALID);
        assert!(outcome.parsed);
        assert_eq!(outcome.schema_valid, None);
        assert!(outcome.advisories[0].starts_with(SCHEMA_UNAVAILABLE));
    }

    #[test]
    fn yaml_conversion_keeps_scalars() {
        let json = parse_document("count: 42\nenabled: true\nratio: 0.5\nitems: [one, two]\n1: numeric key\n")
            .unwrap();
        assert_eq!(json["count"], 42);
        assert_eq!(json["enabled"], true);
        assert_eq!(json["ratio"], 0.5);
        assert_eq!(json["items"][1], "two");
        assert_eq!(json["1"], "numeric key");
    }

    #[test]
    fn scalar_keys_become_property_names() {
        let json = parse_document("800: position
true: flag
~: nothing
").unwrap();
        assert_eq!(json["800"], "position");
        assert_eq!(json["true"], "flag");
        assert_eq!(json["null"], "nothing");
    }

    #[test]
    fn collection_keys_fail_the_parse() {
        let err = parse_document("? [a, b]
: value
").unwrap_err();
        assert!(matches!(err, FeoError::Parse(ref m) if m.contains("unsupported mapping key")));
    }

    #[test]
    fn truthiness_follows_yaml_scalars() {
        assert!(is_truthy(&json!(true)));
        assert!(!is_truthy(&json!(false)));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!("")));
        assert!(is_truthy(&json!("yes")));
    }

    #[test]
    fn violation_display_root() {
        let v = Violation {
            path: String::new(),
            message: r#""objects" is a required property"#.to_string(),
        };
        assert!(v.to_string().starts_with("(root)"));
    }
}
