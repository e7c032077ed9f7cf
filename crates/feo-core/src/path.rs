//! # Schema Paths
//!
//! A [`SchemaPath`] is an ordered list of segments naming a node inside a
//! schema document, e.g. `["frontendSpec", "module"]`. Paths are built per
//! call and never persisted.

use std::fmt;

/// Name of the definition describing a `Frontend` object's `spec`.
pub const FRONTEND_SPEC: &str = "frontendSpec";

/// Ordered segments addressing a node in a schema document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct SchemaPath(Vec<String>);

impl SchemaPath {
    /// The empty path, addressing the document root.
    pub fn root() -> Self {
        Self(Vec::new())
    }

    /// Path to the `frontendSpec` definition.
    pub fn frontend_spec() -> Self {
        Self(vec![FRONTEND_SPEC.to_string()])
    }

    /// Parse a dotted path such as `"module.analytics"`.
    ///
    /// Empty segments are dropped, so `"a..b"` and `".a.b."` both yield
    /// `["a", "b"]`.
    pub fn from_dotted(dotted: &str) -> Self {
        dotted
            .split('.')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect()
    }

    /// A dotted field path rooted under `frontendSpec`.
    pub fn spec_field(dotted: &str) -> Self {
        Self::frontend_spec().join(&Self::from_dotted(dotted))
    }

    /// Append one segment, returning the extended path.
    pub fn child(mut self, segment: impl Into<String>) -> Self {
        self.0.push(segment.into());
        self
    }

    /// Concatenate two paths.
    pub fn join(mut self, other: &SchemaPath) -> Self {
        self.0.extend(other.0.iter().cloned());
        self
    }

    /// Borrow the segments.
    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True for the root path.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for SchemaPath {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl fmt::Display for SchemaPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join("."))
    }
}
