//! Qualified names, cross-references, and anchor ids
//!
//! A cross-reference always targets the full qualified name; only the
//! display text varies. Resolving targets to concrete document locations
//! belongs to the consuming pipeline.

use serde::Serialize;

use crate::node::Node;

/// A dot-separated qualified type name, e.g. `pkg.sub.TargetClass`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct QualifiedName(String);

impl QualifiedName {
    /// Create a qualified name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The full dotted name.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Everything before the last dot; empty for a bare name.
    pub fn namespace(&self) -> &str {
        match self.0.rfind('.') {
            Some(pos) => &self.0[..pos],
            None => "",
        }
    }

    /// The final path segment.
    pub fn leaf(&self) -> &str {
        match self.0.rfind('.') {
            Some(pos) => &self.0[pos + 1..],
            None => &self.0,
        }
    }
}

impl std::fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for QualifiedName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for QualifiedName {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

/// Build a reference node for a qualified name.
///
/// The link target is always the full qualified name. With
/// `hide_namespace` the display text is the leaf segment only; the common
/// namespace prefix is redundant where the reference appears in context.
pub fn make_reference(name: &QualifiedName, hide_namespace: bool) -> Node {
    let display = if hide_namespace {
        name.leaf().to_string()
    } else {
        name.as_str().to_string()
    };
    Node::reference(name.as_str(), display)
}

/// Normalize a section identifier into an anchor id.
///
/// Lowercases, collapses runs of non-alphanumeric characters to single
/// dashes, and trims leading/trailing dashes.
pub fn make_anchor(identifier: &str) -> String {
    let mut anchor = String::with_capacity(identifier.len());
    let mut pending_dash = false;
    for c in identifier.chars() {
        if c.is_alphanumeric() {
            if pending_dash && !anchor.is_empty() {
                anchor.push('-');
            }
            pending_dash = false;
            anchor.extend(c.to_lowercase());
        } else {
            pending_dash = true;
        }
    }
    anchor
}
