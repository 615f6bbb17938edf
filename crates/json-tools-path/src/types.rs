//! Type definitions for JSON path addressing.

use serde_json::Value;
use std::fmt;

/// A single step in a parsed path.
///
/// Each step requires a certain container kind at the node it is applied
/// to, and names the slot to descend into (or, on the write side, to
/// insert at).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathStep {
    /// Descend into an object by field name.
    Field(String),
    /// Descend into an array by 0-based position.
    Index(usize),
}

/// A parsed path: an ordered sequence of steps.
///
/// An empty path denotes the root of the document.
pub type Path = Vec<PathStep>;

/// The container kind a step requires from the node it is applied to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Object,
    Array,
}

impl PathStep {
    /// The container kind this step requires.
    pub fn kind(&self) -> NodeKind {
        match self {
            PathStep::Field(_) => NodeKind::Object,
            PathStep::Index(_) => NodeKind::Array,
        }
    }

    /// Convenience constructor for a field step.
    pub fn field(name: &str) -> Self {
        PathStep::Field(name.to_string())
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKind::Object => f.write_str("object"),
            NodeKind::Array => f.write_str("array"),
        }
    }
}

/// Result of a partial path walk, as returned by [`find`](crate::find).
///
/// Partial matching is the success case: the walk stops at the first step
/// that cannot be resolved instead of failing.
#[derive(Debug, Clone, PartialEq)]
pub struct FindResult<'d, 'p> {
    /// The steps that resolved, in order, as a prefix of the input path.
    pub matched: &'p [PathStep],
    /// The steps that did not resolve, as the remaining suffix.
    pub remainder: &'p [PathStep],
    /// The deepest node reached by the matched prefix.
    pub node: &'d Value,
}

impl FindResult<'_, '_> {
    /// True if every step of the path resolved.
    pub fn is_full_match(&self) -> bool {
        self.remainder.is_empty()
    }
}
