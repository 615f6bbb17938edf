//! Core types for the JSON patch module.

use serde_json::Value;
use thiserror::Error;

pub use json_tools_path::{Path, PathError, PathStep};

// ── Error ─────────────────────────────────────────────────────────────────

#[derive(Debug, Error, Clone, PartialEq)]
pub enum PatchError {
    /// A path failed to resolve or to accept a write.
    #[error(transparent)]
    Path(#[from] PathError),
    /// An edit-list record could not be decoded.
    #[error("invalid operation: {0}")]
    InvalidOp(String),
}

// ── Op enum ───────────────────────────────────────────────────────────────

/// A single edit operation tied to a path.
///
/// An ordered sequence of these forms an edit list; order is significant
/// because later operations may depend on containers created or shaped by
/// earlier ones.
#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    /// Write `value` at `path`, creating missing intermediate containers.
    /// Overwrites if the location already holds a value.
    Add { path: Path, value: Value },
    /// Write `value` at `path`. `prev` records the value being overwritten
    /// for diagnostics/undo; it is informational and not verified.
    Replace {
        path: Path,
        value: Value,
        prev: Option<Value>,
    },
    /// Delete the value at `path`. `prev` records the removed value.
    /// Removing an absent location is a no-op.
    Remove { path: Path, prev: Option<Value> },
}

impl Op {
    /// The operation name as it appears on the wire.
    pub fn op_name(&self) -> &'static str {
        match self {
            Op::Add { .. } => "add",
            Op::Replace { .. } => "replace",
            Op::Remove { .. } => "remove",
        }
    }

    /// The path of the operation.
    pub fn path(&self) -> &Path {
        match self {
            Op::Add { path, .. } => path,
            Op::Replace { path, .. } => path,
            Op::Remove { path, .. } => path,
        }
    }
}
