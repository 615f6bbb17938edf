//! JSON codec for edit lists.
//!
//! Each operation serializes to an object keyed by its name, carrying the
//! path as a string:
//!
//! ```json
//! [
//!   {"replace": "/foo", "value": 2, "prev": 1},
//!   {"remove": "/bar", "prev": 2},
//!   {"add": "/baz", "value": 3}
//! ]
//! ```
//!
//! Paths encode in pointer notation, except the root path which encodes as
//! `"$"` (pointer notation has no spelling for the root). Decoding accepts
//! either notation.

use serde_json::{json, Map, Value};

use json_tools_path::{split, Path, PathStep};

use crate::json_patch::types::{Op, PatchError};

// ── Path helpers ──────────────────────────────────────────────────────────

fn encode_path(path: &[PathStep]) -> Value {
    if path.is_empty() {
        return Value::String("$".to_string());
    }
    let mut out = String::with_capacity(path.len() * 8);
    for step in path {
        out.push('/');
        match step {
            PathStep::Field(name) => out.push_str(name),
            PathStep::Index(idx) => out.push_str(&idx.to_string()),
        }
    }
    Value::String(out)
}

fn decode_path(v: &Value) -> Result<Path, PatchError> {
    let s = v
        .as_str()
        .ok_or_else(|| PatchError::InvalidOp("path must be a string".into()))?;
    Ok(split(s)?)
}

fn required_value(obj: &Map<String, Value>, op: &str) -> Result<Value, PatchError> {
    obj.get("value")
        .cloned()
        .ok_or_else(|| PatchError::InvalidOp(format!("{op} requires 'value'")))
}

// ── Serialization ─────────────────────────────────────────────────────────

/// Serialize an [`Op`] to its wire representation.
pub fn to_json(op: &Op) -> Value {
    match op {
        Op::Add { path, value } => json!({
            "add": encode_path(path),
            "value": value
        }),
        Op::Replace { path, value, prev } => {
            let mut m = Map::new();
            m.insert("replace".into(), encode_path(path));
            m.insert("value".into(), value.clone());
            if let Some(p) = prev {
                m.insert("prev".into(), p.clone());
            }
            Value::Object(m)
        }
        Op::Remove { path, prev } => {
            let mut m = Map::new();
            m.insert("remove".into(), encode_path(path));
            if let Some(p) = prev {
                m.insert("prev".into(), p.clone());
            }
            Value::Object(m)
        }
    }
}

/// Deserialize a wire record into an [`Op`].
pub fn from_json(v: &Value) -> Result<Op, PatchError> {
    let obj = v
        .as_object()
        .ok_or_else(|| PatchError::InvalidOp("operation must be an object".into()))?;

    if let Some(path) = obj.get("add") {
        Ok(Op::Add {
            path: decode_path(path)?,
            value: required_value(obj, "add")?,
        })
    } else if let Some(path) = obj.get("replace") {
        Ok(Op::Replace {
            path: decode_path(path)?,
            value: required_value(obj, "replace")?,
            prev: obj.get("prev").cloned(),
        })
    } else if let Some(path) = obj.get("remove") {
        Ok(Op::Remove {
            path: decode_path(path)?,
            prev: obj.get("prev").cloned(),
        })
    } else {
        Err(PatchError::InvalidOp(
            "expected one of 'add', 'replace', 'remove'".into(),
        ))
    }
}

/// Serialize an edit list to a JSON array.
pub fn to_json_patch(ops: &[Op]) -> Value {
    Value::Array(ops.iter().map(to_json).collect())
}

/// Deserialize a JSON array into an edit list.
pub fn from_json_patch(v: &Value) -> Result<Vec<Op>, PatchError> {
    let arr = v
        .as_array()
        .ok_or_else(|| PatchError::InvalidOp("patch must be an array".into()))?;
    arr.iter().map(from_json).collect()
}
