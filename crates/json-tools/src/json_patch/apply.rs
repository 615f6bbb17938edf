//! Write-side path resolution and edit application.
//!
//! Add and replace share one write mechanism: all steps except the last
//! are walked with missing intermediate containers materialized along the
//! way, then the final slot is written. Removal walks without creating
//! anything and treats absence anywhere on the path as a no-op. In both
//! directions a present node of the wrong kind is a fatal type mismatch,
//! never a coercion.

use serde_json::{Map, Value};

use json_tools_path::{join, PathError, PathStep};

use super::types::{Op, PatchError};

/// Empty container of the kind the given step requires.
fn container_for(step: &PathStep) -> Value {
    match step {
        PathStep::Field(_) => Value::Object(Map::new()),
        PathStep::Index(_) => Value::Array(Vec::new()),
    }
}

fn type_mismatch(path: &[PathStep], pos: usize) -> PathError {
    PathError::TypeMismatch {
        expected: path[pos].kind(),
        at: join(&path[..=pos]),
    }
}

/// Walk every step of `path` except the last, materializing missing
/// intermediates: a missing object key gets an empty container chosen by
/// the next step's kind, an out-of-range array index pads the array with
/// nulls and appends the needed container.
fn write_target<'a>(doc: &'a mut Value, path: &[PathStep]) -> Result<&'a mut Value, PathError> {
    let mut current = doc;
    for pos in 0..path.len() - 1 {
        let next = &path[pos + 1];
        current = match (&path[pos], current) {
            (PathStep::Field(name), Value::Object(map)) => map
                .entry(name.clone())
                .or_insert_with(|| container_for(next)),
            (PathStep::Index(idx), Value::Array(arr)) => {
                if *idx >= arr.len() {
                    while arr.len() < *idx {
                        arr.push(Value::Null);
                    }
                    arr.push(container_for(next));
                }
                &mut arr[*idx]
            }
            _ => return Err(type_mismatch(path, pos)),
        };
    }
    Ok(current)
}

/// Write `value` at `path`, creating missing intermediate containers and
/// padding arrays with nulls as needed. Overwrites an existing value and
/// returns it.
///
/// An empty path replaces the whole document.
///
/// # Errors
///
/// [`PathError::TypeMismatch`] if a present node on the path has the wrong
/// container kind for its step.
pub fn apply_add(
    doc: &mut Value,
    path: &[PathStep],
    value: Value,
) -> Result<Option<Value>, PathError> {
    if path.is_empty() {
        return Ok(Some(std::mem::replace(doc, value)));
    }
    let parent = write_target(doc, path)?;
    let last_pos = path.len() - 1;
    match (&path[last_pos], parent) {
        (PathStep::Field(name), Value::Object(map)) => Ok(map.insert(name.clone(), value)),
        (PathStep::Index(idx), Value::Array(arr)) => {
            while arr.len() < *idx {
                arr.push(Value::Null);
            }
            if *idx == arr.len() {
                arr.push(value);
                Ok(None)
            } else {
                Ok(Some(std::mem::replace(&mut arr[*idx], value)))
            }
        }
        _ => Err(type_mismatch(path, last_pos)),
    }
}

/// Same write mechanism as [`apply_add`]; the distinction between the two
/// is operational intent, not enforced exclusivity. Callers needing strict
/// "must not already exist" semantics check before calling.
pub fn apply_replace(
    doc: &mut Value,
    path: &[PathStep],
    value: Value,
) -> Result<Option<Value>, PathError> {
    apply_add(doc, path, value)
}

/// Delete the value at `path`, returning it.
///
/// Absence anywhere on the path (missing intermediate key, out-of-range
/// index, or a missing final slot) makes the removal a no-op returning
/// `None`, so removal is idempotent. Object removal preserves the order of
/// the remaining keys; array removal shifts later elements down by one.
///
/// # Errors
///
/// [`PathError::TypeMismatch`] if a present node on the path has the wrong
/// container kind for its step. Type confusion stays fatal even though
/// absence does not.
pub fn apply_remove(doc: &mut Value, path: &[PathStep]) -> Result<Option<Value>, PathError> {
    let (last, parents) = match path.split_last() {
        Some(pair) => pair,
        // The root is not contained in anything; nothing to delete.
        None => return Ok(None),
    };

    let mut current = doc;
    for pos in 0..parents.len() {
        current = match (&parents[pos], current) {
            (PathStep::Field(name), Value::Object(map)) => match map.get_mut(name) {
                Some(child) => child,
                None => return Ok(None),
            },
            (PathStep::Index(idx), Value::Array(arr)) => match arr.get_mut(*idx) {
                Some(child) => child,
                None => return Ok(None),
            },
            _ => return Err(type_mismatch(path, pos)),
        };
    }

    match (last, current) {
        (PathStep::Field(name), Value::Object(map)) => Ok(map.shift_remove(name)),
        (PathStep::Index(idx), Value::Array(arr)) => {
            if *idx < arr.len() {
                Ok(Some(arr.remove(*idx)))
            } else {
                Ok(None)
            }
        }
        _ => Err(type_mismatch(path, path.len() - 1)),
    }
}

/// Apply a single operation, returning the previous value at its path when
/// one was overwritten or removed.
pub fn apply_op(doc: &mut Value, op: &Op) -> Result<Option<Value>, PatchError> {
    let old = match op {
        Op::Add { path, value } => apply_add(doc, path, value.clone())?,
        Op::Replace { path, value, .. } => apply_replace(doc, path, value.clone())?,
        Op::Remove { path, .. } => apply_remove(doc, path)?,
    };
    Ok(old)
}

/// Apply an edit list strictly left to right, mutating `doc` in place.
pub fn apply_patch(doc: &mut Value, ops: &[Op]) -> Result<(), PatchError> {
    for op in ops {
        apply_op(doc, op)?;
    }
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────
