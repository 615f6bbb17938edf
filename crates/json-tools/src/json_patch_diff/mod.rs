//! Structural diff: generate an edit list that transforms one document
//! into another.
//!
//! The diff never fails; any pair of values it cannot meaningfully recurse
//! into degrades to a whole-value replace. Applying the emitted list to
//! the source via [`apply_patch`](crate::json_patch::apply_patch) yields a
//! document deeply equal to the target.

use serde_json::{Map, Value};

use json_tools_path::{Path, PathStep};

use crate::json_patch::types::Op;

/// Compute the edit list transforming `src` into `dst`.
///
/// Every emitted path is fully qualified from the document root, including
/// paths produced while recursing into changed array elements.
///
/// # Example
///
/// ```
/// use json_tools::json_patch_diff::diff;
/// use serde_json::json;
///
/// let ops = diff(&json!({"foo": 1, "bar": 2}), &json!({"foo": 2, "baz": 3}));
/// let names: Vec<&str> = ops.iter().map(|op| op.op_name()).collect();
/// assert_eq!(names, ["replace", "remove", "add"]);
/// ```
pub fn diff(src: &Value, dst: &Value) -> Vec<Op> {
    let mut ops = Vec::new();
    diff_at_path(&mut ops, &[], src, dst);
    ops
}

fn diff_at_path(ops: &mut Vec<Op>, path: &[PathStep], src: &Value, dst: &Value) {
    if src == dst {
        return;
    }
    match (src, dst) {
        (Value::Object(s), Value::Object(d)) => diff_obj(ops, path, s, d),
        (Value::Array(s), Value::Array(d)) => diff_arr(ops, path, s, d),
        // Mismatched shapes and differing scalars replace wholesale.
        _ => ops.push(Op::Replace {
            path: path.to_vec(),
            value: dst.clone(),
            prev: Some(src.clone()),
        }),
    }
}

fn child(path: &[PathStep], step: PathStep) -> Path {
    let mut p = path.to_vec();
    p.push(step);
    p
}

/// Recurse into matching container kinds; any other difference is a
/// whole-value replace.
fn recurse_or_replace(ops: &mut Vec<Op>, path: Path, src: &Value, dst: &Value) {
    match (src, dst) {
        (Value::Object(_), Value::Object(_)) | (Value::Array(_), Value::Array(_)) => {
            diff_at_path(ops, &path, src, dst);
        }
        _ => ops.push(Op::Replace {
            path,
            value: dst.clone(),
            prev: Some(src.clone()),
        }),
    }
}

fn diff_obj(
    ops: &mut Vec<Op>,
    path: &[PathStep],
    src: &Map<String, Value>,
    dst: &Map<String, Value>,
) {
    // Replacements and removals for keys present in the source come first.
    for (key, src_val) in src {
        let p = child(path, PathStep::Field(key.clone()));
        match dst.get(key) {
            None => ops.push(Op::Remove {
                path: p,
                prev: Some(src_val.clone()),
            }),
            Some(dst_val) if src_val == dst_val => {}
            Some(dst_val) => recurse_or_replace(ops, p, src_val, dst_val),
        }
    }
    // Then additions for keys only in the target.
    for (key, dst_val) in dst {
        if !src.contains_key(key) {
            ops.push(Op::Add {
                path: child(path, PathStep::Field(key.clone())),
                value: dst_val.clone(),
            });
        }
    }
}

fn diff_arr(ops: &mut Vec<Op>, path: &[PathStep], src: &[Value], dst: &[Value]) {
    let shared = src.len().min(dst.len());
    for idx in 0..shared {
        if src[idx] == dst[idx] {
            continue;
        }
        recurse_or_replace(
            ops,
            child(path, PathStep::Index(idx)),
            &src[idx],
            &dst[idx],
        );
    }
    // Tail removals run high to low so earlier ones cannot shift the
    // elements later ones address.
    for idx in (dst.len()..src.len()).rev() {
        ops.push(Op::Remove {
            path: child(path, PathStep::Index(idx)),
            prev: Some(src[idx].clone()),
        });
    }
    for (idx, dst_val) in dst.iter().enumerate().skip(src.len()) {
        ops.push(Op::Add {
            path: child(path, PathStep::Index(idx)),
            value: dst_val.clone(),
        });
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────
