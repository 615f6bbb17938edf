//! Logic behind the `json-diff` and `json-patch` binaries.
//!
//! The binaries stay thin: argument handling and exit codes live there,
//! everything else is here so it can be tested directly. A missing
//! document file and a missing patch file are distinct conditions with
//! distinct error variants and exit codes, so callers and scripts can tell
//! them apart.

use std::fs;
use std::io;

use serde_json::Value;

use crate::json_patch::apply::apply_patch;
use crate::json_patch::codec::json::{from_json_patch, to_json_patch};
use crate::json_patch::types::Op;
use crate::json_patch_diff::diff;

// ── Errors ────────────────────────────────────────────────────────────────

#[derive(Debug)]
pub enum CliError {
    Json(serde_json::Error),
    Patch(String),
    DocumentRead(String, io::Error),
    PatchRead(String, io::Error),
    Write(String, io::Error),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Json(e) => write!(f, "{e}"),
            CliError::Patch(e) => write!(f, "{e}"),
            CliError::DocumentRead(path, e) => write!(f, "cannot read document '{path}': {e}"),
            CliError::PatchRead(path, e) => write!(f, "cannot read patch '{path}': {e}"),
            CliError::Write(path, e) => write!(f, "cannot write '{path}': {e}"),
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Json(e)
    }
}

impl CliError {
    /// Process exit code for this failure. Document and patch lookups get
    /// their own codes; everything else is a generic failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::DocumentRead(..) => 2,
            CliError::PatchRead(..) => 3,
            _ => 1,
        }
    }
}

// ── File loading ──────────────────────────────────────────────────────────

/// Read and parse the document to be diffed or patched.
pub fn load_document(path: &str) -> Result<Value, CliError> {
    let text =
        fs::read_to_string(path).map_err(|e| CliError::DocumentRead(path.to_string(), e))?;
    Ok(serde_json::from_str(&text)?)
}

/// Read and decode a single edit-list file.
pub fn load_patch(path: &str) -> Result<Vec<Op>, CliError> {
    let text = fs::read_to_string(path).map_err(|e| CliError::PatchRead(path.to_string(), e))?;
    let raw: Value = serde_json::from_str(&text)?;
    from_json_patch(&raw).map_err(|e| CliError::Patch(e.to_string()))
}

/// Serialize and persist a document, with a trailing newline.
pub fn write_document(path: &str, doc: &Value) -> Result<(), CliError> {
    let mut text = serde_json::to_string_pretty(doc)?;
    text.push('\n');
    fs::write(path, text).map_err(|e| CliError::Write(path.to_string(), e))
}

// ── String-level entry points ─────────────────────────────────────────────

/// Diff two documents given as JSON text, returning the edit list as
/// pretty-printed JSON.
pub fn diff_documents(src_json: &str, dst_json: &str) -> Result<String, CliError> {
    let src: Value = serde_json::from_str(src_json)?;
    let dst: Value = serde_json::from_str(dst_json)?;
    let ops = diff(&src, &dst);
    Ok(serde_json::to_string_pretty(&to_json_patch(&ops))?)
}

/// Apply an edit list (as JSON text) to a document (as JSON text),
/// returning the patched document pretty-printed.
pub fn apply_patch_str(doc_json: &str, patch_json: &str) -> Result<String, CliError> {
    let mut doc: Value = serde_json::from_str(doc_json)?;
    let raw: Value = serde_json::from_str(patch_json)?;
    let ops = from_json_patch(&raw).map_err(|e| CliError::Patch(e.to_string()))?;
    apply_patch(&mut doc, &ops).map_err(|e| CliError::Patch(e.to_string()))?;
    Ok(serde_json::to_string_pretty(&doc)?)
}

// ── Tests ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn diff_documents_produces_wire_format() {
        let out = diff_documents(r#"{"foo":1,"bar":2}"#, r#"{"foo":2,"baz":3}"#).unwrap();
        let ops: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(
            ops,
            json!([
                {"replace": "/foo", "value": 2, "prev": 1},
                {"remove": "/bar", "prev": 2},
                {"add": "/baz", "value": 3}
            ])
        );
    }

    #[test]
    fn apply_patch_str_applies_in_order() {
        let patch = r#"[
            {"replace": "/foo", "value": 2},
            {"remove": "/bar"},
            {"add": "/baz", "value": 3}
        ]"#;
        let out = apply_patch_str(r#"{"foo":1,"bar":2}"#, patch).unwrap();
        let doc: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(doc, json!({"foo": 2, "baz": 3}));
    }

    #[test]
    fn diff_then_apply_via_strings() {
        let a = r#"{"foo": {"bar": 1, "baz": 2}}"#;
        let b = json!({"foo": {"bar": 2, "qux": 3}});
        let patch = diff_documents(a, &b.to_string()).unwrap();
        let out = apply_patch_str(a, &patch).unwrap();
        let doc: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(doc, b);
    }

    #[test]
    fn apply_patch_str_rejects_bad_records() {
        let err = apply_patch_str(r#"{}"#, r#"[{"rename": "/a"}]"#).unwrap_err();
        assert!(matches!(err, CliError::Patch(_)));
    }

    #[test]
    fn load_document_distinguishes_missing_file() {
        let err = load_document("/no/such/file.json").unwrap_err();
        assert!(matches!(err, CliError::DocumentRead(..)));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn load_patch_distinguishes_missing_file() {
        let err = load_patch("/no/such/patch.json").unwrap_err();
        assert!(matches!(err, CliError::PatchRead(..)));
        assert_eq!(err.exit_code(), 3);
    }
}
