//! JSON path addressing utilities.
//!
//! This crate parses two external path notations into one internal typed
//! representation, and resolves, creates, or partially matches documents
//! against it:
//!
//! - **Pointer notation** starts with `/` and is split on `/`; a segment
//!   made entirely of ASCII digits is an array position, anything else a
//!   field name. No `~0`/`~1` escape processing is performed, so field
//!   names containing `/` cannot be addressed in this notation. Parsing a
//!   pointer never fails.
//! - **Dot notation** starts with `$` and uses `.field` and `[index]`
//!   segments. Malformed input is a syntax error.
//!
//! # Example
//!
//! ```
//! use json_tools_path::{join, resolve, split, PathStep};
//! use serde_json::json;
//!
//! // Both notations normalize to the same steps.
//! let path = split("/a/0/b").unwrap();
//! assert_eq!(path, split("$.a[0].b").unwrap());
//! assert_eq!(
//!     path,
//!     vec![PathStep::field("a"), PathStep::Index(0), PathStep::field("b")]
//! );
//!
//! // The canonical rendering is dot notation.
//! assert_eq!(join(&path), "$.a[0].b");
//!
//! let doc = json!({"a": [{"b": 42}]});
//! assert_eq!(resolve(&doc, &path).unwrap(), &json!(42));
//! ```

use serde_json::{Map, Value};
use thiserror::Error;

pub mod types;
pub use types::{FindResult, NodeKind, Path, PathStep};

/// Parse an external path string into a sequence of typed steps.
///
/// The leading character selects the notation: `/` for pointer form, `$`
/// for dot form. Anything else is a syntax error.
///
/// # Example
///
/// ```
/// use json_tools_path::{split, PathStep};
///
/// assert_eq!(split("$").unwrap(), vec![]);
/// assert_eq!(
///     split("/foo/2").unwrap(),
///     vec![PathStep::field("foo"), PathStep::Index(2)]
/// );
/// assert!(split("foo").is_err());
/// ```
pub fn split(path: &str) -> Result<Path, PathError> {
    match path.as_bytes().first() {
        Some(&b'/') => Ok(split_pointer(&path[1..])),
        Some(&b'$') => split_dot(&path[1..]),
        _ => Err(PathError::Syntax(
            "path must start with '/' or '$'".to_string(),
        )),
    }
}

/// A segment made entirely of ASCII digits is an array position.
fn parse_index(segment: &str) -> Option<usize> {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    segment.parse().ok()
}

fn split_pointer(rest: &str) -> Path {
    rest.split('/')
        .map(|segment| match parse_index(segment) {
            Some(idx) => PathStep::Index(idx),
            None => PathStep::Field(segment.to_string()),
        })
        .collect()
}

fn split_dot(rest: &str) -> Result<Path, PathError> {
    if rest.is_empty() {
        // A bare `$` addresses the root.
        return Ok(Path::new());
    }

    let skip = match rest.as_bytes()[0] {
        b'.' => 1,
        b'[' => 0,
        _ => {
            return Err(PathError::Syntax(
                "expected '.' or '[' after '$'".to_string(),
            ))
        }
    };

    let mut result = Path::new();
    for segment in rest.split('.').skip(skip) {
        if segment.is_empty() {
            return Err(PathError::Syntax("empty keys are not allowed".to_string()));
        }
        match segment.find('[') {
            None => result.push(PathStep::Field(segment.to_string())),
            Some(0) if result.is_empty() => {
                return Err(PathError::Syntax(
                    "a bare index cannot address the root".to_string(),
                ))
            }
            Some(field_end) => {
                if field_end > 0 {
                    result.push(PathStep::Field(segment[..field_end].to_string()));
                }
                parse_bracket_groups(&segment[field_end..], &mut result)?;
            }
        }
    }
    Ok(result)
}

/// Consume one or more complete `[<digits>]` groups, pushing an index step
/// for each. Trailing text that is not part of a group is a syntax error.
fn parse_bracket_groups(mut brackets: &str, out: &mut Path) -> Result<(), PathError> {
    loop {
        let rest = brackets
            .strip_prefix('[')
            .ok_or_else(|| PathError::Syntax(format!("invalid indexing in '{brackets}'")))?;
        let close = rest
            .find(']')
            .ok_or_else(|| PathError::Syntax("unclosed '[' in path".to_string()))?;
        let digits = &rest[..close];
        let idx = parse_index(digits)
            .ok_or_else(|| PathError::Syntax(format!("invalid index in '[{digits}]'")))?;
        out.push(PathStep::Index(idx));
        brackets = &rest[close + 1..];
        if brackets.is_empty() {
            return Ok(());
        }
    }
}

/// Render a step sequence in the canonical dot notation.
///
/// For every path `P` produced by [`split`] on a dot-notation string,
/// `split(&join(P))` yields `P` again.
///
/// # Example
///
/// ```
/// use json_tools_path::{join, PathStep};
///
/// assert_eq!(join(&[]), "$");
/// assert_eq!(
///     join(&[PathStep::field("a"), PathStep::Index(0), PathStep::field("b")]),
///     "$.a[0].b"
/// );
/// ```
pub fn join(path: &[PathStep]) -> String {
    let mut out = String::with_capacity(1 + path.len() * 8);
    out.push('$');
    for step in path {
        match step {
            PathStep::Field(name) => {
                out.push('.');
                out.push_str(name);
            }
            PathStep::Index(idx) => {
                out.push_str(&format!("[{idx}]"));
            }
        }
    }
    out
}

/// Walk the steps from the root of `doc`, returning the addressed value.
///
/// # Errors
///
/// - [`PathError::TypeMismatch`] if a step expects an object but finds an
///   array or scalar, or vice versa.
/// - [`PathError::NotFound`] if the walk is well-typed but a key or index
///   does not exist.
///
/// # Example
///
/// ```
/// use json_tools_path::{resolve, split};
/// use serde_json::json;
///
/// let doc = json!({"a": [10, 20]});
/// let path = split("/a/1").unwrap();
/// assert_eq!(resolve(&doc, &path).unwrap(), &json!(20));
/// ```
pub fn resolve<'a>(doc: &'a Value, path: &[PathStep]) -> Result<&'a Value, PathError> {
    let mut current = doc;
    for (pos, step) in path.iter().enumerate() {
        current = match (step, current) {
            (PathStep::Field(name), Value::Object(map)) => map
                .get(name)
                .ok_or_else(|| PathError::NotFound(join(&path[..=pos])))?,
            (PathStep::Index(idx), Value::Array(arr)) => arr
                .get(*idx)
                .ok_or_else(|| PathError::NotFound(join(&path[..=pos])))?,
            (step, _) => {
                return Err(PathError::TypeMismatch {
                    expected: step.kind(),
                    at: join(&path[..=pos]),
                })
            }
        };
    }
    Ok(current)
}

/// Build the minimal document in which `path` resolves to `value`.
///
/// Working from the innermost step outward, each field step wraps the
/// inner result in a single-entry object and each index step wraps it in
/// an array padded with `null` placeholders up to that position.
///
/// # Example
///
/// ```
/// use json_tools_path::{create, split};
/// use serde_json::json;
///
/// let path = split("$.a[2]").unwrap();
/// assert_eq!(create(&path, json!(5)), json!({"a": [null, null, 5]}));
/// ```
pub fn create(path: &[PathStep], value: Value) -> Value {
    let mut node = value;
    for step in path.iter().rev() {
        node = match step {
            PathStep::Field(name) => {
                let mut map = Map::new();
                map.insert(name.clone(), node);
                Value::Object(map)
            }
            PathStep::Index(idx) => {
                let mut arr = vec![Value::Null; *idx];
                arr.push(node);
                Value::Array(arr)
            }
        };
    }
    node
}

/// Walk as far as possible along `path`, stopping at the first step that
/// cannot be resolved (wrong container kind or missing key/index).
///
/// Never fails; a partial match is the success case. The returned
/// [`FindResult`] carries the matched prefix, the unmatched remainder, and
/// the deepest node reached.
pub fn find<'d, 'p>(doc: &'d Value, path: &'p [PathStep]) -> FindResult<'d, 'p> {
    let mut current = doc;
    for (pos, step) in path.iter().enumerate() {
        let child = match (step, current) {
            (PathStep::Field(name), Value::Object(map)) => map.get(name),
            (PathStep::Index(idx), Value::Array(arr)) => arr.get(*idx),
            _ => None,
        };
        match child {
            Some(next) => current = next,
            None => {
                return FindResult {
                    matched: &path[..pos],
                    remainder: &path[pos..],
                    node: current,
                }
            }
        }
    }
    FindResult {
        matched: path,
        remainder: &[],
        node: current,
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PathError {
    /// The external path string is malformed. Only [`split`] raises this.
    #[error("syntax error: {0}")]
    Syntax(String),
    /// A step required one container kind but the document holds another.
    /// Never silently coerced.
    #[error("expected an {expected} at '{at}'")]
    TypeMismatch { expected: NodeKind, at: String },
    /// The walk was well-typed but the key or index does not exist.
    #[error("no value at '{0}'")]
    NotFound(String),
}
