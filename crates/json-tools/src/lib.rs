//! json-tools: structural diff and patch for JSON documents.
//!
//! Documents are `serde_json::Value` trees of objects, arrays, and
//! scalars. Locations inside a tree are addressed by typed paths parsed
//! from either pointer (`/a/0/b`) or dot (`$.a[0].b`) notation; see the
//! `json-tools-path` crate. On top of that sit a diff engine producing
//! ordered edit lists and a patch engine applying them in place.
//!
//! The defining contract: applying `diff(a, b)` to a copy of `a` yields a
//! document deeply equal to `b`.
//!
//! # Example
//!
//! ```
//! use json_tools::{apply_patch, diff};
//! use serde_json::json;
//!
//! let mut doc = json!({"foo": 1, "bar": 2});
//! let target = json!({"foo": 2, "baz": 3});
//!
//! let ops = diff(&doc, &target);
//! apply_patch(&mut doc, &ops).unwrap();
//! assert_eq!(doc, target);
//! ```

pub mod json_cli;
pub mod json_patch;
pub mod json_patch_diff;

pub use json_patch::{apply_patch, Op, PatchError};
pub use json_patch_diff::diff;
