//! JSON patch: typed edit operations and in-place application.
//!
//! An edit list is an ordered sequence of [`Op`] values applied strictly
//! left to right; later operations may depend on containers created or
//! shaped by earlier ones.

pub mod apply;
pub mod codec;
pub mod types;

pub use apply::{apply_add, apply_op, apply_patch, apply_remove, apply_replace};
pub use codec::json::{from_json, from_json_patch, to_json, to_json_patch};
pub use types::{Op, PatchError};
