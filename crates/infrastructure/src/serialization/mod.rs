//! Deterministic JSON for files a person may open.
//!
//! Keys come out sorted (the callers serialize `BTreeMap`s), indented by
//! two spaces, with a trailing newline.

mod json;

pub use json::*;
