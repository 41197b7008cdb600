//! Row-wise stages applied between projection and the lookup fill.
//!
//! Each stage exposes a pure per-value (or per-row) function plus a
//! table-level `apply` that runs it across every row.

pub mod attributes;
pub mod country;
pub mod rename;
pub mod string_ops;
pub mod week;
