//! Recursive property comparison engine.
//!
//! Walks two structurally-identical object graphs in lock-step and records
//! findings into a [`DifferenceLog`]. Dispatch is a single match over the
//! closed [`FieldKind`] set; nested structs and arrays recurse with path
//! segments appended on both sides, so every reported difference names its
//! location in both graphs.
//!
//! # Key Types
//!
//! - [`Comparator`] — Field-level recursive comparison against a reflector
//! - [`compare_graphs`] — One full comparison run over two graph identifiers
//! - [`CompareOptions`] / [`BucketSpec`] / [`CrossCheck`] — Run configuration
//!
//! [`DifferenceLog`]: gdiff_types::DifferenceLog
//! [`FieldKind`]: gdiff_schema::FieldKind

pub mod comparator;
pub mod options;
pub mod run;

pub use comparator::{stringify_float, Comparator};
pub use options::{BucketSpec, CompareOptions, CrossCheck};
pub use run::compare_graphs;
