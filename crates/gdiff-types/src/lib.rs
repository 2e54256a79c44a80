//! Foundation types for gdiff.
//!
//! This crate provides the vocabulary shared by the whole workspace: the
//! [`Record`] tagged union describing one finding of a comparison run, the
//! ordered [`DifferenceLog`] those findings accumulate into, and the
//! [`path`] module defining how locations inside the two compared graphs
//! are labeled.
//!
//! # Key Types
//!
//! - [`Record`] — One finding: Info / Warning / Error / Difference
//! - [`DifferenceLog`] — Append-only, ordered sequence of records for one run
//! - [`path`] — Path-label assembly (`root/Component/Struct/Field[i]`)

pub mod log;
pub mod path;
pub mod record;

pub use log::DifferenceLog;
pub use record::Record;
