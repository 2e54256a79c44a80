//! Type schema for gdiff.
//!
//! The comparison engine never touches a native reflection API. Instead it
//! is written against the [`TypeReflector`] trait, whose standard
//! implementation is [`SchemaRegistry`]: a statically-declared table of
//! struct and enum definitions, built in code or deserialized from JSON.
//!
//! # Key Types
//!
//! - [`FieldKind`] — Closed set of semantic field kinds
//! - [`FieldDescriptor`] — One field of a struct: name, display name, kind
//! - [`StructDef`] / [`EnumDef`] — Named definitions holding fields/entries
//! - [`TypeReflector`] — What the engine needs from a schema
//! - [`SchemaRegistry`] — Map-backed standard implementation

pub mod descriptor;
pub mod error;
pub mod kind;
pub mod reflector;
pub mod registry;

pub use descriptor::{EnumDef, EnumEntry, FieldDescriptor, StructDef};
pub use error::{SchemaError, SchemaResult};
pub use kind::FieldKind;
pub use reflector::TypeReflector;
pub use registry::SchemaRegistry;
