//! Object graph model for gdiff.
//!
//! A [`Graph`] is an ordered collection of [`Subobject`]s (components), each
//! holding runtime [`Value`]s for its declared fields plus optional named
//! [`Resource`] chains (mesh, skeleton, ...) exposing symbol namespaces.
//!
//! Graphs are resolved from string identifiers through the [`GraphLoader`]
//! trait. [`InMemoryGraphLoader`] backs tests and embedding;
//! [`JsonGraphLoader`] maps identifiers onto a directory of JSON files.

pub mod error;
pub mod loader;
pub mod model;
pub mod value;

pub use error::{GraphError, GraphResult};
pub use loader::{GraphLoader, InMemoryGraphLoader, JsonGraphLoader};
pub use model::{Graph, Resource, Subobject};
pub use value::Value;
