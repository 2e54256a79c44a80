//! Error types for the schema crate.

/// Errors that can occur while building or loading a schema.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// A struct definition with this name is already registered.
    #[error("duplicate struct definition: {0}")]
    DuplicateStruct(String),

    /// An enum definition with this name is already registered.
    #[error("duplicate enum definition: {0}")]
    DuplicateEnum(String),

    /// Reading a schema file failed.
    #[error("cannot read schema file: {0}")]
    Io(#[from] std::io::Error),

    /// Parsing a schema file failed.
    #[error("cannot parse schema: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Convenience alias for schema results.
pub type SchemaResult<T> = Result<T, SchemaError>;
