//! Error handling for orderdesk-store
//!
//! Wraps orderdesk-core `ExError` with store-specific helpers. Every storage
//! failure is classified as a schema or repository error according to the
//! operation that hit it.

use orderdesk_core::errors::{ExError, ExErrorKind};

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

/// Create a schema error from a rusqlite failure during reconcile/rebuild
pub fn schema_error(op: &str, err: rusqlite::Error) -> ExError {
    ExError::new(ExErrorKind::Schema)
        .with_op(op)
        .with_message(err.to_string())
}

/// Create a schema error for an unusable column definition
pub fn invalid_schema(op: &str, reason: &str) -> ExError {
    ExError::new(ExErrorKind::Schema)
        .with_op(op)
        .with_message(reason.to_string())
}

/// Create a repository error from a rusqlite failure during read/update/delete
pub fn repository_error(op: &str, err: rusqlite::Error) -> ExError {
    ExError::new(ExErrorKind::Repository)
        .with_op(op)
        .with_message(err.to_string())
}

/// Create an error for a key operation against a table without the key column
pub fn missing_key_column(op: &str, table: &str, key_column: &str) -> ExError {
    ExError::new(ExErrorKind::MissingKeyColumn)
        .with_op(op)
        .with_entity_id(key_column)
        .with_message(format!(
            "Table {} has no key column {}",
            table, key_column
        ))
}

/// Create a configuration error
pub fn config_error(reason: &str) -> ExError {
    ExError::new(ExErrorKind::Config)
        .with_op("load_config")
        .with_message(reason.to_string())
}

/// Create an IO error
pub fn io_error(operation: &str, err: std::io::Error) -> ExError {
    ExError::new(ExErrorKind::Io)
        .with_op(operation.to_string())
        .with_message(err.to_string())
}
