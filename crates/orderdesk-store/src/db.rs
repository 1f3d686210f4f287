//! Database connection management
//!
//! A [`StoreHandle`] carries only where the order table lives. Each
//! operation opens its own connection through it and drops that connection
//! before returning, on success and error paths alike; nothing is held
//! across calls.

use crate::config::StoreConfig;
use rusqlite::Connection;
use std::path::{Path, PathBuf};

/// Explicit storage handle passed into every schema and repository operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreHandle {
    db_path: PathBuf,
    table: String,
    key_column: String,
}

impl StoreHandle {
    pub fn new(config: StoreConfig) -> Self {
        Self {
            db_path: config.db_path,
            table: config.table,
            key_column: config.key_column,
        }
    }

    /// Handle for `path` with the default table and key column
    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        Self::new(StoreConfig::default().with_db_path(path))
    }

    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    pub fn key_column(&self) -> &str {
        &self.key_column
    }

    /// Table name quoted for use in SQL
    pub(crate) fn quoted_table(&self) -> String {
        quote_ident(&self.table)
    }

    /// Open a fresh connection for a single operation
    pub(crate) fn connect(&self) -> rusqlite::Result<Connection> {
        Connection::open(&self.db_path)
    }
}

/// Quote an SQL identifier, doubling embedded quotes.
///
/// Column names come straight from uploaded headers (`product-name`,
/// `ship to`, ...), so every identifier in generated SQL goes through here.
pub fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_ident() {
        assert_eq!(quote_ident("product-name"), "\"product-name\"");
        assert_eq!(quote_ident("ship to"), "\"ship to\"");
        assert_eq!(quote_ident("a\"b"), "\"a\"\"b\"");
    }

    #[test]
    fn test_at_path_uses_default_table() {
        let handle = StoreHandle::at_path("/tmp/orders.db");
        assert_eq!(handle.table(), "orders");
        assert_eq!(handle.key_column(), "product-name");
        assert_eq!(handle.db_path(), Path::new("/tmp/orders.db"));
    }
}
