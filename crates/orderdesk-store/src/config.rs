//! Store configuration
//!
//! Loaded from an optional TOML file:
//!
//! ```toml
//! db_path = "amazon_orders.db"
//! table = "orders"
//! key_column = "product-name"
//! ```
//!
//! Every field is optional; missing fields take the defaults above.

use crate::errors::{config_error, io_error, Result};
use orderdesk_core::model::KEY_COLUMN;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_DB_PATH: &str = "amazon_orders.db";
pub const DEFAULT_TABLE: &str = "orders";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StoreConfig {
    /// SQLite database file
    pub db_path: PathBuf,
    /// Name of the order table
    pub table: String,
    /// Business column used for key-based updates and deletes
    pub key_column: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(DEFAULT_DB_PATH),
            table: DEFAULT_TABLE.to_string(),
            key_column: KEY_COLUMN.to_string(),
        }
    }
}

impl StoreConfig {
    /// Parse a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: StoreConfig = toml::from_str(content)
            .map_err(|e| config_error(&format!("Invalid config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from `path`, falling back to defaults when the file
    /// does not exist
    pub fn load(path: &Path) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(content) => Self::from_toml_str(&content),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "config file not found, using defaults");
                Ok(Self::default())
            }
            Err(e) => Err(io_error("load_config", e)),
        }
    }

    pub fn with_db_path(mut self, db_path: impl Into<PathBuf>) -> Self {
        self.db_path = db_path.into();
        self
    }

    fn validate(&self) -> Result<()> {
        if self.table.trim().is_empty() {
            return Err(config_error("table must not be empty"));
        }
        if self.key_column.trim().is_empty() {
            return Err(config_error("key_column must not be empty"));
        }
        Ok(())
    }
}
