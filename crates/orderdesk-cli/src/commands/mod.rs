pub mod annotate;
pub mod ingest;
pub mod orders;
mod render;

use orderdesk_store::{SchemaManager, StoreConfig, StoreHandle};
use std::path::{Path, PathBuf};

pub type CommandResult = Result<(), Box<dyn std::error::Error>>;

/// Resolve the store and bring a pre-existing table up to date.
///
/// Runs before every command.
pub fn open_store(
    db: Option<PathBuf>,
    config_path: &Path,
) -> Result<StoreHandle, Box<dyn std::error::Error>> {
    let mut config = StoreConfig::load(config_path)?;
    if let Some(db) = db {
        config = config.with_db_path(db);
    }

    let handle = StoreHandle::new(config);
    let added = SchemaManager::reconcile_existing_schema(&handle)?;
    if !added.is_empty() {
        tracing::info!(columns = ?added, "added missing operational columns");
    }

    Ok(handle)
}
