//! Ingestion pipeline: normalize -> rebuild schema -> insert
//!
//! Ingestion is destructive: the previous table and all of its annotations
//! are replaced by the new upload. If normalization fails nothing in storage
//! is touched. Rebuild and insert are separate steps, so a failure between
//! them leaves the new table created but empty.

use crate::db::StoreHandle;
use crate::errors::Result;
use crate::repo::OrderRepo;
use crate::schema::SchemaManager;
use orderdesk_core::errors::ExError;
use orderdesk_core::{log_op_end, log_op_error, log_op_start, FileFormat, NormalizedTable};
use std::path::Path;

/// Outcome of a successful ingestion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestReport {
    pub format: FileFormat,
    /// Column set of the rebuilt table, operational columns included
    pub columns: Vec<String>,
    pub rows_inserted: usize,
}

/// Ingest an upload held in memory
///
/// # Errors
///
/// Ingestion kinds for unreadable input (storage untouched), `Schema` if the
/// rebuild fails, `Repository` if the insert fails.
pub fn ingest_bytes(handle: &StoreHandle, bytes: &[u8], format: FileFormat) -> Result<IngestReport> {
    log_op_start!("ingest", table = handle.table(), format = format.tag());
    let start = std::time::Instant::now();

    let report = orderdesk_core::normalize(bytes, format)
        .map_err(ExError::from)
        .and_then(|table| load_table(handle, format, &table))
        .map_err(|e| {
            log_op_error!(
                "ingest",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64
            );
            e
        })?;

    log_op_end!(
        "ingest",
        duration_ms = start.elapsed().as_millis() as u64,
        rows = report.rows_inserted as u64
    );

    Ok(report)
}

/// Ingest a file from disk; the format defaults to the file's extension
///
/// # Errors
///
/// As [`ingest_bytes`], plus `Io` if the file cannot be read and
/// `UnsupportedFormat` if no format is given and the extension is unknown.
pub fn ingest_file(
    handle: &StoreHandle,
    path: &Path,
    format: Option<FileFormat>,
) -> Result<IngestReport> {
    let format = match format {
        Some(format) => format,
        None => FileFormat::from_path(path)?,
    };
    let bytes = std::fs::read(path).map_err(|e| {
        crate::errors::io_error("ingest", e).with_entity_id(path.display().to_string())
    })?;
    ingest_bytes(handle, &bytes, format)
}

fn load_table(
    handle: &StoreHandle,
    format: FileFormat,
    table: &NormalizedTable,
) -> Result<IngestReport> {
    let columns = SchemaManager::rebuild_schema(handle, table.columns())?;
    let rows_inserted = OrderRepo::insert(handle, table)?;
    Ok(IngestReport {
        format,
        columns,
        rows_inserted,
    })
}
