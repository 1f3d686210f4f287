//! Tabular ingestion normalizer
//!
//! Turns raw upload bytes plus a declared [`FileFormat`] into a
//! [`NormalizedTable`]. All values stay text; no type inference happens, so
//! nothing is coerced differently depending on the source format.
//!
//! Failures are ingestion errors and never leave partial output: either the
//! whole file normalizes or nothing is returned.

mod delimited;
mod header;
mod spreadsheet;

use crate::errors::{OrderDeskError, Result};
use crate::model::{FileFormat, NormalizedTable};
use std::path::Path;

pub use header::validate_header;

/// Normalize an uploaded file's bytes according to its declared format
pub fn normalize(bytes: &[u8], format: FileFormat) -> Result<NormalizedTable> {
    if bytes.is_empty() {
        return Err(OrderDeskError::EmptyInput {
            format: format.tag().to_string(),
        });
    }

    let table = match format.delimiter() {
        Some(delimiter) => delimited::read_delimited(bytes, format, delimiter)?,
        None => spreadsheet::read_first_sheet(bytes)?,
    };

    tracing::debug!(
        format = format.tag(),
        columns = table.columns().len(),
        rows = table.len(),
        "normalized upload"
    );

    Ok(table)
}

/// Read a file from disk and normalize it
pub fn normalize_path(path: &Path, format: FileFormat) -> Result<NormalizedTable> {
    let bytes = std::fs::read(path).map_err(|e| OrderDeskError::Io {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    normalize(&bytes, format)
}
