//! OrderDesk Core - order domain model and tabular ingestion
//!
//! This crate provides the storage-independent half of the order data layer:
//! - Order table model (normalized tables, operational columns, dispatch status)
//! - Tabular ingestion normalizer for comma-, tab-delimited and spreadsheet input
//! - Canonical error facility (`ExError` / `ExErrorKind`)
//! - Structured logging facility and boundary macros

pub mod errors;
pub mod ingest;
pub mod logging_facility;
pub mod model;

// Re-export commonly used types
pub use errors::{ExError, ExErrorKind, OrderDeskError, Result};
pub use ingest::{normalize, normalize_path};
pub use model::{DispatchStatus, FieldUpdate, FileFormat, NormalizedTable, OperationalField, Row};
