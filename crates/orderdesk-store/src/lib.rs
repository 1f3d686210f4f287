//! OrderDesk Store - SQLite persistence for the order table
//!
//! Provides:
//! - Store configuration and the per-call connection handle
//! - Schema manager: additive reconcile at startup, destructive rebuild on ingest
//! - Order repository: bulk insert, load, and `product-name` keyed update/delete
//! - Ingestion pipeline tying the normalizer to rebuild + insert

pub mod config;
pub mod db;
pub mod errors;
pub mod ingest;
pub mod repo;
pub mod schema;

// Re-export key types
pub use config::StoreConfig;
pub use db::StoreHandle;
pub use errors::Result;
pub use ingest::{ingest_bytes, ingest_file, IngestReport};
pub use repo::OrderRepo;
pub use schema::SchemaManager;
