// Shared fixtures for store integration tests
#![allow(dead_code)]

use orderdesk_core::FileFormat;
use orderdesk_store::{ingest_bytes, StoreHandle};
use rusqlite::Connection;
use tempfile::TempDir;

/// Two rows keyed "Widget", one keyed "Gadget"
pub const ORDERS_CSV: &[u8] =
    b"order-id,product-name,qty\n1,Widget,2\n2,Gadget,1\n3,Widget,5\n";

/// Scratch database in a temp dir; keep the `TempDir` alive for the test
pub fn scratch_store() -> (TempDir, StoreHandle) {
    let dir = TempDir::new().unwrap();
    let handle = StoreHandle::at_path(dir.path().join("orders.db"));
    (dir, handle)
}

/// Scratch store loaded with `ORDERS_CSV`
pub fn seeded_store() -> (TempDir, StoreHandle) {
    let (dir, handle) = scratch_store();
    ingest_bytes(&handle, ORDERS_CSV, FileFormat::Csv).unwrap();
    (dir, handle)
}

/// Direct connection for arranging legacy tables and inspecting state
pub fn raw_connection(handle: &StoreHandle) -> Connection {
    Connection::open(handle.db_path()).unwrap()
}

pub fn row_count(handle: &StoreHandle) -> i64 {
    raw_connection(handle)
        .query_row("SELECT COUNT(*) FROM orders", [], |row| row.get(0))
        .unwrap()
}
