//! Schema manager for the order table
//!
//! The business columns are whatever the last upload's header contained, so
//! the table is schema-on-write. Two fixed operational columns (`note`,
//! `dispatch`) are layered on top of them.

pub mod introspect;
mod manager;

pub use introspect::table_columns;
pub use manager::SchemaManager;
