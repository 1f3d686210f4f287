//! Order repository
//!
//! Key-based operations match `product-name` by exact string equality (no
//! trimming, no case folding). The key column is not unique, so an update or
//! delete may touch zero, one or many rows; the affected count is returned
//! and zero is not an error. Callers trim user input before calling.

use crate::db::{quote_ident, StoreHandle};
use crate::errors::{missing_key_column, repository_error, Result};
use crate::schema::table_columns;
use orderdesk_core::model::{
    is_operational_column, FieldUpdate, NormalizedTable, Row, DEFAULT_DISPATCH, DISPATCH_COLUMN,
    NOTE_COLUMN,
};
use orderdesk_core::{log_op_end, log_op_error, log_op_start};
use rusqlite::types::ValueRef;
use rusqlite::Connection;

/// SQLite repository for order rows
pub struct OrderRepo;

impl OrderRepo {
    /// Append every row of `table` to the order table.
    ///
    /// `note` is written as NULL and `dispatch` as `unshipped` for every row,
    /// whatever the source carried. Rows are appended, never merged: call
    /// [`crate::SchemaManager::rebuild_schema`] first for a clean load. All
    /// rows go in under one transaction.
    ///
    /// Returns the number of rows inserted.
    ///
    /// # Errors
    ///
    /// `Repository` if the table is missing or lacks one of the columns.
    pub fn insert(handle: &StoreHandle, table: &NormalizedTable) -> Result<usize> {
        log_op_start!("insert", table = handle.table(), rows = table.len() as u64);
        let start = std::time::Instant::now();

        let inserted = Self::insert_impl(handle, table).map_err(|e| {
            log_op_error!(
                "insert",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64
            );
            e
        })?;

        log_op_end!(
            "insert",
            duration_ms = start.elapsed().as_millis() as u64,
            rows = inserted as u64
        );

        Ok(inserted)
    }

    fn insert_impl(handle: &StoreHandle, table: &NormalizedTable) -> Result<usize> {
        const OP: &str = "insert";

        let business: Vec<&str> = table
            .columns()
            .iter()
            .map(String::as_str)
            .filter(|c| !is_operational_column(c))
            .collect();

        let mut column_list: Vec<String> = business.iter().map(|c| quote_ident(c)).collect();
        column_list.push(quote_ident(NOTE_COLUMN));
        column_list.push(quote_ident(DISPATCH_COLUMN));

        let placeholders: Vec<String> = (1..=column_list.len()).map(|i| format!("?{}", i)).collect();
        let sql = format!(
            "INSERT INTO {} ({}) VALUES ({})",
            handle.quoted_table(),
            column_list.join(", "),
            placeholders.join(", ")
        );

        let mut conn = handle.connect().map_err(|e| repository_error(OP, e))?;
        let tx = conn.transaction().map_err(|e| repository_error(OP, e))?;
        {
            let mut stmt = tx.prepare(&sql).map_err(|e| repository_error(OP, e))?;
            for row in table.rows() {
                let mut values: Vec<Option<&str>> =
                    business.iter().map(|c| row.get(c)).collect();
                values.push(None);
                values.push(Some(DEFAULT_DISPATCH));
                stmt.execute(rusqlite::params_from_iter(values))
                    .map_err(|e| repository_error(OP, e))?;
            }
        }
        tx.commit().map_err(|e| repository_error(OP, e))?;

        Ok(table.len())
    }

    /// Every row and the live column set, in storage order.
    ///
    /// A missing table reads as an empty table with no columns; a table that
    /// was rebuilt but never filled reads as its columns with no rows.
    ///
    /// # Errors
    ///
    /// `Repository` on any storage failure.
    pub fn load_all(handle: &StoreHandle) -> Result<NormalizedTable> {
        log_op_start!("load_all", table = handle.table());
        let start = std::time::Instant::now();

        let table = Self::load_all_impl(handle).map_err(|e| {
            log_op_error!(
                "load_all",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64
            );
            e
        })?;

        log_op_end!(
            "load_all",
            duration_ms = start.elapsed().as_millis() as u64,
            rows = table.len() as u64
        );

        Ok(table)
    }

    fn load_all_impl(handle: &StoreHandle) -> Result<NormalizedTable> {
        const OP: &str = "load_all";

        let conn = handle.connect().map_err(|e| repository_error(OP, e))?;
        let columns = table_columns(&conn, handle.table()).map_err(|e| repository_error(OP, e))?;
        if columns.is_empty() {
            return Ok(NormalizedTable::default());
        }

        let sql = format!("SELECT * FROM {} ORDER BY rowid", handle.quoted_table());
        select_rows(&conn, &sql, &[], columns).map_err(|e| repository_error(OP, e))
    }

    /// Live column names in storage order; empty when the table does not exist.
    ///
    /// # Errors
    ///
    /// `Repository` on any storage failure.
    pub fn get_columns(handle: &StoreHandle) -> Result<Vec<String>> {
        const OP: &str = "get_columns";

        let conn = handle.connect().map_err(|e| repository_error(OP, e))?;
        table_columns(&conn, handle.table()).map_err(|e| repository_error(OP, e))
    }

    /// Rows whose key column equals `key` exactly, in storage order.
    ///
    /// # Errors
    ///
    /// `MissingKeyColumn` if the live table has no key column, `Repository`
    /// on any storage failure.
    pub fn find_by_key(handle: &StoreHandle, key: &str) -> Result<NormalizedTable> {
        const OP: &str = "find_by_key";

        let conn = handle.connect().map_err(|e| repository_error(OP, e))?;
        let columns = require_key_column(&conn, handle, OP)?;

        let sql = format!(
            "SELECT * FROM {} WHERE {} = ?1 ORDER BY rowid",
            handle.quoted_table(),
            quote_ident(handle.key_column())
        );
        select_rows(&conn, &sql, &[key], columns).map_err(|e| repository_error(OP, e))
    }

    /// Set one operational field on every row whose key equals `key`.
    ///
    /// Returns the number of rows affected; 0 means no row matched.
    ///
    /// # Errors
    ///
    /// `MissingKeyColumn` if the live table has no key column, `Repository`
    /// on any storage failure.
    pub fn update_field(handle: &StoreHandle, key: &str, update: &FieldUpdate) -> Result<usize> {
        log_op_start!(
            "update_field",
            table = handle.table(),
            key = key,
            field = update.field().column()
        );
        let start = std::time::Instant::now();

        let affected = Self::update_field_impl(handle, key, update).map_err(|e| {
            log_op_error!(
                "update_field",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64
            );
            e
        })?;

        log_op_end!(
            "update_field",
            duration_ms = start.elapsed().as_millis() as u64,
            affected = affected as u64
        );

        Ok(affected)
    }

    fn update_field_impl(handle: &StoreHandle, key: &str, update: &FieldUpdate) -> Result<usize> {
        const OP: &str = "update_field";

        let conn = handle.connect().map_err(|e| repository_error(OP, e))?;
        require_key_column(&conn, handle, OP)?;

        let sql = format!(
            "UPDATE {} SET {} = ?1 WHERE {} = ?2",
            handle.quoted_table(),
            quote_ident(update.field().column()),
            quote_ident(handle.key_column())
        );
        conn.execute(&sql, [update.value(), key])
            .map_err(|e| repository_error(OP, e))
    }

    /// Delete every row whose key equals `key`.
    ///
    /// Returns the number of rows deleted; 0 means no row matched.
    ///
    /// # Errors
    ///
    /// `MissingKeyColumn` if the live table has no key column, `Repository`
    /// on any storage failure.
    pub fn delete_by_key(handle: &StoreHandle, key: &str) -> Result<usize> {
        log_op_start!("delete_by_key", table = handle.table(), key = key);
        let start = std::time::Instant::now();

        let deleted = Self::delete_by_key_impl(handle, key).map_err(|e| {
            log_op_error!(
                "delete_by_key",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64
            );
            e
        })?;

        log_op_end!(
            "delete_by_key",
            duration_ms = start.elapsed().as_millis() as u64,
            affected = deleted as u64
        );

        Ok(deleted)
    }

    fn delete_by_key_impl(handle: &StoreHandle, key: &str) -> Result<usize> {
        const OP: &str = "delete_by_key";

        let conn = handle.connect().map_err(|e| repository_error(OP, e))?;
        require_key_column(&conn, handle, OP)?;

        let sql = format!(
            "DELETE FROM {} WHERE {} = ?1",
            handle.quoted_table(),
            quote_ident(handle.key_column())
        );
        conn.execute(&sql, [key])
            .map_err(|e| repository_error(OP, e))
    }
}

/// Live columns, or `MissingKeyColumn` when the key column is absent
fn require_key_column(conn: &Connection, handle: &StoreHandle, op: &str) -> Result<Vec<String>> {
    let columns = table_columns(conn, handle.table()).map_err(|e| repository_error(op, e))?;
    if !columns
        .iter()
        .any(|c| c.eq_ignore_ascii_case(handle.key_column()))
    {
        return Err(missing_key_column(op, handle.table(), handle.key_column()));
    }
    Ok(columns)
}

fn select_rows(
    conn: &Connection,
    sql: &str,
    params: &[&str],
    columns: Vec<String>,
) -> rusqlite::Result<NormalizedTable> {
    let mut stmt = conn.prepare(sql)?;
    let width = stmt.column_count();

    let rows = stmt
        .query_map(rusqlite::params_from_iter(params), |row| {
            let mut fields = Vec::with_capacity(width);
            for (idx, name) in columns.iter().enumerate().take(width) {
                fields.push((name.clone(), value_text(row.get_ref(idx)?)));
            }
            Ok(Row::new(fields))
        })?
        .collect::<rusqlite::Result<Vec<Row>>>()?;

    Ok(NormalizedTable::new(columns, rows))
}

/// Stored values are text; anything else written by other tools is rendered
fn value_text(value: ValueRef<'_>) -> Option<String> {
    match value {
        ValueRef::Null => None,
        ValueRef::Integer(i) => Some(i.to_string()),
        ValueRef::Real(f) => Some(f.to_string()),
        ValueRef::Text(t) | ValueRef::Blob(t) => Some(String::from_utf8_lossy(t).into_owned()),
    }
}
