use crate::db::{quote_ident, StoreHandle};
use crate::errors::{invalid_schema, schema_error, Result};
use crate::schema::introspect::table_columns;
use orderdesk_core::model::{is_operational_column, DEFAULT_DISPATCH, DISPATCH_COLUMN, NOTE_COLUMN};
use orderdesk_core::{log_op_end, log_op_error, log_op_start};
use std::collections::HashSet;

/// Reconciles and rebuilds the order table schema
pub struct SchemaManager;

impl SchemaManager {
    /// Add any missing operational columns to an existing order table.
    ///
    /// Additive only: rows are never dropped or rewritten. `dispatch` is added
    /// with its default, so rows that predate the column read `unshipped`;
    /// `note` is added as NULL. When the table does not exist yet there is
    /// nothing to migrate and this is a no-op. Safe to call on every start.
    ///
    /// Returns the columns that were added.
    ///
    /// # Errors
    ///
    /// `Schema` if the table cannot be inspected or altered.
    pub fn reconcile_existing_schema(handle: &StoreHandle) -> Result<Vec<String>> {
        log_op_start!("reconcile_existing_schema", table = handle.table());
        let start = std::time::Instant::now();

        let added = Self::reconcile_impl(handle).map_err(|e| {
            log_op_error!(
                "reconcile_existing_schema",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64
            );
            e
        })?;

        log_op_end!(
            "reconcile_existing_schema",
            duration_ms = start.elapsed().as_millis() as u64,
            added = added.len() as u64
        );

        Ok(added)
    }

    fn reconcile_impl(handle: &StoreHandle) -> Result<Vec<String>> {
        const OP: &str = "reconcile_existing_schema";

        let conn = handle.connect().map_err(|e| schema_error(OP, e))?;
        let live = table_columns(&conn, handle.table()).map_err(|e| schema_error(OP, e))?;

        if live.is_empty() {
            tracing::debug!(table = handle.table(), "no order table yet, nothing to reconcile");
            return Ok(Vec::new());
        }

        let mut added = Vec::new();

        if !has_column(&live, NOTE_COLUMN) {
            conn.execute(
                &format!(
                    "ALTER TABLE {} ADD COLUMN {} TEXT",
                    handle.quoted_table(),
                    quote_ident(NOTE_COLUMN)
                ),
                [],
            )
            .map_err(|e| schema_error(OP, e))?;
            added.push(NOTE_COLUMN.to_string());
        }

        if !has_column(&live, DISPATCH_COLUMN) {
            conn.execute(
                &format!(
                    "ALTER TABLE {} ADD COLUMN {} TEXT DEFAULT '{}'",
                    handle.quoted_table(),
                    quote_ident(DISPATCH_COLUMN),
                    DEFAULT_DISPATCH
                ),
                [],
            )
            .map_err(|e| schema_error(OP, e))?;
            added.push(DISPATCH_COLUMN.to_string());
        }

        Ok(added)
    }

    /// Drop the order table and recreate it for a new upload.
    ///
    /// The new column set is `columns` followed by `note` and `dispatch`, all
    /// `TEXT`, with `dispatch` defaulting to `unshipped`. Operational names in
    /// `columns` are not repeated, whatever their case. Destructive: every existing row, including
    /// its annotations, is lost. Only the ingestion pipeline should call this.
    ///
    /// Returns the column set of the new table.
    ///
    /// # Errors
    ///
    /// `Schema` for empty or duplicate column names (compared ignoring ASCII
    /// case), or if the drop/create statements fail. The previous table
    /// survives any failure.
    pub fn rebuild_schema(handle: &StoreHandle, columns: &[String]) -> Result<Vec<String>> {
        log_op_start!(
            "rebuild_schema",
            table = handle.table(),
            columns = columns.len() as u64
        );
        let start = std::time::Instant::now();

        let result = Self::rebuild_impl(handle, columns).map_err(|e| {
            log_op_error!(
                "rebuild_schema",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64
            );
            e
        })?;

        log_op_end!(
            "rebuild_schema",
            duration_ms = start.elapsed().as_millis() as u64
        );

        Ok(result)
    }

    fn rebuild_impl(handle: &StoreHandle, columns: &[String]) -> Result<Vec<String>> {
        const OP: &str = "rebuild_schema";

        let mut seen = HashSet::new();
        let mut schema: Vec<String> = Vec::with_capacity(columns.len() + 2);
        for column in columns.iter().filter(|c| !is_operational_column(c)) {
            if column.is_empty() {
                return Err(invalid_schema(OP, "column name must not be empty"));
            }
            if !seen.insert(column.to_ascii_lowercase()) {
                return Err(invalid_schema(OP, &format!("duplicate column {}", column)));
            }
            schema.push(column.clone());
        }
        schema.push(NOTE_COLUMN.to_string());
        schema.push(DISPATCH_COLUMN.to_string());

        let definitions: Vec<String> = schema
            .iter()
            .map(|c| match c.as_str() {
                DISPATCH_COLUMN => format!("{} TEXT DEFAULT '{}'", quote_ident(c), DEFAULT_DISPATCH),
                _ => format!("{} TEXT", quote_ident(c)),
            })
            .collect();

        // Drop and create commit together; a failed create keeps the old table
        let mut conn = handle.connect().map_err(|e| schema_error(OP, e))?;
        let tx = conn.transaction().map_err(|e| schema_error(OP, e))?;
        tx.execute(&format!("DROP TABLE IF EXISTS {}", handle.quoted_table()), [])
            .map_err(|e| schema_error(OP, e))?;
        tx.execute(
            &format!(
                "CREATE TABLE {} ({})",
                handle.quoted_table(),
                definitions.join(", ")
            ),
            [],
        )
        .map_err(|e| schema_error(OP, e))?;
        tx.commit().map_err(|e| schema_error(OP, e))?;

        tracing::debug!(table = handle.table(), columns = ?schema, "order table recreated");

        Ok(schema)
    }
}

/// Column lookup the way SQLite resolves names: ASCII case-insensitive
fn has_column(live: &[String], name: &str) -> bool {
    live.iter().any(|c| c.eq_ignore_ascii_case(name))
}
