//! CLI integration tests
//!
//! Each test drives the built binary against a scratch database and checks
//! stdout, stderr and the resulting table.

use rusqlite::Connection;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

const ORDERS_CSV: &str = "order-id,product-name,qty\n1,Widget,2\n2,Gadget,1\n3,Widget,5\n";

struct Workspace {
    dir: TempDir,
    db: PathBuf,
}

impl Workspace {
    fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let db = dir.path().join("orders.db");
        Self { dir, db }
    }

    fn seeded() -> Self {
        let ws = Self::new();
        let report = ws.write("orders.csv", ORDERS_CSV);
        let output = ws.run(&["ingest", report.to_str().unwrap()]);
        assert!(output.status.success(), "{}", stderr(&output));
        ws
    }

    fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    fn run(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_orderdesk"))
            .current_dir(self.dir.path())
            .env("RUST_LOG", "off")
            .arg("--db")
            .arg(&self.db)
            .args(args)
            .output()
            .expect("Failed to execute CLI")
    }

    fn query_dispatch(&self, order_id: &str) -> String {
        Connection::open(&self.db)
            .unwrap()
            .query_row(
                r#"SELECT "dispatch" FROM orders WHERE "order-id" = ?1"#,
                [order_id],
                |row| row.get(0),
            )
            .unwrap()
    }

    fn query_dispatch_by_product(&self, product: &str) -> String {
        Connection::open(&self.db)
            .unwrap()
            .query_row(
                r#"SELECT "dispatch" FROM orders WHERE "product-name" = ?1"#,
                [product],
                |row| row.get(0),
            )
            .unwrap()
    }

    fn count(&self) -> i64 {
        count_rows(&self.db)
    }
}

fn count_rows(db: &Path) -> i64 {
    Connection::open(db)
        .unwrap()
        .query_row("SELECT COUNT(*) FROM orders", [], |row| row.get(0))
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_ingest_reports_rows_and_columns() {
    let ws = Workspace::new();
    let report = ws.write("orders.csv", ORDERS_CSV);

    let output = ws.run(&["ingest", report.to_str().unwrap()]);

    assert!(output.status.success(), "{}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("Ingested 3 rows"));
    assert!(out.contains("order-id, product-name, qty, note, dispatch"));
    assert_eq!(ws.count(), 3);
}

#[test]
fn test_ingest_prints_preview_of_stored_rows() {
    let ws = Workspace::new();
    let report = ws.write("orders.csv", ORDERS_CSV);

    let output = ws.run(&["ingest", report.to_str().unwrap(), "--preview", "2"]);

    assert!(output.status.success(), "{}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("order-id\tproduct-name\tqty\tnote\tdispatch\n"));
    assert!(out.contains("1\tWidget\t2\t\tunshipped\n"));
    assert!(out.contains("2\tGadget\t1\t\tunshipped\n"));
    assert!(!out.contains("3\tWidget\t5"));
    assert!(out.contains("... 1 more row(s)"));
}

#[test]
fn test_ingest_preview_can_be_disabled() {
    let ws = Workspace::new();
    let report = ws.write("orders.csv", ORDERS_CSV);

    let output = ws.run(&["ingest", report.to_str().unwrap(), "--preview", "0"]);

    assert!(output.status.success(), "{}", stderr(&output));
    assert!(!stdout(&output).contains("1\tWidget\t2"));
}

#[test]
fn test_ingest_with_backup_copies_report() {
    let ws = Workspace::new();
    let report = ws.write("orders.txt", "product-name\tqty\nLamp\t1\n");

    let output = ws.run(&["ingest", report.to_str().unwrap(), "--backup"]);

    assert!(output.status.success(), "{}", stderr(&output));
    let backup = ws.dir.path().join("orders.txt.bak");
    assert_eq!(
        fs::read_to_string(backup).unwrap(),
        "product-name\tqty\nLamp\t1\n"
    );
}

#[test]
fn test_ingest_explicit_format_overrides_extension() {
    let ws = Workspace::new();
    let report = ws.write("orders.dat", "product-name\tqty\nLamp\t1\n");

    let output = ws.run(&[
        "ingest",
        report.to_str().unwrap(),
        "--format",
        "tab-delimited-text",
    ]);

    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(ws.count(), 1);
}

#[test]
fn test_ingest_unknown_extension_fails() {
    let ws = Workspace::new();
    let report = ws.write("orders.json", "[]");

    let output = ws.run(&["ingest", report.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Error: [ERR_UNSUPPORTED_FORMAT]"));
}

#[test]
fn test_list_empty_store() {
    let ws = Workspace::new();

    let output = ws.run(&["list"]);

    assert!(output.status.success(), "{}", stderr(&output));
    assert!(stdout(&output).contains("No products found"));
}

#[test]
fn test_list_renders_tab_separated_rows() {
    let ws = Workspace::seeded();

    let output = ws.run(&["list"]);

    let out = stdout(&output);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines[0], "order-id\tproduct-name\tqty\tnote\tdispatch");
    assert_eq!(lines[1], "1\tWidget\t2\t\tunshipped");
    assert_eq!(lines.len(), 4);
}

#[test]
fn test_list_json() {
    let ws = Workspace::seeded();

    let output = ws.run(&["list", "--json"]);

    assert!(output.status.success(), "{}", stderr(&output));
    let rows: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(rows.as_array().map(Vec::len), Some(3));
    assert_eq!(rows[2]["product-name"], "Widget");
    assert!(rows[2]["note"].is_null());
}

#[test]
fn test_columns_lists_live_schema() {
    let ws = Workspace::seeded();

    let output = ws.run(&["columns"]);

    assert_eq!(
        stdout(&output),
        "order-id\nproduct-name\nqty\nnote\ndispatch\n"
    );
}

#[test]
fn test_dispatch_trims_product_and_updates_all_matches() {
    let ws = Workspace::seeded();

    let output = ws.run(&["dispatch", "  Widget ", "shipped"]);

    assert!(output.status.success(), "{}", stderr(&output));
    assert!(stdout(&output).contains("Updated 2 row(s) for 'Widget'"));
    assert_eq!(ws.query_dispatch("1"), "shipped");
    assert_eq!(ws.query_dispatch("3"), "shipped");
    assert_eq!(ws.query_dispatch("2"), "unshipped");
}

#[test]
fn test_invalid_dispatch_value_fails() {
    let ws = Workspace::seeded();

    let output = ws.run(&["dispatch", "Widget", "lost"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Error: [ERR_INVALID_DISPATCH]"));
    assert_eq!(ws.query_dispatch("1"), "unshipped");
}

#[test]
fn test_note_on_unknown_product_warns_and_succeeds() {
    let ws = Workspace::seeded();

    let output = ws.run(&["note", "Nonexistent", "call first"]);

    assert!(output.status.success(), "{}", stderr(&output));
    assert!(stderr(&output).contains("No exact match"));
}

#[test]
fn test_show_prints_matching_rows() {
    let ws = Workspace::seeded();
    ws.run(&["note", "Gadget", "fragile"]);

    let output = ws.run(&["show", "Gadget"]);

    let out = stdout(&output);
    assert!(out.contains("2\tGadget\t1\tfragile\tunshipped"));
    assert!(!out.contains("Widget"));
}

#[test]
fn test_delete_removes_matching_rows() {
    let ws = Workspace::seeded();

    let output = ws.run(&["delete", "Widget"]);

    assert!(output.status.success(), "{}", stderr(&output));
    assert!(stdout(&output).contains("Deleted 2 row(s)"));
    assert_eq!(ws.count(), 1);
}

#[test]
fn test_startup_reconciles_legacy_table() {
    let ws = Workspace::new();
    Connection::open(&ws.db)
        .unwrap()
        .execute_batch(
            r#"CREATE TABLE orders ("product-name" TEXT, "qty" TEXT);
               INSERT INTO orders VALUES ('Widget', '2');"#,
        )
        .unwrap();

    let output = ws.run(&["columns"]);

    assert_eq!(stdout(&output), "product-name\nqty\nnote\ndispatch\n");
    assert_eq!(ws.query_dispatch_by_product("Widget"), "unshipped");
}

#[test]
fn test_config_file_sets_table_name() {
    let ws = Workspace::new();
    let config = ws.write("orderdesk.toml", "table = \"amazon\"\n");
    let report = ws.write("orders.csv", ORDERS_CSV);

    let output = ws.run(&[
        "--config",
        config.to_str().unwrap(),
        "ingest",
        report.to_str().unwrap(),
    ]);

    assert!(output.status.success(), "{}", stderr(&output));
    let count: i64 = Connection::open(&ws.db)
        .unwrap()
        .query_row("SELECT COUNT(*) FROM amazon", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count, 3);
}

#[test]
fn test_invalid_config_fails() {
    let ws = Workspace::new();
    let config = ws.write("orderdesk.toml", "colour = \"blue\"\n");

    let output = ws.run(&["--config", config.to_str().unwrap(), "list"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Error: [ERR_CONFIG]"));
}
