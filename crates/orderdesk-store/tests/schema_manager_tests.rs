// Integration tests for the schema manager
// Reconcile is additive and idempotent; rebuild is destructive.

mod common;

use common::{raw_connection, row_count, scratch_store, seeded_store};
use orderdesk_core::ExErrorKind;
use orderdesk_store::{OrderRepo, SchemaManager};

fn legacy_table(handle: &orderdesk_store::StoreHandle) {
    raw_connection(handle)
        .execute_batch(
            r#"
            CREATE TABLE orders ("order-id" TEXT, "product-name" TEXT);
            INSERT INTO orders VALUES ('1', 'Widget');
            INSERT INTO orders VALUES ('2', 'Gadget');
            "#,
        )
        .unwrap();
}

#[test]
fn test_reconcile_adds_both_columns_to_legacy_table() {
    let (_dir, handle) = scratch_store();
    legacy_table(&handle);

    let added = SchemaManager::reconcile_existing_schema(&handle).unwrap();

    assert_eq!(added, vec!["note", "dispatch"]);
    assert_eq!(
        OrderRepo::get_columns(&handle).unwrap(),
        vec!["order-id", "product-name", "note", "dispatch"]
    );
    assert_eq!(row_count(&handle), 2);
}

#[test]
fn test_reconcile_backfills_dispatch_for_existing_rows() {
    let (_dir, handle) = scratch_store();
    legacy_table(&handle);

    SchemaManager::reconcile_existing_schema(&handle).unwrap();

    let table = OrderRepo::load_all(&handle).unwrap();
    assert_eq!(table.len(), 2);
    for row in table.rows() {
        assert!(row.is_null("note"));
        assert_eq!(row.get("dispatch"), Some("unshipped"));
    }
    assert_eq!(table.rows()[0].get("product-name"), Some("Widget"));
}

#[test]
fn test_reconcile_adds_only_missing_column() {
    let (_dir, handle) = scratch_store();
    raw_connection(&handle)
        .execute_batch(
            r#"
            CREATE TABLE orders ("product-name" TEXT, note TEXT);
            INSERT INTO orders VALUES ('Widget', 'keep me');
            "#,
        )
        .unwrap();

    let added = SchemaManager::reconcile_existing_schema(&handle).unwrap();

    assert_eq!(added, vec!["dispatch"]);
    let table = OrderRepo::load_all(&handle).unwrap();
    assert_eq!(table.rows()[0].get("note"), Some("keep me"));
    assert_eq!(table.rows()[0].get("dispatch"), Some("unshipped"));
}

#[test]
fn test_reconcile_is_idempotent() {
    let (_dir, handle) = seeded_store();
    OrderRepo::update_field(
        &handle,
        "Gadget",
        &orderdesk_core::FieldUpdate::Note("gift wrap".to_string()),
    )
    .unwrap();

    let before_columns = OrderRepo::get_columns(&handle).unwrap();
    let before_rows = OrderRepo::load_all(&handle).unwrap();

    let first = SchemaManager::reconcile_existing_schema(&handle).unwrap();
    let second = SchemaManager::reconcile_existing_schema(&handle).unwrap();

    assert!(first.is_empty());
    assert!(second.is_empty());
    assert_eq!(OrderRepo::get_columns(&handle).unwrap(), before_columns);
    assert_eq!(OrderRepo::load_all(&handle).unwrap(), before_rows);
}

#[test]
fn test_reconcile_without_table_is_noop() {
    let (_dir, handle) = scratch_store();

    let added = SchemaManager::reconcile_existing_schema(&handle).unwrap();

    assert!(added.is_empty());
    assert!(OrderRepo::get_columns(&handle).unwrap().is_empty());
}

#[test]
fn test_rebuild_then_load_is_empty_with_expected_columns() {
    let (_dir, handle) = seeded_store();

    let columns = SchemaManager::rebuild_schema(
        &handle,
        &["sku".to_string(), "product-name".to_string()],
    )
    .unwrap();

    let table = OrderRepo::load_all(&handle).unwrap();
    assert_eq!(columns, vec!["sku", "product-name", "note", "dispatch"]);
    assert_eq!(table.columns(), columns.as_slice());
    assert!(table.is_empty());
}

#[test]
fn test_rebuild_does_not_repeat_operational_columns() {
    let (_dir, handle) = scratch_store();

    let columns = SchemaManager::rebuild_schema(
        &handle,
        &["dispatch".to_string(), "sku".to_string(), "note".to_string()],
    )
    .unwrap();

    assert_eq!(columns, vec!["sku", "note", "dispatch"]);
    assert_eq!(OrderRepo::get_columns(&handle).unwrap(), columns);
}

#[test]
fn test_rebuild_skips_operational_columns_in_any_case() {
    let (_dir, handle) = scratch_store();

    let columns = SchemaManager::rebuild_schema(
        &handle,
        &["Note".to_string(), "sku".to_string(), "DISPATCH".to_string()],
    )
    .unwrap();

    assert_eq!(columns, vec!["sku", "note", "dispatch"]);
}

#[test]
fn test_rebuild_rejects_case_duplicates_and_keeps_table() {
    let (_dir, handle) = seeded_store();

    let err = SchemaManager::rebuild_schema(&handle, &["SKU".to_string(), "sku".to_string()])
        .unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::Schema);
    assert_eq!(row_count(&handle), 3);
    assert_eq!(
        OrderRepo::get_columns(&handle).unwrap(),
        vec!["order-id", "product-name", "qty", "note", "dispatch"]
    );
}

#[test]
fn test_reconcile_matches_operational_columns_ignoring_case() {
    let (_dir, handle) = scratch_store();
    raw_connection(&handle)
        .execute_batch(
            r#"
            CREATE TABLE orders ("product-name" TEXT, "Note" TEXT);
            INSERT INTO orders VALUES ('Widget', 'keep me');
            "#,
        )
        .unwrap();

    let first = SchemaManager::reconcile_existing_schema(&handle).unwrap();
    let second = SchemaManager::reconcile_existing_schema(&handle).unwrap();

    assert_eq!(first, vec!["dispatch"]);
    assert!(second.is_empty());
    assert_eq!(
        OrderRepo::get_columns(&handle).unwrap(),
        vec!["product-name", "Note", "dispatch"]
    );
    assert_eq!(row_count(&handle), 1);
}

#[test]
fn test_rebuild_sets_dispatch_default() {
    let (_dir, handle) = scratch_store();
    SchemaManager::rebuild_schema(&handle, &["product-name".to_string()]).unwrap();

    raw_connection(&handle)
        .execute(r#"INSERT INTO orders ("product-name") VALUES ('Widget')"#, [])
        .unwrap();

    let table = OrderRepo::load_all(&handle).unwrap();
    assert_eq!(table.rows()[0].get("dispatch"), Some("unshipped"));
    assert!(table.rows()[0].is_null("note"));
}

#[test]
fn test_rebuild_rejects_duplicate_columns() {
    let (_dir, handle) = scratch_store();

    let err = SchemaManager::rebuild_schema(&handle, &["sku".to_string(), "sku".to_string()])
        .unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::Schema);
    assert!(err.is_schema());
}

#[test]
fn test_rebuild_quotes_awkward_identifiers() {
    let (_dir, handle) = scratch_store();
    let awkward = vec![
        "ship to".to_string(),
        "select".to_string(),
        "size \"xl\"".to_string(),
    ];

    SchemaManager::rebuild_schema(&handle, &awkward).unwrap();

    assert_eq!(
        OrderRepo::get_columns(&handle).unwrap(),
        vec!["ship to", "select", "size \"xl\"", "note", "dispatch"]
    );
}
