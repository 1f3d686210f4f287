//! Key-based write commands: note, dispatch, delete
//!
//! Product names are trimmed here; the repository matches keys exactly.

use super::CommandResult;
use clap::Args;
use orderdesk_core::model::{DISPATCH_COLUMN, NOTE_COLUMN};
use orderdesk_core::{ExError, FieldUpdate};
use orderdesk_store::{OrderRepo, StoreHandle};

#[derive(Debug, Args)]
pub struct NoteArgs {
    pub product: String,
    pub text: String,
}

#[derive(Debug, Args)]
pub struct DispatchArgs {
    pub product: String,
    /// shipped or unshipped
    pub status: String,
}

#[derive(Debug, Args)]
pub struct DeleteArgs {
    pub product: String,
}

pub fn execute_note(handle: &StoreHandle, args: NoteArgs) -> CommandResult {
    let update = FieldUpdate::parse(NOTE_COLUMN, &args.text).map_err(ExError::from)?;
    apply_update(handle, &args.product, &update)
}

pub fn execute_dispatch(handle: &StoreHandle, args: DispatchArgs) -> CommandResult {
    let update =
        FieldUpdate::parse(DISPATCH_COLUMN, args.status.trim()).map_err(ExError::from)?;
    apply_update(handle, &args.product, &update)
}

pub fn execute_delete(handle: &StoreHandle, args: DeleteArgs) -> CommandResult {
    let key = args.product.trim();
    let deleted = OrderRepo::delete_by_key(handle, key)?;
    report_affected(key, deleted, "Deleted");
    Ok(())
}

fn apply_update(handle: &StoreHandle, product: &str, update: &FieldUpdate) -> CommandResult {
    let key = product.trim();
    let affected = OrderRepo::update_field(handle, key, update)?;
    report_affected(key, affected, "Updated");
    Ok(())
}

fn report_affected(key: &str, affected: usize, verb: &str) {
    if affected == 0 {
        eprintln!("Warning: No exact match for product '{}'", key);
    } else {
        println!("✓ {} {} row(s) for '{}'", verb, affected, key);
    }
}
