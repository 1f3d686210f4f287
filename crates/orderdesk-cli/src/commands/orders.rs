//! Read-only order commands: list, columns, show

use super::render::{render_json, render_table};
use super::CommandResult;
use clap::Args;
use orderdesk_store::{OrderRepo, StoreHandle};

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Print rows as a JSON array
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Product name; surrounding whitespace is ignored
    pub product: String,

    /// Print rows as a JSON array
    #[arg(long)]
    pub json: bool,
}

pub fn execute_list(handle: &StoreHandle, args: ListArgs) -> CommandResult {
    let table = OrderRepo::load_all(handle)?;

    if args.json {
        println!("{}", render_json(&table)?);
    } else if table.is_empty() {
        println!("No products found");
    } else {
        print!("{}", render_table(&table));
    }
    Ok(())
}

pub fn execute_columns(handle: &StoreHandle) -> CommandResult {
    for column in OrderRepo::get_columns(handle)? {
        println!("{}", column);
    }
    Ok(())
}

pub fn execute_show(handle: &StoreHandle, args: ShowArgs) -> CommandResult {
    let key = args.product.trim();
    let table = OrderRepo::find_by_key(handle, key)?;

    if args.json {
        println!("{}", render_json(&table)?);
    } else if table.is_empty() {
        eprintln!("No exact match for product '{}'", key);
    } else {
        print!("{}", render_table(&table));
    }
    Ok(())
}
