//! OrderDesk CLI
//!
//! Command-line front end for the order data layer

use clap::{Parser, Subcommand, ValueEnum};
use orderdesk_core::logging_facility::{self, Profile};
use std::path::PathBuf;

mod commands;

#[derive(Debug, Parser)]
#[command(name = "orderdesk")]
#[command(about = "OrderDesk - Marketplace order tracking", long_about = None)]
struct Cli {
    /// SQLite database file (overrides the config file)
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    /// TOML config file; defaults apply when it does not exist
    #[arg(long, global = true, default_value = "orderdesk.toml")]
    config: PathBuf,

    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Pretty)]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogFormat {
    Pretty,
    Json,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Replace the order table with the contents of an order report
    Ingest(commands::ingest::IngestArgs),
    /// Print every order
    List(commands::orders::ListArgs),
    /// Print the live column set
    Columns,
    /// Print the orders for one product
    Show(commands::orders::ShowArgs),
    /// Set the note on every order for a product
    Note(commands::annotate::NoteArgs),
    /// Set the dispatch status on every order for a product
    Dispatch(commands::annotate::DispatchArgs),
    /// Delete every order for a product
    Delete(commands::annotate::DeleteArgs),
}

fn main() {
    let cli = Cli::parse();

    logging_facility::init(match cli.log_format {
        LogFormat::Pretty => Profile::Development,
        LogFormat::Json => Profile::Production,
    });

    let result = commands::open_store(cli.db, &cli.config).and_then(|handle| match cli.command {
        Commands::Ingest(args) => commands::ingest::execute(&handle, args),
        Commands::List(args) => commands::orders::execute_list(&handle, args),
        Commands::Columns => commands::orders::execute_columns(&handle),
        Commands::Show(args) => commands::orders::execute_show(&handle, args),
        Commands::Note(args) => commands::annotate::execute_note(&handle, args),
        Commands::Dispatch(args) => commands::annotate::execute_dispatch(&handle, args),
        Commands::Delete(args) => commands::annotate::execute_delete(&handle, args),
    });

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
