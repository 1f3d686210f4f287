//! Ingest command
//!
//! Usage: orderdesk ingest <PATH> [--format <FORMAT>] [--backup] [--preview <N>]

use super::render::render_table;
use super::CommandResult;
use clap::Args;
use orderdesk_core::FileFormat;
use orderdesk_store::{ingest_file, OrderRepo, StoreHandle};
use std::path::{Path, PathBuf};

#[derive(Debug, Args)]
pub struct IngestArgs {
    /// Order report (.csv, .xlsx, .txt or .tsv)
    pub path: PathBuf,

    /// csv, spreadsheet or tab-delimited-text; defaults to the file extension
    #[arg(long)]
    pub format: Option<FileFormat>,

    /// Keep a copy of the report as <PATH>.bak before ingesting
    #[arg(long)]
    pub backup: bool,

    /// Number of stored rows to show after loading; 0 disables the preview
    #[arg(long, default_value_t = 5)]
    pub preview: usize,
}

pub fn execute(handle: &StoreHandle, args: IngestArgs) -> CommandResult {
    if args.backup {
        let backup = backup_path(&args.path);
        std::fs::copy(&args.path, &backup)?;
        println!("Backup written to {}", backup.display());
    }

    let report = ingest_file(handle, &args.path, args.format)?;

    println!(
        "✓ Ingested {} rows from {} ({})",
        report.rows_inserted,
        args.path.display(),
        report.format
    );
    println!("Columns: {}", report.columns.join(", "));

    if args.preview > 0 && report.rows_inserted > 0 {
        let stored = OrderRepo::load_all(handle)?;
        println!();
        print!("{}", render_table(&stored.head(args.preview)));
        if stored.len() > args.preview {
            println!("... {} more row(s)", stored.len() - args.preview);
        }
    }
    Ok(())
}

fn backup_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".bak");
    PathBuf::from(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backup_path_appends_suffix() {
        assert_eq!(
            backup_path(Path::new("reports/orders.txt")),
            PathBuf::from("reports/orders.txt.bak")
        );
    }
}
