//! Command-line interface for the catalog migration tool.

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::migrate::Migration;
use crate::tables::TranslationTables;

/// The catalog file the original migration targeted.
pub const DEFAULT_CATALOG_PATH: &str = "data/streetwear/products.ts";

/// catalog-i18n - migrate a product catalog to bilingual Thai/English fields.
#[derive(Parser)]
#[command(name = "catalog-i18n")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rewrite name/description/category fields into `_th`/`_en` pairs, in place.
    Migrate {
        /// Catalog source file to rewrite
        #[arg(default_value = DEFAULT_CATALOG_PATH)]
        file: PathBuf,

        /// Transform and report without writing the file back
        #[arg(long)]
        dry_run: bool,
    },
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Migrate { file, dry_run } => migrate_command(&file, dry_run),
    }
}

fn migrate_command(file: &Path, dry_run: bool) -> Result<()> {
    let migration = Migration::new(TranslationTables::streetwear());

    if dry_run {
        let report = migration.check_file(file)?;
        println!(
            "Dry run: {} record(s), {} field(s) would be rewritten in {}",
            report.records,
            report.fields_rewritten,
            file.display()
        );
    } else {
        let report = migration.migrate_file(file)?;
        println!(
            "Migrated {}: {} record(s), {} field(s) rewritten",
            file.display(),
            report.records,
            report.fields_rewritten
        );
    }

    Ok(())
}
