/// Whole-document migration pipeline and file I/O
///
/// Read fully, transform in memory, write only on success. A read-time fault
/// (missing file, bad encoding) aborts before any write, so the source is
/// never left partially transformed.
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, info};
use thiserror::Error;

use crate::rewriter::FieldRewriter;
use crate::splitter::{recompose, split_records};
use crate::tables::TranslationTables;

#[derive(Debug, Error)]
pub enum MigrateError {
    #[error("source file not found: {0}")]
    SourceNotFound(PathBuf),

    #[error("source file is not valid UTF-8: {0}")]
    Decode(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Counts reported after a transform pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MigrationReport {
    pub records: usize,
    pub fields_rewritten: usize,
}

#[derive(Debug, Clone)]
pub struct Migration {
    rewriter: FieldRewriter,
}

impl Migration {
    pub fn new(tables: TranslationTables) -> Self {
        Self {
            rewriter: FieldRewriter::new(tables),
        }
    }

    /// Pure text-to-text transform: split, rewrite each record, recompose.
    pub fn transform(&self, document: &str) -> (String, MigrationReport) {
        let parts = split_records(document);
        let mut report = MigrationReport {
            records: parts.blocks.len(),
            ..Default::default()
        };

        let blocks: Vec<String> = parts
            .blocks
            .iter()
            .enumerate()
            .map(|(i, block)| {
                let rewritten = self.rewriter.rewrite_block(block);
                debug!(
                    "record {}: {} field(s) rewritten",
                    i + 1,
                    rewritten.fields_rewritten
                );
                report.fields_rewritten += rewritten.fields_rewritten;
                rewritten.text
            })
            .collect();

        (recompose(&parts.preamble, &blocks), report)
    }

    /// Transform the file at `path` and overwrite it in place.
    pub fn migrate_file(&self, path: &Path) -> Result<MigrationReport, MigrateError> {
        let document = self.read_document(path)?;
        let (migrated, report) = self.transform(&document);
        fs::write(path, migrated)?;
        info!(
            "migrated {}: {} record(s), {} field(s) rewritten",
            path.display(),
            report.records,
            report.fields_rewritten
        );
        Ok(report)
    }

    /// Transform the file at `path` without writing anything back.
    pub fn check_file(&self, path: &Path) -> Result<MigrationReport, MigrateError> {
        let document = self.read_document(path)?;
        let (_, report) = self.transform(&document);
        Ok(report)
    }

    fn read_document(&self, path: &Path) -> Result<String, MigrateError> {
        if !path.exists() {
            return Err(MigrateError::SourceNotFound(path.to_path_buf()));
        }
        let bytes = fs::read(path)?;
        String::from_utf8(bytes).map_err(|_| MigrateError::Decode(path.to_path_buf()))
    }
}
