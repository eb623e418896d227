pub mod cli;
pub mod migrate;
pub mod rewriter;
pub mod splitter;
pub mod tables;

#[cfg(test)]
mod integration_tests;

pub use migrate::{MigrateError, Migration, MigrationReport};
pub use rewriter::{FieldKind, FieldRewriter, RewrittenBlock};
pub use splitter::{recompose, split_records, CatalogParts};
pub use tables::TranslationTables;
