//! CLI entry point for the catalog migration tool.

use catalog_i18n::cli;

fn main() {
    // WARN by default, RUST_LOG overrides
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(e) = cli::run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
