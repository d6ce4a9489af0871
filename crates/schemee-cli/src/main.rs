//! Schemee CLI - Command-line interface for blueprint compilation and extraction.

use clap::Parser;
use schemee_cli::commands;
use schemee_cli::config::OutputFormat;
use schemee_cli::{Cli, Command, Config, Formatter, Registry};
use schemee_sdk::FileStore;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        let formatter = Formatter::new(OutputFormat::Table, false);
        eprintln!("{}", formatter.error(&e.to_string()));
        std::process::exit(1);
    }
}

/// Log to stderr; `RUST_LOG` wins over `-v` flags when set.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}

fn run(cli: Cli) -> schemee_cli::Result<()> {
    // Load config from --config or the default location
    let config = match &cli.config {
        Some(path) => Config::load_from(Path::new(path))?,
        None => Config::load()?,
    };

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    let formatter = Formatter::new(format, color_enabled);

    let store_dir = match cli.store {
        Some(dir) => PathBuf::from(dir),
        None => config.store_dir()?,
    };
    let store = FileStore::new(store_dir);

    let registry = |store| Registry::with_store(store, config.extraction.clone());

    match cli.command {
        Command::Strip(args) => commands::execute_strip(args),
        Command::Extract(args) => {
            commands::execute_extract(args, store, &config.extraction, &formatter)
        }
        Command::Compile(args) => {
            commands::execute_compile(args, &mut registry(store)?, &formatter)
        }
        Command::List => commands::execute_list(&registry(store)?, &formatter),
        Command::Show(args) => commands::execute_show(args, &registry(store)?, &formatter),
        Command::Remove(args) => {
            commands::execute_remove(args, &mut registry(store)?, &formatter)
        }
    }
}
