//! shelf CLI
//!
//! Command-line interface for shelf - personal book catalog management.
//!
//! Each invocation loads the catalog from the configured destination,
//! performs one operation, and saves the catalog back if the operation
//! mutated it.
//!
//! Exit status: 0 on success or a nothing-found outcome, 1 when a mutation
//! is rejected (duplicate ISBN on add, unknown ISBN on remove), 2 on fatal
//! errors (malformed catalog file, I/O failure, bad usage).

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use shelf_core::{Catalog, Config, LibraryPersistence, StorageError};

mod commands;
mod output;

use output::{Output, OutputFormat};

#[derive(Parser)]
#[command(name = "shelf")]
#[command(about = "shelf - personal book catalog management")]
#[command(version)]
#[command(propagate_version = true)]
struct Cli {
    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Quiet mode - minimal output
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a book to the catalog
    Add {
        /// Unique identifier (ISBN)
        #[arg(long)]
        isbn: String,
        /// Book title
        #[arg(long)]
        title: String,
        /// Author name
        #[arg(long)]
        author: String,
        /// Publication year
        #[arg(long)]
        year: Option<i32>,
    },
    /// Remove a book by ISBN
    #[command(alias = "rm")]
    Remove {
        /// ISBN of the book to remove
        isbn: String,
    },
    /// List all books
    #[command(alias = "ls")]
    List,
    /// Find books by title query
    Find {
        /// Title query substring (case-insensitive)
        query: String,
    },
    /// Show a single book
    Show {
        /// ISBN of the book to show
        isbn: String,
    },
    /// Import books from a JSON file, replacing the catalog
    Import {
        /// Path to the JSON file to import
        file: PathBuf,
    },
    /// Export books to a JSON file
    Export {
        /// Path to write the JSON file to
        file: PathBuf,
    },
    /// Show or set configuration
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },
}

#[derive(Subcommand, Clone)]
enum ConfigCommands {
    /// Show current configuration
    Show,
    /// Set a configuration value
    Set {
        /// Configuration key (data_dir, catalog_file)
        key: String,
        /// Configuration value
        value: String,
    },
}

fn main() -> ExitCode {
    init_tracing();

    let cli = Cli::parse();
    let output = Output::new(OutputFormat::from_flags(cli.json, cli.quiet));

    match run(cli, &output) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            if let Some(hint) = err
                .chain()
                .find_map(|cause| cause.downcast_ref::<StorageError>())
                .and_then(StorageError::recovery_suggestion)
            {
                eprintln!("{}", hint);
            }
            ExitCode::from(2)
        }
    }
}

fn run(cli: Cli, output: &Output) -> Result<ExitCode> {
    // Config commands don't need the catalog
    if let Commands::Config { command } = &cli.command {
        return handle_config_command(command.clone(), output).map(|_| ExitCode::SUCCESS);
    }

    let config = Config::load().context("Failed to load configuration")?;
    let persistence = LibraryPersistence::new(config);

    let mut catalog = Catalog::new();
    persistence
        .load_into(&mut catalog)
        .context("Failed to load catalog")?;
    tracing::debug!("catalog loaded with {} book(s)", catalog.len());

    match cli.command {
        Commands::Add {
            isbn,
            title,
            author,
            year,
        } => commands::book::add(&mut catalog, &persistence, isbn, title, author, year, output),
        Commands::Remove { isbn } => commands::book::remove(&mut catalog, &persistence, isbn, output),
        Commands::List => commands::book::list(&catalog, output),
        Commands::Find { query } => commands::book::find(&catalog, query, output),
        Commands::Show { isbn } => commands::book::show(&catalog, isbn, output),
        Commands::Import { file } => {
            commands::transfer::import(&mut catalog, &persistence, file, output)
        }
        Commands::Export { file } => commands::transfer::export(&catalog, &persistence, file, output),
        Commands::Config { .. } => unreachable!(), // Handled above
    }
}

fn handle_config_command(command: Option<ConfigCommands>, output: &Output) -> Result<()> {
    match command {
        Some(ConfigCommands::Show) | None => commands::config::show(output),
        Some(ConfigCommands::Set { key, value }) => commands::config::set(key, value, output),
    }
}

/// Initialize logging to stderr, filtered by the SHELF_LOG env var
fn init_tracing() {
    let env_filter = EnvFilter::try_from_env("SHELF_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .try_init();
}
