//! Import and export command handlers

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};

use shelf_core::{Catalog, LibraryPersistence};

use crate::output::Output;

/// Import books from a JSON file, replacing the catalog
///
/// The imported contents replace the catalog wholesale and are persisted
/// to the default destination. A nonexistent source file is an error here,
/// even though the persistence layer treats a missing default catalog as a
/// normal first run.
pub fn import(
    catalog: &mut Catalog,
    persistence: &LibraryPersistence,
    file: PathBuf,
    output: &Output,
) -> Result<ExitCode> {
    let books = persistence
        .load_from(&file)
        .with_context(|| format!("Failed to import from {}", file.display()))?;

    let Some(books) = books else {
        bail!("Import file not found: {}", file.display());
    };

    let count = books.len();
    catalog.replace_all(books);

    persistence.save(catalog).context("Failed to save catalog")?;

    output.success(&format!("Imported {} book(s) from {}", count, file.display()));
    Ok(ExitCode::SUCCESS)
}

/// Export books to a JSON file
///
/// Writes the catalog to the given path; the default destination is not
/// touched.
pub fn export(
    catalog: &Catalog,
    persistence: &LibraryPersistence,
    file: PathBuf,
    output: &Output,
) -> Result<ExitCode> {
    persistence
        .save_to(catalog, &file)
        .with_context(|| format!("Failed to export to {}", file.display()))?;

    output.success(&format!(
        "Exported {} book(s) to {}",
        catalog.len(),
        file.display()
    ));
    Ok(ExitCode::SUCCESS)
}
