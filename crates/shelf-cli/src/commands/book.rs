//! Book command handlers
//!
//! Each handler returns the process exit code: rejected mutations map to
//! exit 1, nothing-found lookups stay at 0, fatal errors propagate as
//! `anyhow::Error` and are mapped to exit 2 in `main`.

use std::process::ExitCode;

use anyhow::{Context, Result};

use shelf_core::{Book, Catalog, LibraryPersistence};

use crate::output::Output;

/// Add a book to the catalog
pub fn add(
    catalog: &mut Catalog,
    persistence: &LibraryPersistence,
    isbn: String,
    title: String,
    author: String,
    year: Option<i32>,
    output: &Output,
) -> Result<ExitCode> {
    let mut book = Book::new(isbn, title, author);
    if let Some(year) = year {
        book = book.with_year(year);
    }

    if !catalog.add(book.clone()) {
        output.message(&format!("Book with ISBN {} already exists.", book.isbn));
        return Ok(ExitCode::from(1));
    }

    persistence.save(catalog).context("Failed to save catalog")?;

    output.success(&format!("Added: {}", book));
    Ok(ExitCode::SUCCESS)
}

/// Remove a book by ISBN
pub fn remove(
    catalog: &mut Catalog,
    persistence: &LibraryPersistence,
    isbn: String,
    output: &Output,
) -> Result<ExitCode> {
    if !catalog.remove_by_isbn(&isbn) {
        output.message(&format!("No book found with ISBN {}.", isbn));
        return Ok(ExitCode::from(1));
    }

    persistence.save(catalog).context("Failed to save catalog")?;

    output.success(&format!("Removed book with ISBN {}", isbn));
    Ok(ExitCode::SUCCESS)
}

/// List all books
pub fn list(catalog: &Catalog, output: &Output) -> Result<ExitCode> {
    output.print_books(&catalog.list());
    Ok(ExitCode::SUCCESS)
}

/// Find books by title query
pub fn find(catalog: &Catalog, query: String, output: &Output) -> Result<ExitCode> {
    output.print_books(&catalog.find_by_title(&query));
    Ok(ExitCode::SUCCESS)
}

/// Show a single book
pub fn show(catalog: &Catalog, isbn: String, output: &Output) -> Result<ExitCode> {
    match catalog.get_by_isbn(&isbn) {
        Some(book) => output.print_book(book),
        None => output.message(&format!("No book found with ISBN {}.", isbn)),
    }
    Ok(ExitCode::SUCCESS)
}
