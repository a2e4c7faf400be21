//! Shelf Core Library
//!
//! This crate provides the core functionality for shelf, a personal book
//! catalog managed from the command line.
//!
//! # Architecture
//!
//! - **Catalog**: the in-memory, insertion-ordered collection of books,
//!   unique by ISBN
//! - **LibraryPersistence**: JSON file persistence with atomic overwrite
//!
//! All queries are served directly from the in-memory catalog; each CLI
//! invocation loads the catalog, performs one operation, and saves it back
//! if the operation mutated anything.
//!
//! # Quick Start
//!
//! ```text
//! let config = Config::load()?;
//! let persistence = LibraryPersistence::new(config);
//!
//! let mut catalog = Catalog::new();
//! persistence.load_into(&mut catalog)?;
//!
//! catalog.add(Book::new("978-0441013593", "Dune", "Frank Herbert"));
//! persistence.save(&catalog)?;
//! ```
//!
//! # Modules
//!
//! - `catalog`: the in-memory record store (main entry point)
//! - `models`: the book record type
//! - `storage`: JSON persistence and storage errors
//! - `config`: application configuration

pub mod catalog;
pub mod config;
pub mod models;
pub mod storage;

pub use catalog::Catalog;
pub use config::Config;
pub use models::Book;
pub use storage::{LibraryPersistence, StorageError, StorageResult};
