//! Storage layer
//!
//! Handles catalog persistence as a JSON file with atomic overwrite.
//! A load fully replaces the in-memory catalog; a save fully overwrites
//! the destination file.

pub mod error;
pub mod persistence;

pub use error::{StorageError, StorageResult};
pub use persistence::LibraryPersistence;
