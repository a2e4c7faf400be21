//! Catalog persistence
//!
//! Handles saving and loading the book catalog to/from a JSON file.
//! Uses atomic writes (write to temp file, then rename) so the catalog
//! file is never left in a partially-written state.
//!
//! The file is a pretty-printed JSON array, one object per book. A missing
//! file on load is a normal first-run condition; a present but malformed
//! file is a fatal error and nothing is loaded from it.

use std::collections::HashSet;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::Path;

use tracing::debug;

use crate::catalog::Catalog;
use crate::config::Config;
use crate::models::Book;
use crate::storage::error::{StorageError, StorageResult};

/// Persistence layer for the book catalog
///
/// The default destination comes from the configuration
/// (`Config::catalog_path`); `save_to`/`load_from` take explicit paths for
/// import and export.
pub struct LibraryPersistence {
    config: Config,
}

impl LibraryPersistence {
    /// Create a new persistence handler with the given configuration
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Check if a catalog file exists at the default destination
    pub fn exists(&self) -> bool {
        self.config.catalog_path().exists()
    }

    /// Save the catalog to the default destination
    pub fn save(&self, catalog: &Catalog) -> StorageResult<()> {
        self.save_to(catalog, &self.config.catalog_path())
    }

    /// Save the catalog to an explicit path using an atomic write
    ///
    /// The destination is overwritten in full.
    pub fn save_to(&self, catalog: &Catalog, path: &Path) -> StorageResult<()> {
        let books = catalog.list();
        let json = serde_json::to_string_pretty(&books)?;

        atomic_write(path, json.as_bytes())?;
        debug!("saved {} book(s) to {}", books.len(), path.display());
        Ok(())
    }

    /// Load the default destination into the catalog
    ///
    /// Replaces the catalog's contents wholesale when the file exists,
    /// preserving on-disk order. A missing file leaves the catalog as it
    /// was and returns `Ok(false)`.
    pub fn load_into(&self, catalog: &mut Catalog) -> StorageResult<bool> {
        match self.load_from(&self.config.catalog_path())? {
            Some(books) => {
                catalog.replace_all(books);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Load books from an explicit path
    ///
    /// Returns `Ok(None)` if the file doesn't exist. Returns an error if
    /// the file exists but is not a valid catalog: unparseable JSON,
    /// entries missing required fields, or duplicate ISBNs.
    pub fn load_from(&self, path: &Path) -> StorageResult<Option<Vec<Book>>> {
        if !path.exists() {
            debug!("no catalog file at {}, starting empty", path.display());
            return Ok(None);
        }

        let content = fs::read_to_string(path).map_err(|e| match e.kind() {
            io::ErrorKind::PermissionDenied => StorageError::PermissionDenied {
                path: path.to_path_buf(),
                source: e,
            },
            _ => StorageError::ReadError {
                path: path.to_path_buf(),
                source: e,
            },
        })?;

        let books: Vec<Book> =
            serde_json::from_str(&content).map_err(|e| StorageError::InvalidFormat {
                path: path.to_path_buf(),
                details: e.to_string(),
            })?;

        validate_unique_isbns(&books, path)?;

        debug!("loaded {} book(s) from {}", books.len(), path.display());
        Ok(Some(books))
    }
}

/// Reject book lists that would violate the catalog's uniqueness invariant
fn validate_unique_isbns(books: &[Book], path: &Path) -> StorageResult<()> {
    let mut seen = HashSet::new();
    for book in books {
        if !seen.insert(book.isbn.as_str()) {
            return Err(StorageError::InvalidFormat {
                path: path.to_path_buf(),
                details: format!("duplicate ISBN '{}'", book.isbn),
            });
        }
    }
    Ok(())
}

/// Write data to a file atomically
///
/// 1. Write to a temporary file in the same directory
/// 2. Sync the file to disk
/// 3. Rename the temp file to the target path
fn atomic_write(path: &Path, data: &[u8]) -> StorageResult<()> {
    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| StorageError::CreateDirectory {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }
    }

    // Temp file in the same directory, so the rename stays on one filesystem
    let temp_path = path.with_extension("tmp");

    let mut file = File::create(&temp_path)
        .map_err(|e| StorageError::from_io(e, temp_path.clone()))?;

    file.write_all(data)
        .map_err(|e| StorageError::from_io(e, temp_path.clone()))?;

    file.sync_all()
        .map_err(|e| StorageError::from_io(e, temp_path.clone()))?;

    fs::rename(&temp_path, path).map_err(|e| StorageError::AtomicWriteFailed {
        from: temp_path,
        to: path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn test_config(temp_dir: &TempDir) -> Config {
        Config {
            data_dir: temp_dir.path().to_path_buf(),
            catalog_file: "books.json".to_string(),
        }
    }

    fn sample_catalog() -> Catalog {
        let mut catalog = Catalog::new();
        catalog.add(Book::new("1", "Dune", "Herbert").with_year(1965));
        catalog.add(Book::new("2", "The Hobbit", "Tolkien").with_year(1937));
        catalog.add(Book::new("3", "Hyperion", "Simmons"));
        catalog
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let persistence = LibraryPersistence::new(test_config(&temp_dir));

        let catalog = sample_catalog();
        persistence.save(&catalog).unwrap();
        assert!(persistence.exists());

        let mut loaded = Catalog::new();
        assert!(persistence.load_into(&mut loaded).unwrap());
        assert_eq!(loaded.list(), catalog.list());
    }

    #[test]
    fn test_load_missing_file_is_noop() {
        let temp_dir = TempDir::new().unwrap();
        let persistence = LibraryPersistence::new(test_config(&temp_dir));

        assert!(!persistence.exists());

        let mut catalog = sample_catalog();
        let before = catalog.list();
        assert!(!persistence.load_into(&mut catalog).unwrap());
        assert_eq!(catalog.list(), before);
    }

    #[test]
    fn test_load_replaces_contents() {
        let temp_dir = TempDir::new().unwrap();
        let persistence = LibraryPersistence::new(test_config(&temp_dir));

        persistence.save(&sample_catalog()).unwrap();

        // Pre-populate with something that should disappear
        let mut catalog = Catalog::new();
        catalog.add(Book::new("99", "Leftover", "Nobody"));

        persistence.load_into(&mut catalog).unwrap();
        assert_eq!(catalog.len(), 3);
        assert!(catalog.get_by_isbn("99").is_none());
    }

    #[test]
    fn test_load_malformed_json_fails() {
        let temp_dir = TempDir::new().unwrap();
        let config = test_config(&temp_dir);
        fs::write(config.catalog_path(), "not json at all").unwrap();

        let persistence = LibraryPersistence::new(config);
        let mut catalog = sample_catalog();
        let before = catalog.list();

        let err = persistence.load_into(&mut catalog).unwrap_err();
        assert!(matches!(err, StorageError::InvalidFormat { .. }));

        // Catalog untouched on failure
        assert_eq!(catalog.list(), before);
    }

    #[test]
    fn test_load_missing_required_field_fails() {
        let temp_dir = TempDir::new().unwrap();
        let config = test_config(&temp_dir);
        fs::write(
            config.catalog_path(),
            r#"[{"isbn": "1", "title": "Dune"}]"#,
        )
        .unwrap();

        let persistence = LibraryPersistence::new(config);
        let err = persistence.load_into(&mut Catalog::new()).unwrap_err();
        assert!(matches!(err, StorageError::InvalidFormat { .. }));
    }

    #[test]
    fn test_load_duplicate_isbn_fails() {
        let temp_dir = TempDir::new().unwrap();
        let config = test_config(&temp_dir);
        fs::write(
            config.catalog_path(),
            r#"[
                {"isbn": "1", "title": "Dune", "author": "Herbert"},
                {"isbn": "1", "title": "Dune Again", "author": "Herbert"}
            ]"#,
        )
        .unwrap();

        let persistence = LibraryPersistence::new(config);
        let err = persistence.load_into(&mut Catalog::new()).unwrap_err();
        match err {
            StorageError::InvalidFormat { details, .. } => {
                assert!(details.contains("duplicate ISBN"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_save_overwrites_in_full() {
        let temp_dir = TempDir::new().unwrap();
        let persistence = LibraryPersistence::new(test_config(&temp_dir));

        persistence.save(&sample_catalog()).unwrap();

        let mut smaller = Catalog::new();
        smaller.add(Book::new("7", "Solaris", "Lem"));
        persistence.save(&smaller).unwrap();

        let mut loaded = Catalog::new();
        persistence.load_into(&mut loaded).unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded.list()[0].isbn, "7");
    }

    #[test]
    fn test_save_is_human_readable() {
        let temp_dir = TempDir::new().unwrap();
        let config = test_config(&temp_dir);
        let persistence = LibraryPersistence::new(config.clone());

        persistence.save(&sample_catalog()).unwrap();

        let content = fs::read_to_string(config.catalog_path()).unwrap();
        // Pretty-printed: one field per line, indented
        assert!(content.starts_with('['));
        assert!(content.contains("\n  "));
        assert!(content.contains("\"isbn\": \"1\""));
    }

    #[test]
    fn test_save_empty_catalog() {
        let temp_dir = TempDir::new().unwrap();
        let persistence = LibraryPersistence::new(test_config(&temp_dir));

        persistence.save(&Catalog::new()).unwrap();

        let loaded = persistence
            .load_from(&persistence.config().catalog_path())
            .unwrap()
            .unwrap();
        assert!(loaded.is_empty());
    }

    #[test]
    fn test_save_to_explicit_path() {
        let temp_dir = TempDir::new().unwrap();
        let persistence = LibraryPersistence::new(test_config(&temp_dir));
        let export_path = temp_dir.path().join("export").join("out.json");

        persistence.save_to(&sample_catalog(), &export_path).unwrap();

        // Default destination untouched
        assert!(!persistence.exists());

        let books = persistence.load_from(&export_path).unwrap().unwrap();
        assert_eq!(books.len(), 3);
    }

    #[test]
    fn test_atomic_write_creates_parent_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let nested_path = temp_dir
            .path()
            .join("a")
            .join("b")
            .join("file.json");

        atomic_write(&nested_path, b"[]").unwrap();

        assert!(nested_path.exists());
        assert_eq!(fs::read_to_string(&nested_path).unwrap(), "[]");
    }

    #[test]
    fn test_atomic_write_leaves_no_temp_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("books.json");

        atomic_write(&path, b"[]").unwrap();

        assert!(!path.with_extension("tmp").exists());
    }
}
