//! Data models for shelf
//!
//! Defines the core data structure: a `Book` record keyed by ISBN.
//! The serde derives define the on-disk entry shape; entries missing a
//! required field fail deserialization, unknown fields are ignored.

use serde::{Deserialize, Serialize};

/// A book record in the catalog
///
/// Books are immutable value objects: to change one, remove it and add a
/// replacement. Only `isbn` participates in uniqueness and lookups.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Book {
    /// Unique identifier (ISBN-like string)
    pub isbn: String,
    /// Display title
    pub title: String,
    /// Author name
    pub author: String,
    /// Publication year, if known
    #[serde(default)]
    pub year: Option<i32>,
}

impl Book {
    /// Create a new book with no publication year
    pub fn new(
        isbn: impl Into<String>,
        title: impl Into<String>,
        author: impl Into<String>,
    ) -> Self {
        Self {
            isbn: isbn.into(),
            title: title.into(),
            author: author.into(),
            year: None,
        }
    }

    /// Set the publication year
    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }
}

impl std::fmt::Display for Book {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} — {} by {}", self.isbn, self.title, self.author)?;
        if let Some(year) = self.year {
            write!(f, " ({})", year)?;
        }
        Ok(())
    }
}
