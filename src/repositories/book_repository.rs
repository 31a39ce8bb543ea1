// src/repositories/book_repository.rs
//
// Book persistence - whole-collection JSON file

use log::debug;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::Book;
use crate::error::AppResult;

/// Whole-collection store: read everything, overwrite everything
#[cfg_attr(test, mockall::automock)]
pub trait BookRepository: Send + Sync {
    fn load_all(&self) -> AppResult<Vec<Book>>;
    fn save_all(&self, books: &[Book]) -> AppResult<()>;
}

pub struct JsonFileBookRepository {
    path: PathBuf,
}

impl JsonFileBookRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create an empty store if the file is missing (idempotent)
    /// Returns true when a new file was written
    pub fn initialize(&self) -> AppResult<bool> {
        if self.path.exists() {
            return Ok(false);
        }

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        self.save_all(&[])?;
        debug!("Initialized empty book store at {}", self.path.display());
        Ok(true)
    }

    /// Four-space indented JSON, non-ASCII text kept verbatim
    fn encode(books: &[Book]) -> AppResult<Vec<u8>> {
        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        books.serialize(&mut serializer)?;
        Ok(buf)
    }
}

impl BookRepository for JsonFileBookRepository {
    fn load_all(&self) -> AppResult<Vec<Book>> {
        let content = fs::read_to_string(&self.path)?;
        let books: Vec<Book> = serde_json::from_str(&content)?;
        debug!("Loaded {} books from {}", books.len(), self.path.display());
        Ok(books)
    }

    fn save_all(&self, books: &[Book]) -> AppResult<()> {
        let encoded = Self::encode(books)?;
        fs::write(&self.path, encoded)?;
        debug!("Saved {} books to {}", books.len(), self.path.display());
        Ok(())
    }
}
