use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::invariants::{normalize_author, validate_title, validate_year};
use crate::domain::{DomainResult, ValidationError};

/// Represents one book in the catalog
/// Fields are private: every assignment goes through a validating setter,
/// so a Book that exists is always well-formed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BookRecord", into = "BookRecord")]
pub struct Book {
    /// Catalog-assigned identifier, immutable
    id: u64,

    title: String,

    /// Author name or the "unknown" sentinel
    author: String,

    /// Digit string or the "unknown" sentinel
    year: String,

    status: BookStatus,
}

/// Plain structured view of a Book, exactly as stored on disk
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BookRecord {
    pub book_id: u64,
    pub title: String,
    pub author: String,
    pub year: String,
    #[serde(default = "default_status")]
    pub status: String,
}

/// Availability of a book
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BookStatus {
    #[default]
    Available,
    CheckedOut,
}

fn default_status() -> String {
    BookStatus::Available.as_str().to_string()
}

impl Book {
    /// Create a new available Book
    pub fn new(id: u64, title: &str, author: &str, year: &str) -> DomainResult<Self> {
        Self::with_status(id, title, author, year, BookStatus::Available.as_str())
    }

    /// Create a Book with an explicit status text
    /// This is the only way to construct a valid Book
    pub fn with_status(
        id: u64,
        title: &str,
        author: &str,
        year: &str,
        status: &str,
    ) -> DomainResult<Self> {
        Ok(Self {
            id,
            title: validate_title(title)?,
            author: normalize_author(author),
            year: validate_year(year)?,
            status: status.parse()?,
        })
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn year(&self) -> &str {
        &self.year
    }

    pub fn status(&self) -> BookStatus {
        self.status
    }

    pub fn set_title(&mut self, title: &str) -> DomainResult<()> {
        self.title = validate_title(title)?;
        Ok(())
    }

    /// Empty author is replaced by the sentinel, never rejected
    pub fn set_author(&mut self, author: &str) {
        self.author = normalize_author(author);
    }

    pub fn set_year(&mut self, year: &str) -> DomainResult<()> {
        self.year = validate_year(year)?;
        Ok(())
    }

    /// Status text is matched case-insensitively and stored canonically
    pub fn set_status(&mut self, status: &str) -> DomainResult<()> {
        self.status = status.parse()?;
        Ok(())
    }

    pub fn to_record(&self) -> BookRecord {
        BookRecord {
            book_id: self.id,
            title: self.title.clone(),
            author: self.author.clone(),
            year: self.year.clone(),
            status: self.status.to_string(),
        }
    }
}

impl TryFrom<BookRecord> for Book {
    type Error = ValidationError;

    fn try_from(record: BookRecord) -> Result<Self, Self::Error> {
        Self::with_status(
            record.book_id,
            &record.title,
            &record.author,
            &record.year,
            &record.status,
        )
    }
}

impl From<Book> for BookRecord {
    fn from(book: Book) -> Self {
        BookRecord {
            book_id: book.id,
            title: book.title,
            author: book.author,
            year: book.year,
            status: book.status.to_string(),
        }
    }
}

impl BookStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookStatus::Available => "в наличии",
            BookStatus::CheckedOut => "выдана",
        }
    }
}

impl FromStr for BookStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.to_uppercase();
        [BookStatus::Available, BookStatus::CheckedOut]
            .into_iter()
            .find(|status| status.as_str().to_uppercase() == wanted)
            .ok_or(ValidationError::UnknownStatus)
    }
}

impl std::fmt::Display for Book {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "    Книга №{}: \"{}\", {}, {} г. ({})",
            self.id, self.title, self.author, self.year, self.status
        )
    }
}

impl std::fmt::Display for BookStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
