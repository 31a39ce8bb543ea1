// src/services/catalog_service.rs
use log::{debug, info, warn};
use std::collections::HashSet;
use std::sync::Arc;

use crate::domain::Book;
use crate::error::{AppError, AppResult};
use crate::repositories::BookRepository;

/// Books matched by each searchable field, in catalog order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchResults {
    pub by_title: Vec<Book>,
    pub by_author: Vec<Book>,
    pub by_year: Vec<Book>,
}

impl SearchResults {
    pub fn is_empty(&self) -> bool {
        self.by_title.is_empty() && self.by_author.is_empty() && self.by_year.is_empty()
    }
}

/// Owns the in-memory book list and keeps the store in sync with it.
/// Every successful mutation rewrites the whole store before returning.
pub struct CatalogService {
    repository: Arc<dyn BookRepository>,
    books: Vec<Book>,
}

impl CatalogService {
    /// Load the whole collection; a malformed store aborts the load
    pub fn load(repository: Arc<dyn BookRepository>) -> AppResult<Self> {
        let books = repository.load_all()?;

        let mut seen = HashSet::with_capacity(books.len());
        if let Some(duplicate) = books.iter().map(Book::id).find(|id| !seen.insert(*id)) {
            return Err(AppError::DuplicateId(duplicate));
        }

        debug!("Catalog loaded with {} books", books.len());
        Ok(Self { repository, books })
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn list_all(&self) -> AppResult<Vec<Book>> {
        if self.books.is_empty() {
            return Err(AppError::EmptyCatalog);
        }
        Ok(self.books.clone())
    }

    pub fn search(&self, query: &str) -> AppResult<SearchResults> {
        let needle = query.to_uppercase();
        let matching = |field: fn(&Book) -> &str| -> Vec<Book> {
            self.books
                .iter()
                .filter(|book| field(book).to_uppercase().contains(&needle))
                .cloned()
                .collect()
        };

        let results = SearchResults {
            by_title: matching(Book::title),
            by_author: matching(Book::author),
            by_year: matching(Book::year),
        };

        if results.is_empty() {
            debug!("No books match {:?}", query);
            return Err(AppError::NoMatches);
        }
        Ok(results)
    }

    pub fn add(&mut self, title: &str, author: &str, year: &str) -> AppResult<Book> {
        let book = Book::new(self.next_id()?, title, author, year).map_err(|e| {
            warn!("Rejected new book: {}", e);
            AppError::from(e)
        })?;

        self.books.push(book.clone());
        self.persist()?;

        info!("Added book {}", book.id());
        Ok(book)
    }

    pub fn delete(&mut self, id_text: &str) -> AppResult<Book> {
        let index = self.position_of(id_text)?;
        let book = self.books.remove(index);
        self.persist()?;

        info!("Deleted book {}", book.id());
        Ok(book)
    }

    pub fn change_status(&mut self, id_text: &str, new_status: &str) -> AppResult<Book> {
        let index = self.position_of(id_text)?;
        let book = &mut self.books[index];

        // Compared against the raw input, before normalization
        if book.status().as_str() == new_status {
            return Err(AppError::StatusUnchanged(new_status.to_string()));
        }

        book.set_status(new_status).map_err(|e| {
            warn!("Rejected status change for book {}: {}", book.id(), e);
            AppError::from(e)
        })?;
        let changed = book.clone();
        self.persist()?;

        info!("Book {} is now '{}'", changed.id(), changed.status());
        Ok(changed)
    }

    /// Overwrite the store with the current collection
    pub fn persist(&self) -> AppResult<()> {
        self.repository.save_all(&self.books)
    }

    /// One past the highest id in use, or 1 for an empty catalog
    fn next_id(&self) -> AppResult<u64> {
        match self.books.iter().map(Book::id).max() {
            None => Ok(1),
            Some(max) => max.checked_add(1).ok_or_else(|| {
                warn!("Cannot allocate an id after {}", max);
                AppError::IdSpaceExhausted
            }),
        }
    }

    fn position_of(&self, id_text: &str) -> AppResult<usize> {
        if id_text.is_empty() || !id_text.bytes().all(|b| b.is_ascii_digit()) {
            return Err(AppError::InvalidId(id_text.to_string()));
        }

        // A digit string too large for u64 cannot name an existing book
        let found = id_text
            .parse::<u64>()
            .ok()
            .and_then(|id| self.books.iter().position(|book| book.id() == id));

        found.ok_or_else(|| AppError::NotFound(id_text.to_string()))
    }
}
