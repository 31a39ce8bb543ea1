// src/application/outcome.rs
//
// Tagged result handed to the console: a success payload or an error
// message, never both.

use crate::application::error_handling::ErrorResponse;
use crate::domain::Book;
use crate::services::SearchResults;

#[derive(Debug, Clone, PartialEq)]
pub enum CommandOutcome {
    BookList(Vec<Book>),
    SearchResults(SearchResults),
    BookAdded(Book),
    BookDeleted(Book),
    StatusChanged(Book),
    Failed(ErrorResponse),
}
