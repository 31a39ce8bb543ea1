// src/application/commands/book_commands.rs
//
// Book Command Handlers
//
// RULES:
// - Accept raw console text
// - Call the catalog service
// - Return a CommandOutcome
// - Never contain business logic

use crate::application::{
    error_handling::IntoOutcome, outcome::CommandOutcome, state::AppState,
};
use crate::error::AppResult;

/// List all books
pub fn list_books(state: &AppState) -> AppResult<CommandOutcome> {
    state.catalog.list_all().into_outcome(CommandOutcome::BookList)
}

/// Search titles, authors and years
pub fn find_books(state: &AppState, query: &str) -> AppResult<CommandOutcome> {
    state
        .catalog
        .search(query)
        .into_outcome(CommandOutcome::SearchResults)
}

/// Add a new book
pub fn add_book(
    state: &mut AppState,
    title: &str,
    author: &str,
    year: &str,
) -> AppResult<CommandOutcome> {
    state
        .catalog
        .add(title, author, year)
        .into_outcome(CommandOutcome::BookAdded)
}

/// Delete a book by id text
pub fn delete_book(state: &mut AppState, book_id: &str) -> AppResult<CommandOutcome> {
    state
        .catalog
        .delete(book_id)
        .into_outcome(CommandOutcome::BookDeleted)
}

/// Change the status of a book
pub fn change_book_status(
    state: &mut AppState,
    book_id: &str,
    new_status: &str,
) -> AppResult<CommandOutcome> {
    state
        .catalog
        .change_status(book_id, new_status)
        .into_outcome(CommandOutcome::StatusChanged)
}
