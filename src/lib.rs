// src/lib.rs
// Bookshelf - console book catalog backed by a JSON file
//
// Architecture:
// - Domain-centric: Book owns its invariants, nothing bypasses the setters
// - Write-through: every successful mutation rewrites the whole store
// - Explicit: recoverable errors become tagged outcomes, storage errors are fatal
// - Console is a thin client of the application layer

// ============================================================================
// CORE
// ============================================================================

pub mod domain;
pub mod error;
pub mod repositories;
pub mod services;

// ============================================================================
// APPLICATION & CONSOLE
// ============================================================================

pub mod application;
pub mod cli;
pub mod config;

// ============================================================================
// PUBLIC API - Domain
// ============================================================================

pub use domain::{
    current_year, Book, BookRecord, BookStatus, DomainResult, ValidationError, UNKNOWN_AUTHOR,
    UNKNOWN_YEAR,
};

// ============================================================================
// PUBLIC API - Error Types
// ============================================================================

pub use error::{AppError, AppResult};

// ============================================================================
// PUBLIC API - Repositories & Services
// ============================================================================

pub use repositories::{BookRepository, JsonFileBookRepository};
pub use services::{CatalogService, SearchResults};

// ============================================================================
// PUBLIC API - Application Layer
// ============================================================================

pub use application::{AppState, CommandOutcome, ErrorResponse, ErrorType};
pub use config::AppConfig;
