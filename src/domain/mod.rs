// src/domain/mod.rs
//
// Domain Root - The Single Source of Truth for Domain API
//
// This file MUST declare all domain modules and re-export their public API.
// All other modules import from `crate::domain::*`

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod book;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

// Book Domain
pub use book::{
    current_year, Book, BookRecord, BookStatus, UNKNOWN_AUTHOR, UNKNOWN_YEAR,
};

// ============================================================================
// DOMAIN ERROR TYPES
// ============================================================================

use thiserror::Error;

/// Field-level validation errors
/// These represent violations of the Book invariants
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("ОШИБКА: Название книги не может быть пустой строкой!")]
    EmptyTitle,

    #[error("ОШИБКА: Год должен быть целым положительным числом!")]
    YearNotNumeric,

    #[error("ОШИБКА: Указан некорректный год! Можно указать годы от 0 до {current_year}")]
    YearOutOfRange { current_year: i32 },

    #[error("ОШИБКА: Возможно лишь два статуса: 'в наличии' или 'выдана'!")]
    UnknownStatus,
}

/// Domain result type
pub type DomainResult<T> = Result<T, ValidationError>;
