pub mod entity;
pub mod invariants;

pub use entity::{Book, BookRecord, BookStatus};
pub use invariants::{
    current_year, normalize_author, validate_title, validate_year, UNKNOWN_AUTHOR, UNKNOWN_YEAR,
};
