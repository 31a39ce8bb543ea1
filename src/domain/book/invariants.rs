use chrono::Datelike;

use crate::domain::{DomainResult, ValidationError};

/// Stored in place of an empty author
pub const UNKNOWN_AUTHOR: &str = "Автор не указан";

/// Stored in place of an empty publication year
pub const UNKNOWN_YEAR: &str = "Год не указан";

/// Current calendar year on the local clock
/// Read on every call, so the accepted year range grows over time
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

/// Title cannot be empty or blank
pub fn validate_title(title: &str) -> DomainResult<String> {
    if title.trim().is_empty() {
        return Err(ValidationError::EmptyTitle);
    }
    Ok(title.to_string())
}

/// Author is never rejected: a missing author becomes the sentinel
pub fn normalize_author(author: &str) -> String {
    if author.is_empty() {
        UNKNOWN_AUTHOR.to_string()
    } else {
        author.to_string()
    }
}

/// Year is either the sentinel or a digit string in [0, current year]
pub fn validate_year(year: &str) -> DomainResult<String> {
    validate_year_against(year, current_year())
}

fn validate_year_against(year: &str, current_year: i32) -> DomainResult<String> {
    if year.is_empty() || year == UNKNOWN_YEAR {
        return Ok(UNKNOWN_YEAR.to_string());
    }

    if !year.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::YearNotNumeric);
    }

    // Digit strings too long for u64 are far in the future
    let in_range = year
        .parse::<u64>()
        .map(|value| value <= current_year.max(0) as u64)
        .unwrap_or(false);

    if !in_range {
        return Err(ValidationError::YearOutOfRange { current_year });
    }

    Ok(year.to_string())
}

/// Invariants that must hold true for Book domain:
///
/// 1. Identity (book_id) is assigned by the catalog and never changes
/// 2. Title is never empty
/// 3. Author is never empty (sentinel when unknown)
/// 4. Year is the sentinel or a digit string within [0, current year]
/// 5. Status is always one of the two canonical values
/// 6. A rejected assignment leaves the book untouched

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_title() {
        assert_eq!(validate_title("Мастер и Маргарита").unwrap(), "Мастер и Маргарита");
    }

    #[test]
    fn test_empty_title_fails() {
        assert_eq!(validate_title(""), Err(ValidationError::EmptyTitle));
        assert_eq!(validate_title("   "), Err(ValidationError::EmptyTitle));
    }

    #[test]
    fn test_empty_author_becomes_sentinel() {
        assert_eq!(normalize_author(""), UNKNOWN_AUTHOR);
        assert_eq!(normalize_author("Булгаков"), "Булгаков");
    }

    #[test]
    fn test_whitespace_author_is_kept() {
        assert_eq!(normalize_author("   "), "   ");
        assert_eq!(normalize_author(" "), " ");
    }

    #[test]
    fn test_empty_year_becomes_sentinel() {
        assert_eq!(validate_year("").unwrap(), UNKNOWN_YEAR);
        assert_eq!(validate_year(UNKNOWN_YEAR).unwrap(), UNKNOWN_YEAR);
    }

    #[test]
    fn test_non_numeric_year_fails() {
        assert_eq!(validate_year("20xx"), Err(ValidationError::YearNotNumeric));
        assert_eq!(validate_year("-5"), Err(ValidationError::YearNotNumeric));
        assert_eq!(validate_year("１９９９"), Err(ValidationError::YearNotNumeric));
    }

    #[test]
    fn test_year_bounds_are_inclusive() {
        assert_eq!(validate_year_against("0", 2030).unwrap(), "0");
        assert_eq!(validate_year_against("2030", 2030).unwrap(), "2030");
        assert_eq!(
            validate_year_against("2031", 2030),
            Err(ValidationError::YearOutOfRange { current_year: 2030 })
        );
    }

    #[test]
    fn test_huge_year_is_out_of_range() {
        assert_eq!(
            validate_year_against("99999999999999999999999", 2030),
            Err(ValidationError::YearOutOfRange { current_year: 2030 })
        );
    }

    #[test]
    fn test_next_year_fails_with_range_message() {
        let year = current_year();
        let err = validate_year(&(year + 1).to_string()).unwrap_err();
        assert_eq!(
            err.to_string(),
            format!("ОШИБКА: Указан некорректный год! Можно указать годы от 0 до {}", year)
        );
    }

    #[test]
    fn test_leading_zeros_are_kept() {
        assert_eq!(validate_year("0042").unwrap(), "0042");
    }
}
