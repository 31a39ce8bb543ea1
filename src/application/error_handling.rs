// src/application/error_handling.rs
//
// Error Handling for Commands
//
// ARCHITECTURE:
// - Maps recoverable errors → user-facing responses
// - Fatal errors (storage, environment) are passed through untouched
// - The console only decides which message to print

use log::{error, warn};
use serde::{Deserialize, Serialize};

use crate::application::outcome::CommandOutcome;
use crate::error::{AppError, AppResult};

/// Standard error response for the console
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error_type: ErrorType,
    pub message: String,
}

/// Error categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorType {
    /// A field value broke a Book invariant
    Validation,

    /// Id text is not a number
    InvalidInput,

    NotFound,

    /// Requested status equals the current one
    NoOp,

    /// Catalog has no books
    Empty,

    NoMatches,

    /// No id left to assign
    Exhausted,

    /// Store read/write failed
    Storage,
}

impl ErrorResponse {
    /// Create error response from AppError
    pub fn from_app_error(error: &AppError) -> Self {
        let error_type = match error {
            AppError::Validation(_) => ErrorType::Validation,
            AppError::InvalidId(_) => ErrorType::InvalidInput,
            AppError::NotFound(_) => ErrorType::NotFound,
            AppError::StatusUnchanged(_) => ErrorType::NoOp,
            AppError::EmptyCatalog => ErrorType::Empty,
            AppError::NoMatches => ErrorType::NoMatches,
            AppError::IdSpaceExhausted => ErrorType::Exhausted,
            AppError::Serialization(_)
            | AppError::Io(_)
            | AppError::DuplicateId(_)
            | AppError::Other(_) => ErrorType::Storage,
        };

        Self {
            error_type,
            message: error.to_string(),
        }
    }
}

/// Helper trait to turn service results into console outcomes
pub trait IntoOutcome<T> {
    fn into_outcome(self, on_success: impl FnOnce(T) -> CommandOutcome)
        -> AppResult<CommandOutcome>;
}

impl<T> IntoOutcome<T> for AppResult<T> {
    fn into_outcome(
        self,
        on_success: impl FnOnce(T) -> CommandOutcome,
    ) -> AppResult<CommandOutcome> {
        match self {
            Ok(value) => Ok(on_success(value)),
            Err(e) if e.is_fatal() => {
                error!("Fatal error: {}", e);
                Err(e)
            }
            Err(e) => {
                warn!("Command rejected: {}", e);
                Ok(CommandOutcome::Failed(ErrorResponse::from_app_error(&e)))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ValidationError;

    #[test]
    fn test_not_found_error() {
        let error = ErrorResponse::from_app_error(&AppError::NotFound("4".to_string()));
        assert_eq!(error.error_type, ErrorType::NotFound);
        assert_eq!(error.message, "Книга с id=4 не найдена.");
    }

    #[test]
    fn test_validation_error() {
        let error = ErrorResponse::from_app_error(&AppError::from(ValidationError::UnknownStatus));
        assert_eq!(error.error_type, ErrorType::Validation);
        assert_eq!(
            error.message,
            "ОШИБКА: Возможно лишь два статуса: 'в наличии' или 'выдана'!"
        );
    }

    #[test]
    fn test_recoverable_error_becomes_failed_outcome() {
        let result: AppResult<()> = Err(AppError::NoMatches);
        match result.into_outcome(|_| unreachable!()).unwrap() {
            CommandOutcome::Failed(response) => {
                assert_eq!(response.error_type, ErrorType::NoMatches);
                assert_eq!(response.message, "Увы, совпадений не найдено.");
            }
            other => panic!("expected Failed, got {:?}", other),
        }
    }

    #[test]
    fn test_exhausted_ids_become_failed_outcome() {
        let result: AppResult<()> = Err(AppError::IdSpaceExhausted);
        match result.into_outcome(|_| unreachable!()).unwrap() {
            CommandOutcome::Failed(response) => {
                assert_eq!(response.error_type, ErrorType::Exhausted)
            }
            other => panic!("expected Failed, got {:?}", other),
        }
    }

    #[test]
    fn test_fatal_error_is_propagated() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "disk full");
        let result: AppResult<()> = Err(AppError::Io(io));
        assert!(result.into_outcome(|_| unreachable!()).is_err());
    }

    #[test]
    fn test_serialization() {
        let error = ErrorResponse::from_app_error(&AppError::EmptyCatalog);
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"empty\""));
        assert!(json.contains("На данный момент в библиотеке нет книг."));
    }
}
