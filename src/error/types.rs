// src/error/types.rs
use crate::domain::ValidationError;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("ОШИБКА: Некорректно введен id книги. Это должно быть целое число!")]
    InvalidId(String),

    #[error("Книга с id={0} не найдена.")]
    NotFound(String),

    #[error("Данная книга уже имеет статус '{0}'.")]
    StatusUnchanged(String),

    #[error("На данный момент в библиотеке нет книг.")]
    EmptyCatalog,

    #[error("Увы, совпадений не найдено.")]
    NoMatches,

    #[error("ОШИБКА: Невозможно добавить книгу: свободные id закончились!")]
    IdSpaceExhausted,

    #[error("Book id {0} appears more than once in the store")]
    DuplicateId(u64),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Other error: {0}")]
    Other(String),
}

impl AppError {
    /// Storage and environment failures end the session;
    /// everything else is reported back to the user
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            AppError::Serialization(_)
                | AppError::Io(_)
                | AppError::DuplicateId(_)
                | AppError::Other(_)
        )
    }
}

impl Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            AppError::NotFound("99".to_string()).to_string(),
            "Книга с id=99 не найдена."
        );
        assert_eq!(
            AppError::StatusUnchanged("выдана".to_string()).to_string(),
            "Данная книга уже имеет статус 'выдана'."
        );
        assert_eq!(
            AppError::from(ValidationError::EmptyTitle).to_string(),
            ValidationError::EmptyTitle.to_string()
        );
    }

    #[test]
    fn test_fatal_classification() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
        assert!(AppError::Io(io).is_fatal());
        assert!(!AppError::NoMatches.is_fatal());
        assert!(!AppError::IdSpaceExhausted.is_fatal());
        assert!(AppError::DuplicateId(1).is_fatal());
        assert!(!AppError::InvalidId("x".to_string()).is_fatal());
        assert!(!AppError::Validation(ValidationError::UnknownStatus).is_fatal());
    }

    #[test]
    fn test_serializes_as_message() {
        let json = serde_json::to_string(&AppError::EmptyCatalog).unwrap();
        assert_eq!(json, "\"На данный момент в библиотеке нет книг.\"");
    }
}
