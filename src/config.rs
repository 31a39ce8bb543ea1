// src/config.rs
//
// Runtime configuration
//
// Store path precedence:
// 1. --database flag
// 2. BOOKSHELF_DATABASE environment variable (read by clap)
// 3. {APP_DATA}/bookshelf/database.json

use std::path::PathBuf;

use crate::error::{AppError, AppResult};

/// Environment variable naming the store file
pub const DATABASE_ENV: &str = "BOOKSHELF_DATABASE";

pub const DATABASE_FILE_NAME: &str = "database.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub database_path: PathBuf,

    /// Create an empty store when the file is missing
    pub initialize_store: bool,
}

impl AppConfig {
    pub fn resolve(database_path: Option<PathBuf>, initialize_store: bool) -> AppResult<Self> {
        let database_path = match database_path {
            Some(path) => path,
            None => default_database_path()?,
        };

        Ok(Self {
            database_path,
            initialize_store,
        })
    }
}

/// Get the default store path
///
/// Path structure: {APP_DATA}/bookshelf/database.json
/// The directory itself is created when the store is initialized.
pub fn default_database_path() -> AppResult<PathBuf> {
    let app_data_dir = dirs::data_dir()
        .ok_or_else(|| AppError::Other("Could not determine app data directory".to_string()))?;

    Ok(app_data_dir.join("bookshelf").join(DATABASE_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_path_wins() {
        let config = AppConfig::resolve(Some(PathBuf::from("/tmp/books.json")), false).unwrap();
        assert_eq!(config.database_path, PathBuf::from("/tmp/books.json"));
        assert!(!config.initialize_store);
    }

    #[test]
    fn test_default_path_layout() {
        if let Ok(path) = default_database_path() {
            assert!(path.ends_with("bookshelf/database.json"));
        }
    }
}
