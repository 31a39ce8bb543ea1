// src/application/state.rs

use crate::services::CatalogService;

/// Application state owned by the console session.
/// Single-threaded: commands borrow it directly, no locking.
pub struct AppState {
    pub catalog: CatalogService,
}

impl AppState {
    pub fn new(catalog: CatalogService) -> Self {
        Self { catalog }
    }
}
