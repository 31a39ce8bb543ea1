// src/services/mod.rs
//
// Services Module - Orchestration Layer

pub mod catalog_service;


pub use catalog_service::{CatalogService, SearchResults};
