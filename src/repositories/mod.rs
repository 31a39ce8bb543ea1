// src/repositories/mod.rs
//
// Repository layer
//
// CRITICAL RULES:
// - Repositories are DUMB data mappers
// - NO business logic
// - NO id assignment
// - Invariants are enforced by Book deserialization, not here

pub mod book_repository;

pub use book_repository::{BookRepository, JsonFileBookRepository};

#[cfg(test)]
pub use book_repository::MockBookRepository;
