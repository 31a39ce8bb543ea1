// src/application/commands/mod.rs
//
// Command Handlers
//
// ARCHITECTURE:
// - Commands are thin adapters between the console and the catalog
// - Commands accept raw text, return CommandOutcome
// - Commands NEVER contain business logic

pub mod book_commands;

pub use book_commands::*;
