// src/application/mod.rs
//
// Application Layer
//
// ARCHITECTURE:
// - Sits between the console and the catalog service
// - Exposes the six catalog operations as commands
// - Converts recoverable errors into tagged outcomes

pub mod commands;
pub mod error_handling;
pub mod outcome;
pub mod state;

pub use commands::*;
pub use error_handling::{ErrorResponse, ErrorType, IntoOutcome};
pub use outcome::CommandOutcome;
pub use state::AppState;
