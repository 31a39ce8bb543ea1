// src/cli/mod.rs
//
// Console Layer
//
// The ONLY place that knows about prompts, menus and printed text.
// Everything it shows comes from a CommandOutcome.

pub mod menu;
pub mod render;
pub mod session;

pub use menu::MenuCommand;
pub use render::render_outcome;
pub use session::Session;
