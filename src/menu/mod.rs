//! Menu implementation
//!
//! Handles menu choice parsing, per-command prompting, and response rendering.

pub mod commands;
pub mod handlers;
pub mod responses;

pub use commands::{CommandOutcome, MenuCommand, menu_text};
pub use handlers::handle_command;
pub use responses::render_outcome;
