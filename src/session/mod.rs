//! Interactive session
//!
//! Console I/O and the menu loop that drives it.

pub mod console;
pub mod handler;

pub use console::Console;
pub use handler::Session;
