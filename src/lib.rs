//! filemgr - an interactive, menu-driven file manager
//!
//! Lists, inspects, creates, reads, writes, appends, deletes, renames,
//! copies, moves and glob-searches filesystem entries from a numbered menu.

pub mod config;
pub mod error;
pub mod menu;
pub mod session;
pub mod storage;
pub mod utils;

pub use config::AppConfig;
pub use error::{FileManagerError, SessionError, StorageError};
pub use session::{Console, Session};
