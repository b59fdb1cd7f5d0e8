//! File system storage management
//!
//! Handles path resolution, file operations and glob search.

pub mod filesystem;
pub mod operations;
pub mod paths;
pub mod results;
pub mod search;

// Re-export commonly used path helpers
pub use paths::{landing_path, resolve_path};
