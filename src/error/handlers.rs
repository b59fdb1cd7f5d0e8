//! Error handlers
//!
//! Logs failures and turns them into the text printed by the menu loop.

use crate::error::types::{FileManagerError, SessionError};
use log::{error, warn};

/// Printed whenever Ctrl-C interrupts a prompt.
pub const INTERRUPT_HINT: &str = "\nInterrupted. Type 0 to exit or press Enter to continue.";

/// Handle a file manager error
pub fn handle_error(err: &FileManagerError) {
    match err {
        FileManagerError::Storage(e) if e.is_soft() => warn!("Operation declined: {}", e),
        FileManagerError::Session(SessionError::Interrupted) => warn!("Operation interrupted"),
        _ => error!("File manager error: {}", err),
    }
}

/// Convert an error to the message shown to the user
pub fn error_to_message(err: &FileManagerError) -> String {
    match err {
        FileManagerError::Storage(e) if e.is_soft() => e.to_string(),
        FileManagerError::Storage(e) => format!("Error: {}", e),
        FileManagerError::Session(SessionError::Interrupted) => INTERRUPT_HINT.to_string(),
        FileManagerError::Session(e) => format!("Error: {}", e),
        FileManagerError::Config(e) => format!("Error: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StorageError;
    use std::io;
    use std::path::PathBuf;

    #[test]
    fn soft_errors_have_no_prefix() {
        let err = FileManagerError::from(StorageError::NotFound(PathBuf::from("/nope")));
        assert_eq!(error_to_message(&err), "Path does not exist.");

        let err = FileManagerError::from(StorageError::Aborted);
        assert_eq!(error_to_message(&err), "Aborted.");
    }

    #[test]
    fn platform_errors_are_prefixed() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let err = FileManagerError::from(StorageError::from(io_err));
        assert_eq!(error_to_message(&err), "Error: denied");
    }

    #[test]
    fn interrupt_prints_hint() {
        let err = FileManagerError::from(SessionError::Interrupted);
        assert_eq!(error_to_message(&err), INTERRUPT_HINT);
    }
}
