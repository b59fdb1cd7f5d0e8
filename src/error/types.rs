//! Error types
//!
//! Defines domain-specific error types for the storage operations, the
//! interactive session, and the umbrella error the menu loop presents.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Storage module errors
///
/// The "soft" variants carry the exact sentence shown to the user; the rest
/// are unexpected platform failures rendered as `Error: <message>`.
#[derive(Debug)]
pub enum StorageError {
    NotFound(PathBuf),
    FileNotFound(PathBuf),
    SourceNotFound(PathBuf),
    DirectoryInTheWay(PathBuf),
    FileAlreadyExists(PathBuf),
    TargetExists(PathBuf),
    Aborted,
    InvalidPattern(String),
    IoError(io::Error),
}

impl StorageError {
    /// Not-found, conflict and declined outcomes are reported inline without
    /// the `Error:` prefix.
    pub fn is_soft(&self) -> bool {
        !matches!(
            self,
            StorageError::InvalidPattern(_) | StorageError::IoError(_)
        )
    }
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::NotFound(_) => write!(f, "Path does not exist."),
            StorageError::FileNotFound(_) => write!(f, "File does not exist."),
            StorageError::SourceNotFound(_) => write!(f, "Source does not exist."),
            StorageError::DirectoryInTheWay(_) => {
                write!(f, "A directory exists at that path. Choose a file path.")
            }
            StorageError::FileAlreadyExists(_) => {
                write!(f, "File already exists. Use write/append to update it.")
            }
            StorageError::TargetExists(p) => write!(f, "Target already exists: {}", p.display()),
            StorageError::Aborted => write!(f, "Aborted."),
            StorageError::InvalidPattern(msg) => write!(f, "Invalid glob pattern: {}", msg),
            StorageError::IoError(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StorageError::IoError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for StorageError {
    fn from(error: io::Error) -> Self {
        StorageError::IoError(error)
    }
}

impl From<walkdir::Error> for StorageError {
    fn from(error: walkdir::Error) -> Self {
        StorageError::IoError(io::Error::from(error))
    }
}

/// Session module errors
#[derive(Debug)]
pub enum SessionError {
    /// Ctrl-C arrived while waiting for input.
    Interrupted,
    /// Standard input was closed.
    EndOfInput,
    IoError(io::Error),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::Interrupted => write!(f, "Interrupted"),
            SessionError::EndOfInput => write!(f, "End of input"),
            SessionError::IoError(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for SessionError {}

impl From<io::Error> for SessionError {
    fn from(error: io::Error) -> Self {
        SessionError::IoError(error)
    }
}

/// General file manager error that encompasses all error types
#[derive(Debug)]
pub enum FileManagerError {
    Storage(StorageError),
    Session(SessionError),
    Config(config::ConfigError),
}

impl fmt::Display for FileManagerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileManagerError::Storage(e) => write!(f, "Storage error: {}", e),
            FileManagerError::Session(e) => write!(f, "Session error: {}", e),
            FileManagerError::Config(e) => write!(f, "Configuration error: {}", e),
        }
    }
}

impl std::error::Error for FileManagerError {}

impl From<StorageError> for FileManagerError {
    fn from(error: StorageError) -> Self {
        FileManagerError::Storage(error)
    }
}

impl From<SessionError> for FileManagerError {
    fn from(error: SessionError) -> Self {
        FileManagerError::Session(error)
    }
}

impl From<config::ConfigError> for FileManagerError {
    fn from(error: config::ConfigError) -> Self {
        FileManagerError::Config(error)
    }
}

impl From<io::Error> for FileManagerError {
    fn from(error: io::Error) -> Self {
        FileManagerError::Session(SessionError::IoError(error))
    }
}
