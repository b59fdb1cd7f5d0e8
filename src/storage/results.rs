//! Storage result types
//!
//! Defines result structures returned by storage operations.

use std::path::PathBuf;
use std::time::SystemTime;

/// Kind of a filesystem entry as shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    File,
}

/// One child of a listed directory
#[derive(Debug, Clone)]
pub struct DirEntryInfo {
    pub name: String,
    pub kind: EntryKind,
    /// Only regular files carry a size.
    pub size: Option<u64>,
}

/// Result of a directory listing operation, sorted by name
#[derive(Debug, Clone)]
pub struct DirectoryListing {
    pub path: PathBuf,
    pub entries: Vec<DirEntryInfo>,
}

/// Listing a file shows its details instead
#[derive(Debug, Clone)]
pub enum ListResult {
    Directory(DirectoryListing),
    File(PathInfo),
}

/// Result of an info operation
#[derive(Debug, Clone)]
pub struct PathInfo {
    pub path: PathBuf,
    pub kind: EntryKind,
    pub size: u64,
    pub created: Option<SystemTime>,
    pub modified: Option<SystemTime>,
    pub accessed: Option<SystemTime>,
}

/// Result of a write or append operation
#[derive(Debug, Clone)]
pub struct WriteResult {
    pub path: PathBuf,
    pub lines: usize,
}

/// Result of a rename, copy or move
#[derive(Debug, Clone)]
pub struct TransferResult {
    pub source: PathBuf,
    pub target: PathBuf,
}

/// Result of a glob search
#[derive(Debug, Clone)]
pub struct SearchResult {
    pub base: PathBuf,
    pub pattern: String,
    pub matches: Vec<PathBuf>,
}
