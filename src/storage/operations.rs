//! Storage operations
//!
//! One function per menu action. Every operation takes already-resolved
//! paths, checks what it needs to, and performs a direct filesystem call.

use log::info;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::error::StorageError;
use crate::storage::filesystem;
use crate::storage::paths::landing_path;
use crate::storage::results::{
    DirEntryInfo, DirectoryListing, EntryKind, ListResult, PathInfo, TransferResult, WriteResult,
};

pub use crate::storage::search::search_files;

/// Fails with `NotFound` when nothing exists at `path`
pub fn ensure_exists(path: &Path) -> Result<(), StorageError> {
    if path.exists() {
        Ok(())
    } else {
        Err(StorageError::NotFound(path.to_path_buf()))
    }
}

/// Fails with `SourceNotFound` when nothing exists at `path`
pub fn ensure_source_exists(path: &Path) -> Result<(), StorageError> {
    if path.exists() {
        Ok(())
    } else {
        Err(StorageError::SourceNotFound(path.to_path_buf()))
    }
}

/// Lists the contents of a directory, or describes a file
pub fn list_directory(path: &Path) -> Result<ListResult, StorageError> {
    ensure_exists(path)?;

    if path.is_file() {
        return path_info(path).map(ListResult::File);
    }

    let mut entries = Vec::new();
    for entry in fs::read_dir(path)? {
        let entry = entry?;
        let metadata = fs::metadata(entry.path()).ok();

        let kind = match &metadata {
            Some(meta) if meta.is_dir() => EntryKind::Directory,
            _ => EntryKind::File,
        };
        let size = metadata.filter(|meta| meta.is_file()).map(|meta| meta.len());

        entries.push(DirEntryInfo {
            name: entry.file_name().to_string_lossy().to_string(),
            kind,
            size,
        });
    }
    entries.sort_by(|a, b| a.name.cmp(&b.name));

    info!("Listed directory {} - {} entries", path.display(), entries.len());

    Ok(ListResult::Directory(DirectoryListing {
        path: path.to_path_buf(),
        entries,
    }))
}

/// Collects size and timestamps for a path
pub fn path_info(path: &Path) -> Result<PathInfo, StorageError> {
    ensure_exists(path)?;
    let metadata = fs::metadata(path)?;

    Ok(PathInfo {
        path: path.to_path_buf(),
        kind: if metadata.is_dir() {
            EntryKind::Directory
        } else {
            EntryKind::File
        },
        size: metadata.len(),
        created: metadata.created().ok(),
        modified: metadata.modified().ok(),
        accessed: metadata.accessed().ok(),
    })
}

/// Creates an empty file, refusing to touch anything already there
pub fn create_file(path: &Path) -> Result<PathBuf, StorageError> {
    if filesystem::directory_exists(path) {
        return Err(StorageError::DirectoryInTheWay(path.to_path_buf()));
    }

    filesystem::create_parent_dirs(path)?;

    if path.exists() {
        return Err(StorageError::FileAlreadyExists(path.to_path_buf()));
    }

    fs::write(path, "")?;
    info!("Created file {}", path.display());
    Ok(path.to_path_buf())
}

/// Reads a regular file as text
pub fn read_file(path: &Path) -> Result<String, StorageError> {
    if !filesystem::file_exists(path) {
        return Err(StorageError::FileNotFound(path.to_path_buf()));
    }

    Ok(fs::read_to_string(path)?)
}

/// Replaces the file's content with `lines` joined by `\n`, no trailing newline
pub fn write_file(path: &Path, lines: &[String]) -> Result<WriteResult, StorageError> {
    filesystem::create_parent_dirs(path)?;
    fs::write(path, lines.join("\n"))?;

    info!("Wrote {} lines to {}", lines.len(), path.display());
    Ok(WriteResult {
        path: path.to_path_buf(),
        lines: lines.len(),
    })
}

/// Appends `lines` joined by `\n` plus one trailing newline, creating the
/// file if needed
pub fn append_file(path: &Path, lines: &[String]) -> Result<WriteResult, StorageError> {
    filesystem::create_parent_dirs(path)?;

    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    let mut text = lines.join("\n");
    text.push('\n');
    file.write_all(text.as_bytes())?;

    info!("Appended {} lines to {}", lines.len(), path.display());
    Ok(WriteResult {
        path: path.to_path_buf(),
        lines: lines.len(),
    })
}

/// Deletes a file or a whole directory tree
pub fn delete_path(path: &Path) -> Result<PathBuf, StorageError> {
    ensure_exists(path)?;
    filesystem::remove_path(path)?;

    info!("Deleted {}", path.display());
    Ok(path.to_path_buf())
}

/// Renames with platform rename semantics after creating the target's parents
pub fn rename_path(source: &Path, target: &Path) -> Result<TransferResult, StorageError> {
    ensure_exists(source)?;
    filesystem::create_parent_dirs(target)?;
    fs::rename(source, target)?;

    info!("Renamed {} -> {}", source.display(), target.display());
    Ok(TransferResult {
        source: source.to_path_buf(),
        target: target.to_path_buf(),
    })
}

/// Copies a file (keeping metadata) or a directory tree
pub fn copy_path(source: &Path, destination: &Path) -> Result<TransferResult, StorageError> {
    ensure_source_exists(source)?;

    let target = landing_path(source, destination);
    filesystem::create_parent_dirs(&target)?;

    if source.is_dir() {
        if target.exists() {
            return Err(StorageError::TargetExists(target));
        }
        filesystem::copy_tree(source, &target)?;
    } else {
        if target.exists() && fs::canonicalize(&target)? == fs::canonicalize(source)? {
            return Err(StorageError::IoError(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("{} and {} are the same file", source.display(), target.display()),
            )));
        }
        filesystem::copy_file_preserving(source, &target)?;
    }

    info!("Copied {} -> {}", source.display(), target.display());
    Ok(TransferResult {
        source: source.to_path_buf(),
        target,
    })
}

/// Moves a file or directory, copying across devices when rename cannot
pub fn move_path(source: &Path, destination: &Path) -> Result<TransferResult, StorageError> {
    ensure_source_exists(source)?;

    let target = landing_path(source, destination);
    filesystem::create_parent_dirs(&target)?;
    filesystem::move_path(source, &target)?;

    info!("Moved {} -> {}", source.display(), target.display());
    Ok(TransferResult {
        source: source.to_path_buf(),
        target,
    })
}

/// Creates a directory and its parents; an existing directory is fine
pub fn create_directory(path: &Path) -> Result<PathBuf, StorageError> {
    fs::create_dir_all(path)?;

    info!("Created directory {}", path.display());
    Ok(path.to_path_buf())
}
