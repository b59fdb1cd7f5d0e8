//! File system primitives
//!
//! Multi-step helpers built on std::fs: parent creation, metadata-preserving
//! copies, recursive trees and the rename-or-copy move.

use log::{debug, info};
use std::fs::{self, File, FileTimes};
use std::io::{self, ErrorKind, Result};
use std::path::Path;
use walkdir::WalkDir;

/// Create every missing parent directory of `path`
pub fn create_parent_dirs(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent),
        _ => Ok(()),
    }
}

/// Check if file exists
pub fn file_exists(path: &Path) -> bool {
    path.exists() && path.is_file()
}

/// Check if directory exists
pub fn directory_exists(path: &Path) -> bool {
    path.exists() && path.is_dir()
}

/// Copy one file, keeping permissions and access/modification times.
///
/// Timestamps are best effort: a target that cannot be reopened for writing
/// (e.g. read-only after the permission copy) keeps the copy time.
pub fn copy_file_preserving(source: &Path, target: &Path) -> Result<u64> {
    let bytes = fs::copy(source, target)?;
    let metadata = fs::metadata(source)?;

    let mut times = FileTimes::new();
    if let Ok(accessed) = metadata.accessed() {
        times = times.set_accessed(accessed);
    }
    if let Ok(modified) = metadata.modified() {
        times = times.set_modified(modified);
    }

    match File::options().write(true).open(target) {
        Ok(file) => {
            if let Err(e) = file.set_times(times) {
                debug!("Could not preserve times on {}: {}", target.display(), e);
            }
        }
        Err(e) => debug!("Could not reopen {} to set times: {}", target.display(), e),
    }

    Ok(bytes)
}

/// Recursively copy a directory tree into `target`, which must not exist.
///
/// Symlinks are followed, so linked content is copied rather than the link.
/// Returns the number of files copied.
pub fn copy_tree(source: &Path, target: &Path) -> Result<usize> {
    if target.exists() {
        return Err(io::Error::new(
            ErrorKind::AlreadyExists,
            format!("{} already exists", target.display()),
        ));
    }

    // Entries are gathered before the target exists so that a target inside
    // the source is not walked into.
    let entries = WalkDir::new(source)
        .min_depth(1)
        .follow_links(true)
        .into_iter()
        .collect::<std::result::Result<Vec<_>, _>>()?;

    fs::create_dir_all(target)?;
    let mut files = 0;

    for entry in entries {
        let relative = entry
            .path()
            .strip_prefix(source)
            .map_err(io::Error::other)?;
        let destination = target.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&destination)?;
        } else {
            copy_file_preserving(entry.path(), &destination)?;
            files += 1;
        }
    }

    info!(
        "Copied tree {} -> {} ({} files)",
        source.display(),
        target.display(),
        files
    );
    Ok(files)
}

/// Remove a file, a symlink, or a whole directory tree.
///
/// A symlink to a directory is unlinked, never descended into.
pub fn remove_path(path: &Path) -> Result<()> {
    let metadata = fs::symlink_metadata(path)?;
    if metadata.is_dir() {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    }
}

/// Rename `source` to `target`, falling back to copy then delete when the
/// two live on different devices.
pub fn move_path(source: &Path, target: &Path) -> Result<()> {
    match fs::rename(source, target) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::CrossesDevices => {
            debug!(
                "Rename across devices {} -> {}, copying instead",
                source.display(),
                target.display()
            );
            if fs::symlink_metadata(source)?.is_dir() {
                copy_tree(source, target)?;
            } else {
                copy_file_preserving(source, target)?;
            }
            remove_path(source)
        }
        Err(e) => Err(e),
    }
}
