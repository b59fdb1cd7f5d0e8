//! Glob search
//!
//! Matches entries below a base directory against a shell-style pattern.
//! `*` and `?` stay within one path component; `**` spans directories.

use globset::{GlobBuilder, GlobMatcher};
use log::{info, warn};
use std::path::Path;
use walkdir::WalkDir;

use crate::error::StorageError;
use crate::storage::results::SearchResult;

/// Pattern used when the user leaves the pattern prompt empty.
pub const DEFAULT_PATTERN: &str = "*";

/// Search `base` for files and directories whose path relative to `base`
/// matches `pattern`. Matches are returned sorted; a missing base matches
/// nothing.
pub fn search_files(base: &Path, pattern: &str) -> Result<SearchResult, StorageError> {
    let pattern = match pattern.trim() {
        "" => DEFAULT_PATTERN,
        trimmed => trimmed,
    };
    let matcher = compile_pattern(pattern)?;
    let depth = pattern_depth(&strip_current_dir(pattern));

    let mut matches = Vec::new();
    if base.is_dir() {
        let mut walker = WalkDir::new(base).min_depth(1).sort_by_file_name();
        if let Some(depth) = depth {
            walker = walker.max_depth(depth);
        }

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("Skipping unreadable entry under {}: {}", base.display(), e);
                    continue;
                }
            };

            let Ok(relative) = entry.path().strip_prefix(base) else {
                continue;
            };
            if matcher.is_match(relative) {
                matches.push(entry.into_path());
            }
        }
    }
    matches.sort();

    info!(
        "Searched {} for '{}' - {} matches",
        base.display(),
        pattern,
        matches.len()
    );

    Ok(SearchResult {
        base: base.to_path_buf(),
        pattern: pattern.to_string(),
        matches,
    })
}

fn compile_pattern(pattern: &str) -> Result<GlobMatcher, StorageError> {
    if pattern.starts_with('/') {
        return Err(StorageError::InvalidPattern(
            "Non-relative patterns are unsupported".into(),
        ));
    }

    GlobBuilder::new(&strip_current_dir(pattern))
        .literal_separator(true)
        .build()
        .map(|glob| glob.compile_matcher())
        .map_err(|e| StorageError::InvalidPattern(e.to_string()))
}

/// Drops empty and `.` components, so `./*.txt` and `*.txt` are the same
/// pattern.
fn strip_current_dir(pattern: &str) -> String {
    pattern
        .split('/')
        .filter(|part| !part.is_empty() && *part != ".")
        .collect::<Vec<_>>()
        .join("/")
}

/// How deep the walk has to go for a normalized pattern; `None` means
/// unbounded.
fn pattern_depth(pattern: &str) -> Option<usize> {
    if pattern.contains("**") {
        return None;
    }
    Some(pattern.split('/').count().max(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn depth_follows_component_count() {
        assert_eq!(pattern_depth("*.txt"), Some(1));
        assert_eq!(pattern_depth("src/*.rs"), Some(2));
        assert_eq!(pattern_depth(&strip_current_dir("./a/b/c")), Some(3));
        assert_eq!(pattern_depth("**/*.py"), None);
    }

    #[test]
    fn leading_current_dir_is_ignored() {
        assert_eq!(strip_current_dir("./*.txt"), "*.txt");
        assert_eq!(strip_current_dir("src/./lib//*.rs"), "src/lib/*.rs");

        let matcher = compile_pattern("./*.txt").unwrap();
        assert!(matcher.is_match("a.txt"));
        assert!(!matcher.is_match("sub/a.txt"));
    }

    #[test]
    fn star_does_not_cross_separator() {
        let matcher = compile_pattern("*.txt").unwrap();
        assert!(matcher.is_match("a.txt"));
        assert!(!matcher.is_match("sub/a.txt"));
    }

    #[test]
    fn double_star_matches_any_depth() {
        let matcher = compile_pattern("**/*.py").unwrap();
        assert!(matcher.is_match("top.py"));
        assert!(matcher.is_match("a/b/deep.py"));
    }

    #[test]
    fn invalid_patterns_are_rejected() {
        assert!(matches!(
            compile_pattern("[unclosed"),
            Err(StorageError::InvalidPattern(_))
        ));
        assert!(matches!(
            compile_pattern("/etc/*"),
            Err(StorageError::InvalidPattern(_))
        ));
    }
}
