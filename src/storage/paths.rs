//! Path resolution
//!
//! Turns user-typed text into absolute paths. Resolution never fails for
//! paths that do not exist; callers check existence themselves.

use crate::config::AppConfig;
use std::ffi::OsString;
use std::path::{Component, Path, PathBuf};

/// Resolve raw user input into an absolute path.
///
/// Empty input yields the configured start directory. A leading `~` is
/// expanded to the home directory and relative paths are joined onto the
/// start directory. The longest existing prefix is canonicalized and the
/// remainder appended, so symlinks are resolved where possible.
pub fn resolve_path(config: &AppConfig, raw: &str) -> PathBuf {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return config.start_dir().to_path_buf();
    }

    let expanded = shellexpand::tilde(trimmed);
    let path = Path::new(&*expanded);

    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        config.start_dir().join(path)
    };

    canonicalize_existing_prefix(&normalize_lexically(&joined))
}

/// Remove `.` components and fold `..` into their parent without touching
/// the filesystem.
pub fn normalize_lexically(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();

    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => normalized.push(component.as_os_str()),
            Component::CurDir => {}
            // `..` at the root stays at the root
            Component::ParentDir => match normalized.components().next_back() {
                Some(Component::Normal(_)) => {
                    normalized.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => normalized.push(".."),
            },
            Component::Normal(name) => normalized.push(name),
        }
    }

    normalized
}

fn canonicalize_existing_prefix(path: &Path) -> PathBuf {
    let mut existing = path;
    let mut missing: Vec<OsString> = Vec::new();

    loop {
        if let Ok(mut canonical) = existing.canonicalize() {
            for name in missing.iter().rev() {
                canonical.push(name);
            }
            return canonical;
        }

        match (existing.parent(), existing.file_name()) {
            (Some(parent), Some(name)) => {
                missing.push(name.to_os_string());
                existing = parent;
            }
            _ => return path.to_path_buf(),
        }
    }
}

/// The path a copy or move lands on: `destination/<source name>` when the
/// destination is an existing directory, otherwise the destination itself.
pub fn landing_path(source: &Path, destination: &Path) -> PathBuf {
    match source.file_name() {
        Some(name) if destination.is_dir() => destination.join(name),
        _ => destination.to_path_buf(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn config_in(dir: &TempDir) -> AppConfig {
        AppConfig::for_start_dir(dir.path().canonicalize().unwrap())
    }

    #[test]
    fn empty_input_is_start_dir() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir);
        assert_eq!(resolve_path(&config, ""), config.start_dir);
        assert_eq!(resolve_path(&config, "   "), config.start_dir);
    }

    #[test]
    fn relative_input_joins_start_dir() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir);
        assert_eq!(
            resolve_path(&config, "notes/today.txt"),
            config.start_dir.join("notes").join("today.txt")
        );
    }

    #[test]
    fn parent_components_are_folded() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir);
        fs::create_dir(config.start_dir.join("sub")).unwrap();
        assert_eq!(
            resolve_path(&config, "sub/../missing/./file"),
            config.start_dir.join("missing").join("file")
        );
    }

    #[cfg(unix)]
    #[test]
    fn tilde_expands_to_home() {
        let Some(home) = std::env::var_os("HOME").map(PathBuf::from) else {
            return;
        };
        let Ok(home) = home.canonicalize() else {
            return;
        };
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir);
        assert_eq!(resolve_path(&config, "~"), home);
        assert_eq!(resolve_path(&config, "~/missing.txt"), home.join("missing.txt"));
    }

    #[cfg(unix)]
    #[test]
    fn lexical_normalization() {
        assert_eq!(normalize_lexically(Path::new("/a/./b/../c")), PathBuf::from("/a/c"));
        assert_eq!(normalize_lexically(Path::new("/../x")), PathBuf::from("/x"));
    }

    #[test]
    fn landing_path_enters_existing_directory() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("a.txt");
        assert_eq!(landing_path(&source, dir.path()), dir.path().join("a.txt"));
        let other = dir.path().join("b.txt");
        assert_eq!(landing_path(&source, &other), other);
    }
}
