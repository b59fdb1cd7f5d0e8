//! Response rendering
//!
//! Formats command outcomes into the text printed after each command.

use chrono::{DateTime, Local};
use std::time::SystemTime;

use crate::menu::commands::CommandOutcome;
use crate::storage::results::{DirectoryListing, EntryKind, PathInfo, SearchResult};

pub const CONTENT_START: &str = "--- File content start ---";
pub const CONTENT_END: &str = "--- File content end ---";
pub const GOODBYE: &str = "Goodbye!";
pub const INVALID_CHOICE: &str = "Invalid choice. Try again.";
pub const NO_MATCHES: &str = "No matches found.";

/// Format a command outcome for display
pub fn render_outcome(outcome: &CommandOutcome) -> String {
    match outcome {
        CommandOutcome::Listing(listing) => render_listing(listing),
        CommandOutcome::ListedFile(info) => format!(
            "{} is a file. Showing file info:\n{}",
            info.path.display(),
            render_info(info)
        ),
        CommandOutcome::Info(info) => render_info(info),
        CommandOutcome::FileCreated(path) => format!("Created file: {}", path.display()),
        CommandOutcome::Content(text) => {
            format!("\n{}\n{}\n{}\n", CONTENT_START, text, CONTENT_END)
        }
        CommandOutcome::Written(result) => {
            format!("Wrote {} lines to {}", result.lines, result.path.display())
        }
        CommandOutcome::Appended(result) => {
            format!("Appended {} lines to {}", result.lines, result.path.display())
        }
        CommandOutcome::Deleted(path) => format!("Deleted {}", path.display()),
        CommandOutcome::Renamed(t) => {
            format!("Renamed {} -> {}", t.source.display(), t.target.display())
        }
        CommandOutcome::Copied(t) => {
            format!("Copied {} -> {}", t.source.display(), t.target.display())
        }
        CommandOutcome::Moved(t) => {
            format!("Moved {} -> {}", t.source.display(), t.target.display())
        }
        CommandOutcome::DirectoryCreated(path) => {
            format!("Created directory: {}", path.display())
        }
        CommandOutcome::Matches(result) => render_matches(result),
        CommandOutcome::Exit => GOODBYE.to_string(),
    }
}

fn render_listing(listing: &DirectoryListing) -> String {
    let mut text = format!("Contents of: {}\n", listing.path.display());

    for entry in &listing.entries {
        let tag = match entry.kind {
            EntryKind::Directory => "<DIR>",
            EntryKind::File => "FILE ",
        };
        let size = entry
            .size
            .map(|bytes| format!("{} bytes", bytes))
            .unwrap_or_default();
        let line = format!("{:5}  {:40}  {}", tag, entry.name, size);
        text.push('\n');
        text.push_str(line.trim_end());
    }

    text
}

fn render_info(info: &PathInfo) -> String {
    let kind = match info.kind {
        EntryKind::Directory => "Directory",
        EntryKind::File => "File",
    };

    [
        format!("Path: {}", info.path.display()),
        format!("Type: {}", kind),
        format!("Size: {} bytes", info.size),
        format!("Created: {}", format_timestamp(info.created)),
        format!("Modified: {}", format_timestamp(info.modified)),
        format!("Accessed: {}", format_timestamp(info.accessed)),
    ]
    .join("\n")
}

fn render_matches(result: &SearchResult) -> String {
    if result.matches.is_empty() {
        return NO_MATCHES.to_string();
    }

    let mut text = format!("Found {} matches:", result.matches.len());
    for path in &result.matches {
        text.push('\n');
        text.push_str(&path.display().to_string());
    }
    text
}

/// Local time with microseconds, or `unavailable`
pub fn format_timestamp(time: Option<SystemTime>) -> String {
    match time {
        Some(time) => DateTime::<Local>::from(time)
            .format("%Y-%m-%d %H:%M:%S%.6f")
            .to_string(),
        None => "unavailable".to_string(),
    }
}
