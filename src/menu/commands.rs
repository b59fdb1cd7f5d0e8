//! Module `commands`
//!
//! Defines the menu commands, their numeric choices, and the outcome a
//! command hands back to the session loop for presentation.

use std::path::PathBuf;

use crate::storage::results::{
    DirectoryListing, PathInfo, SearchResult, TransferResult, WriteResult,
};

/// One entry of the main menu.
///
/// The numeric choice of every variant is fixed by [`MenuCommand::choice`];
/// [`MenuCommand::ALL`] lists them in menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    ListDirectory,
    ShowInfo,
    CreateFile,
    ReadFile,
    WriteFile,
    AppendFile,
    DeletePath,
    RenamePath,
    CopyPath,
    MovePath,
    CreateDirectory,
    SearchFiles,
    Exit,
}

impl MenuCommand {
    pub const ALL: [MenuCommand; 13] = [
        MenuCommand::ListDirectory,
        MenuCommand::ShowInfo,
        MenuCommand::CreateFile,
        MenuCommand::ReadFile,
        MenuCommand::WriteFile,
        MenuCommand::AppendFile,
        MenuCommand::DeletePath,
        MenuCommand::RenamePath,
        MenuCommand::CopyPath,
        MenuCommand::MovePath,
        MenuCommand::CreateDirectory,
        MenuCommand::SearchFiles,
        MenuCommand::Exit,
    ];

    /// The number typed to select this command
    pub fn choice(self) -> u8 {
        match self {
            MenuCommand::ListDirectory => 1,
            MenuCommand::ShowInfo => 2,
            MenuCommand::CreateFile => 3,
            MenuCommand::ReadFile => 4,
            MenuCommand::WriteFile => 5,
            MenuCommand::AppendFile => 6,
            MenuCommand::DeletePath => 7,
            MenuCommand::RenamePath => 8,
            MenuCommand::CopyPath => 9,
            MenuCommand::MovePath => 10,
            MenuCommand::CreateDirectory => 11,
            MenuCommand::SearchFiles => 12,
            MenuCommand::Exit => 0,
        }
    }

    /// Menu label shown next to the number
    pub fn label(self) -> &'static str {
        match self {
            MenuCommand::ListDirectory => "List directory",
            MenuCommand::ShowInfo => "Show file/directory info",
            MenuCommand::CreateFile => "Create file",
            MenuCommand::ReadFile => "Read file",
            MenuCommand::WriteFile => "Write (overwrite) file",
            MenuCommand::AppendFile => "Append to file",
            MenuCommand::DeletePath => "Delete file/directory",
            MenuCommand::RenamePath => "Rename file/directory",
            MenuCommand::CopyPath => "Copy file/directory",
            MenuCommand::MovePath => "Move file/directory",
            MenuCommand::CreateDirectory => "Create directory",
            MenuCommand::SearchFiles => "Search files (glob)",
            MenuCommand::Exit => "Exit",
        }
    }

    /// Parses the text typed at the menu prompt.
    ///
    /// Only the exact decimal choice (surrounding whitespace ignored) selects
    /// a command; anything else, including `01` or `+1`, is rejected.
    pub fn from_choice(raw: &str) -> Option<MenuCommand> {
        let trimmed = raw.trim();
        MenuCommand::ALL
            .into_iter()
            .find(|command| command.choice().to_string() == trimmed)
    }
}

/// Title line of the menu block.
pub const MENU_TITLE: &str = "Basic File Management System - Menu";

/// Renders the full menu block: title, options 1-12, then 0.
pub fn menu_text() -> String {
    let mut text = String::from(MENU_TITLE);
    for command in MenuCommand::ALL {
        text.push('\n');
        text.push_str(&format!("{}) {}", command.choice(), command.label()));
    }
    text
}

/// What a successfully handled command produced.
#[derive(Debug)]
pub enum CommandOutcome {
    Listing(DirectoryListing),
    /// Listing was asked for a file; its details are shown instead.
    ListedFile(PathInfo),
    Info(PathInfo),
    FileCreated(PathBuf),
    Content(String),
    Written(WriteResult),
    Appended(WriteResult),
    Deleted(PathBuf),
    Renamed(TransferResult),
    Copied(TransferResult),
    Moved(TransferResult),
    DirectoryCreated(PathBuf),
    Matches(SearchResult),
    Exit,
}
