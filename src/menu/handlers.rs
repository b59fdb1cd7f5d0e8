//! Command handlers module for the file manager.
//!
//! Each handler gathers its inputs through the console (paths, text lines,
//! confirmation), resolves paths against the configuration, and calls the
//! matching storage operation. Presentation is left to the session loop.

use log::debug;
use std::io::Write;
use std::path::PathBuf;
use tokio::io::AsyncBufRead;

use crate::config::AppConfig;
use crate::error::{FileManagerError, StorageError};
use crate::menu::commands::{CommandOutcome, MenuCommand};
use crate::session::Console;
use crate::storage::operations;
use crate::storage::results::ListResult;
use crate::storage::resolve_path;

type HandlerResult = Result<CommandOutcome, FileManagerError>;

/// Dispatches a menu command to its handler.
pub async fn handle_command<R, W>(
    command: MenuCommand,
    config: &AppConfig,
    console: &mut Console<R, W>,
) -> HandlerResult
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    debug!("Dispatching {:?}", command);

    match command {
        MenuCommand::ListDirectory => handle_list(config, console).await,
        MenuCommand::ShowInfo => handle_info(config, console).await,
        MenuCommand::CreateFile => handle_create_file(config, console).await,
        MenuCommand::ReadFile => handle_read(config, console).await,
        MenuCommand::WriteFile => handle_write(config, console).await,
        MenuCommand::AppendFile => handle_append(config, console).await,
        MenuCommand::DeletePath => handle_delete(config, console).await,
        MenuCommand::RenamePath => handle_rename(config, console).await,
        MenuCommand::CopyPath => handle_copy(config, console).await,
        MenuCommand::MovePath => handle_move(config, console).await,
        MenuCommand::CreateDirectory => handle_mkdir(config, console).await,
        MenuCommand::SearchFiles => handle_search(config, console).await,
        MenuCommand::Exit => Ok(CommandOutcome::Exit),
    }
}

/// Only `yes`, in any letter case, confirms a deletion.
pub fn is_confirmed(answer: &str) -> bool {
    answer.eq_ignore_ascii_case("yes")
}

async fn prompt_path<R, W>(
    config: &AppConfig,
    console: &mut Console<R, W>,
    text: &str,
) -> Result<PathBuf, FileManagerError>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let raw = console.prompt(text).await?;
    Ok(resolve_path(config, &raw))
}

/// Collects lines until one whose trimmed text is the end marker.
async fn read_text_lines<R, W>(
    config: &AppConfig,
    console: &mut Console<R, W>,
) -> Result<Vec<String>, FileManagerError>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    console.say(&format!(
        "Enter text. Finish with a single line containing only {}.",
        config.end_marker
    ))?;

    let mut lines = Vec::new();
    loop {
        let line = console.read_line().await?;
        if line.trim() == config.end_marker {
            break;
        }
        lines.push(line);
    }
    Ok(lines)
}

async fn handle_list<R, W>(config: &AppConfig, console: &mut Console<R, W>) -> HandlerResult
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let path = prompt_path(
        config,
        console,
        "List directory (leave empty for current dir): ",
    )
    .await?;

    Ok(match operations::list_directory(&path)? {
        ListResult::Directory(listing) => CommandOutcome::Listing(listing),
        ListResult::File(info) => CommandOutcome::ListedFile(info),
    })
}

async fn handle_info<R, W>(config: &AppConfig, console: &mut Console<R, W>) -> HandlerResult
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let path = prompt_path(config, console, "Enter file path to show info: ").await?;
    Ok(CommandOutcome::Info(operations::path_info(&path)?))
}

async fn handle_create_file<R, W>(config: &AppConfig, console: &mut Console<R, W>) -> HandlerResult
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let path = prompt_path(
        config,
        console,
        "Create file path (will create parents if needed): ",
    )
    .await?;
    Ok(CommandOutcome::FileCreated(operations::create_file(&path)?))
}

async fn handle_read<R, W>(config: &AppConfig, console: &mut Console<R, W>) -> HandlerResult
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let path = prompt_path(config, console, "Enter file path to read: ").await?;
    Ok(CommandOutcome::Content(operations::read_file(&path)?))
}

async fn handle_write<R, W>(config: &AppConfig, console: &mut Console<R, W>) -> HandlerResult
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let path = prompt_path(
        config,
        console,
        "Enter file path to write to (will overwrite): ",
    )
    .await?;
    let lines = read_text_lines(config, console).await?;
    Ok(CommandOutcome::Written(operations::write_file(&path, &lines)?))
}

async fn handle_append<R, W>(config: &AppConfig, console: &mut Console<R, W>) -> HandlerResult
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let path = prompt_path(config, console, "Enter file path to append to: ").await?;
    let lines = read_text_lines(config, console).await?;
    Ok(CommandOutcome::Appended(operations::append_file(&path, &lines)?))
}

async fn handle_delete<R, W>(config: &AppConfig, console: &mut Console<R, W>) -> HandlerResult
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let path = prompt_path(config, console, "Enter file/directory path to delete: ").await?;
    operations::ensure_exists(&path)?;

    let answer = console
        .prompt(&format!(
            "Are you sure you want to delete '{}'? (yes/no): ",
            path.display()
        ))
        .await?;
    if !is_confirmed(&answer) {
        return Err(StorageError::Aborted.into());
    }

    Ok(CommandOutcome::Deleted(operations::delete_path(&path)?))
}

async fn handle_rename<R, W>(config: &AppConfig, console: &mut Console<R, W>) -> HandlerResult
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let source = prompt_path(config, console, "Enter file/directory path to rename: ").await?;
    operations::ensure_exists(&source)?;

    let target = prompt_path(config, console, "Enter new path/name: ").await?;
    Ok(CommandOutcome::Renamed(operations::rename_path(
        &source, &target,
    )?))
}

async fn handle_copy<R, W>(config: &AppConfig, console: &mut Console<R, W>) -> HandlerResult
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let source = prompt_path(config, console, "Enter source file path to copy: ").await?;
    operations::ensure_source_exists(&source)?;

    let destination = prompt_path(
        config,
        console,
        "Enter destination path (file or directory): ",
    )
    .await?;
    Ok(CommandOutcome::Copied(operations::copy_path(
        &source,
        &destination,
    )?))
}

async fn handle_move<R, W>(config: &AppConfig, console: &mut Console<R, W>) -> HandlerResult
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let source = prompt_path(config, console, "Enter source path to move: ").await?;
    operations::ensure_source_exists(&source)?;

    let destination = prompt_path(config, console, "Enter destination path: ").await?;
    Ok(CommandOutcome::Moved(operations::move_path(
        &source,
        &destination,
    )?))
}

async fn handle_mkdir<R, W>(config: &AppConfig, console: &mut Console<R, W>) -> HandlerResult
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let path = prompt_path(config, console, "Enter directory path to create: ").await?;
    Ok(CommandOutcome::DirectoryCreated(
        operations::create_directory(&path)?,
    ))
}

async fn handle_search<R, W>(config: &AppConfig, console: &mut Console<R, W>) -> HandlerResult
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let base = prompt_path(
        config,
        console,
        "Search base path (leave empty for current): ",
    )
    .await?;
    let pattern = console
        .prompt("Enter glob pattern (e.g. *.txt or **/*.py): ")
        .await?;
    Ok(CommandOutcome::Matches(operations::search_files(
        &base, &pattern,
    )?))
}

#[cfg(test)]
mod tests {
    use super::is_confirmed;

    #[test]
    fn confirmation_is_case_insensitive_and_exact() {
        assert!(is_confirmed("yes"));
        assert!(is_confirmed("YES"));
        assert!(is_confirmed("yEs"));
        assert!(!is_confirmed("y"));
        assert!(!is_confirmed("no"));
        assert!(!is_confirmed(""));
        assert!(!is_confirmed("yes please"));
        assert!(!is_confirmed(" yes"));
    }
}
