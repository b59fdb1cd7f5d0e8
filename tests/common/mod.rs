#![allow(dead_code)]

use std::path::PathBuf;

use filemgr::{AppConfig, Console, Session};
use tempfile::TempDir;
use tokio::sync::mpsc;

/// Config rooted at a canonical temp directory, with no pause between commands.
pub fn test_config(dir: &TempDir) -> AppConfig {
    let mut config = AppConfig::for_start_dir(canonical_root(dir));
    config.clear_screen = false;
    config.pause_after_command = false;
    config
}

pub fn canonical_root(dir: &TempDir) -> PathBuf {
    dir.path().canonicalize().expect("canonical tempdir")
}

/// Runs a whole session over `script` and returns everything printed.
pub async fn run_script(config: AppConfig, script: &str) -> String {
    let console = Console::new(script.as_bytes(), Vec::new());
    let mut session = Session::new(config, console);
    session.run().await.expect("session");
    String::from_utf8(session.into_console().into_output()).expect("utf8 output")
}

/// Like `run_script`, but with `interrupts` Ctrl-C presses queued up front.
pub async fn run_script_interrupted(config: AppConfig, script: &str, interrupts: usize) -> String {
    let (tx, rx) = mpsc::unbounded_channel();
    for _ in 0..interrupts {
        tx.send(()).expect("queue interrupt");
    }

    let console = Console::new(script.as_bytes(), Vec::new()).with_interrupts(rx);
    let mut session = Session::new(config, console);
    session.run().await.expect("session");
    String::from_utf8(session.into_console().into_output()).expect("utf8 output")
}
