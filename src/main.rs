//! filemgr - Entry Point
//!
//! Interactive file management from a numbered text menu.

use log::{error, info};
use std::process::ExitCode;
use tokio::signal;
use tokio::sync::mpsc;

use filemgr::utils::logging::setup_logging;
use filemgr::{AppConfig, Console, FileManagerError, Session};

fn main() -> ExitCode {
    setup_logging();

    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            error!("Failed to start runtime: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let result: Result<(), FileManagerError> = runtime.block_on(async move {
        let (interrupt_tx, interrupt_rx) = mpsc::unbounded_channel();

        // Forward every Ctrl-C to the console instead of terminating
        tokio::spawn(async move {
            while signal::ctrl_c().await.is_ok() {
                if interrupt_tx.send(()).is_err() {
                    break;
                }
            }
        });

        let mut console = Console::stdio()
            .with_interrupts(interrupt_rx)
            .with_clear_screen(config.clear_screen);
        if let Err(e) = console.clear() {
            return Err(FileManagerError::from(e));
        }

        Session::new(config, console).run().await
    });

    // A stdin read may still be parked on the blocking pool
    runtime.shutdown_background();

    match result {
        Ok(()) => {
            info!("Exiting");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
