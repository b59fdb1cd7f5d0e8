//! Menu loop
//!
//! Shows the menu, reads a choice, dispatches it, presents the outcome or
//! error, pauses, clears, and repeats until Exit or end of input.

use log::{debug, info, warn};
use std::io::{ErrorKind, Write};
use tokio::io::AsyncBufRead;

use crate::config::AppConfig;
use crate::error::handlers::{INTERRUPT_HINT, error_to_message, handle_error};
use crate::error::{FileManagerError, SessionError};
use crate::menu::responses::INVALID_CHOICE;
use crate::menu::{CommandOutcome, MenuCommand, handle_command, menu_text, render_outcome};
use crate::session::Console;

const CHOICE_PROMPT: &str = "Choose an option: ";
const PAUSE_PROMPT: &str = "\nPress Enter to continue...";

/// How one menu iteration ended
enum Step {
    Continue,
    Terminate,
}

/// An interactive session over one console.
pub struct Session<R, W> {
    config: AppConfig,
    console: Console<R, W>,
}

impl<R, W> Session<R, W>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    pub fn new(config: AppConfig, console: Console<R, W>) -> Self {
        Self { config, console }
    }

    /// Runs the menu loop until the user exits or input ends.
    ///
    /// Only console failures end the loop with an error; operation failures
    /// are printed and the loop continues.
    pub async fn run(&mut self) -> Result<(), FileManagerError> {
        info!("Session started in {}", self.config.start_dir().display());

        loop {
            match self.iteration().await? {
                Step::Continue => {}
                Step::Terminate => break,
            }
        }

        info!("Session ended");
        Ok(())
    }

    /// Consumes the session, returning its console.
    pub fn into_console(self) -> Console<R, W> {
        self.console
    }

    async fn iteration(&mut self) -> Result<Step, FileManagerError> {
        self.console.say(&format!("\n{}\n", menu_text()))?;

        let Some(choice) = self.await_choice().await? else {
            return Ok(Step::Terminate);
        };

        match MenuCommand::from_choice(&choice) {
            None => {
                debug!("Rejected menu choice {:?}", choice);
                self.console.say(INVALID_CHOICE)?;
            }
            Some(command) => match handle_command(command, &self.config, &mut self.console).await {
                Ok(CommandOutcome::Exit) => {
                    self.console.say(&render_outcome(&CommandOutcome::Exit))?;
                    return Ok(Step::Terminate);
                }
                Ok(outcome) => self.console.say(&render_outcome(&outcome))?,
                Err(FileManagerError::Session(SessionError::EndOfInput)) => {
                    return Ok(Step::Terminate);
                }
                Err(err) => {
                    handle_error(&err);
                    self.console.say(&error_to_message(&err))?;
                }
            },
        }

        self.pause().await
    }

    /// Reads the menu choice, re-prompting after every interrupt.
    /// `None` means input has ended.
    async fn await_choice(&mut self) -> Result<Option<String>, FileManagerError> {
        loop {
            match self.console.prompt(CHOICE_PROMPT).await {
                Ok(choice) => return Ok(Some(choice)),
                Err(SessionError::Interrupted) => self.console.say(INTERRUPT_HINT)?,
                Err(SessionError::EndOfInput) => return Ok(None),
                // A line that is not UTF-8 is skipped; other read failures are fatal
                Err(SessionError::IoError(e)) if e.kind() == ErrorKind::InvalidData => {
                    self.console.say(&format!("Error: {}", e))?;
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    async fn pause(&mut self) -> Result<Step, FileManagerError> {
        if self.config.pause_after_command {
            match self.console.prompt(PAUSE_PROMPT).await {
                Ok(_) => {}
                Err(SessionError::Interrupted) => self.console.say(INTERRUPT_HINT)?,
                Err(SessionError::IoError(e)) => {
                    warn!("Pause prompt read failed: {}", e);
                    self.console.say(&format!("Error: {}", e))?;
                }
                Err(SessionError::EndOfInput) => return Ok(Step::Terminate),
            }
        }

        self.console.clear()?;
        Ok(Step::Continue)
    }
}
