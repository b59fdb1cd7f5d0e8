//! Console input and output
//!
//! Reads lines asynchronously so a Ctrl-C can be observed while a prompt is
//! waiting, and writes everything else synchronously.

use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType};
use std::io::{self, Stdout, Write};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Lines, Stdin};
use tokio::sync::mpsc::UnboundedReceiver;

use crate::error::SessionError;

/// Line-oriented terminal used by the menu loop and its handlers.
pub struct Console<R, W> {
    lines: Lines<R>,
    out: W,
    interrupts: Option<UnboundedReceiver<()>>,
    clear_screen: bool,
}

impl Console<BufReader<Stdin>, Stdout> {
    /// Console on the process's standard input and output
    pub fn stdio() -> Self {
        Console::new(BufReader::new(tokio::io::stdin()), io::stdout())
    }
}

impl<R, W> Console<R, W>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    pub fn new(reader: R, out: W) -> Self {
        Self {
            lines: reader.lines(),
            out,
            interrupts: None,
            clear_screen: false,
        }
    }

    /// Every `()` received on `interrupts` cancels the pending read.
    pub fn with_interrupts(mut self, interrupts: UnboundedReceiver<()>) -> Self {
        self.interrupts = Some(interrupts);
        self
    }

    pub fn with_clear_screen(mut self, enabled: bool) -> Self {
        self.clear_screen = enabled;
        self
    }

    /// Reads one line without its terminator.
    ///
    /// Returns `Interrupted` if an interrupt arrives first and `EndOfInput`
    /// once the reader is exhausted.
    pub async fn read_line(&mut self) -> Result<String, SessionError> {
        let Self {
            lines, interrupts, ..
        } = self;

        // next_line is cancel safe, so a line typed after an interrupt is
        // delivered by the next call. A pending interrupt always wins.
        tokio::select! {
            biased;
            Some(()) = next_interrupt(interrupts) => Err(SessionError::Interrupted),
            line = lines.next_line() => match line? {
                Some(line) => Ok(line.trim_end_matches('\r').to_string()),
                None => Err(SessionError::EndOfInput),
            },
        }
    }

    /// Prints `text` without a newline, then reads the answer.
    pub async fn prompt(&mut self, text: &str) -> Result<String, SessionError> {
        write!(self.out, "{}", text)?;
        self.out.flush()?;
        self.read_line().await
    }

    /// Prints `text` followed by a newline.
    pub fn say(&mut self, text: &str) -> Result<(), SessionError> {
        writeln!(self.out, "{}", text)?;
        self.out.flush()?;
        Ok(())
    }

    /// Clears the terminal when enabled; otherwise does nothing.
    pub fn clear(&mut self) -> Result<(), SessionError> {
        if self.clear_screen {
            execute!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
        }
        Ok(())
    }

    /// Consumes the console, returning the output sink.
    pub fn into_output(self) -> W {
        self.out
    }
}

async fn next_interrupt(interrupts: &mut Option<UnboundedReceiver<()>>) -> Option<()> {
    match interrupts {
        Some(receiver) => receiver.recv().await,
        None => std::future::pending().await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;

    #[tokio::test]
    async fn reads_lines_then_end_of_input() {
        let mut console = Console::new(&b"first\r\nsecond\n"[..], Vec::new());
        assert_eq!(console.read_line().await.unwrap(), "first");
        assert_eq!(console.read_line().await.unwrap(), "second");
        assert!(matches!(
            console.read_line().await,
            Err(SessionError::EndOfInput)
        ));
    }

    #[tokio::test]
    async fn prompt_writes_text_without_newline() {
        let mut console = Console::new(&b"answer\n"[..], Vec::new());
        let answer = console.prompt("Question: ").await.unwrap();
        assert_eq!(answer, "answer");
        assert_eq!(console.into_output(), b"Question: ");
    }

    #[tokio::test]
    async fn interrupt_cancels_pending_read() {
        let (tx, rx) = mpsc::unbounded_channel();
        let (_writer, reader) = tokio::io::duplex(64);
        let mut console = Console::new(BufReader::new(reader), Vec::new()).with_interrupts(rx);

        tx.send(()).unwrap();
        assert!(matches!(
            console.read_line().await,
            Err(SessionError::Interrupted)
        ));
    }

    #[tokio::test]
    async fn clear_is_silent_when_disabled() {
        let mut console = Console::new(&b""[..], Vec::new());
        console.clear().unwrap();
        assert!(console.into_output().is_empty());
    }
}
