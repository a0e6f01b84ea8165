//! Operator-facing console output
//!
//! Handlers write through a [`Console`] rather than `println!` so the same
//! code path can be captured in tests.

use crate::error::Result;
use std::fmt::Display;
use std::io::{self, Write};

enum Sink {
    Stdout,
    Buffer(Vec<u8>),
}

/// Line-oriented writer for command output
pub struct Console {
    sink: Sink,
    quiet: bool,
}

impl Console {
    /// Console writing to standard output
    pub fn stdout(quiet: bool) -> Self {
        Self {
            sink: Sink::Stdout,
            quiet,
        }
    }

    /// Console collecting output in memory
    pub fn buffer() -> Self {
        Self {
            sink: Sink::Buffer(Vec::new()),
            quiet: false,
        }
    }

    /// Write a result or failure message; always shown
    pub fn line(&mut self, message: impl Display) -> Result<()> {
        match &mut self.sink {
            Sink::Stdout => {
                let mut out = io::stdout().lock();
                writeln!(out, "{}", message)?;
            }
            Sink::Buffer(buf) => writeln!(buf, "{}", message)?,
        }
        Ok(())
    }

    /// Write a progress notice; suppressed in quiet mode
    pub fn notice(&mut self, message: impl Display) -> Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.line(message)
    }

    /// Everything written so far (empty for stdout)
    pub fn contents(&self) -> String {
        match &self.sink {
            Sink::Stdout => String::new(),
            Sink::Buffer(buf) => String::from_utf8_lossy(buf).into_owned(),
        }
    }
}
