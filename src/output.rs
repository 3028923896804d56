use std::io;

use anyhow::Result;
use console::{style, Term};
use serde::Serialize;

use crate::sink::Sink;

/// Writes log lines to a terminal. Warnings are yellow, errors red.
///
/// The first write failure is kept and later lines are dropped; call
/// [`ConsoleSink::finish`] to surface it.
pub struct ConsoleSink {
    term: Term,
    failed: Option<io::Error>,
}

impl ConsoleSink {
    pub fn new(term: Term) -> Self {
        Self { term, failed: None }
    }

    pub fn stdout() -> Self {
        Self::new(Term::stdout())
    }

    fn write(&mut self, line: &str) {
        if self.failed.is_some() {
            return;
        }
        if let Err(e) = self.term.write_line(line) {
            self.failed = Some(e);
        }
    }

    pub fn finish(self) -> Result<()> {
        match self.failed {
            Some(e) => Err(e.into()),
            None => Ok(()),
        }
    }
}

impl Sink for ConsoleSink {
    fn info(&mut self, line: &str) {
        self.write(line);
    }

    fn warning(&mut self, line: &str) {
        self.write(&style(line).yellow().to_string());
    }

    fn error(&mut self, line: &str) {
        self.write(&style(line).red().to_string());
    }
}

pub struct Output {
    term: Term,
    json: bool,
}

impl Output {
    pub fn new(json: bool) -> Self {
        Self {
            term: Term::stdout(),
            json,
        }
    }

    pub fn is_json(&self) -> bool {
        self.json
    }

    fn print_json<T: Serialize + ?Sized>(&self, value: &T) -> Result<()> {
        let output = serde_json::to_string_pretty(value)?;
        self.term.write_line(&output)?;
        Ok(())
    }

    /// Prints a finished value as JSON. Text mode has already streamed its
    /// lines through a sink, so nothing is printed there.
    pub fn report<T: Serialize + ?Sized>(&self, value: &T) -> Result<()> {
        if self.json {
            return self.print_json(value);
        }
        Ok(())
    }

    pub fn guide(&self, text: &str) -> Result<()> {
        self.term.write_line(text)?;
        Ok(())
    }
}
