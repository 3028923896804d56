//! Destinations for outcome log lines.
//!
//! An outcome never writes anywhere on its own. Reporting goes through a
//! [`Sink`], which bundles three line-consuming capabilities (info, warning,
//! error). The adapters here cover the usual shapes: three closures, one
//! closure for everything, an in-memory capture buffer, and `tracing`.

use crate::models::MessageKind;

/// A logger-shaped destination: one method per level, each taking a line.
pub trait Sink {
    fn info(&mut self, line: &str);
    fn warning(&mut self, line: &str);
    fn error(&mut self, line: &str);
}

impl<S: Sink + ?Sized> Sink for &mut S {
    fn info(&mut self, line: &str) {
        (**self).info(line);
    }

    fn warning(&mut self, line: &str) {
        (**self).warning(line);
    }

    fn error(&mut self, line: &str) {
        (**self).error(line);
    }
}

/// Three separate closures, one per level.
pub struct Split<I, W, E> {
    on_info: I,
    on_warning: W,
    on_error: E,
}

impl<I, W, E> Split<I, W, E>
where
    I: FnMut(&str),
    W: FnMut(&str),
    E: FnMut(&str),
{
    pub fn new(on_info: I, on_warning: W, on_error: E) -> Self {
        Self {
            on_info,
            on_warning,
            on_error,
        }
    }
}

impl<I, W, E> Sink for Split<I, W, E>
where
    I: FnMut(&str),
    W: FnMut(&str),
    E: FnMut(&str),
{
    fn info(&mut self, line: &str) {
        (self.on_info)(line);
    }

    fn warning(&mut self, line: &str) {
        (self.on_warning)(line);
    }

    fn error(&mut self, line: &str) {
        (self.on_error)(line);
    }
}

/// One closure receiving every line regardless of level.
pub struct Uniform<F>(pub F);

impl<F: FnMut(&str)> Sink for Uniform<F> {
    fn info(&mut self, line: &str) {
        (self.0)(line);
    }

    fn warning(&mut self, line: &str) {
        (self.0)(line);
    }

    fn error(&mut self, line: &str) {
        (self.0)(line);
    }
}

/// Records every line in order, tagged with the level it arrived on.
#[derive(Debug, Clone, Default)]
pub struct Capture {
    lines: Vec<(MessageKind, String)>,
}

impl Capture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[(MessageKind, String)] {
        &self.lines
    }

    /// Line texts only, in arrival order.
    pub fn texts(&self) -> Vec<&str> {
        self.lines.iter().map(|(_, text)| text.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

impl Sink for Capture {
    fn info(&mut self, line: &str) {
        self.lines.push((MessageKind::Info, line.to_owned()));
    }

    fn warning(&mut self, line: &str) {
        self.lines.push((MessageKind::Warning, line.to_owned()));
    }

    fn error(&mut self, line: &str) {
        self.lines.push((MessageKind::Error, line.to_owned()));
    }
}

/// Forwards lines to the process-wide `tracing` subscriber.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl Sink for TracingSink {
    fn info(&mut self, line: &str) {
        tracing::info!("{line}");
    }

    fn warning(&mut self, line: &str) {
        tracing::warn!("{line}");
    }

    fn error(&mut self, line: &str) {
        tracing::error!("{line}");
    }
}
