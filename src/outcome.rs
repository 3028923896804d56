use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::{Message, MessageFilter, MessageKind, Severity};
use crate::sink::{Sink, Split, Uniform};

pub const INFO_HEADER: &str =
    "The following informational messages were generated during the operation:";
pub const WARNING_HEADER: &str = "The following warnings were generated during the operation:";
pub const ERROR_HEADER: &str = "The following messages were generated during the operation:";

const MESSAGE_INDENT: &str = "     ";

pub fn success_line(caller: &str) -> String {
    format!("The operation '{caller}' completed successfully.")
}

pub fn failure_line(caller: &str) -> String {
    format!("The operation '{caller}' failed.")
}

/// Read access to anything that carries a severity and a message log.
/// [`Outcome::incorporate`] accepts any implementor.
pub trait OutcomeView {
    fn severity(&self) -> Severity;
    fn messages(&self) -> &[Message];
}

/// The result of an operation: a severity plus every diagnostic message
/// recorded while it ran, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    severity: Severity,
    messages: Vec<Message>,
}

impl Outcome {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_severity(severity: Severity) -> Self {
        Self {
            severity,
            messages: Vec::new(),
        }
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// False only when the severity is `Failure`; warnings still count as ok.
    pub fn is_ok(&self) -> bool {
        self.severity != Severity::Failure
    }

    pub fn is_failure(&self) -> bool {
        !self.is_ok()
    }

    pub fn add_info(&mut self, text: impl Into<String>) -> &mut Self {
        self.messages.push(Message::new(MessageKind::Info, text.into()));
        self
    }

    /// Records a warning and sets the severity to `Warning`, even if it was
    /// `Failure` before. The latest escalating call wins.
    pub fn add_warning(&mut self, text: impl Into<String>) -> &mut Self {
        self.messages
            .push(Message::new(MessageKind::Warning, text.into()));
        self.severity = Severity::Warning;
        self
    }

    pub fn add_error(&mut self, text: impl Into<String>) -> &mut Self {
        self.messages.push(Message::new(MessageKind::Error, text.into()));
        self.severity = Severity::Failure;
        self
    }

    /// Drops every message the filter matches. Severity is left alone.
    pub fn remove_messages(&mut self, filter: impl Into<MessageFilter>) -> &mut Self {
        match filter.into() {
            MessageFilter::Any => self.messages.clear(),
            filter => self.messages.retain(|m| !filter.matches(m.kind())),
        }
        self
    }

    /// Overwrites the severity regardless of what the message log holds.
    pub fn set_severity(&mut self, severity: Severity) -> &mut Self {
        self.severity = severity;
        self
    }

    /// Appends `other`'s messages after ours and raises our severity to
    /// `other`'s if it is worse. `other` is not modified.
    pub fn incorporate<O: OutcomeView + ?Sized>(&mut self, other: &O) -> &mut Self {
        self.messages.extend_from_slice(other.messages());
        self.severity = self.severity.max(other.severity());
        self
    }

    pub fn last_message(&self, kind: MessageKind) -> Option<&Message> {
        self.messages.iter().rev().find(|m| m.kind() == kind)
    }

    pub fn last_info(&self) -> &str {
        self.last_text(MessageKind::Info)
    }

    pub fn last_warning(&self) -> &str {
        self.last_text(MessageKind::Warning)
    }

    pub fn last_error(&self) -> &str {
        self.last_text(MessageKind::Error)
    }

    fn last_text(&self, kind: MessageKind) -> &str {
        self.last_message(kind).map_or("", Message::text)
    }

    pub fn count(&self, filter: impl Into<MessageFilter>) -> usize {
        let filter = filter.into();
        self.messages
            .iter()
            .filter(|m| filter.matches(m.kind()))
            .count()
    }

    pub fn has_messages(&self, filter: impl Into<MessageFilter>) -> bool {
        let filter = filter.into();
        self.messages.iter().any(|m| filter.matches(m.kind()))
    }

    /// Reports the outcome through one closure used for every level.
    pub fn log_result(&self, sink: impl FnMut(&str), caller: &str) -> &Self {
        self.log_result_with(&mut Uniform(sink), caller)
    }

    /// Reports the outcome through one closure per level.
    pub fn log_result_split(
        &self,
        on_info: impl FnMut(&str),
        on_warning: impl FnMut(&str),
        on_error: impl FnMut(&str),
        caller: &str,
    ) -> &Self {
        self.log_result_with(&mut Split::new(on_info, on_warning, on_error), caller)
    }

    /// Reports the outcome through a logger-shaped sink.
    ///
    /// A non-failing outcome emits the success line on `info`, then any info
    /// messages on `info`, then (only at `Warning`) the warning messages on
    /// `warning`. A failing outcome emits the failure line and the error
    /// messages on `error`. `caller` labels the operation and may be empty.
    pub fn log_result_with<S: Sink + ?Sized>(&self, sink: &mut S, caller: &str) -> &Self {
        if self.severity == Severity::Failure {
            sink.error(&failure_line(caller));
            self.log_all_messages(|line| sink.error(line), MessageKind::Error, ERROR_HEADER, "");
            return self;
        }

        sink.info(&success_line(caller));
        if self.has_messages(MessageKind::Info) {
            self.log_all_messages(|line| sink.info(line), MessageKind::Info, INFO_HEADER, "");
        }
        if self.severity == Severity::Warning {
            self.log_all_messages(
                |line| sink.warning(line),
                MessageKind::Warning,
                WARNING_HEADER,
                "",
            );
        }
        self
    }

    /// Sends the header (if non-empty), each matching message indented by
    /// five spaces in log order, then the footer (if non-empty).
    pub fn log_all_messages(
        &self,
        mut sink: impl FnMut(&str),
        filter: impl Into<MessageFilter>,
        header: &str,
        footer: &str,
    ) -> &Self {
        let filter = filter.into();

        if !header.is_empty() {
            sink(header);
        }
        for message in self.messages.iter().filter(|m| filter.matches(m.kind())) {
            sink(&format!("{MESSAGE_INDENT}{}", message.text()));
        }
        if !footer.is_empty() {
            sink(footer);
        }
        self
    }
}

impl OutcomeView for Outcome {
    fn severity(&self) -> Severity {
        self.severity
    }

    fn messages(&self) -> &[Message] {
        &self.messages
    }
}

/// Renders the report a single-sink `log_result` would produce, one line per
/// sink call, with an empty operation label.
impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut lines = Vec::new();
        self.log_result(|line| lines.push(line.to_owned()), "");
        write!(f, "{}", lines.join("\n"))
    }
}
