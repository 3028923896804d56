use std::ops::{Deref, DerefMut};

use serde::{Deserialize, Serialize};

use crate::models::{Message, MessageFilter, Severity};
use crate::outcome::{Outcome, OutcomeView};

/// An [`Outcome`] that also carries the operation's return value.
///
/// Derefs to `Outcome`, so mutators, queries, merging and logging all work
/// unchanged. The value is `None` until the operation sets it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValuedOutcome<T> {
    #[serde(flatten)]
    outcome: Outcome,
    value: Option<T>,
}

impl<T> ValuedOutcome<T> {
    pub fn new() -> Self {
        Self::from(Outcome::new())
    }

    pub fn with_severity(severity: Severity) -> Self {
        Self::from(Outcome::with_severity(severity))
    }

    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    pub fn set_value(&mut self, value: T) -> &mut Self {
        self.value = Some(value);
        self
    }

    // Mutators are forwarded so chains keep returning the valued outcome
    // and can end in `set_value`.

    pub fn add_info(&mut self, text: impl Into<String>) -> &mut Self {
        self.outcome.add_info(text);
        self
    }

    pub fn add_warning(&mut self, text: impl Into<String>) -> &mut Self {
        self.outcome.add_warning(text);
        self
    }

    pub fn add_error(&mut self, text: impl Into<String>) -> &mut Self {
        self.outcome.add_error(text);
        self
    }

    pub fn remove_messages(&mut self, filter: impl Into<MessageFilter>) -> &mut Self {
        self.outcome.remove_messages(filter);
        self
    }

    pub fn set_severity(&mut self, severity: Severity) -> &mut Self {
        self.outcome.set_severity(severity);
        self
    }

    pub fn incorporate<O: OutcomeView + ?Sized>(&mut self, other: &O) -> &mut Self {
        self.outcome.incorporate(other);
        self
    }

    pub fn take_value(&mut self) -> Option<T> {
        self.value.take()
    }

    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    pub fn into_parts(self) -> (Outcome, Option<T>) {
        (self.outcome, self.value)
    }
}

impl<T> Default for ValuedOutcome<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Outcome> for ValuedOutcome<T> {
    fn from(outcome: Outcome) -> Self {
        Self {
            outcome,
            value: None,
        }
    }
}

impl<T> Deref for ValuedOutcome<T> {
    type Target = Outcome;

    fn deref(&self) -> &Outcome {
        &self.outcome
    }
}

impl<T> DerefMut for ValuedOutcome<T> {
    fn deref_mut(&mut self) -> &mut Outcome {
        &mut self.outcome
    }
}

impl<T> OutcomeView for ValuedOutcome<T> {
    fn severity(&self) -> Severity {
        self.outcome.severity()
    }

    fn messages(&self) -> &[Message] {
        self.outcome.messages()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MessageKind;
    use crate::sink::Capture;

    #[test]
    fn starts_without_value() {
        let valued: ValuedOutcome<u32> = ValuedOutcome::new();
        assert_eq!(valued.value(), None);
        assert_eq!(valued.severity(), Severity::Success);
        assert!(valued.messages().is_empty());
    }

    #[test]
    fn mutators_reach_inner_outcome() {
        let mut valued = ValuedOutcome::with_severity(Severity::Warning);
        valued.set_value(42_u32);
        valued.add_info("found").add_error("then lost");

        assert_eq!(valued.value(), Some(&42));
        assert_eq!(valued.severity(), Severity::Failure);
        assert_eq!(valued.last_info(), "found");
        assert!(!valued.is_ok());
    }

    #[test]
    fn plain_incorporates_valued() {
        let mut child = ValuedOutcome::new();
        child.set_value("payload");
        child.add_warning("slow");

        let mut parent = Outcome::new();
        parent.incorporate(&child);

        assert_eq!(parent.severity(), Severity::Warning);
        assert_eq!(parent.last_warning(), "slow");
        assert_eq!(child.value(), Some(&"payload"));
    }

    #[test]
    fn valued_incorporates_plain() {
        let mut child = Outcome::new();
        child.add_error("bad input");

        let mut parent: ValuedOutcome<i64> = ValuedOutcome::new();
        parent.set_value(-1);
        parent.incorporate(&child);

        assert_eq!(parent.severity(), Severity::Failure);
        assert_eq!(parent.value(), Some(&-1));
    }

    #[test]
    fn logs_like_a_plain_outcome() {
        let mut valued = ValuedOutcome::new();
        valued.set_value(7_u8);
        valued.add_info("seven");

        let mut capture = Capture::new();
        valued.log_result_with(&mut capture, "pick");

        assert_eq!(capture.len(), 3);
        assert!(capture.lines().iter().all(|(kind, _)| *kind == MessageKind::Info));
    }

    #[test]
    fn mutator_chains_end_in_set_value() {
        let mut child = Outcome::new();
        child.add_warning("late");

        let mut valued = ValuedOutcome::new();
        valued
            .add_info("x")
            .add_error("y")
            .set_severity(Severity::Success)
            .incorporate(&child)
            .remove_messages(MessageKind::Error)
            .set_value(1_u8);

        assert_eq!(valued.value(), Some(&1));
        assert_eq!(valued.severity(), Severity::Warning);
        assert_eq!(valued.last_info(), "x");
        assert_eq!(valued.last_warning(), "late");
        assert_eq!(valued.last_error(), "");
    }

    #[test]
    fn take_and_into_parts() {
        let mut valued = ValuedOutcome::new();
        valued.set_value(String::from("v"));
        assert_eq!(valued.take_value().as_deref(), Some("v"));
        assert_eq!(valued.value(), None);

        valued.set_value(String::from("w"));
        let (outcome, value) = valued.into_parts();
        assert_eq!(outcome, Outcome::new());
        assert_eq!(value.as_deref(), Some("w"));
    }

    #[test]
    fn serializes_flattened() {
        let mut valued = ValuedOutcome::new();
        valued.set_value(3_u32);
        valued.add_info("three");

        let json = serde_json::to_value(&valued).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "severity": "success",
                "messages": [{"kind": "info", "text": "three"}],
                "value": 3
            })
        );
    }
}
