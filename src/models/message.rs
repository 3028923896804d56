use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumString, VariantNames};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    AsRefStr,
    EnumString,
    VariantNames,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "snake_case")]
pub enum MessageKind {
    Info,
    Warning,
    Error,
}

/// Selects messages by kind. `Any` is only ever a filter, never a stored kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MessageFilter {
    #[default]
    Any,
    Kind(MessageKind),
}

impl MessageFilter {
    pub fn matches(self, kind: MessageKind) -> bool {
        match self {
            Self::Any => true,
            Self::Kind(wanted) => wanted == kind,
        }
    }
}

impl From<MessageKind> for MessageFilter {
    fn from(kind: MessageKind) -> Self {
        Self::Kind(kind)
    }
}

/// One diagnostic event recorded by an outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    kind: MessageKind,
    text: String,
}

impl Message {
    pub(crate) fn new(kind: MessageKind, text: String) -> Self {
        Self { kind, text }
    }

    pub fn kind(&self) -> MessageKind {
        self.kind
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::any_info(MessageFilter::Any, MessageKind::Info, true)]
    #[case::any_error(MessageFilter::Any, MessageKind::Error, true)]
    #[case::same_kind(MessageFilter::Kind(MessageKind::Warning), MessageKind::Warning, true)]
    #[case::other_kind(MessageFilter::Kind(MessageKind::Warning), MessageKind::Info, false)]
    fn filter_matches(
        #[case] filter: MessageFilter,
        #[case] kind: MessageKind,
        #[case] expected: bool,
    ) {
        assert_eq!(filter.matches(kind), expected);
    }

    #[test]
    fn kind_converts_into_filter() {
        let filter: MessageFilter = MessageKind::Error.into();
        assert_eq!(filter, MessageFilter::Kind(MessageKind::Error));
        assert_eq!(MessageFilter::default(), MessageFilter::Any);
    }

    // The wire form is lowercase, so persisted messages read naturally.
    #[test]
    fn message_serializes_lowercase_kind() {
        let message = Message::new(MessageKind::Warning, "disk nearly full".to_string());
        let json = serde_json::to_string(&message).unwrap();
        assert_eq!(json, r#"{"kind":"warning","text":"disk nearly full"}"#);
    }
}
