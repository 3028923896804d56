use std::str::FromStr;

use anyhow::{anyhow, Result};
use strsim::levenshtein;
use strum::VariantNames;

use crate::models::{MessageFilter, MessageKind};

/// Find the most similar name from a list of candidates
pub fn find_similar<'a>(target: &str, candidates: &[&'a str]) -> Option<&'a str> {
    candidates
        .iter()
        .map(|&candidate| (candidate, levenshtein(target, candidate)))
        .filter(|(_, distance)| *distance <= 2)
        .min_by_key(|(_, distance)| *distance)
        .map(|(name, _)| name)
}

/// Parses a message filter from the command line: `any` or a message kind.
pub fn parse_filter(input: &str) -> Result<MessageFilter> {
    let input = input.trim().to_lowercase();
    if input == "any" {
        return Ok(MessageFilter::Any);
    }
    if let Ok(kind) = MessageKind::from_str(&input) {
        return Ok(kind.into());
    }

    let mut candidates = vec!["any"];
    candidates.extend_from_slice(MessageKind::VARIANTS);

    match find_similar(&input, &candidates) {
        Some(suggestion) => Err(anyhow!(
            "Unknown message kind: {input}\nDid you mean: {suggestion}"
        )),
        None => Err(anyhow!(
            "Unknown message kind: {input}\nExpected one of: {}",
            candidates.join(", ")
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_find_similar() {
        let candidates = vec!["info", "warning", "error"];

        assert_eq!(find_similar("warnign", &candidates), Some("warning"));

        assert_eq!(find_similar("eror", &candidates), Some("error"));

        // Very different input should return None
        assert_eq!(find_similar("zzzzzzzz", &candidates), None);
    }

    #[rstest]
    #[case("any", MessageFilter::Any)]
    #[case("info", MessageFilter::Kind(MessageKind::Info))]
    #[case("Warning", MessageFilter::Kind(MessageKind::Warning))]
    #[case(" error ", MessageFilter::Kind(MessageKind::Error))]
    fn parses_known_filters(#[case] input: &str, #[case] expected: MessageFilter) {
        assert_eq!(parse_filter(input).unwrap(), expected);
    }

    #[test]
    fn typo_gets_suggestion() {
        let err = parse_filter("infp").unwrap_err().to_string();
        assert!(err.contains("Did you mean: info"));
    }

    #[test]
    fn garbage_lists_choices() {
        let err = parse_filter("nonsense").unwrap_err().to_string();
        assert!(err.contains("Expected one of: any, info, warning, error"));
    }
}
