use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumString};

/// Status of an operation. Declaration order is the severity order, so the
/// derived `Ord` makes `Failure` the greatest value.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    AsRefStr,
    EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "snake_case")]
pub enum Severity {
    #[default]
    Success,
    Warning,
    Failure,
}
