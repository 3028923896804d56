use anyhow::Result;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;

use super::lucky::{self, Search};
use crate::models::Severity;
use crate::outcome::Outcome;
use crate::sink::Sink;
use crate::valued::ValuedOutcome;

pub const FOUND: &str = "Found a result!";
pub const NOT_MATCHED: &str = "Failed to find a match.";
pub const SEPARATOR: &str = "-----------------------------------------------";
pub const ROUND_LABEL: &str = "round";

/// What one round produced: both searches and their merge.
#[derive(Debug, Clone, Serialize)]
pub struct RoundReport {
    pub round: u32,
    pub plain: Outcome,
    pub valued: ValuedOutcome<u32>,
    pub combined: Outcome,
}

#[derive(Debug, Clone, Copy)]
pub struct RunOptions {
    pub rounds: u32,
    pub search: Search,
    pub seed: Option<u64>,
}

pub fn rng_for(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

pub fn run(options: &RunOptions, sink: &mut dyn Sink) -> Result<Vec<RoundReport>> {
    options.search.validate()?;
    tracing::debug!(rounds = options.rounds, seed = ?options.seed, "starting lucky-number rounds");

    let mut rng = rng_for(options.seed);
    let mut reports = Vec::new();
    for round in 1..=options.rounds {
        reports.push(play_round(round, &mut rng, &options.search, sink));
    }
    Ok(reports)
}

/// Runs both searches, reports each, then merges the valued outcome into the
/// plain one and reports the merge.
pub fn play_round(
    round: u32,
    rng: &mut StdRng,
    search: &Search,
    sink: &mut dyn Sink,
) -> RoundReport {
    tracing::debug!(round, "playing round");

    let plain = lucky::find_lucky(rng, search);
    plain.log_result_with(sink, "find_lucky");
    if plain.severity() != Severity::Success {
        sink.info(NOT_MATCHED);
    } else {
        sink.info(FOUND);
    }

    let valued = lucky::find_lucky_value(rng, search);
    valued.log_result_with(sink, "find_lucky_value");
    match valued.value() {
        Some(num) if valued.is_ok() => sink.info(&format!("{FOUND} Result: {num}")),
        _ => sink.info(NOT_MATCHED),
    }

    sink.info(SEPARATOR);

    let mut combined = plain.clone();
    combined.incorporate(&valued);
    combined.log_result_with(sink, ROUND_LABEL);

    RoundReport {
        round,
        plain,
        valued,
        combined,
    }
}
