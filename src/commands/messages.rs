use anyhow::Result;

use super::lucky::Search;
use super::run::{play_round, rng_for};
use crate::models::MessageFilter;
use crate::outcome::Outcome;
use crate::sink::{Sink, Uniform};

/// Plays one silent round and lists the combined messages that match
/// `filter`, followed by a count.
pub fn run(
    search: &Search,
    seed: Option<u64>,
    filter: MessageFilter,
    sink: &mut dyn Sink,
) -> Result<Outcome> {
    search.validate()?;

    let mut rng = rng_for(seed);
    let report = play_round(1, &mut rng, search, &mut Uniform(|_: &str| {}));
    let combined = report.combined;

    let footer = format!("{} message(s)", combined.count(filter));
    combined.log_all_messages(|line| sink.info(line), filter, "", &footer);
    Ok(combined)
}
