use anyhow::{bail, Result};
use rand::Rng;

use crate::outcome::Outcome;
use crate::valued::ValuedOutcome;

pub const NOT_FOUND: &str = "Didn't find a matching number.";

/// Parameters of the lucky-number search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Search {
    /// Maximum number of draws.
    pub attempts: u32,
    /// Draws are taken from `0..range`.
    pub range: u32,
    /// A draw is lucky when it is a multiple of this.
    pub modulus: u32,
}

impl Default for Search {
    fn default() -> Self {
        Self {
            attempts: 1000,
            range: 100_000,
            modulus: 1000,
        }
    }
}

impl Search {
    pub fn validate(&self) -> Result<()> {
        if self.range == 0 {
            bail!("Range must be greater than zero");
        }
        if self.modulus == 0 {
            bail!("Modulus must be greater than zero");
        }
        Ok(())
    }

    /// Returns the lucky number and the number of misses before it.
    fn draw<R: Rng>(&self, rng: &mut R) -> Option<(u32, u32)> {
        (0..self.attempts).find_map(|misses| {
            let num = rng.gen_range(0..self.range);
            (num % self.modulus == 0).then_some((num, misses))
        })
    }
}

/// An invalid search is reported as an error on the returned outcome.
pub fn find_lucky<R: Rng>(rng: &mut R, search: &Search) -> Outcome {
    let mut outcome = Outcome::new();
    if let Err(e) = search.validate() {
        outcome.add_error(e.to_string());
        return outcome;
    }
    record(&mut outcome, search.draw(rng));
    outcome
}

/// Same search as [`find_lucky`], also returning the number it found.
pub fn find_lucky_value<R: Rng>(rng: &mut R, search: &Search) -> ValuedOutcome<u32> {
    let mut outcome = ValuedOutcome::new();
    if let Err(e) = search.validate() {
        outcome.add_error(e.to_string());
        return outcome;
    }
    let found = search.draw(rng);
    record(&mut outcome, found);
    if let Some((num, _)) = found {
        outcome.set_value(num);
    }
    outcome
}

fn record(outcome: &mut Outcome, found: Option<(u32, u32)>) {
    match found {
        Some((num, misses)) => {
            outcome
                .add_info(format!("The lucky number is: {num}"))
                .add_info(format!("Attempts: {misses}"));
        }
        None => {
            outcome.add_error(NOT_FOUND);
        }
    }
}
