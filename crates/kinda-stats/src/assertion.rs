//! `assert_probability` (spec §4.8): the test-facing assertion that a
//! fuzzy construct's observed success rate is statistically consistent with
//! an expected probability, rather than demanding exact equality.

use crate::wilson::wilson_interval;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StatsError {
    #[error(
        "observed rate {observed:.4} over {trials} trials excludes expected {expected:.4} \
         (Wilson {confidence:.2} interval was [{lower:.4}, {upper:.4}])"
    )]
    ProbabilityOutOfBounds {
        observed: f64,
        expected: f64,
        lower: f64,
        upper: f64,
        confidence: f64,
        trials: u64,
    },
}

pub type Result<T> = std::result::Result<T, StatsError>;

/// Does `expected_p` fall inside the Wilson interval for `successes` out of
/// `trials` at `confidence`? Use this instead of comparing an observed rate
/// to an exact float — fuzzy constructs are never going to land on the
/// expected probability bit-for-bit.
pub fn assert_probability(successes: u64, trials: u64, expected_p: f64, confidence: f64) -> Result<()> {
    let (lower, upper) = wilson_interval(successes, trials, confidence);
    if expected_p < lower || expected_p > upper {
        return Err(StatsError::ProbabilityOutOfBounds {
            observed: successes as f64 / trials.max(1) as f64,
            expected: expected_p,
            lower,
            upper,
            confidence,
            trials,
        });
    }
    Ok(())
}
