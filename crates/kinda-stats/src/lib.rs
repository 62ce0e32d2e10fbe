//! Statistical Assertions (C8): Wilson-score intervals over fuzzy outcomes,
//! for tests that expect a probability rather than an exact value, and for
//! `~eventually_until`'s termination condition.

pub mod assertion;
pub mod evaluator;
pub mod normal;
pub mod wilson;

pub use assertion::{assert_probability, Result, StatsError};
pub use evaluator::{assert_eventually, EventuallyEvaluator};
pub use normal::normal_quantile;
pub use wilson::{wilson_interval, wilson_lower_bound};
