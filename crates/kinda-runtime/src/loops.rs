//! Probabilistic loop constructs (spec §4.6.L / C6.L): every one of these
//! wraps a decision — continue, skip, how many times, stop — that a plain
//! `while`/`for` can't express on its own.

use kinda_personality::PersonalityContext;
use kinda_stats::EventuallyEvaluator;

/// `~sometimes_while cond:` — besides `cond` itself, keep going only with
/// the profile's per-iteration continue probability.
pub fn sometimes_while_continue(ctx: &mut PersonalityContext) -> bool {
    let probability = ctx.personality_loop_parameters().sometimes_while_probability;
    ctx.rng_mut().uniform() < probability
}

/// `~maybe_for var in iterable:` — run the body for this item or skip it.
pub fn maybe_for_execute(ctx: &mut PersonalityContext) -> bool {
    let probability = ctx.personality_loop_parameters().maybe_for_probability;
    ctx.rng_mut().uniform() < probability
}

/// `~kinda_repeat(n)` — fuzz the repeat count itself, never below 1 for a
/// positive `n` and never negative.
pub fn kinda_repeat_count(ctx: &mut PersonalityContext, n: i64) -> i64 {
    let sigma = ctx.personality_loop_parameters().repeat_variance_pct * n as f64;
    let sampled = ctx.rng_mut().normal(n as f64, sigma).round() as i64;
    let floor = if n >= 1 { 1 } else { 0 };
    sampled.max(floor)
}

/// `~eventually_until cond:` — stop the loop once the running Wilson lower
/// bound on `cond` crosses the profile's confidence threshold, or once
/// `max_iterations` is hit (spec §6 `MAX_EVENTUALLY_ITERATIONS`), whichever
/// comes first.
pub fn eventually_until_should_stop(
    evaluator: &mut EventuallyEvaluator,
    ctx: &PersonalityContext,
    condition_is_true: bool,
    max_iterations: Option<u64>,
) -> bool {
    evaluator.record(condition_is_true);
    let confidence = ctx.personality_loop_parameters().eventually_until_confidence;
    if evaluator.confidence_met(confidence) {
        return true;
    }
    matches!(max_iterations, Some(cap) if evaluator.trials() >= cap)
}

#[cfg(test)]
mod tests {
    use super::*;
    use kinda_personality::profile::RELIABLE;

    #[test]
    fn kinda_repeat_count_never_drops_below_one_for_positive_n() {
        let mut ctx = PersonalityContext::new(RELIABLE, 5);
        for _ in 0..500 {
            assert!(kinda_repeat_count(&mut ctx, 3) >= 1);
        }
    }

    #[test]
    fn kinda_repeat_count_of_zero_can_be_zero() {
        let mut ctx = PersonalityContext::new(RELIABLE, 5);
        for _ in 0..50 {
            assert!(kinda_repeat_count(&mut ctx, 0) >= 0);
        }
    }

    #[test]
    fn eventually_until_stops_once_confident() {
        let mut ctx = PersonalityContext::new(RELIABLE, 9);
        let mut evaluator = EventuallyEvaluator::new();
        let mut stopped = false;
        for _ in 0..500 {
            if eventually_until_should_stop(&mut evaluator, &ctx, true, None) {
                stopped = true;
                break;
            }
        }
        assert!(stopped, "expected a consistently-true condition to reach confidence");
    }

    #[test]
    fn eventually_until_respects_iteration_cap() {
        let mut ctx = PersonalityContext::new(RELIABLE, 9);
        let mut evaluator = EventuallyEvaluator::new();
        let mut stop_iteration = None;
        for i in 1..=20u64 {
            if eventually_until_should_stop(&mut evaluator, &ctx, i % 2 == 0, Some(10)) {
                stop_iteration = Some(i);
                break;
            }
        }
        assert_eq!(stop_iteration, Some(10));
    }
}
