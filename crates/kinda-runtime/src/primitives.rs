//! Core fuzzy values (spec §4.6): these are native-Rust twins of the
//! host-language bodies in `kinda_registry::table` — same semantics, used
//! when `kinda run`/`kinda interpret` execute a `.knda` program directly
//! instead of emitting host text for an external interpreter.

use kinda_personality::{MessageKind, PersonalityContext};

pub fn kinda_int(ctx: &mut PersonalityContext, value: i64) -> i64 {
    let range = ctx.chaos_fuzz_range_int();
    let offset = ctx.rng_mut().gen_range_i64(range.low, range.high);
    value.saturating_add(offset)
}

pub fn kinda_float(ctx: &mut PersonalityContext, value: f64) -> f64 {
    let sigma = ctx.chaos_fuzz_range_float();
    value + ctx.rng_mut().normal(0.0, sigma)
}

pub fn kinda_bool(ctx: &mut PersonalityContext, value: bool) -> bool {
    let flip_probability = ctx.chaos_probability("kinda_bool", value);
    if ctx.rng_mut().uniform() < flip_probability {
        !value
    } else {
        value
    }
}

/// `~=` fuzzy reassignment (spec §4.2): routes to `kinda_float`/`kinda_int`
/// depending on the value's native type, mirroring the host body's
/// `isinstance(value, float)` branch.
pub fn fuzzy_reassign_float(ctx: &mut PersonalityContext, value: f64) -> f64 {
    kinda_float(ctx, value)
}

pub fn fuzzy_reassign_int(ctx: &mut PersonalityContext, value: i64) -> i64 {
    kinda_int(ctx, value)
}

/// Outcome of a `~sorta print` call: the library never touches stdout
/// directly, the caller decides what to do with the text.
#[derive(Debug, Clone, PartialEq)]
pub enum PrintOutcome {
    Printed(String),
    Suppressed(&'static str),
}

pub fn sorta_print(ctx: &mut PersonalityContext, args: &[String]) -> PrintOutcome {
    let probability = ctx.chaos_probability("sorta_print", true);
    let should_print = ctx.rng_mut().uniform() < probability;
    ctx.update_chaos_state(!should_print);
    if should_print {
        PrintOutcome::Printed(args.join(" "))
    } else {
        PrintOutcome::Suppressed(ctx.styled_message(MessageKind::SortaShrug))
    }
}

/// `~sometimes(cond):` (spec §4.1/§4.2): true with a chaos-adjusted
/// probability, and only ever true if `condition` itself holds.
pub fn sometimes(ctx: &mut PersonalityContext, condition: bool) -> bool {
    condition_construct(ctx, "sometimes", condition)
}

pub fn maybe(ctx: &mut PersonalityContext, condition: bool) -> bool {
    condition_construct(ctx, "maybe", condition)
}

pub fn probably(ctx: &mut PersonalityContext, condition: bool) -> bool {
    condition_construct(ctx, "probably", condition)
}

pub fn rarely(ctx: &mut PersonalityContext, condition: bool) -> bool {
    condition_construct(ctx, "rarely", condition)
}

fn condition_construct(ctx: &mut PersonalityContext, name: &str, condition: bool) -> bool {
    let probability = ctx.chaos_probability(name, condition);
    let result = ctx.rng_mut().uniform() < probability && condition;
    ctx.update_chaos_state(!result);
    result
}

/// `a ~ish b` in boolean context (spec §4.4): fuzzy-equal within a
/// tolerance, then filtered through `probably` so the comparison itself has
/// a chance of reading as false even when the values are close.
pub fn ish_comparison(ctx: &mut PersonalityContext, a: f64, b: f64, tolerance: Option<f64>) -> bool {
    let tolerance = tolerance.unwrap_or_else(|| ctx.chaos_tolerance());
    let fuzzed_a = kinda_float(ctx, a);
    let fuzzed_b = kinda_float(ctx, b);
    let close = (fuzzed_a - fuzzed_b).abs() <= tolerance;
    probably(ctx, close)
}

/// `var ~ish target` in statement context (spec §4.4): nudge `current`
/// toward `target` by a fuzzy half-step, or just add fuzzy drift if there's
/// no target to aim at.
pub fn ish_value(ctx: &mut PersonalityContext, current: f64, target: Option<f64>) -> f64 {
    match target {
        None => {
            let variance = ctx.chaos_variance();
            current + kinda_float(ctx, variance)
        }
        Some(target) if sometimes(ctx, true) => {
            let half_step = (target - current) * 0.5;
            current + kinda_float(ctx, half_step)
        }
        Some(_) => {
            let variance = ctx.chaos_variance();
            current + kinda_float(ctx, variance)
        }
    }
}

/// `expr ~welp fallback` (spec §4.3): `thunk` returning `None` stands in for
/// the host body's "raised or yielded Nothing" failure case.
pub fn welp_fallback<T>(
    ctx: &mut PersonalityContext,
    thunk: impl FnOnce() -> Option<T>,
    fallback: T,
) -> (T, Option<&'static str>) {
    match thunk() {
        Some(value) => (value, None),
        None => {
            let message = ctx.styled_message(MessageKind::WelpFallback);
            (fallback, Some(message))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kinda_personality::profile::RELIABLE;

    #[test]
    fn kinda_int_same_seed_same_sequence() {
        let mut a = PersonalityContext::new(RELIABLE, 7);
        let mut b = PersonalityContext::new(RELIABLE, 7);
        for _ in 0..20 {
            assert_eq!(kinda_int(&mut a, 10), kinda_int(&mut b, 10));
        }
    }

    #[test]
    fn welp_fallback_uses_value_on_success() {
        let mut ctx = PersonalityContext::new(RELIABLE, 1);
        let (value, message) = welp_fallback(&mut ctx, || Some(42), 0);
        assert_eq!(value, 42);
        assert!(message.is_none());
    }

    #[test]
    fn welp_fallback_uses_fallback_and_messages_on_failure() {
        let mut ctx = PersonalityContext::new(RELIABLE, 1);
        let (value, message) = welp_fallback(&mut ctx, || None::<i64>, -1);
        assert_eq!(value, -1);
        assert!(message.is_some());
    }

    #[test]
    fn ish_comparison_true_for_identical_values_under_reliable_profile() {
        let mut ctx = PersonalityContext::new(RELIABLE, 3);
        let mut true_count = 0;
        for _ in 0..200 {
            if ish_comparison(&mut ctx, 10.0, 10.0, Some(0.01)) {
                true_count += 1;
            }
        }
        assert!(true_count > 100, "expected mostly-true under reliable profile, got {true_count}/200");
    }
}
