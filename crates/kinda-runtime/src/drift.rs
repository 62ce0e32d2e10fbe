//! `~drift` / `~time drift` (spec §4.2): a variable tagged for drift
//! accumulates a fuzzy nudge on every read, growing with how many times
//! it's been accessed — state that outlives a single statement, unlike the
//! other primitives.

use kinda_personality::PersonalityContext;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DriftKind {
    Int,
    Float,
}

#[derive(Debug, Default)]
pub struct DriftState {
    accesses: HashMap<String, (DriftKind, u64)>,
}

impl DriftState {
    pub fn new() -> Self {
        Self::default()
    }

    fn init(&mut self, name: &str, kind: DriftKind) {
        self.accesses.entry(name.to_string()).or_insert((kind, 0));
    }

    pub fn init_int(&mut self, name: &str) {
        self.init(name, DriftKind::Int);
    }

    pub fn init_float(&mut self, name: &str) {
        self.init(name, DriftKind::Float);
    }

    /// Magnitude of drift to add this access: grows with `sqrt(accesses)`
    /// so early reads barely move and long-lived state wanders further.
    fn accumulated_drift(&mut self, ctx: &mut PersonalityContext, name: &str) -> f64 {
        let entry = self
            .accesses
            .entry(name.to_string())
            .or_insert((DriftKind::Float, 0));
        entry.1 += 1;
        let scale = (entry.1 as f64).sqrt() * ctx.chaos_variance();
        ctx.rng_mut().normal(0.0, scale)
    }

    /// Reset every tracked variable's access count (spec §9 reseed
    /// behavior: drift state is part of what a reseed must clear).
    pub fn reset(&mut self) {
        self.accesses.clear();
    }
}

pub fn drift_access(state: &mut DriftState, ctx: &mut PersonalityContext, name: &str, value: f64) -> f64 {
    value + state.accumulated_drift(ctx, name)
}

pub fn time_drift_int(state: &mut DriftState, name: &str, value: i64) -> i64 {
    state.init_int(name);
    value
}

pub fn time_drift_float(state: &mut DriftState, name: &str, value: f64) -> f64 {
    state.init_float(name);
    value
}

#[cfg(test)]
mod tests {
    use super::*;
    use kinda_personality::profile::PLAYFUL;

    #[test]
    fn drift_grows_with_repeated_access() {
        let mut state = DriftState::new();
        let mut ctx = PersonalityContext::new(PLAYFUL, 11);
        state.init_float("score");

        let mut deltas = Vec::new();
        for _ in 0..50 {
            let before = 100.0;
            let after = drift_access(&mut state, &mut ctx, "score", before);
            deltas.push((after - before).abs());
        }
        let early_avg: f64 = deltas[0..5].iter().sum::<f64>() / 5.0;
        let late_avg: f64 = deltas[45..50].iter().sum::<f64>() / 5.0;
        assert!(late_avg > early_avg * 0.5, "expected drift magnitude to grow over time");
    }

    #[test]
    fn reset_clears_access_counts() {
        let mut state = DriftState::new();
        let mut ctx = PersonalityContext::new(PLAYFUL, 11);
        state.init_float("x");
        for _ in 0..10 {
            drift_access(&mut state, &mut ctx, "x", 0.0);
        }
        state.reset();
        assert!(state.accesses.is_empty());
    }
}
