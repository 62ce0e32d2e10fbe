//! The Personality Engine (C1) and Seeding/Reproducibility layer (C9).

pub mod context;
pub mod profile;
pub mod rng;
pub mod style;

pub use context::{PersonalityContext, Snapshot};
pub use profile::{ChaosProfile, IntFuzzRange, LoopParameters};
pub use rng::SeededRng;
pub use style::{ErrorStyle, MessageKind};

/// Fallback profile when a requested mood is unknown (spec §4.1).
pub const DEFAULT_PROFILE: ChaosProfile = profile::PLAYFUL;

pub fn lookup_profile(name: &str) -> Option<ChaosProfile> {
    profile::lookup(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instability_stays_in_unit_interval() {
        let mut ctx = PersonalityContext::new(profile::CHAOTIC, 1);
        for i in 0..10_000 {
            ctx.update_chaos_state(i % 3 == 0);
            let level = ctx.instability_level();
            assert!((0.0..=1.0).contains(&level), "instability escaped [0,1]: {level}");
        }
    }

    #[test]
    fn execution_count_is_monotonic() {
        let mut ctx = PersonalityContext::new(profile::RELIABLE, 1);
        let mut previous = ctx.execution_count();
        for _ in 0..500 {
            ctx.update_chaos_state(false);
            let next = ctx.execution_count();
            assert!(next >= previous);
            previous = next;
        }
    }

    #[test]
    fn unknown_mood_falls_back_to_playful() {
        let mut ctx = PersonalityContext::new(profile::RELIABLE, 1);
        ctx.set_mood_or_fallback("does-not-exist");
        assert_eq!(ctx.profile().name, "playful");
    }

    #[test]
    fn reseed_resets_counters() {
        let mut ctx = PersonalityContext::new(profile::RELIABLE, 1);
        for _ in 0..10 {
            ctx.update_chaos_state(true);
        }
        assert!(ctx.instability_level() > 0.0);
        ctx.seed(99);
        assert_eq!(ctx.instability_level(), 0.0);
        assert_eq!(ctx.execution_count(), 0);
    }

    #[test]
    fn same_seed_same_probability_sequence() {
        let mut a = PersonalityContext::new(profile::PLAYFUL, 42);
        let mut b = PersonalityContext::new(profile::PLAYFUL, 42);
        for _ in 0..100 {
            let pa = a.chaos_probability("sometimes", true);
            let pb = b.chaos_probability("sometimes", true);
            assert_eq!(pa, pb);
            let da = a.rng_mut().uniform();
            let db = b.rng_mut().uniform();
            assert_eq!(da, db);
            a.update_chaos_state(da >= pa);
            b.update_chaos_state(db >= pb);
        }
    }
}
