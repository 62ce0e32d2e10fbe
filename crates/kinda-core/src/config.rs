//! Environment-variable configuration (spec §6).
//!
//! Kinda-Lang has no config file; every tunable is read from the process
//! environment once, at startup, the way spec.md §6 enumerates it.

use tracing::warn;

/// Recognized environment variables, parsed into typed fields. Unset or
/// unparseable values fall back to `None`/defaults rather than erroring —
/// env config is advisory, never fatal (mirrors `PersonalityError`'s
/// local-recovery policy in spec §7).
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub mood: Option<String>,
    pub chaos_amplifier_override: Option<f64>,
    pub seed: Option<u64>,
    pub use_composition_ish: bool,
    pub max_eventually_iterations: Option<u64>,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            mood: std::env::var("MOOD").ok(),
            chaos_amplifier_override: std::env::var("CHAOS_LEVEL")
                .ok()
                .and_then(|s| s.parse::<u8>().ok())
                .map(chaos_level_to_amplifier),
            seed: std::env::var("SEED").ok().and_then(|s| s.parse().ok()),
            use_composition_ish: std::env::var("USE_COMPOSITION_ISH")
                .ok()
                .map(|s| s.eq_ignore_ascii_case("true") || s == "1")
                .unwrap_or(true),
            max_eventually_iterations: std::env::var("MAX_EVENTUALLY_ITERATIONS")
                .ok()
                .and_then(|s| s.parse().ok()),
        }
    }
}

/// `CHAOS_LEVEL` (1-10) -> `chaos_amplifier` fixed table.
///
/// 1 is maximally conservative (amplifier 0.4, pulls toward certainty), 10 is
/// maximally unpredictable (amplifier 2.5, pulls toward 0.5). Out-of-range
/// values clamp and log rather than panicking.
pub fn chaos_level_to_amplifier(level: u8) -> f64 {
    let clamped = level.clamp(1, 10);
    if clamped != level {
        warn!(level, clamped, "CHAOS_LEVEL out of [1,10], clamped");
    }
    0.4 + (clamped - 1) as f64 * (2.5 - 0.4) / 9.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chaos_level_endpoints() {
        assert!((chaos_level_to_amplifier(1) - 0.4).abs() < 1e-9);
        assert!((chaos_level_to_amplifier(10) - 2.5).abs() < 1e-9);
    }

    #[test]
    fn chaos_level_clamps_out_of_range() {
        assert_eq!(chaos_level_to_amplifier(0), chaos_level_to_amplifier(1));
        assert_eq!(chaos_level_to_amplifier(20), chaos_level_to_amplifier(10));
    }
}
