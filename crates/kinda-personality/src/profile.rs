//! Chaos profiles (spec §3): immutable value bundles of probabilities,
//! variances, and tone parameters.

/// A symmetric integer fuzz range `(-n, n)` used by `kinda_int`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntFuzzRange {
    pub low: i64,
    pub high: i64,
}

impl IntFuzzRange {
    pub fn symmetric(magnitude: i64) -> Self {
        Self {
            low: -magnitude,
            high: magnitude,
        }
    }

    pub fn max_abs(&self) -> i64 {
        self.low.abs().max(self.high.abs())
    }
}

/// Per-loop-construct tunables (spec §4.6.L), one set per profile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoopParameters {
    /// `~sometimes_while`: probability of continuing each iteration.
    pub sometimes_while_probability: f64,
    /// `~maybe_for`: probability of executing the body for each item.
    pub maybe_for_probability: f64,
    /// `~kinda_repeat(n)`: stddev of the repeat count as a fraction of `n`.
    pub repeat_variance_pct: f64,
    /// `~eventually_until`: Wilson-score confidence threshold to terminate.
    pub eventually_until_confidence: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChaosProfile {
    pub name: &'static str,
    pub sometimes_base: f64,
    pub maybe_base: f64,
    pub probably_base: f64,
    pub rarely_base: f64,
    pub int_fuzz_range: IntFuzzRange,
    pub float_variance: f64,
    pub chaos_amplifier: f64,
    pub cascade_strength: f64,
    pub error_snark_level: f64,
    pub loop_parameters: LoopParameters,
}

pub const RELIABLE: ChaosProfile = ChaosProfile {
    name: "reliable",
    sometimes_base: 0.90,
    maybe_base: 0.95,
    probably_base: 0.95,
    rarely_base: 0.05,
    int_fuzz_range: IntFuzzRange { low: -1, high: 1 },
    float_variance: 0.05,
    chaos_amplifier: 0.5,
    cascade_strength: 0.1,
    error_snark_level: 0.0,
    loop_parameters: LoopParameters {
        sometimes_while_probability: 0.90,
        maybe_for_probability: 0.95,
        repeat_variance_pct: 0.05,
        eventually_until_confidence: 0.95,
    },
};

pub const CAUTIOUS: ChaosProfile = ChaosProfile {
    name: "cautious",
    sometimes_base: 0.75,
    maybe_base: 0.80,
    probably_base: 0.85,
    rarely_base: 0.15,
    int_fuzz_range: IntFuzzRange { low: -1, high: 1 },
    float_variance: 0.10,
    chaos_amplifier: 0.8,
    cascade_strength: 0.2,
    error_snark_level: 0.3,
    loop_parameters: LoopParameters {
        sometimes_while_probability: 0.75,
        maybe_for_probability: 0.80,
        repeat_variance_pct: 0.10,
        eventually_until_confidence: 0.90,
    },
};

pub const PLAYFUL: ChaosProfile = ChaosProfile {
    name: "playful",
    sometimes_base: 0.5,
    maybe_base: 0.5,
    probably_base: 0.7,
    rarely_base: 0.3,
    int_fuzz_range: IntFuzzRange { low: -2, high: 2 },
    float_variance: 0.3,
    chaos_amplifier: 1.2,
    cascade_strength: 0.4,
    error_snark_level: 0.6,
    loop_parameters: LoopParameters {
        sometimes_while_probability: 0.5,
        maybe_for_probability: 0.5,
        repeat_variance_pct: 0.2,
        eventually_until_confidence: 0.80,
    },
};

pub const CHAOTIC: ChaosProfile = ChaosProfile {
    name: "chaotic",
    sometimes_base: 0.5,
    maybe_base: 0.5,
    probably_base: 0.6,
    rarely_base: 0.4,
    int_fuzz_range: IntFuzzRange { low: -5, high: 5 },
    float_variance: 0.8,
    chaos_amplifier: 2.0,
    cascade_strength: 0.6,
    error_snark_level: 1.0,
    loop_parameters: LoopParameters {
        sometimes_while_probability: 0.5,
        maybe_for_probability: 0.5,
        repeat_variance_pct: 0.3,
        eventually_until_confidence: 0.70,
    },
};

/// All built-in profiles, in registration order. Used by `set_mood` lookup
/// and by anything that needs to enumerate the known names (e.g. `--help`).
pub const BUILTIN_PROFILES: &[ChaosProfile] = &[RELIABLE, CAUTIOUS, PLAYFUL, CHAOTIC];

pub fn lookup(name: &str) -> Option<ChaosProfile> {
    BUILTIN_PROFILES.iter().copied().find(|p| p.name == name)
}
