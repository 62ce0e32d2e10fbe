//! `PersonalityContext` (spec §3, §4.1): the process-wide mutable state
//! threaded through every fuzzy-runtime call.

use crate::profile::{ChaosProfile, LoopParameters, IntFuzzRange};
use crate::rng::SeededRng;
use crate::style::{self, ErrorStyle, MessageKind};
use crate::{lookup_profile, DEFAULT_PROFILE};
use kinda_core::Config;
use tracing::{debug, info, warn};

const INSTABILITY_DELTA: f64 = 0.1;

/// Read-only view of the counters, for logging/testing (spec §4.1
/// `snapshot()`). Not wired back into the context — mutating a snapshot has
/// no effect on the live state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot {
    pub profile_name: &'static str,
    pub instability_level: f64,
    pub execution_count: u64,
    pub seed: Option<u64>,
}

pub struct PersonalityContext {
    profile: ChaosProfile,
    instability_level: f64,
    execution_count: u64,
    rng: SeededRng,
    seed: Option<u64>,
}

impl PersonalityContext {
    pub fn new(profile: ChaosProfile, seed: u64) -> Self {
        Self {
            profile,
            instability_level: 0.0,
            execution_count: 0,
            rng: SeededRng::from_seed(seed),
            seed: Some(seed),
        }
    }

    /// Build from environment configuration (spec §6): `MOOD`, `SEED`,
    /// `CHAOS_LEVEL`. Unknown/absent values fall back per spec §4.1/§7
    /// rather than erroring the whole process.
    pub fn from_config(config: &Config) -> Self {
        let mut profile = config
            .mood
            .as_deref()
            .and_then(lookup_profile)
            .unwrap_or_else(|| {
                if let Some(mood) = &config.mood {
                    warn!(mood, "unknown MOOD, falling back to playful");
                }
                DEFAULT_PROFILE
            });
        if let Some(amplifier) = config.chaos_amplifier_override {
            profile.chaos_amplifier = amplifier;
        }
        let mut ctx = match config.seed {
            Some(seed) => Self::new(profile, seed),
            None => {
                let (rng, seed) = SeededRng::from_entropy();
                info!(seed, "no SEED set, generated one from entropy");
                Self {
                    profile,
                    instability_level: 0.0,
                    execution_count: 0,
                    rng,
                    seed: Some(seed),
                }
            }
        };
        ctx.profile = profile;
        ctx
    }

    /// Switch profile by registered name (spec §4.1). Callers that want the
    /// "fall back to `playful` with a diagnostic" recovery policy should use
    /// [`Self::set_mood_or_fallback`] instead.
    pub fn set_mood(&mut self, name: &str) -> kinda_core::Result<()> {
        match lookup_profile(name) {
            Some(profile) => {
                self.profile = profile;
                Ok(())
            }
            None => Err(kinda_core::Error::UnknownProfile(name.to_string())),
        }
    }

    /// Recovering variant used by the transformer's `~kinda mood` handling
    /// and the CLI: unknown names never abort, they fall back to `playful`
    /// with a logged diagnostic (spec §7: `PersonalityError` is recovered
    /// locally, never fatal).
    pub fn set_mood_or_fallback(&mut self, name: &str) {
        if self.set_mood(name).is_err() {
            warn!(mood = name, "unknown personality profile, falling back to playful");
            self.profile = DEFAULT_PROFILE;
        }
    }

    /// Push `profile` for the duration of `f`, then restore the previous
    /// one. Models nested `~kinda mood` scopes (spec §9) without a global
    /// singleton.
    pub fn with_scope<T>(&mut self, profile: ChaosProfile, f: impl FnOnce(&mut Self) -> T) -> T {
        let previous = self.profile;
        self.profile = profile;
        let result = f(self);
        self.profile = previous;
        result
    }

    /// (Re)seed deterministically. Resets `instability_level` and
    /// `execution_count` to 0 (spec §3, §9).
    pub fn seed(&mut self, value: u64) {
        self.rng = SeededRng::from_seed(value);
        self.seed = Some(value);
        self.instability_level = 0.0;
        self.execution_count = 0;
    }

    pub fn seed_from_entropy(&mut self) {
        let (rng, seed) = SeededRng::from_entropy();
        info!(seed, "reseeded from entropy");
        self.rng = rng;
        self.seed = Some(seed);
        self.instability_level = 0.0;
        self.execution_count = 0;
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            profile_name: self.profile.name,
            instability_level: self.instability_level,
            execution_count: self.execution_count,
            seed: self.seed,
        }
    }

    pub fn rng_mut(&mut self) -> &mut SeededRng {
        &mut self.rng
    }

    pub fn profile(&self) -> ChaosProfile {
        self.profile
    }

    pub fn instability_level(&self) -> f64 {
        self.instability_level
    }

    pub fn execution_count(&self) -> u64 {
        self.execution_count
    }

    /// Adjusted probability for `construct_name` given the truth of its
    /// condition (spec §4.1 "Probability adjustment"). Unknown names
    /// default to the `sometimes` base parameters with a debug log (spec
    /// §4.1 failure semantics).
    pub fn chaos_probability(&mut self, construct_name: &str, condition_is_true: bool) -> f64 {
        let (base, is_positive) = match construct_name {
            "sometimes" => (self.profile.sometimes_base, true),
            "maybe" => (self.profile.maybe_base, true),
            "probably" => (self.profile.probably_base, true),
            "rarely" => (self.profile.rarely_base, false),
            other => {
                debug!(construct = other, "unknown construct, defaulting to `sometimes` parameters");
                (self.profile.sometimes_base, true)
            }
        };

        let amplifier = self.profile.chaos_amplifier;
        let p1 = if amplifier > 1.0 {
            base - (base - 0.5) * (amplifier - 1.0).min(1.0)
        } else if amplifier < 1.0 {
            let target = if condition_is_true { 0.95 } else { 0.05 };
            base + (target - base) * (1.0 - amplifier)
        } else {
            base
        };

        let cascade = self.instability_level * self.profile.cascade_strength;
        let p2 = if is_positive {
            p1 * (1.0 - cascade)
        } else {
            p1 * (1.0 + cascade)
        };

        p2.clamp(0.0, 1.0)
    }

    /// Integer fuzz range for `kinda_int` (spec §4.1 `chaos_fuzz_range`).
    pub fn chaos_fuzz_range_int(&self) -> IntFuzzRange {
        self.profile.int_fuzz_range
    }

    /// Float fuzz standard deviation for `kinda_float` (spec §4.1
    /// `chaos_fuzz_range`).
    pub fn chaos_fuzz_range_float(&self) -> f64 {
        self.profile.float_variance
    }

    /// Scalar variance used by `~ish`/drift (spec §4.1 `chaos_variance`).
    pub fn chaos_variance(&self) -> f64 {
        self.profile.float_variance
    }

    /// Scalar tolerance used by `~ish` comparison (spec §4.1
    /// `chaos_tolerance`). The data model (spec §3) gives `ChaosProfile` no
    /// dedicated tolerance field, so this is derived from variance — see
    /// DESIGN.md for the reasoning.
    pub fn chaos_tolerance(&self) -> f64 {
        self.profile.float_variance * 2.0
    }

    pub fn error_message_style(&self) -> ErrorStyle {
        ErrorStyle::from_snark_level(self.profile.error_snark_level)
    }

    pub fn styled_message(&mut self, kind: MessageKind) -> &'static str {
        let style = self.error_message_style();
        style::render(&mut self.rng.inner_mut(), kind, style)
    }

    pub fn personality_loop_parameters(&self) -> LoopParameters {
        self.profile.loop_parameters
    }

    /// Mutate instability after a primitive's decision (spec §4.1
    /// "Instability update"). `execution_count` increments unconditionally.
    pub fn update_chaos_state(&mut self, failed: bool) {
        let delta = if failed { INSTABILITY_DELTA } else { -INSTABILITY_DELTA * 0.5 };
        self.instability_level =
            (self.instability_level + delta * self.profile.cascade_strength).clamp(0.0, 1.0);
        self.execution_count += 1;
    }
}
