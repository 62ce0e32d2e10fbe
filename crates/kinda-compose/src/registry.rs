//! `CompositionRegistry` (spec §4.7): owns the composed constructs plus a
//! small cache for the personality lookups they'd otherwise repeat.

use crate::ish::IshToleranceComposition;
use crate::sorta::SortaComposition;
use kinda_personality::PersonalityContext;
use kinda_runtime::PrintOutcome;
use std::collections::HashMap;

pub struct CompositionRegistry {
    ish: IshToleranceComposition,
    sorta: SortaComposition,
    tolerance_cache: HashMap<&'static str, f64>,
}

impl Default for CompositionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl CompositionRegistry {
    pub fn new() -> Self {
        Self {
            ish: IshToleranceComposition,
            sorta: SortaComposition,
            tolerance_cache: HashMap::new(),
        }
    }

    fn cached_tolerance(&mut self, ctx: &PersonalityContext) -> f64 {
        let profile_name = ctx.profile().name;
        *self
            .tolerance_cache
            .entry(profile_name)
            .or_insert_with(|| ctx.chaos_tolerance())
    }

    pub fn ish_comparison(
        &mut self,
        ctx: &mut PersonalityContext,
        a: f64,
        b: f64,
        tolerance: Option<f64>,
    ) -> bool {
        let tolerance = match tolerance {
            Some(t) => t,
            None => self.cached_tolerance(ctx),
        };
        self.ish.evaluate(ctx, a, b, tolerance)
    }

    pub fn sorta_print(&mut self, ctx: &mut PersonalityContext, args: &[String]) -> PrintOutcome {
        self.sorta.evaluate(ctx, args)
    }

    /// Clear every cached lookup. Called on `PersonalityContext::seed`
    /// (spec §9) so a reseed can't leave a stale tolerance behind from the
    /// previous profile.
    pub fn invalidate_cache(&mut self) {
        self.tolerance_cache.clear();
    }
}
