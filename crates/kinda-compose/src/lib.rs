//! The Composition Framework (C7): alternate implementations of constructs
//! that already have a dependency in the Construct Registry, built by
//! composing the simpler constructs they depend on instead of rewriting the
//! logic from scratch.

pub mod ish;
pub mod registry;
pub mod sorta;

pub use ish::IshToleranceComposition;
pub use registry::CompositionRegistry;
pub use sorta::SortaComposition;

use kinda_personality::PersonalityContext;

/// `USE_COMPOSITION_ISH` dispatch (spec §6): when set, `~ish` comparisons
/// route through this crate's composition instead of `kinda-runtime`'s
/// direct implementation. Behaviorally equivalent today — the flag exists
/// so a composition can diverge from the primitive without a breaking
/// change to callers.
pub fn ish_comparison(
    use_composition: bool,
    registry: &mut CompositionRegistry,
    ctx: &mut PersonalityContext,
    a: f64,
    b: f64,
    tolerance: Option<f64>,
) -> bool {
    if use_composition {
        registry.ish_comparison(ctx, a, b, tolerance)
    } else {
        kinda_runtime::ish_comparison(ctx, a, b, tolerance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kinda_personality::profile::RELIABLE;

    #[test]
    fn both_dispatch_paths_run_without_panicking() {
        let mut registry = CompositionRegistry::new();
        let mut ctx_a = PersonalityContext::new(RELIABLE, 1);
        let mut ctx_b = PersonalityContext::new(RELIABLE, 1);
        ish_comparison(false, &mut registry, &mut ctx_a, 1.0, 1.0, Some(0.1));
        ish_comparison(true, &mut registry, &mut ctx_b, 1.0, 1.0, Some(0.1));
    }
}
