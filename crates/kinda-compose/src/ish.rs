//! `~ish` expressed as a composition of two simpler constructs (spec §4.2
//! table: `ish` `depends_on` `[kinda_float, chaos_tolerance, probably]`)
//! rather than `kinda-runtime`'s single monolithic function.

use kinda_personality::PersonalityContext;
use kinda_runtime::{kinda_float, probably};

pub struct IshToleranceComposition;

impl IshToleranceComposition {
    pub fn evaluate(&self, ctx: &mut PersonalityContext, a: f64, b: f64, tolerance: f64) -> bool {
        let fuzzed_a = kinda_float(ctx, a);
        let fuzzed_b = kinda_float(ctx, b);
        let close = (fuzzed_a - fuzzed_b).abs() <= tolerance;
        probably(ctx, close)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kinda_personality::profile::RELIABLE;

    #[test]
    fn close_values_are_usually_ish_equal() {
        let mut ctx = PersonalityContext::new(RELIABLE, 4);
        let composition = IshToleranceComposition;
        let mut true_count = 0;
        for _ in 0..200 {
            if composition.evaluate(&mut ctx, 5.0, 5.0, 0.01) {
                true_count += 1;
            }
        }
        assert!(true_count > 100);
    }
}
