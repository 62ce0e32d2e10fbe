//! The single canonical RNG (spec §9, C9): every random draw made by C1,
//! C6, C7, and C8 routes through one instance of this wrapper. Forbidding
//! any other source of randomness in the core is what makes
//! `transform(seed, profile, source)` reproducible end to end.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub struct SeededRng {
    inner: StdRng,
}

impl SeededRng {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> (Self, u64) {
        // `StdRng::from_entropy` doesn't hand back the seed it used, and
        // spec §3 requires the seed to be "logged/recoverable" even when it
        // came from system entropy. Draw the recoverable seed ourselves and
        // derive the RNG from it, so entropy-seeded runs are just as
        // replayable as explicitly-seeded ones.
        let seed: u64 = rand::thread_rng().gen();
        (Self::from_seed(seed), seed)
    }

    pub fn uniform(&mut self) -> f64 {
        self.inner.gen_range(0.0..1.0)
    }

    pub fn gen_range_i64(&mut self, low: i64, high: i64) -> i64 {
        if low == high {
            return low;
        }
        self.inner.gen_range(low..=high)
    }

    pub fn gen_range_usize(&mut self, low: usize, high_exclusive: usize) -> usize {
        self.inner.gen_range(low..high_exclusive)
    }

    /// Standard normal sample via the Box-Muller transform. `rand_distr`
    /// isn't part of the retrieved dependency set, so this is hand-rolled
    /// rather than pulling in an unjustified crate for one function.
    pub fn standard_normal(&mut self) -> f64 {
        let u1 = self.uniform().max(f64::MIN_POSITIVE);
        let u2 = self.uniform();
        (-2.0 * u1.ln()).sqrt() * (std::f64::consts::TAU * u2).cos()
    }

    pub fn normal(&mut self, mean: f64, std_dev: f64) -> f64 {
        mean + self.standard_normal() * std_dev
    }

    /// Escape hatch for callers that need a `rand::Rng` directly (e.g.
    /// template selection in `style::render`).
    pub(crate) fn inner_mut(&mut self) -> &mut StdRng {
        &mut self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = SeededRng::from_seed(42);
        let mut b = SeededRng::from_seed(42);
        for _ in 0..50 {
            assert_eq!(a.uniform(), b.uniform());
        }
    }

    #[test]
    fn uniform_in_range() {
        let mut rng = SeededRng::from_seed(7);
        for _ in 0..1000 {
            let v = rng.uniform();
            assert!((0.0..1.0).contains(&v));
        }
    }
}
