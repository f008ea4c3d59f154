use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

/// Uniform draws for the sample data generator and the live feed.
pub trait RandomSource: Send {
    /// A value from `[low, high)`.
    fn uniform(&mut self, low: f64, high: f64) -> f64;
}

impl<R: RngCore + Send> RandomSource for R {
    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        self.gen_range(low..high)
    }
}

/// Entropy-seeded generator for the running server.
pub fn from_entropy() -> Box<dyn RandomSource> {
    Box::new(StdRng::from_entropy())
}

/// Reproducible generator, same seed gives the same draws.
pub fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Seeded when `seed` is set, otherwise from entropy.
pub fn from_seed_or_entropy(seed: Option<u64>) -> Box<dyn RandomSource> {
    match seed {
        Some(seed) => Box::new(seeded(seed)),
        None => from_entropy(),
    }
}

/// Returns `value` for every draw, whatever the range.
#[cfg(test)]
pub struct FixedRandom(pub f64);

#[cfg(test)]
impl RandomSource for FixedRandom {
    fn uniform(&mut self, _low: f64, _high: f64) -> f64 {
        self.0
    }
}
