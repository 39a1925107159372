//! Choosing a replacement among homophone candidates.

use rand::{rngs::StdRng, rngs::ThreadRng, Rng, SeedableRng};

/// Chooses one of the candidates for a replacement.
pub trait Picker {
    /// `candidates` is never empty and the returned value must be one of its elements.
    fn pick<'a>(&mut self, candidates: &[&'a str]) -> &'a str;
}

impl<P: Picker + ?Sized> Picker for &mut P {
    fn pick<'a>(&mut self, candidates: &[&'a str]) -> &'a str {
        (**self).pick(candidates)
    }
}

/// Picks uniformly at random.
#[derive(Debug, Clone)]
pub struct RandomPicker<R> {
    rng: R,
}

impl RandomPicker<ThreadRng> {
    pub fn thread() -> Self {
        Self { rng: rand::rng() }
    }
}

impl RandomPicker<StdRng> {
    /// A picker whose choices are reproducible for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> RandomPicker<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Picker for RandomPicker<R> {
    fn pick<'a>(&mut self, candidates: &[&'a str]) -> &'a str {
        candidates[self.rng.random_range(0..candidates.len())]
    }
}
