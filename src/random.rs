use rand::{rngs::StdRng, Rng, SeedableRng};

/// Source of uniform draws in `[0, 1)` used by the forecaster.
///
/// Every generation call takes its own source, so concurrent callers never
/// share state and tests can replay an exact sequence.
pub trait RandomSource {
    fn next(&mut self) -> f64;
}

pub struct SystemRandom {
    rng: StdRng,
}

impl SystemRandom {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for SystemRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for SystemRandom {
    fn next(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}

/// Replays a fixed list of draws, wrapping around at the end.
#[derive(Debug, Clone)]
pub struct SequenceRandom {
    values: Vec<f64>,
    cursor: usize,
}

impl SequenceRandom {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values, cursor: 0 }
    }

    /// A source that always lands in the middle of every range: no jitter,
    /// midpoint random factor.
    pub fn neutral() -> Self {
        Self::new(vec![0.5])
    }
}

impl RandomSource for SequenceRandom {
    fn next(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.5;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor = self.cursor.wrapping_add(1);
        unit_interval(value)
    }
}

fn unit_interval(value: f64) -> f64 {
    if value.is_nan() {
        return 0.5;
    }
    value.max(0.0).min(1.0 - f64::EPSILON)
}
