//! Seeded pseudo-random sequence: a deliberately weak linear congruential
//! generator chosen for cross-platform reproducibility, not statistical
//! quality.
//!
//! ARCHITECTURAL RULE: this must never be replaced with a cryptographic or
//! platform-seeded source. Reproducibility against the existing render
//! corpus is the entire point: the same seed must yield the same draw
//! sequence on every build, forever.

const LCG_MULTIPLIER: u64 = 9301;
const LCG_INCREMENT: u64 = 49297;
const LCG_MODULUS: u64 = 233280;

/// Deterministic generator of values in `[0, 1)`.
///
/// State is local to one `generate_variations` invocation; a fresh instance
/// is created per document/seed and never shared across invocations.
#[derive(Debug)]
pub struct SeededRng {
    state: u64,
}

impl SeededRng {
    pub fn new(seed: u32) -> Self {
        Self { state: u64::from(seed) }
    }

    /// Advances the generator and returns the next value in `[0, 1)`.
    pub fn draw(&mut self) -> f64 {
        self.state = (self.state * LCG_MULTIPLIER + LCG_INCREMENT) % LCG_MODULUS;
        self.state as f64 / LCG_MODULUS as f64
    }
}
