//! Seeded deterministic random stream used by jitter and mosaic rotation.
//!
//! [`LcgRng`] is a 32-bit linear congruential generator. It implements
//! [`rand::RngCore`] so passes take `&mut dyn RngCore` and tests can substitute a fixed stream.
use rand::{RngCore, SeedableRng};

/// Seed used when the caller does not supply one.
pub const DEFAULT_SEED: u32 = 42;

const MULTIPLIER: u32 = 1_664_525;
const INCREMENT: u32 = 1_013_904_223;

/// Linear congruential generator: `state = state * 1664525 + 1013904223 (mod 2^32)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LcgRng {
    state: u32,
}

impl LcgRng {
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Current internal state.
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl Default for LcgRng {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

impl RngCore for LcgRng {
    fn next_u32(&mut self) -> u32 {
        self.state = self
            .state
            .wrapping_mul(MULTIPLIER)
            .wrapping_add(INCREMENT);
        self.state
    }

    fn next_u64(&mut self) -> u64 {
        let hi = self.next_u32() as u64;
        let lo = self.next_u32() as u64;
        (hi << 32) | lo
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = self.next_u32().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}

impl SeedableRng for LcgRng {
    type Seed = [u8; 4];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u32::from_le_bytes(seed))
    }
}

/// Generate a random float in the range [0, 1).
#[inline]
pub(crate) fn rand01(rng: &mut dyn RngCore) -> f32 {
    // 24 bits keep the quotient strictly below 1.0 in f32.
    ((rng.next_u32() >> 8) as f32) / ((1u32 << 24) as f32)
}

/// Generate a random float in the range [lo, hi).
#[inline]
pub(crate) fn uniform(rng: &mut dyn RngCore, lo: f32, hi: f32) -> f32 {
    lo + rand01(rng) * (hi - lo)
}
