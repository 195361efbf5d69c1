//! Seedable pseudo-random generator and noise-based seeding.
//!
//! Randomized routines (storm flashes, fire crackle) draw from a
//! [`XorShift32`] owned by the scheduler. The seed is derived once from a
//! hardware noise source; tests inject a fixed seed instead.

/// A source of entropy, typically an unconnected ADC pin.
pub trait NoiseSource {
    /// One raw sample. Only the low bits are expected to carry noise.
    fn sample(&mut self) -> u16;
}

/// Derive a 31-bit seed by XOR-combining shifted noise samples.
///
/// Single ADC samples from a floating pin carry roughly four noisy bits,
/// so the samples are spread across the word in 3-bit steps.
pub fn seed_from_noise(source: &mut impl NoiseSource) -> u32 {
    let mut seed = u32::from(source.sample());
    let mut shift = 3;
    while shift < 31 {
        seed ^= u32::from(source.sample()) << shift;
        shift += 3;
    }
    seed
}

/// Small xorshift generator, good enough for visual randomness.
#[derive(Debug, Clone)]
pub struct XorShift32 {
    state: u32,
}

impl XorShift32 {
    /// Create a generator. A zero seed is remapped, xorshift state must
    /// never be zero.
    pub const fn new(seed: u32) -> Self {
        Self {
            state: if seed == 0 { 0x9E37_79B9 } else { seed },
        }
    }

    pub fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }

    /// Value in the half-open range `[low, high)`.
    ///
    /// Returns `low` when the range is empty.
    pub fn gen_range(&mut self, low: u32, high: u32) -> u32 {
        if high <= low {
            return low;
        }
        low + self.next_u32() % (high - low)
    }
}
