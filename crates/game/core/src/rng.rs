//! Seeded random source for dice resolution.
//!
//! The generator is keyed by a text seed chosen at session start so that two
//! sessions started with the same word replay exactly the same rolls. It is a
//! game-flavour generator and makes no claim to cryptographic quality.
//!
//! # Algorithm
//!
//! - Seed: `|h|` where `h = h * 31 + code_point` over the seed text, wrapping
//!   at 32-bit signed arithmetic.
//! - Step: Park–Miller minimal standard LCG, `seed = seed * 16807 mod (2^31 - 1)`.
//! - Draw: `seed / (2^31 - 1)`, always in `(0, 1)`.

/// Owned state of the seeded generator.
///
/// Every draw advances the state; there is no way to observe a value twice.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SeedState {
    seed: u32,
}

impl SeedState {
    /// LCG multiplier (7^5).
    pub const MULTIPLIER: u64 = 16_807;

    /// LCG modulus (Mersenne prime 2^31 - 1).
    pub const MODULUS: u64 = 2_147_483_647;

    /// Derives the generator state from a seed word.
    pub fn from_text(text: &str) -> Self {
        Self::from_raw(hash_text(text))
    }

    /// Builds a state from an already-hashed seed.
    ///
    /// Zero (and multiples of the modulus) are fixed points of the LCG, so
    /// they are remapped to 1 to keep the stream moving.
    pub fn from_raw(seed: u32) -> Self {
        let reduced = (u64::from(seed) % Self::MODULUS) as u32;
        Self {
            seed: if reduced == 0 { 1 } else { reduced },
        }
    }

    /// Current raw seed value.
    pub fn raw(&self) -> u32 {
        self.seed
    }

    /// Advances the generator and returns a float in `[0, 1)`.
    pub fn draw(&mut self) -> f64 {
        let next = (u64::from(self.seed) * Self::MULTIPLIER) % Self::MODULUS;
        self.seed = next as u32;
        next as f64 / Self::MODULUS as f64
    }

    /// Rolls a die with `sides` faces, returning a value in `[1, sides]`.
    ///
    /// A zero-sided die is treated as a one-sided die.
    pub fn roll_die(&mut self, sides: u32) -> u32 {
        let sides = sides.max(1);
        let value = (self.draw() * f64::from(sides)) as u32 + 1;
        value.min(sides)
    }
}

/// Rolling polynomial hash of the seed text, folded to its absolute value.
pub fn hash_text(text: &str) -> u32 {
    text.chars()
        .fold(0i32, |hash, ch| {
            hash.wrapping_mul(31).wrapping_add(ch as u32 as i32)
        })
        .unsigned_abs()
}
