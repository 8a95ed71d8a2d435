//! Dice rolling on top of the seeded generator.
//!
//! - [`BlockFace`]: the five outcomes printed on a block die
//! - [`DieRoll`]: an immutable record of one roll (pips, kind, total)
//! - [`DiceEngine`]: the session's dice, owning the [`SeedState`](crate::rng::SeedState)

pub mod engine;
pub mod error;
pub mod face;
pub mod roll;

pub use engine::{DiceEngine, validate_dice_count};
pub use error::DiceError;
pub use face::BlockFace;
pub use roll::{DieKind, DieRoll};
