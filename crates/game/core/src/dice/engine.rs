//! Session dice built on the seeded generator.

use arrayvec::ArrayVec;

use super::{DiceError, DieKind, DieRoll};
use crate::config::GameConfig;
use crate::rng::SeedState;

/// Dice owned by one session.
///
/// Every roll requires a seeded generator; rolling before [`DiceEngine::seed`]
/// fails with [`DiceError::NotInitialized`] instead of falling back to
/// non-deterministic randomness. Rolls are never idempotent: invoking the same
/// operation again yields the next values in the stream.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DiceEngine {
    state: Option<SeedState>,
    seed_word: Option<String>,
}

impl DiceEngine {
    /// Creates unseeded dice.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates dice already seeded with `seed_word`.
    pub fn seeded(seed_word: &str) -> Self {
        let mut dice = Self::new();
        dice.seed(seed_word);
        dice
    }

    /// Replaces the generator state with one derived from `seed_word`.
    pub fn seed(&mut self, seed_word: &str) {
        self.state = Some(SeedState::from_text(seed_word));
        self.seed_word = Some(seed_word.to_owned());
    }

    pub fn is_seeded(&self) -> bool {
        self.state.is_some()
    }

    pub fn seed_word(&self) -> Option<&str> {
        self.seed_word.as_deref()
    }

    /// Fails when no seed has been chosen yet.
    pub fn ensure_seeded(&self) -> Result<(), DiceError> {
        if self.is_seeded() {
            Ok(())
        } else {
            Err(DiceError::NotInitialized)
        }
    }

    /// Rolls `count` block dice.
    pub fn roll_block_dice(&mut self, count: u8) -> Result<DieRoll, DiceError> {
        let count = validate_dice_count(count)?;
        let state = self.state_mut()?;
        let pips = (0..count)
            .map(|_| state.roll_die(GameConfig::D6_SIDES) as u8)
            .collect();
        Ok(DieRoll::new(DieKind::Block, pips))
    }

    /// Rolls two independent d6, returning the roll and its two pips.
    pub fn roll_two_d6(&mut self) -> Result<(DieRoll, (u8, u8)), DiceError> {
        let state = self.state_mut()?;
        let first = state.roll_die(GameConfig::D6_SIDES) as u8;
        let second = state.roll_die(GameConfig::D6_SIDES) as u8;
        let pips = [first, second].into_iter().collect();
        Ok((DieRoll::new(DieKind::TwoD6, pips), (first, second)))
    }

    /// Rolls a single d6.
    pub fn roll_d6(&mut self) -> Result<DieRoll, DiceError> {
        let state = self.state_mut()?;
        let mut pips = ArrayVec::new();
        pips.push(state.roll_die(GameConfig::D6_SIDES) as u8);
        Ok(DieRoll::new(DieKind::PlainD6, pips))
    }

    /// Rolls the casualty die: one uniform draw in `1..=16`.
    pub fn roll_casualty(&mut self) -> Result<DieRoll, DiceError> {
        let state = self.state_mut()?;
        let mut pips = ArrayVec::new();
        pips.push(state.roll_die(GameConfig::CASUALTY_SIDES) as u8);
        Ok(DieRoll::new(DieKind::CasualtyD16, pips))
    }

    fn state_mut(&mut self) -> Result<&mut SeedState, DiceError> {
        self.state.as_mut().ok_or(DiceError::NotInitialized)
    }
}

/// Accepts block dice counts in `1..=3`.
pub fn validate_dice_count(count: u8) -> Result<u8, DiceError> {
    if (GameConfig::MIN_BLOCK_DICE..=GameConfig::MAX_BLOCK_DICE).contains(&count) {
        Ok(count)
    } else {
        Err(DiceError::InvalidDiceCount(count))
    }
}
