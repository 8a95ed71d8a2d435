/// Rule constants and tunable parameters for action resolution.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    /// Percentage points a block face may drift from its theoretical share
    /// before it is flagged as high or low.
    pub deviation_threshold: f64,
}

impl GameConfig {
    // ===== table bounds =====
    pub const MIN_ARMOUR_VALUE: u8 = 1;
    pub const MAX_ARMOUR_VALUE: u8 = 12;
    pub const MIN_BLOCK_DICE: u8 = 1;
    pub const MAX_BLOCK_DICE: u8 = 3;
    pub const D6_SIDES: u32 = 6;
    pub const CASUALTY_SIDES: u32 = 16;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_DEVIATION_THRESHOLD: f64 = 10.0;

    pub fn new() -> Self {
        Self {
            deviation_threshold: Self::DEFAULT_DEVIATION_THRESHOLD,
        }
    }

    pub fn with_deviation_threshold(deviation_threshold: f64) -> Self {
        Self {
            deviation_threshold,
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
