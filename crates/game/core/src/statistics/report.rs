//! Derived views over [`RollStatistics`](super::RollStatistics).
//!
//! Everything here is computed on read; nothing feeds back into the counters.

use crate::config::GameConfig;
use crate::dice::BlockFace;

/// How far an observed share drifted from its theoretical value.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum Deviation {
    High,
    Normal,
    Low,
}

impl Deviation {
    /// Classifies `actual` against `theoretical` (both in percent).
    ///
    /// Only a difference strictly greater than `threshold` counts.
    pub fn classify(theoretical: f64, actual: f64, threshold: f64) -> Self {
        let diff = actual - theoretical;
        if diff.abs() <= threshold {
            Self::Normal
        } else if diff > 0.0 {
            Self::High
        } else {
            Self::Low
        }
    }

    pub const fn marker(&self) -> &'static str {
        match self {
            Self::High => "▲",
            Self::Normal => "",
            Self::Low => "▼",
        }
    }
}

/// Classifies with the default threshold of ten percentage points.
pub fn deviation(theoretical: f64, actual: f64) -> Deviation {
    Deviation::classify(theoretical, actual, GameConfig::DEFAULT_DEVIATION_THRESHOLD)
}

/// Observed block-face shares in percent, indexed by face.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BlockPercentages([f64; 5]);

impl BlockPercentages {
    pub(crate) fn new(values: [f64; 5]) -> Self {
        Self(values)
    }

    pub fn get(&self, face: BlockFace) -> f64 {
        self.0[face.index()]
    }

    pub fn as_array(&self) -> &[f64; 5] {
        &self.0
    }
}

/// One row of the theoretical-vs-actual block table.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FaceReport {
    pub face: BlockFace,
    pub count: u64,
    pub theoretical: f64,
    pub actual: f64,
    pub deviation: Deviation,
}

/// Outcome ratios in percent. Every rate is 0 when its denominator is 0.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SuccessRates {
    /// Armour breaks per armour roll.
    pub armour_break: f64,
    /// Injury rolls per started action.
    pub injury: f64,
    /// Casualties per started action.
    pub casualty: f64,
    /// Completed actions per started action.
    pub completion: f64,
}

pub(crate) fn percent(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}
