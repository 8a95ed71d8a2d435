//! Roll statistics.
//!
//! [`RollStatistics`] folds every roll and outcome into named counters that
//! only ever grow; [`report`] derives theoretical-vs-actual percentages and
//! rates from them without mutating anything.

pub mod counter;
pub mod report;
mod rolls;

pub use counter::Counter;
pub use report::{BlockPercentages, Deviation, FaceReport, SuccessRates, deviation};
pub use rolls::RollStatistics;
