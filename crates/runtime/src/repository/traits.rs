//! Repository contract for saving and loading roll statistics.

use game_core::RollStatistics;

use super::error::Result;

/// Persistence for the statistics record that outlives individual sessions.
///
/// There is exactly one record per repository; saving replaces it whole.
pub trait StatisticsRepository: Send + Sync {
    /// Replace the stored statistics.
    fn save(&self, statistics: &RollStatistics) -> Result<()>;

    /// Load the stored statistics, `None` when nothing was saved yet.
    fn load(&self) -> Result<Option<RollStatistics>>;

    /// Check if a record exists
    fn exists(&self) -> bool;

    /// Delete the stored record. Deleting a missing record is not an error.
    fn delete(&self) -> Result<()>;
}
