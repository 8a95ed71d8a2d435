use std::sync::RwLock;

use game_core::RollStatistics;

use crate::repository::error::Result;
use crate::repository::{RepositoryError, StatisticsRepository};

/// In-memory implementation of StatisticsRepository
#[derive(Default)]
pub struct InMemoryStatisticsRepository {
    statistics: RwLock<Option<RollStatistics>>,
}

impl InMemoryStatisticsRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_statistics(statistics: RollStatistics) -> Self {
        Self {
            statistics: RwLock::new(Some(statistics)),
        }
    }
}

impl StatisticsRepository for InMemoryStatisticsRepository {
    fn save(&self, statistics: &RollStatistics) -> Result<()> {
        let mut current = self
            .statistics
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        *current = Some(statistics.clone());
        Ok(())
    }

    fn load(&self) -> Result<Option<RollStatistics>> {
        let current = self
            .statistics
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(current.clone())
    }

    fn exists(&self) -> bool {
        self.statistics
            .read()
            .map(|current| current.is_some())
            .unwrap_or(false)
    }

    fn delete(&self) -> Result<()> {
        let mut current = self
            .statistics
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        *current = None;
        Ok(())
    }
}
