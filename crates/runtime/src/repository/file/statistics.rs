//! File-based StatisticsRepository implementation.

use std::fs;
use std::path::{Path, PathBuf};

use game_core::RollStatistics;

use crate::repository::error::Result;
use crate::repository::{RepositoryError, StatisticsRepository};

/// File-based implementation of StatisticsRepository.
///
/// # File Format
///
/// Statistics are stored as `statistics.json`: one flat JSON object mapping
/// counter names to counts. Counters missing from the file load as zero and
/// unknown names are ignored, so older and newer files stay readable.
pub struct FileStatisticsRepository {
    base_dir: PathBuf,
}

impl FileStatisticsRepository {
    pub const FILE_NAME: &'static str = "statistics.json";

    /// Create a new file-based statistics repository.
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        fs::create_dir_all(&base_dir).map_err(RepositoryError::Io)?;
        Ok(Self { base_dir })
    }

    /// Path to the statistics file.
    pub fn path(&self) -> PathBuf {
        self.base_dir.join(Self::FILE_NAME)
    }
}

impl StatisticsRepository for FileStatisticsRepository {
    fn save(&self, statistics: &RollStatistics) -> Result<()> {
        let path = self.path();
        let temp_path = path.with_extension("json.tmp");

        let bytes = serde_json::to_vec_pretty(statistics)
            .map_err(|e| RepositoryError::Json(e.to_string()))?;

        // Write to temp file
        fs::write(&temp_path, bytes).map_err(RepositoryError::Io)?;

        // Atomic rename
        fs::rename(&temp_path, &path).map_err(RepositoryError::Io)?;

        tracing::debug!(
            "Saved statistics ({} rolls) to {}",
            statistics.total_rolls(),
            path.display()
        );

        Ok(())
    }

    fn load(&self) -> Result<Option<RollStatistics>> {
        let path = self.path();

        if !path.exists() {
            return Ok(None);
        }

        let bytes = fs::read(&path).map_err(RepositoryError::Io)?;
        let statistics: RollStatistics =
            serde_json::from_slice(&bytes).map_err(|e| RepositoryError::Json(e.to_string()))?;

        tracing::debug!(
            "Loaded statistics ({} rolls) from {}",
            statistics.total_rolls(),
            path.display()
        );

        Ok(Some(statistics))
    }

    fn exists(&self) -> bool {
        self.path().exists()
    }

    fn delete(&self) -> Result<()> {
        let path = self.path();

        if path.exists() {
            fs::remove_file(&path).map_err(RepositoryError::Io)?;
            tracing::debug!("Deleted statistics at {}", path.display());
        }

        Ok(())
    }
}
