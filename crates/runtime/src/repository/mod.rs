//! Repository layer for data that outlives a session.
//!
//! The only record persisted is the cumulative [`RollStatistics`]: loaded when
//! the runtime is built and saved after every operation that changes it.
//!
//! [`RollStatistics`]: game_core::RollStatistics

mod error;
mod file;
mod memory;
mod traits;

pub use error::{RepositoryError, Result};
pub use file::FileStatisticsRepository;
pub use memory::InMemoryStatisticsRepository;
pub use traits::StatisticsRepository;
