//! File-based repository implementations.

mod statistics;

pub use statistics::FileStatisticsRepository;
