//! In-memory repository implementations.

mod statistics;

pub use statistics::InMemoryStatisticsRepository;
