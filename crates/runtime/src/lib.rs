//! Runtime orchestration for the block and foul resolution engine.
//!
//! This crate wires the pure [`game_core::GameSession`] to statistics
//! persistence and structured logging. Consumers embed [`Runtime`] to drive
//! actions and read back phases, rolls and statistics.
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator and builder
//! - [`config`] loads [`RuntimeConfig`] from the environment
//! - [`repository`] provides statistics storage adapters reused by other crates
pub mod config;
pub mod error;
pub mod repository;
pub mod runtime;

pub use config::{RuntimeConfig, default_data_dir};
pub use error::{Result, RuntimeError};
pub use repository::{
    FileStatisticsRepository, InMemoryStatisticsRepository, RepositoryError, StatisticsRepository,
};
pub use runtime::{Runtime, RuntimeBuilder};
