//! Chunkwise Core Library
//!
//! This crate provides the foundational utilities shared by the chunkwise
//! splitter library and CLI:
//! - Error handling (`AppError`, `AppResult`)
//! - Logging infrastructure
//! - Configuration management (YAML file, environment, CLI overrides)

pub mod config;
pub mod error;
pub mod logging;

// Re-export commonly used types
pub use config::{AppConfig, ChunkingConfig, SeparatorConfig};
pub use error::{AppError, AppResult};
