// src/errors.rs

//! Crate-wide error type and `Result` alias.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TaskorderError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// A task was reached again while its own dependencies were still
    /// being visited. `path` runs from the first visit of `task` down to
    /// the re-entry, so it starts and ends with `task`.
    #[error("Cycle detected at task '{task}': {}", .path.join(" -> "))]
    CycleDetected { task: String, path: Vec<String> },

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TaskorderError>;
