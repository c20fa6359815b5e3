use thiserror::Error;

/// Custom error types for tagmint
///
/// These are boundary errors owned by the caller of the suggestion core
/// (the CLI in this crate). The core itself never surfaces an error.
#[derive(Debug, Error)]
pub enum TagmintError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
