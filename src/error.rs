use thiserror::Error;

/// Custom error types for rowpick
#[derive(Debug, Error)]
pub enum RowpickError {
    #[error("parallel table columns differ in length: {keys} key cells vs {values} value cells")]
    ColumnMismatch { keys: usize, values: usize },

    #[error("Invalid fixture file: {0}")]
    InvalidFixtures(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
