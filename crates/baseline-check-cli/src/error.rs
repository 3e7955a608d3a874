//! Error types for the command-line front end.

use baseline_check::BaselineError;

use crate::storage::StoreError;

/// Process exit codes.
pub mod exit_codes {
    pub const FAILURE: i32 = 1;
    pub const INVALID_INPUT: i32 = 2;
    pub const NOT_FOUND: i32 = 3;
}

/// All errors the CLI reports to the user.
#[derive(thiserror::Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid share link: {0}")]
    InvalidShareLink(String),

    #[error(transparent)]
    Baseline(#[from] BaselineError),

    #[error("Storage error: {0}")]
    Store(#[from] StoreError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    pub fn exit_code(&self) -> i32 {
        use exit_codes::*;
        match self {
            CliError::InvalidInput(_) | CliError::InvalidShareLink(_) => INVALID_INPUT,
            CliError::NotFound(_) => NOT_FOUND,
            CliError::Baseline(_) | CliError::Store(_) | CliError::Io(_) | CliError::Json(_) => {
                FAILURE
            }
        }
    }
}

pub type CliResult<T> = Result<T, CliError>;
