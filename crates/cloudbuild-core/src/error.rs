//! Error types for the core domain.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid solution name: {0:?}")]
    InvalidSolutionName(String),

    #[error("duplicate definition: {0}")]
    Duplicate(String),
}

pub type Result<T> = std::result::Result<T, Error>;
