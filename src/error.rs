use crate::config::ConfigError;
use crate::validate::ValidationError;
use thiserror::Error;

/// Top-level error type for the dragon-env library.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error("failed to load configuration: {0}")]
    Load(#[from] ConfigError),

    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}
