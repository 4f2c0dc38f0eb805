//! Configuration error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// Figment extraction or merge error.
    #[error("Configuration error: {0}")]
    Figment(#[from] figment::Error),

    /// A required configuration field is missing.
    #[error("Missing required configuration field '{field}' (set {env_hint} or the config file)")]
    Missing {
        field: String,
        env_hint: String,
    },
}
