use std::path::PathBuf;

use crate::intent::Intent;

/// Top-level error type for the Prophouse search system.
///
/// Classification and weight resolution are total functions and never fail;
/// only the configuration layer produces errors.
#[derive(Debug, thiserror::Error)]
pub enum ProphouseError {
    #[error("failed to read config file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("weights for intent '{intent}' sum to {sum}, expected 1.0")]
    WeightsNotNormalized { intent: Intent, sum: f64 },

    #[error("weights for intent '{intent}' contain a negative component")]
    NegativeWeight { intent: Intent },
}

pub type ProphouseResult<T> = Result<T, ProphouseError>;
