use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::errors::{ProphouseError, ProphouseResult};
use crate::intent::WeightTable;

/// Retrieval subsystem configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrievalConfig {
    /// Path to an intent weights TOML override file.
    pub intent_weights_path: Option<PathBuf>,
}

impl RetrievalConfig {
    /// Build the intent weight table for this config.
    ///
    /// Without an override path this is the hardcoded default table and
    /// cannot fail; with one, the file is read, parsed, and every
    /// overridden row validated.
    pub fn weight_table(&self) -> ProphouseResult<WeightTable> {
        match &self.intent_weights_path {
            None => Ok(WeightTable::default_weights()),
            Some(path) => {
                let text =
                    std::fs::read_to_string(path).map_err(|source| ProphouseError::ConfigRead {
                        path: path.clone(),
                        source,
                    })?;
                WeightTable::from_toml(&text)
            }
        }
    }
}
