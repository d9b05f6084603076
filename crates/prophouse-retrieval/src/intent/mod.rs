//! IntentEngine: classify query intent and resolve subspace weights.

pub mod classifier;

use prophouse_core::{Intent, ProphouseResult, RetrievalConfig, SearchWeights, WeightTable};
use tracing::debug;

/// Intent classification and weight resolution engine.
///
/// Owns the intent → weights table; the table is immutable after
/// construction, so a single engine can be shared across callers.
pub struct IntentEngine {
    table: WeightTable,
}

impl IntentEngine {
    /// Create with the hardcoded default weight table.
    pub fn new() -> Self {
        Self {
            table: WeightTable::default_weights(),
        }
    }

    /// Create with an explicit weight table.
    pub fn with_table(table: WeightTable) -> Self {
        Self { table }
    }

    /// Create from config, loading weight overrides if a path is set.
    pub fn from_config(config: &RetrievalConfig) -> ProphouseResult<Self> {
        Ok(Self {
            table: config.weight_table()?,
        })
    }

    /// Classify the intent behind a query.
    pub fn classify(&self, query: &str) -> Intent {
        let intent = classifier::classify(query);
        debug!(%intent, query, "classified query intent");
        intent
    }

    /// Resolve the subspace weight triple for an intent.
    pub fn weights(&self, intent: Intent) -> SearchWeights {
        self.table.get(intent)
    }

    /// Classify and resolve in one step.
    pub fn weights_for_query(&self, query: &str) -> SearchWeights {
        self.weights(self.classify(query))
    }
}

impl Default for IntentEngine {
    fn default() -> Self {
        Self::new()
    }
}
