//! Intent → subspace weight table.
//!
//! Each intent maps to a fixed triple of blending coefficients over the
//! three embedding subspaces (identity, physical, context). Every triple
//! sums to 1.0; this is an invariant of the configuration data, enforced
//! when overrides are loaded. Default weights are hardcoded; can be
//! overridden via TOML config.

use serde::{Deserialize, Serialize};

use crate::constants::WEIGHT_SUM_TOLERANCE;
use crate::errors::{ProphouseError, ProphouseResult};
use crate::intent::Intent;

/// Blending coefficients applied to the three subspace similarity scores.
///
/// Components are non-negative and sum to 1.0. A blended score therefore
/// stays in the same range as the per-subspace scores.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SearchWeights {
    /// Weight on what the entity fundamentally is (name/category).
    pub identity: f64,
    /// Weight on material/visual/structural attributes.
    pub physical: f64,
    /// Weight on situational/occasion/era usage.
    pub context: f64,
}

/// Per-candidate similarity scores in the three embedding subspaces,
/// computed upstream from precomputed embeddings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubspaceScores {
    pub identity: f64,
    pub physical: f64,
    pub context: f64,
}

impl SearchWeights {
    /// Resolve the default weight triple for an intent.
    ///
    /// Total over the closed enum; never fails. Each triple favors the
    /// subspace most predictive of the intent and keeps nonzero weight on
    /// the others, so ranking never collapses to a single subspace.
    pub fn for_intent(intent: Intent) -> Self {
        match intent {
            // "ostre" → match the property, ignore where it is used.
            Intent::Physical => Self {
                identity: 0.1,
                physical: 0.8,
                context: 0.1,
            },
            // "wesele" → match the occasion, not a specific object type.
            Intent::Context => Self {
                identity: 0.2,
                physical: 0.1,
                context: 0.7,
            },
            // "krzesło" → the user wants a chair, not something used on one.
            Intent::Specific => Self {
                identity: 0.8,
                physical: 0.1,
                context: 0.1,
            },
            // Balanced blend.
            Intent::Default => Self {
                identity: 0.5,
                physical: 0.3,
                context: 0.2,
            },
        }
    }

    /// Sum of the three components.
    pub fn sum(&self) -> f64 {
        self.identity + self.physical + self.context
    }

    /// Whether the triple sums to 1.0 within floating-point tolerance.
    pub fn is_normalized(&self) -> bool {
        (self.sum() - 1.0).abs() <= WEIGHT_SUM_TOLERANCE
    }

    /// The weight contract consumed by the outer ranking pipeline:
    /// `score = identity*w.identity + physical*w.physical + context*w.context`.
    pub fn blend(&self, scores: &SubspaceScores) -> f64 {
        self.identity * scores.identity
            + self.physical * scores.physical
            + self.context * scores.context
    }

    fn validate(&self, intent: Intent) -> ProphouseResult<()> {
        if self.identity < 0.0 || self.physical < 0.0 || self.context < 0.0 {
            return Err(ProphouseError::NegativeWeight { intent });
        }
        if !self.is_normalized() {
            return Err(ProphouseError::WeightsNotNormalized {
                intent,
                sum: self.sum(),
            });
        }
        Ok(())
    }
}

/// Per-intent override rows, as deserialized from a TOML weights file.
///
/// Absent rows keep the hardcoded defaults. Example:
///
/// ```toml
/// [specific]
/// identity = 0.7
/// physical = 0.2
/// context = 0.1
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WeightOverrides {
    pub physical: Option<SearchWeights>,
    pub context: Option<SearchWeights>,
    pub specific: Option<SearchWeights>,
    pub default: Option<SearchWeights>,
}

/// Weight table: Intent → SearchWeights.
///
/// Constructed once at startup and read-only afterwards.
#[derive(Debug, Clone)]
pub struct WeightTable {
    rows: [SearchWeights; Intent::COUNT],
}

impl WeightTable {
    /// Create with the hardcoded default weights.
    pub fn default_weights() -> Self {
        Self {
            rows: Intent::ALL.map(SearchWeights::for_intent),
        }
    }

    /// Apply override rows on top of the defaults.
    ///
    /// Every overridden triple is validated: components must be
    /// non-negative and sum to 1.0 within tolerance.
    pub fn with_overrides(overrides: &WeightOverrides) -> ProphouseResult<Self> {
        let mut table = Self::default_weights();
        let rows = [
            (Intent::Physical, overrides.physical),
            (Intent::Context, overrides.context),
            (Intent::Specific, overrides.specific),
            (Intent::Default, overrides.default),
        ];
        for (intent, row) in rows {
            if let Some(weights) = row {
                weights.validate(intent)?;
                table.set(intent, weights);
            }
        }
        Ok(table)
    }

    /// Parse override rows from a TOML document and apply them.
    pub fn from_toml(text: &str) -> ProphouseResult<Self> {
        let overrides: WeightOverrides = toml::from_str(text)?;
        Self::with_overrides(&overrides)
    }

    /// Look up the weight triple for an intent.
    pub fn get(&self, intent: Intent) -> SearchWeights {
        self.rows[Self::index(intent)]
    }

    fn set(&mut self, intent: Intent, weights: SearchWeights) {
        self.rows[Self::index(intent)] = weights;
    }

    fn index(intent: Intent) -> usize {
        match intent {
            Intent::Physical => 0,
            Intent::Context => 1,
            Intent::Specific => 2,
            Intent::Default => 3,
        }
    }
}

impl Default for WeightTable {
    fn default() -> Self {
        Self::default_weights()
    }
}
