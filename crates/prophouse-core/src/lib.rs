//! # prophouse-core
//!
//! Foundation crate for the Prophouse search system.
//! Defines the intent taxonomy, subspace weight tables, config, and errors.
//! The retrieval crate depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod intent;

// Re-export the most commonly used types at the crate root.
pub use config::RetrievalConfig;
pub use errors::{ProphouseError, ProphouseResult};
pub use intent::{Intent, SearchWeights, SubspaceScores, WeightTable};
