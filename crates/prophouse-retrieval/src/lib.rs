//! # prophouse-retrieval
//!
//! Query-side core of Prophouse smart search: classify the intent behind a
//! free-text query, then resolve the blended weighting over the three
//! embedding subspaces (identity, physical, context) that the outer ranking
//! pipeline applies to precomputed similarity scores.
//!
//! ## Architecture
//!
//! ```text
//! IntentEngine
//! ├── Classifier (keyword substring matching + word-count heuristic)
//! └── WeightTable (intent → subspace weight triple)
//! ```
//!
//! Both stages are pure and synchronous: no I/O, no shared mutable state,
//! safe to call concurrently without coordination. Embedding generation,
//! similarity computation, and result ranking live upstream.

pub mod intent;

pub use intent::classifier::classify;
pub use intent::IntentEngine;
