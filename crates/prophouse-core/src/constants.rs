// Single source of truth for all default values.

// --- Classification ---
/// Queries with at most this many whitespace-delimited words and no keyword
/// match are assumed to name a concrete object.
pub const SHORT_QUERY_MAX_WORDS: usize = 2;

// --- Weights ---
/// Floating-point tolerance when checking that a weight triple sums to 1.0.
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-9;
