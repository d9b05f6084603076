pub mod taxonomy;
pub mod weights;

pub use taxonomy::Intent;
pub use weights::{SearchWeights, SubspaceScores, WeightOverrides, WeightTable};
