use serde::{Deserialize, Serialize};

/// The inferred retrieval goal behind a search query.
///
/// Exactly one intent is produced per query; there is no multi-intent
/// representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    /// The query describes material, visual, or structural attributes
    /// ("ostre", "metalowe", "czerwone").
    Physical,
    /// The query describes a situation, venue, occasion, or era
    /// ("kuchni", "wesele", "lata 20").
    Context,
    /// A short query with no attribute or context cue, assumed to name a
    /// concrete object ("krzesło").
    Specific,
    /// None of the above; weights stay balanced.
    Default,
}

impl Intent {
    /// Total number of intent types.
    pub const COUNT: usize = 4;

    /// All variants for iteration.
    pub const ALL: [Intent; 4] = [Self::Physical, Self::Context, Self::Specific, Self::Default];

    /// Stable lowercase label, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Physical => "physical",
            Self::Context => "context",
            Self::Specific => "specific",
            Self::Default => "default",
        }
    }
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
