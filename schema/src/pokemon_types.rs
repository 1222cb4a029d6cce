use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Type table keyed by type identifier (e.g. `"fire"`).
pub type TypeMap = BTreeMap<String, PokemonType>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonType {
    /// Display color, as an HTML color string.
    pub color: String,
    #[serde(default)]
    pub strong_against: Vec<String>,
    #[serde(default)]
    pub weak_against: Vec<String>,
    #[serde(default)]
    pub ineffective_against: Vec<String>,
}
