use serde::{Deserialize, Serialize};

/// Publication-era filter. Earlier web clients sent `new` for the recent
/// bucket, so that spelling is still accepted on input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Era {
    #[serde(alias = "new")]
    Recent,
    #[default]
    Any,
    Classic,
}

/// Fiction/nonfiction filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Genre {
    Fiction,
    Nonfiction,
    #[default]
    Any,
}

/// Tuning knobs for a recommendation request. `similarity` runs from
/// 1 (explore widely) to 5 (near-identical reads); requests outside that
/// range are rejected before any prompt is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default)]
    pub era: Era,
    #[serde(default)]
    pub genre: Genre,
    #[serde(default = "default_similarity")]
    pub similarity: u8,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            era: Era::Any,
            genre: Genre::Any,
            similarity: default_similarity(),
        }
    }
}

fn default_similarity() -> u8 {
    3
}
