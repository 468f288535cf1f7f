use serde::{Deserialize, Serialize};

/// One generated suggestion. `tags` keeps generation order; prompts ask for
/// 2-4 tags but the count is not enforced on responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub title: String,
    pub author: String,
    pub year: i32,
    pub tags: Vec<String>,
    /// A compelling 1-2 sentence description of the book.
    pub description: String,
    /// A short sentence tying the suggestion back to the source book.
    pub reason: String,
}

/// A bundled featured title: same shape as [`Recommendation`] minus the
/// per-request `reason`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogBook {
    pub title: String,
    pub author: String,
    pub year: i32,
    pub tags: Vec<String>,
    pub description: String,
}
