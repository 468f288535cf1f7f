use serde::{Deserialize, Serialize};

pub use book::{CatalogBook, Recommendation};
pub use preferences::{Era, Genre, Preferences};
pub use view::{RecommendationCard, RecommendationsView};

mod book;
mod preferences;
mod view;

/// Request structure for book recommendations. Preference fields sit at the
/// top level of the JSON body, next to `book`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationRequest {
    /// The book the reader loved and wants more of.
    pub book: String,
    #[serde(flatten)]
    pub preferences: Preferences,
}

/// Health check response structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Current timestamp in RFC3339 format
    pub timestamp: String,
}
