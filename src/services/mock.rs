use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use crate::error::{ApiError, Result};
use crate::services::generator::{parse_recommendations, RecommendationGenerator};

const MOCK_RECOMMENDATIONS_JSON: &str = include_str!("../../data/mock_recommendations.json");

/// Generation backend that serves a bundled fixture and never calls out.
/// The instruction is ignored; every request gets the same six records.
pub struct MockGenerator {
    payload: Value,
}

impl MockGenerator {
    /// Parses the bundled fixture and runs it through the same validation
    /// as live responses, so a broken fixture fails at startup instead of
    /// on the first request.
    pub fn new() -> Result<Self> {
        let payload: Value = serde_json::from_str(MOCK_RECOMMENDATIONS_JSON).map_err(|e| {
            ApiError::ConfigurationError(format!("Bundled mock fixture is not valid JSON: {}", e))
        })?;

        parse_recommendations(&payload).map_err(|e| {
            ApiError::ConfigurationError(format!("Bundled mock fixture is malformed: {}", e))
        })?;

        Ok(Self { payload })
    }
}

#[async_trait]
impl RecommendationGenerator for MockGenerator {
    async fn generate(&self, _instruction: &str) -> Result<Value> {
        debug!("Serving bundled mock recommendations");
        Ok(self.payload.clone())
    }
}
