use std::sync::Arc;
use tracing::{debug, error, info};
use uuid::Uuid;

use crate::error::{ApiError, Result};
use crate::models::{Preferences, Recommendation};
use crate::services::generator::{parse_recommendations, RecommendationGenerator};
use crate::services::prompt;

/// Orchestrates one recommendation request: validate the input, build the
/// instruction, call the generation backend, validate the payload. The
/// backend is chosen once at startup; nothing here re-reads configuration.
pub struct RecommendationService {
    generator: Arc<dyn RecommendationGenerator>,
}

impl RecommendationService {
    pub fn new(generator: Arc<dyn RecommendationGenerator>) -> Self {
        Self { generator }
    }

    pub async fn recommend(
        &self,
        source_book: &str,
        preferences: &Preferences,
    ) -> Result<Vec<Recommendation>> {
        let title = source_book.trim();
        if title.is_empty() {
            return Err(ApiError::InvalidInput(
                "Book title cannot be empty".to_string(),
            ));
        }

        if !(1..=5).contains(&preferences.similarity) {
            return Err(ApiError::InvalidInput(format!(
                "Similarity must be between 1 and 5, got {}",
                preferences.similarity
            )));
        }

        let request_id = Uuid::new_v4();
        info!(%request_id, "Recommendation request for '{}'", title);

        let instruction = prompt::build_instruction(title, preferences);
        debug!(%request_id, "Built instruction ({} chars)", instruction.len());

        let payload = self.generator.generate(&instruction).await.map_err(|e| {
            error!(%request_id, "Generation call failed: {}", e);
            e
        })?;

        // The payload is untrusted regardless of the declared schema; a
        // single malformed record fails the whole request.
        let recommendations = parse_recommendations(&payload).map_err(|e| {
            error!(%request_id, "Generation payload rejected: {}", e);
            e
        })?;

        info!(
            %request_id,
            "Returning {} recommendations for '{}'",
            recommendations.len(),
            title
        );

        Ok(recommendations)
    }
}
