use serde::{Deserialize, Serialize};

use crate::models::Recommendation;

/// Display form of one recommendation, ready for a card layout. Every field
/// the card shows is present, including the `reason` line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationCard {
    pub title: String,
    pub author: String,
    pub year: i32,
    /// Header line under the title, e.g. "Frank Herbert · 1965".
    pub byline: String,
    pub tags: Vec<String>,
    pub description: String,
    pub reason: String,
}

impl From<Recommendation> for RecommendationCard {
    fn from(recommendation: Recommendation) -> Self {
        let byline = format!("{} · {}", recommendation.author, recommendation.year);

        Self {
            title: recommendation.title,
            author: recommendation.author,
            year: recommendation.year,
            byline,
            tags: clean_tags(recommendation.tags),
            description: recommendation.description,
            reason: recommendation.reason,
        }
    }
}

/// Response body for a recommendation request. `recommendations` may hold
/// any number of cards, including zero; clients must not assume a count.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationsView {
    pub source_book: String,
    pub recommendations: Vec<RecommendationCard>,
}

impl RecommendationsView {
    pub fn new(source_book: impl Into<String>, recommendations: Vec<Recommendation>) -> Self {
        Self {
            source_book: source_book.into(),
            recommendations: recommendations
                .into_iter()
                .map(RecommendationCard::from)
                .collect(),
        }
    }
}

/// Tags render as discrete pills: trimmed, empties dropped, duplicates
/// removed case-insensitively, first-seen order kept.
fn clean_tags(tags: Vec<String>) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    let mut cleaned = Vec::new();

    for tag in tags {
        let tag = tag.trim();
        if tag.is_empty() {
            continue;
        }

        let key = tag.to_lowercase();
        if seen.contains(&key) {
            continue;
        }

        seen.push(key);
        cleaned.push(tag.to_string());
    }

    cleaned
}
