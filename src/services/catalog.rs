use serde::{Deserialize, Serialize};

use crate::error::{ApiError, Result};
use crate::models::CatalogBook;

const FEATURED_BOOKS_JSON: &str = include_str!("../../data/featured_books.json");

/// Fixed catalog bundled into the binary: the featured shelf plus the
/// search-box suggestions. Parsed once at startup and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeaturedCatalog {
    pub books: Vec<CatalogBook>,
    pub suggestions: Vec<String>,
}

impl FeaturedCatalog {
    pub fn load() -> Result<Self> {
        let catalog: FeaturedCatalog = serde_json::from_str(FEATURED_BOOKS_JSON).map_err(|e| {
            ApiError::ConfigurationError(format!("Bundled catalog is not valid JSON: {}", e))
        })?;

        if catalog.books.is_empty() {
            return Err(ApiError::ConfigurationError(
                "Bundled catalog has no featured books".to_string(),
            ));
        }

        Ok(catalog)
    }
}
