use async_trait::async_trait;
use once_cell::sync::Lazy;
use serde_json::{json, Value};

use crate::error::{ApiError, Result};
use crate::models::Recommendation;

/// Boundary to the text-generation capability. Implementations take a
/// finished instruction and return the raw structured payload; they never
/// validate it. Callers must run the payload through
/// [`parse_recommendations`] before trusting it.
#[async_trait]
pub trait RecommendationGenerator: Send + Sync {
    async fn generate(&self, instruction: &str) -> Result<Value>;
}

/// Output shape declared to the model. The declaration is advisory:
/// responses are validated against the shape regardless of what the
/// capability promises.
pub static RECOMMENDATION_SCHEMA: Lazy<Value> = Lazy::new(|| {
    json!({
        "type": "object",
        "properties": {
            "recommendations": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "title": {
                            "type": "string",
                            "description": "Title of the recommended book."
                        },
                        "author": {
                            "type": "string",
                            "description": "Author of the recommended book."
                        },
                        "year": {
                            "type": "integer",
                            "description": "Publication year."
                        },
                        "tags": {
                            "type": "array",
                            "items": { "type": "string" },
                            "description": "2-4 genre or thematic tags for this book."
                        },
                        "description": {
                            "type": "string",
                            "description": "A compelling 1-2 sentence description of why the reader would enjoy this book, based on their input."
                        },
                        "reason": {
                            "type": "string",
                            "description": "A short sentence explaining why this book is similar to the one the user liked."
                        }
                    },
                    "required": ["title", "author", "year", "tags", "description", "reason"],
                    "additionalProperties": false
                }
            }
        },
        "required": ["recommendations"],
        "additionalProperties": false
    })
});

/// Validates a generation payload into typed records. Any missing field,
/// wrong type or empty tag list rejects the whole payload; there is no
/// partial acceptance.
pub fn parse_recommendations(payload: &Value) -> Result<Vec<Recommendation>> {
    let items = payload
        .get("recommendations")
        .and_then(Value::as_array)
        .ok_or_else(|| {
            ApiError::ParseFailure("payload has no `recommendations` array".to_string())
        })?;

    items
        .iter()
        .enumerate()
        .map(|(index, item)| parse_item(index, item))
        .collect()
}

fn parse_item(index: usize, item: &Value) -> Result<Recommendation> {
    let title = require_text(index, item, "title")?;
    let author = require_text(index, item, "author")?;
    let year = require_year(index, item)?;
    let tags = require_tags(index, item)?;
    let description = require_text(index, item, "description")?;
    let reason = require_text(index, item, "reason")?;

    Ok(Recommendation {
        title,
        author,
        year,
        tags,
        description,
        reason,
    })
}

fn require_text(index: usize, item: &Value, field: &str) -> Result<String> {
    item.get(field)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| {
            ApiError::ParseFailure(format!(
                "recommendation {index} is missing text field `{field}`"
            ))
        })
}

/// `year` must be a number that fits an i32. JSON has a single number
/// type, so integral floats (1979.0) are accepted; fractional or
/// out-of-range values are not.
fn require_year(index: usize, item: &Value) -> Result<i32> {
    let value = item.get("year").ok_or_else(|| {
        ApiError::ParseFailure(format!("recommendation {index} is missing `year`"))
    })?;

    if let Some(year) = value.as_i64() {
        return i32::try_from(year).map_err(|_| out_of_range_year(index, value));
    }

    if let Some(year) = value.as_f64() {
        if year.fract() != 0.0 {
            return Err(ApiError::ParseFailure(format!(
                "recommendation {index} has a non-integer `year`: {value}"
            )));
        }
        if !(f64::from(i32::MIN)..=f64::from(i32::MAX)).contains(&year) {
            return Err(out_of_range_year(index, value));
        }
        return Ok(year as i32);
    }

    Err(ApiError::ParseFailure(format!(
        "recommendation {index} has a non-numeric `year`: {value}"
    )))
}

fn out_of_range_year(index: usize, value: &Value) -> ApiError {
    ApiError::ParseFailure(format!(
        "recommendation {index} has an out-of-range `year`: {value}"
    ))
}

fn require_tags(index: usize, item: &Value) -> Result<Vec<String>> {
    let values = item.get("tags").and_then(Value::as_array).ok_or_else(|| {
        ApiError::ParseFailure(format!("recommendation {index} is missing `tags`"))
    })?;

    let tags = values
        .iter()
        .map(|value| {
            value.as_str().map(str::to_string).ok_or_else(|| {
                ApiError::ParseFailure(format!(
                    "recommendation {index} has a non-text tag: {value}"
                ))
            })
        })
        .collect::<Result<Vec<_>>>()?;

    if tags.is_empty() {
        return Err(ApiError::ParseFailure(format!(
            "recommendation {index} has an empty `tags` list"
        )));
    }

    Ok(tags)
}
