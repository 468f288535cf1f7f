use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ApiError>;

/// The one message callers see for any generation-side failure. Specific
/// causes stay in the server log.
const GENERATION_FAILED: &str = "Recommendation generation failed";

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Generation request failed: {0}")]
    GenerationFailure(String),

    #[error("Generation response rejected: {0}")]
    ParseFailure(String),

    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl ResponseError for ApiError {
    fn error_response(&self) -> HttpResponse {
        match self {
            ApiError::InvalidInput(_) => HttpResponse::BadRequest().json(ErrorResponse {
                error: self.to_string(),
            }),
            ApiError::GenerationFailure(_) | ApiError::ParseFailure(_) => {
                HttpResponse::BadGateway().json(ErrorResponse {
                    error: GENERATION_FAILED.to_string(),
                })
            }
            _ => HttpResponse::InternalServerError().json(ErrorResponse {
                error: self.to_string(),
            }),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::ParseFailure(err.to_string())
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::GenerationFailure(err.to_string())
    }
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigurationError(err.to_string())
    }
}

impl From<std::io::Error> for ApiError {
    fn from(err: std::io::Error) -> Self {
        ApiError::InternalError(err.to_string())
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::InternalError(err.to_string())
    }
}
