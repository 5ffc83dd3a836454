// src/errors.rs
// DOCUMENTATION: Custom error types and HTTP responses
// PURPOSE: Centralized error handling for entire application

use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde_json::json;
use thiserror::Error;

/// Message returned to clients for every failure
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch hospital data";

/// Application-specific error types
/// DOCUMENTATION: Every variant describes why an aggregation failed.
/// The detail is for server logs only; clients always see the same payload.
#[derive(Error, Debug)]
pub enum FinderError {
    #[error("External API error: {0}")]
    ExternalApiError(String),

    #[error("Malformed upstream response: {0}")]
    MalformedResponse(String),

    #[error("No facilities found near {0}")]
    NoResults(String),

    #[error("Unreadable query string: {0}")]
    InvalidQuery(String),
}

/// Convert FinderError to HTTP response
/// DOCUMENTATION: No failure cause is surfaced to the caller
impl ResponseError for FinderError {
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({ "error": FETCH_FAILED_MESSAGE }))
    }

    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}
