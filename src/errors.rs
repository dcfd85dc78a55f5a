// src/errors.rs
// DOCUMENTATION: Custom error types and HTTP responses
// PURPOSE: Centralized error handling for entire application

use std::time::Duration;

use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use thiserror::Error;

use crate::models::Envelope;

/// Application-specific error types
/// DOCUMENTATION: Every failure a place operation can surface
/// Each variant maps to an HTTP status code; the rendered body is the
/// standard response envelope with the error text as payload
#[derive(Error, Debug)]
pub enum PlacesError {
    #[error("{0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Storage call timed out after {0:?}")]
    StorageTimeout(Duration),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Failed to decode stored place {id}: {reason}")]
    DecodeError { id: String, reason: String },
}

impl From<validator::ValidationErrors> for PlacesError {
    fn from(e: validator::ValidationErrors) -> Self {
        PlacesError::ValidationError(e.to_string())
    }
}

/// Convert PlacesError to HTTP response
/// DOCUMENTATION: Maps error types to HTTP status codes and envelope bodies
impl ResponseError for PlacesError {
    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        HttpResponse::build(status).json(Envelope::error(status, self.to_string()))
    }

    fn status_code(&self) -> StatusCode {
        match self {
            PlacesError::NotFound(_) => StatusCode::NOT_FOUND,
            PlacesError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            PlacesError::StorageTimeout(_) => StatusCode::INTERNAL_SERVER_ERROR,
            PlacesError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            PlacesError::ValidationError(_) => StatusCode::BAD_REQUEST,
            PlacesError::DecodeError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
