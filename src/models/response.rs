// src/models/response.rs
// DOCUMENTATION: Uniform response wrapper
// PURPOSE: Every reply, success or error, has the shape
// { "status": <int>, "message": "success"|"error", "data": { "data": <payload> } }

use actix_web::http::StatusCode;
use serde::{Deserialize, Serialize};

pub const SUCCESS: &str = "success";
pub const ERROR: &str = "error";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub status: u16,
    pub message: String,
    pub data: EnvelopeData<T>,
}

/// Inner payload map
/// DOCUMENTATION: `errors` carries per-record decode failures from a listing
/// and is omitted when empty
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnvelopeData<T> {
    pub data: T,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
}

impl<T> Envelope<T> {
    pub fn success(status: StatusCode, payload: T) -> Self {
        Envelope {
            status: status.as_u16(),
            message: SUCCESS.to_string(),
            data: EnvelopeData {
                data: payload,
                errors: Vec::new(),
            },
        }
    }

    pub fn with_errors(mut self, errors: Vec<String>) -> Self {
        self.data.errors = errors;
        self
    }
}

impl Envelope<String> {
    pub fn error(status: StatusCode, text: String) -> Self {
        Envelope {
            status: status.as_u16(),
            message: ERROR.to_string(),
            data: EnvelopeData {
                data: text,
                errors: Vec::new(),
            },
        }
    }
}
