// src/errors.rs
// DOCUMENTATION: Lookup error taxonomy and HTTP responses
// PURPOSE: One error type shared by validation, providers, and handlers

use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde::ser::{Serialize, SerializeStruct, Serializer};
use serde_json::json;
use thiserror::Error;

/// Everything that can go wrong during a camp lookup
/// DOCUMENTATION: The Display text of each variant is the message shown to the user
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("Please enter a valid 5-digit zip code.")]
    InvalidInput,

    #[error("Invalid zip code. Please try again.")]
    NotFound,

    #[error("No camps found near this zip code.")]
    EmptyResults,

    #[error("{0}")]
    TransportOrParse(String),

    #[error("A camp lookup is already in progress.")]
    LookupInProgress,
}

/// Machine-readable category of a LookupError
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidInput,
    NotFound,
    EmptyResults,
    TransportOrParse,
    LookupInProgress,
}

impl ErrorKind {
    pub fn code(&self) -> &'static str {
        match self {
            ErrorKind::InvalidInput => "INVALID_INPUT",
            ErrorKind::NotFound => "NOT_FOUND",
            ErrorKind::EmptyResults => "EMPTY_RESULTS",
            ErrorKind::TransportOrParse => "TRANSPORT_OR_PARSE",
            ErrorKind::LookupInProgress => "LOOKUP_IN_PROGRESS",
        }
    }
}

impl LookupError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            LookupError::InvalidInput => ErrorKind::InvalidInput,
            LookupError::NotFound => ErrorKind::NotFound,
            LookupError::EmptyResults => ErrorKind::EmptyResults,
            LookupError::TransportOrParse(_) => ErrorKind::TransportOrParse,
            LookupError::LookupInProgress => ErrorKind::LookupInProgress,
        }
    }
}

/// The request URL is stripped since it carries the API key
impl From<reqwest::Error> for LookupError {
    fn from(e: reqwest::Error) -> Self {
        LookupError::TransportOrParse(e.without_url().to_string())
    }
}

impl From<serde_json::Error> for LookupError {
    fn from(e: serde_json::Error) -> Self {
        LookupError::TransportOrParse(e.to_string())
    }
}

/// Serialized as `{"code": ..., "message": ...}` so it can sit inside LookupStatus
impl Serialize for LookupError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("LookupError", 2)?;
        state.serialize_field("code", self.kind().code())?;
        state.serialize_field("message", &self.to_string())?;
        state.end()
    }
}

/// Convert LookupError to HTTP response
/// DOCUMENTATION: Maps error kinds to HTTP status codes and JSON responses
impl ResponseError for LookupError {
    fn error_response(&self) -> HttpResponse {
        let body = json!({
            "error": {
                "code": self.kind().code(),
                "message": self.to_string(),
                "timestamp": chrono::Utc::now().to_rfc3339()
            }
        });

        HttpResponse::build(self.status_code()).json(body)
    }

    fn status_code(&self) -> StatusCode {
        match self.kind() {
            ErrorKind::InvalidInput => StatusCode::BAD_REQUEST,
            ErrorKind::NotFound | ErrorKind::EmptyResults => StatusCode::NOT_FOUND,
            ErrorKind::TransportOrParse => StatusCode::BAD_GATEWAY,
            ErrorKind::LookupInProgress => StatusCode::CONFLICT,
        }
    }
}
