// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types with consistent API responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Why a gym fetch failed. Only two causes are distinguished.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// No route to the open-data server, or the connection failed part way
    /// (DNS, connect, timeout, reset, truncated body).
    #[error("Couldn't reach server. Check your internet connection.")]
    Connectivity,

    /// Anything else: bad status, undecodable body, etc.
    #[error("{0}")]
    Unexpected(String),
}

impl FetchError {
    pub const CONNECTIVITY_MESSAGE: &'static str =
        "Couldn't reach server. Check your internet connection.";
    pub const UNEXPECTED_MESSAGE: &'static str = "An unexpected error occurred";

    /// Text shown to the user for this failure.
    pub fn user_message(&self) -> String {
        match self {
            FetchError::Connectivity => Self::CONNECTIVITY_MESSAGE.to_string(),
            FetchError::Unexpected(msg) if msg.trim().is_empty() => {
                Self::UNEXPECTED_MESSAGE.to_string()
            }
            FetchError::Unexpected(msg) => msg.clone(),
        }
    }
}

impl From<reqwest::Error> for FetchError {
    /// Transport failures (connect, timeout, dropped connection, body cut off
    /// mid-stream) are connectivity problems. JSON is decoded with serde_json
    /// from the complete body, so a reqwest decode error here is always a
    /// failed body read, never malformed JSON.
    fn from(err: reqwest::Error) -> Self {
        if err.is_connect()
            || err.is_timeout()
            || err.is_request()
            || err.is_body()
            || err.is_decode()
        {
            FetchError::Connectivity
        } else {
            FetchError::Unexpected(err.to_string())
        }
    }
}

/// Application error type that converts to HTTP responses.
///
/// Fetch failures are not here: they are reported through the fetch state.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Invalid request: {0}")]
    BadRequest(String),
}

/// JSON error response body
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", Some(msg.clone())),
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, "bad_request", Some(msg.clone()))
            }
        };

        let body = ErrorResponse {
            error: error.to_string(),
            details,
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for handlers
pub type Result<T> = std::result::Result<T, AppError>;
