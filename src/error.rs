/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 15/10/26
******************************************************************************/

//! Error types returned by the client
//!
//! Every public operation returns [`AppError`]. Failures reported by the
//! Veem API itself carry an [`ApiError`], either structured as the server
//! sent it or built from the raw response text when the body is not a
//! recognised error document.

use crate::presentation::serialization::{lenient_datetime_opt, null_as_empty_string};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Error document returned by the Veem API
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiError {
    /// Kind of error, e.g. `invalid_client`
    #[serde(
        rename = "error",
        default,
        deserialize_with = "null_as_empty_string"
    )]
    pub error_type: String,
    /// Human readable description; usually only present on authentication errors
    #[serde(
        default,
        deserialize_with = "null_as_empty_string",
        skip_serializing_if = "String::is_empty"
    )]
    pub error_description: String,
    /// Numeric error code, if present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<i64>,
    /// Error message, if present
    #[serde(default, deserialize_with = "null_as_empty_string")]
    pub message: String,
    /// Time the error was produced
    #[serde(
        default,
        deserialize_with = "lenient_datetime_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub timestamp: Option<DateTime<Utc>>,
}

impl ApiError {
    /// Builds an error from a failed response body
    ///
    /// If the body does not parse as an error document the raw text becomes
    /// the message, verbatim.
    #[must_use]
    pub fn from_body(body: &[u8]) -> Self {
        match serde_json::from_slice::<ApiError>(body) {
            Ok(err) => err,
            Err(_) => ApiError {
                message: String::from_utf8_lossy(body).into_owned(),
                ..Default::default()
            },
        }
    }

    /// The most specific message available: the description when present,
    /// otherwise the plain message
    #[must_use]
    pub fn message(&self) -> &str {
        if self.error_description.is_empty() {
            &self.message
        } else {
            &self.error_description
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.error_type.is_empty() {
            write!(f, "{}", self.message())
        } else {
            write!(f, "({}) {}", self.error_type, self.message())
        }
    }
}

impl std::error::Error for ApiError {}

/// Main error type for the library
#[derive(Debug)]
pub enum AppError {
    /// Transport failure: connection, DNS, TLS, timeout
    Network(reqwest::Error),
    /// The token endpoint rejected the client credentials
    Authentication(ApiError),
    /// A resource endpoint answered with a status other than 200 or 201
    Api(ApiError),
    /// A payload could not be encoded, or a successful response did not
    /// match the expected shape
    Json(serde_json::Error),
    /// `next()` was called on the last page of a listing
    NoMorePages,
    /// Local file access failed
    Io(std::io::Error),
    /// The caller supplied something that cannot be sent
    InvalidInput(String),
}

impl AppError {
    /// Returns the API error document for authentication and API failures
    #[must_use]
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            AppError::Authentication(err) | AppError::Api(err) => Some(err),
            _ => None,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Network(e) => write!(f, "network error: {e}"),
            AppError::Authentication(e) => write!(f, "authentication failed: {e}"),
            AppError::Api(e) => write!(f, "api error: {e}"),
            AppError::Json(e) => write!(f, "json error: {e}"),
            AppError::NoMorePages => write!(f, "no more pages left"),
            AppError::Io(e) => write!(f, "io error: {e}"),
            AppError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Network(e) => Some(e),
            AppError::Authentication(e) | AppError::Api(e) => Some(e),
            AppError::Json(e) => Some(e),
            AppError::Io(e) => Some(e),
            AppError::NoMorePages | AppError::InvalidInput(_) => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Network(err)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Json(err)
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err)
    }
}

impl From<reqwest::header::InvalidHeaderValue> for AppError {
    fn from(err: reqwest::header::InvalidHeaderValue) -> Self {
        AppError::InvalidInput(format!("invalid header value: {err}"))
    }
}
