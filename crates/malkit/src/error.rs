//! Error types for MyAnimeList API operations.
//!
//! Non-2xx responses are classified by status code into [`Error::BadRequest`],
//! [`Error::Unauthorized`], [`Error::Forbidden`], [`Error::NotFound`], or the
//! catch-all [`Error::Api`]. Each of them carries an [`ApiError`] with the
//! original status, the short error code, and the descriptive message from the
//! response body.
//!
//! # Example
//!
//! ```no_run
//! use malkit::{Error, MalClient};
//!
//! # async fn example() -> malkit::Result<()> {
//! let client = MalClient::builder().client_id("my-client-id").build()?;
//!
//! match client.anime().details(1).await {
//!     Ok(anime) => println!("{:?}", anime.title),
//!     Err(Error::NotFound(e)) => println!("no such anime: {}", e.message),
//!     Err(Error::Unauthorized(_)) => println!("token expired, re-authorize"),
//!     Err(e) => return Err(e),
//! }
//! # Ok(())
//! # }
//! ```

use std::fmt;

use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

/// Details extracted from a non-2xx API response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    /// The HTTP status code of the response.
    pub status: u16,
    /// Short machine-readable error code, e.g. `not_found` or `invalid_token`.
    pub error: String,
    /// Human-readable description.
    pub message: String,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}: {}", self.status, self.error, self.message)
    }
}

/// The error body MyAnimeList returns alongside failing status codes.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
    message: Option<String>,
}

impl ApiError {
    /// Build an [`ApiError`] from a status code and raw response body.
    ///
    /// Missing `error`/`message` fields (or a body that is not JSON at all)
    /// fall back to the status' canonical reason and the raw body text.
    pub fn from_body(status: u16, body: &[u8]) -> Self {
        let parsed = serde_json::from_slice::<ErrorBody>(body).ok();
        let (error, message) = match parsed {
            Some(ErrorBody { error, message }) => (error, message),
            None => (None, None),
        };

        let error = error.unwrap_or_else(|| {
            StatusCode::from_u16(status)
                .ok()
                .and_then(|s| s.canonical_reason())
                .unwrap_or("unknown_error")
                .to_string()
        });
        let message =
            message.unwrap_or_else(|| String::from_utf8_lossy(body).trim().to_string());

        Self {
            status,
            error,
            message,
        }
    }
}

/// The error type for MyAnimeList operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The server rejected the request parameters (status 400).
    #[error("bad request: {0}")]
    BadRequest(ApiError),

    /// The access token is missing, expired, or invalid (status 401).
    #[error("unauthorized: {0}")]
    Unauthorized(ApiError),

    /// The token lacks permission for this resource (status 403).
    #[error("forbidden: {0}")]
    Forbidden(ApiError),

    /// The requested resource does not exist (status 404).
    #[error("not found: {0}")]
    NotFound(ApiError),

    /// Any other non-2xx response.
    #[error("HTTP error: {0}")]
    Api(ApiError),

    /// The OAuth token endpoint rejected an authorization code or refresh token.
    ///
    /// Token endpoint failures are reported here regardless of their status
    /// code so callers can tell an authorization failure apart from a failing
    /// resource call.
    #[error("token exchange failed: {0}")]
    TokenExchange(ApiError),

    /// HTTP/network error from reqwest.
    ///
    /// Connection resets are retried before this surfaces; everything else
    /// (DNS, refused, timeout) is reported immediately.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A base URL or route path could not be parsed.
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// A header value (usually the bearer token) contained invalid characters.
    #[error("invalid header value: {0}")]
    InvalidHeader(String),

    /// Invalid configuration.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl Error {
    /// Classify a non-2xx response into the matching error kind.
    pub fn from_response(status: u16, body: &[u8]) -> Self {
        let api = ApiError::from_body(status, body);
        match status {
            400 => Error::BadRequest(api),
            401 => Error::Unauthorized(api),
            403 => Error::Forbidden(api),
            404 => Error::NotFound(api),
            _ => Error::Api(api),
        }
    }

    /// The response details, if this error came from a non-2xx response.
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            Error::BadRequest(e)
            | Error::Unauthorized(e)
            | Error::Forbidden(e)
            | Error::NotFound(e)
            | Error::Api(e)
            | Error::TokenExchange(e) => Some(e),
            _ => None,
        }
    }

    /// The HTTP status code, if this error came from a response.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Http(e) => e.status().map(|s| s.as_u16()),
            other => other.api_error().map(|e| e.status),
        }
    }

    /// Whether this is a 404 classification.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_))
    }

    /// Re-tag a response classification as a token endpoint failure.
    ///
    /// Transport, JSON and configuration errors pass through unchanged.
    pub(crate) fn into_token_exchange(self) -> Self {
        match self {
            Error::BadRequest(e)
            | Error::Unauthorized(e)
            | Error::Forbidden(e)
            | Error::NotFound(e)
            | Error::Api(e) => Error::TokenExchange(e),
            other => other,
        }
    }
}

/// A specialized Result type for MyAnimeList operations.
pub type Result<T> = std::result::Result<T, Error>;
