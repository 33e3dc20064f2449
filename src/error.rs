//! Error types for the gamedex SDK
//!
//! This module defines the error taxonomy for the entire crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use thiserror::Error;

/// The main error type for the gamedex SDK
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Request denied by approval delegate: {method} {path}")]
    RequestDenied { method: String, path: String },

    // ============================================================================
    // Transport Errors
    // ============================================================================
    #[error("Network failure: {0}")]
    Network(#[source] reqwest::Error),

    #[error("Response serialization failed: {message}")]
    Serialization { message: String },

    #[error("API error: {0}")]
    Api(ApiErrorCode),

    // ============================================================================
    // Authorization Flow Errors
    // ============================================================================
    #[error("Authorization flow failed: {0}")]
    AuthFlow(#[from] AuthFailure),
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }

    /// Create a request-denied error from a descriptor's method and path
    pub fn denied(method: impl Into<String>, path: impl Into<String>) -> Self {
        Self::RequestDenied {
            method: method.into(),
            path: path.into(),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            message: err.to_string(),
        }
    }
}

/// Server-reported logical failures carried inside an HTTP 200 body.
///
/// The API reports these through the envelope's `status_code` field, so they
/// must be checked before a body is treated as a successful response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorCode {
    /// The supplied `api_key` was rejected (code 100)
    InvalidApiKey,
    /// The requested resource does not exist (code 101)
    ResourceNotFound,
    /// The request URL or parameters were malformed (code 102)
    MalformedRequest,
    /// A `filter` parameter could not be applied (code 104)
    FilterError,
    /// The content requires a subscriber account (code 105)
    SubscriberOnly,
}

impl ApiErrorCode {
    /// Map the envelope's numeric `status_code` onto the closed error set.
    ///
    /// Returns `None` for the success code and for codes outside the set.
    pub fn from_status_code(code: u64) -> Option<Self> {
        match code {
            100 => Some(Self::InvalidApiKey),
            101 => Some(Self::ResourceNotFound),
            102 => Some(Self::MalformedRequest),
            104 => Some(Self::FilterError),
            105 => Some(Self::SubscriberOnly),
            _ => None,
        }
    }

    /// The numeric code the server uses for this error
    pub fn status_code(self) -> u64 {
        match self {
            Self::InvalidApiKey => 100,
            Self::ResourceNotFound => 101,
            Self::MalformedRequest => 102,
            Self::FilterError => 104,
            Self::SubscriberOnly => 105,
        }
    }
}

impl std::fmt::Display for ApiErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::InvalidApiKey => "invalid API key",
            Self::ResourceNotFound => "resource not found",
            Self::MalformedRequest => "malformed request",
            Self::FilterError => "filter error",
            Self::SubscriberOnly => "subscriber-only content",
        };
        write!(f, "{label} (status_code {})", self.status_code())
    }
}

/// Terminal failures of a device-authorization attempt
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthFailure {
    /// No registration code was available when a poll fired
    #[error("no registration code available for polling")]
    MissingRegCode,

    /// The polling window elapsed without the user entering the code
    #[error("polling timed out before the code was entered")]
    PollingTimedOut,

    /// The registration-code response could not be fetched or parsed
    #[error("registration response could not be parsed")]
    ResponseSerialization,
}

/// Result type alias for the gamedex SDK
pub type Result<T> = std::result::Result<T, Error>;
