use std::sync::Arc;

use thiserror::Error;

/// Result type used throughout the Mailtrap client.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by the Mailtrap client.
///
/// Configuration and validation errors are raised synchronously, before any request is sent.
/// Everything else is the outcome of exactly one HTTP call; nothing is retried.
#[derive(Error, Debug, Clone)]
#[non_exhaustive]
pub enum Error {
    /// Invalid combination of client settings, or a management API requested without an
    /// account id.
    #[error("{0}")]
    ClientConfiguration(String),

    /// The service answered with 401 Unauthorized.
    #[error("{}", errors.join("; "))]
    Authorization {
        /// Normalized error messages from the response body.
        errors: Vec<String>,
    },

    /// The service answered with any other non-2xx status.
    #[error("{}", errors.join("; "))]
    Api {
        /// HTTP status code of the response.
        status: u16,
        /// Normalized error messages from the response body.
        errors: Vec<String>,
    },

    /// A parameter object was constructed with missing or inconsistent data.
    #[error("{0}")]
    Validation(String),

    /// Host or base URL could not be parsed.
    #[error("invalid base url configuration")]
    InvalidBaseUrl(#[source] url::ParseError),

    /// A successful response did not have the expected shape.
    #[error("unexpected response: {0}")]
    UnexpectedResponse(String),

    /// A request body could not be encoded, or a JSON response did not fit the response model.
    #[error("json error: {0}")]
    Json(#[source] Arc<serde_json::Error>),

    /// Connection, TLS or timeout failure.
    #[error(transparent)]
    // reqwest::Error is not clonable, so we're wrapping it in an Arc.
    Network(Arc<reqwest::Error>),
}

impl Error {
    pub(crate) fn configuration(message: impl Into<String>) -> Self {
        Self::ClientConfiguration(message.into())
    }

    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// HTTP status code for errors that came from a service response.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Authorization { .. } => Some(401),
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Normalized error messages reported by the service. Empty for local errors.
    pub fn errors(&self) -> &[String] {
        match self {
            Self::Authorization { errors } | Self::Api { errors, .. } => errors,
            _ => &[],
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(value: reqwest::Error) -> Self {
        Error::Network(Arc::new(value.without_url()))
    }
}

impl From<serde_json::Error> for Error {
    fn from(value: serde_json::Error) -> Self {
        Error::Json(Arc::new(value))
    }
}
