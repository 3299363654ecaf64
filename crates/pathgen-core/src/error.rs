//! Error types for the learning path client.

use std::{fmt, time::Duration};

use thiserror::Error;

/// Every failure the client layer can produce.
///
/// Hooks never let these escape: they collapse them into a displayable
/// message with [`display_message`].
#[derive(Error, Debug)]
pub enum ClientError {
    /// The request never produced a response (DNS, connect, reset, ...)
    #[error("Network Error: {source}")]
    Transport {
        #[source]
        source: reqwest::Error,
    },
    /// The request exceeded the configured timeout
    #[error("timeout of {}ms exceeded", .timeout.as_millis())]
    Timeout { timeout: Duration },
    /// The backend answered with a non-2xx status
    #[error("Request failed with status code {status}")]
    Status { status: u16, body: String },
    /// The response body did not match the expected shape
    #[error("Invalid response body: {source}")]
    Decode {
        #[source]
        source: reqwest::Error,
    },
    /// An operation needed an active path and none was loaded
    #[error("No hay un path activo")]
    NoActivePath,
    /// Invalid client configuration (base URL, timeout)
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl ClientError {
    /// Creates a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Classifies a `reqwest` failure that happened while sending a request.
    pub(crate) fn from_send(source: reqwest::Error, timeout: Duration) -> Self {
        if source.is_timeout() {
            Self::Timeout { timeout }
        } else {
            Self::Transport { source }
        }
    }

    /// Classifies a `reqwest` failure that happened while reading a body.
    pub(crate) fn from_body(source: reqwest::Error, timeout: Duration) -> Self {
        if source.is_timeout() {
            Self::Timeout { timeout }
        } else {
            Self::Decode { source }
        }
    }

    /// HTTP status of the failed response, if the backend answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Converts an error into the text a view shows to the user.
///
/// Uses the error's own message, falling back to `fallback` when that
/// message is blank.
pub fn display_message<E: fmt::Display + ?Sized>(error: &E, fallback: &str) -> String {
    let message = error.to_string();
    if message.trim().is_empty() {
        fallback.to_string()
    } else {
        message
    }
}

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;
