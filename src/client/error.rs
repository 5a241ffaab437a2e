//! Request failure type

use reqwest::StatusCode;
use thiserror::Error;

/// A failed submission: either the server answered non-2xx or the request never completed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestFailure {
    #[error("server returned {status} {reason}")]
    Status {
        status: u16,
        reason: String,
        body: String,
    },

    #[error("request failed: {reason}")]
    Network { reason: String },
}

impl RequestFailure {
    /// Failure for a non-2xx response
    pub fn from_status(status: StatusCode, body: String) -> Self {
        Self::Status {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or("error").to_string(),
            body,
        }
    }

    pub fn network(err: impl std::fmt::Display) -> Self {
        Self::Network {
            reason: err.to_string(),
        }
    }

    /// Short reason string, suitable for a popup
    pub fn reason(&self) -> &str {
        match self {
            Self::Status { reason, .. } | Self::Network { reason } => reason,
        }
    }

    /// Raw response text; empty when no response arrived
    pub fn response_text(&self) -> &str {
        match self {
            Self::Status { body, .. } => body,
            Self::Network { .. } => "",
        }
    }
}
