//! Error taxonomy for the authenticated request pipeline.
//!
//! The classes match what callers need to distinguish: transport
//! failures, authorization failures (401), application errors (other
//! non-2xx, with the server's message when it sent one), and
//! response-decoding failures, plus local persistence failures for
//! operations that store their result.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors produced by the request pipeline.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never reached the server or no response was received.
    /// Propagated unchanged; the pipeline performs no retries.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered 401. The pipeline has already fired its
    /// unauthorized handler; the call still rejects so the caller observes
    /// the failure.
    #[error("unauthorized")]
    Unauthorized,

    /// Any other non-2xx response. `message` is the body's `message` or
    /// `error` field when present, else a generic fallback.
    #[error("{message}")]
    Api {
        status: StatusCode,
        message: String,
    },

    /// A 2xx response body that failed to deserialize.
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The request succeeded but its result could not be persisted
    /// locally (e.g. a login token that would be lost on restart).
    #[error("session storage error: {0}")]
    Storage(#[from] crate::storage::StorageError),
}

impl ApiError {
    /// Build an application error from a non-2xx response body.
    ///
    /// The remote API reports failures as `{ "message": ... }` or
    /// `{ "error": ... }`; anything else falls back to a generic message.
    pub(crate) fn from_response(status: StatusCode, body: &str) -> Self {
        let message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|value| {
                value
                    .get("message")
                    .or_else(|| value.get("error"))
                    .and_then(serde_json::Value::as_str)
                    .map(str::to_owned)
            })
            .unwrap_or_else(|| format!("request failed with status {status}"));

        Self::Api { status, message }
    }

    /// The HTTP status of an application error, if this is one.
    #[must_use]
    pub const fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Unauthorized => Some(StatusCode::UNAUTHORIZED),
            _ => None,
        }
    }
}
