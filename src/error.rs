//! Error types for the DooTask client.
//!
//! Every public operation returns `Result<_, DooTaskError>`. Nothing in this
//! layer retries or suppresses failures; the caller owns retry/backoff policy.

use thiserror::Error;

/// Errors produced by the DooTask client.
#[derive(Debug, Error)]
pub enum DooTaskError {
    /// The server answered with a non-success HTTP status. Checked before the
    /// envelope is parsed, so the body is carried as raw text.
    #[error("HTTP {status} {reason}: {body}")]
    Http {
        status: u16,
        reason: String,
        body: String,
    },

    /// The request could not be completed at the transport level
    /// (connection failure, timeout, invalid URL).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body was not valid JSON, or the payload did not match the
    /// expected shape.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// The response envelope carried `ret != 1`, i.e. a business-level
    /// failure reported by the server.
    #[error("{message} (ret {code})")]
    Api { message: String, code: i64 },

    /// A local identity check failed after fetching the current user.
    #[error("permission denied: {0}")]
    Permission(String),

    /// A lookup returned no rows.
    #[error("not found: {0}")]
    NotFound(String),

    /// The envelope signalled success but carried no `data` payload for an
    /// endpoint that is expected to return one.
    #[error("{api} returned no data")]
    EmptyData { api: String },

    /// Client-side configuration problem, e.g. a token that cannot be used
    /// as a header value.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Internal misuse: an HTTP verb the request encoder does not support.
    /// Unreachable through the public surface.
    #[error("unsupported HTTP method: {0}")]
    UnsupportedMethod(String),
}

impl DooTaskError {
    /// HTTP status code, for [`DooTaskError::Http`] only.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Server `ret` code, for [`DooTaskError::Api`] only.
    pub fn ret(&self) -> Option<i64> {
        match self {
            Self::Api { code, .. } => Some(*code),
            _ => None,
        }
    }

    /// Whether this is a business-level failure reported inside a well-formed
    /// envelope (as opposed to a transport or decoding failure).
    pub fn is_api_error(&self) -> bool {
        matches!(self, Self::Api { .. })
    }
}
