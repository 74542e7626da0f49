//! Error types for the fetch path.
//!
//! ERROR HANDLING
//! ==============
//! Every settled fetch is either a JSON value or a [`FetchError`]. Only some
//! errors reach the UI: cancellation and forced logout are outcomes, not
//! failures, so [`FetchError::message`] returns `None` for them.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure below HTTP semantics: the request never produced a response.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    /// The request could not be built (bad header, unsupported body).
    #[error("invalid request: {0}")]
    InvalidRequest(String),
    /// Network or browser fetch failure.
    #[error("{0}")]
    Network(String),
    /// No browser transport in this build (server render or host tests).
    #[error("not available on server")]
    Unavailable,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// Superseded by a newer request or torn down with the hook.
    #[error("request aborted")]
    Aborted,
    /// Server answered `401`; the stored credential was cleared.
    #[error("unauthorized")]
    Unauthorized,
    /// Non-success status other than `401`. `message` is the server's or the fallback.
    #[error("{message}")]
    Status { status: u16, message: String },
    /// A success body that is not valid JSON.
    #[error("{0}")]
    Decode(String),
    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl FetchError {
    /// Message stored in `RequestState::error`, if this failure is user-visible.
    pub fn message(&self) -> Option<String> {
        match self {
            Self::Aborted | Self::Unauthorized => None,
            other => Some(other.to_string()),
        }
    }

    pub fn is_aborted(&self) -> bool {
        matches!(self, Self::Aborted)
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}
