use serde::{Deserialize, Serialize};
use std::fmt;

/// Categorization of failures raised by the backend adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApiErrorKind {
    /// Rejected before any engine call (e.g. empty query).
    Validation,
    /// The engine answered with a non-success payload or status.
    Backend,
    /// The engine could not be reached at all.
    Transport,
}

/// Structured error shared between the server crate and its tests.
///
/// The UI never sees this type directly: server functions fold it into the
/// `success:false` payloads of the wire contracts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiError {
    pub kind: ApiErrorKind,
    pub message: String,
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            kind: ApiErrorKind::Validation,
            message: message.into(),
        }
    }

    pub fn backend(message: impl Into<String>) -> Self {
        Self {
            kind: ApiErrorKind::Backend,
            message: message.into(),
        }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self {
            kind: ApiErrorKind::Transport,
            message: message.into(),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ApiError {}
