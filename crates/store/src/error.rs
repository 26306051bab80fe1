//! Slice-level error type.

use cinelog_client::ApiError;

/// Errors raised inside a slice's async operations.
///
/// Every variant is normalized to its display string before being
/// stored in slice state; nothing propagates past the slice boundary.
#[derive(Debug, thiserror::Error)]
pub enum SliceError {
    /// The HTTP exchange never completed (network, DNS, TLS).
    #[error(transparent)]
    Transport(#[from] ApiError),

    /// The backend answered with an application-level error status.
    /// The message is already fully formatted for display.
    #[error("{0}")]
    Backend(String),

    /// The response payload did not match the expected entity shape.
    #[error("Invalid response payload: {0}")]
    Decode(#[from] serde_json::Error),
}

impl SliceError {
    pub(crate) fn backend(message: String) -> Self {
        Self::Backend(message)
    }
}
