//! Client error types

use thiserror::Error;
use tokio_util::sync::CancellationToken;

/// Client error type
///
/// Distinguishes transport failures (retryable) from backend rejections
/// (not retryable; `InvalidTransition`/`Conflict` mean the local copy of the
/// order went stale and must be refetched).
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP transport failed (network error, timeout)
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Missing or invalid bearer token
    #[error("authentication required")]
    Unauthorized,

    /// Actor/role mismatch for the requested operation
    #[error("permission denied: {0}")]
    Forbidden(String),

    /// Resource not found
    #[error("not found: {0}")]
    NotFound(String),

    /// Request rejected by validation (e.g. empty cart, insufficient stock)
    #[error("validation error: {0}")]
    Validation(String),

    /// Requested transition is not valid from the order's current state
    #[error("invalid transition: {0}")]
    InvalidTransition(String),

    /// Another actor already transitioned the order
    #[error("stale state: {0}")]
    Conflict(String),

    /// Response body did not match the expected shape
    #[error("invalid response: {0}")]
    InvalidResponse(String),

    /// The initiating view went away before the request finished
    #[error("request cancelled")]
    Cancelled,

    /// Backend-side failure
    #[error("internal error: {0}")]
    Internal(String),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClientError {
    /// Whether retrying the same request can succeed without user action
    pub fn is_retryable(&self) -> bool {
        matches!(self, ClientError::Network(_))
    }

    /// Whether the caller's cached order is stale and must be refetched
    pub fn requires_refetch(&self) -> bool {
        matches!(
            self,
            ClientError::InvalidTransition(_) | ClientError::Conflict(_)
        )
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

/// Race a client call against view cancellation
///
/// The consoles wrap their repository calls in this so a dismissed view
/// aborts its in-flight request instead of mutating state after unmount.
pub async fn with_cancellation<T>(
    token: &CancellationToken,
    fut: impl Future<Output = ClientResult<T>>,
) -> ClientResult<T> {
    tokio::select! {
        _ = token.cancelled() => Err(ClientError::Cancelled),
        res = fut => res,
    }
}
