//! Error taxonomy for the RPC layer.

use thiserror::Error;

/// Errors produced by a remote call, transport-level or protocol-level.
#[derive(Debug, Error)]
pub enum RpcError {
    /// The HTTP request could not be completed.
    #[error("transport failure: {0}")]
    Transport(String),

    /// The request timed out before the node responded.
    #[error("request timed out")]
    Timeout,

    /// The node answered with a non-success HTTP status.
    #[error("HTTP status {status} from RPC endpoint")]
    Http { status: u16 },

    /// The node answered with a JSON-RPC error object.
    #[error("RPC error {code}: {message}")]
    Protocol { code: i64, message: String },

    /// The response body did not have the expected shape.
    #[error("malformed RPC response: {0}")]
    MalformedResponse(String),
}

impl From<reqwest::Error> for RpcError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            RpcError::Timeout
        } else {
            RpcError::Transport(err.to_string())
        }
    }
}
