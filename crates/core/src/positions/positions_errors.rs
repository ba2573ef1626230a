use thiserror::Error;

use crate::rpc::RpcError;

/// Failure of the positions section as a whole.
#[derive(Debug, Error)]
pub enum PositionError {
    #[error("owned-objects query failed: {0}")]
    Rpc(#[from] RpcError),
}

/// A matched position object had missing or malformed content fields.
///
/// Caught per object: the object degrades to a generic label and detection
/// continues for everything else.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExtractionError {
    #[error("object has no content fields")]
    NoContent,

    #[error("missing field '{0}'")]
    MissingField(String),

    #[error("malformed field '{0}'")]
    MalformedField(String),
}
