//! The transport seam between aggregation logic and the network.

use async_trait::async_trait;
use serde_json::Value;

use super::rpc_errors::RpcError;

/// A JSON-RPC transport capable of issuing named remote calls.
///
/// Implementations must be cheap to share behind an `Arc`; the aggregation
/// services hold one transport for the whole session.
#[async_trait]
pub trait RpcTransport: Send + Sync {
    /// Issue a single call and return the parsed `result` value.
    ///
    /// A JSON-RPC `error` member, a transport failure, or a non-success
    /// HTTP status all surface as [`RpcError`]. A missing `result` member
    /// is returned as JSON `null`; some methods legitimately resolve to
    /// null (an unregistered coin has no metadata).
    async fn call(&self, method: &str, params: Vec<Value>) -> Result<Value, RpcError>;
}
