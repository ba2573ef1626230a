use thiserror::Error;

use crate::rpc::RpcError;

/// The transaction-history query failed outright.
///
/// Balances must still render when this happens; activity degrades to
/// "unavailable" per coin.
#[derive(Debug, Error)]
pub enum ActivityFetchError {
    #[error("transaction history query failed: {0}")]
    Rpc(#[from] RpcError),
}
