use thiserror::Error;

use crate::rpc::RpcError;

/// Failure of the balances section as a whole.
///
/// Per-coin metadata failures never surface here; they degrade the affected
/// coin to fallback metadata inside the batch.
#[derive(Debug, Error)]
pub enum BalanceError {
    #[error("balances query failed: {0}")]
    Rpc(#[from] RpcError),
}
