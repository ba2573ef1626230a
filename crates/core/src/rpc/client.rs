//! Typed wrappers over the raw transport.

use std::sync::Arc;

use serde_json::{json, Value};
use tracing::debug;

use crate::address::SuiAddress;

use super::models::{CoinMetadataDto, OwnedObjectPage, RawBalance, TransactionBlockPage};
use super::rpc_errors::RpcError;
use super::transport::RpcTransport;

/// The read-only Sui API surface this crate consumes.
pub struct SuiReadApi {
    transport: Arc<dyn RpcTransport>,
}

impl SuiReadApi {
    pub fn new(transport: Arc<dyn RpcTransport>) -> Self {
        Self { transport }
    }

    /// All coin balances owned by the address, one entry per coin type.
    ///
    /// Entries with a malformed shape are skipped rather than failing the
    /// whole response.
    pub async fn get_all_balances(&self, address: &SuiAddress) -> Result<Vec<RawBalance>, RpcError> {
        let result = self
            .transport
            .call("suix_getAllBalances", vec![json!(address.as_str())])
            .await?;

        let entries: Vec<Value> = serde_json::from_value(result)
            .map_err(|e| RpcError::MalformedResponse(e.to_string()))?;

        let mut balances = Vec::with_capacity(entries.len());
        for entry in entries {
            match serde_json::from_value::<RawBalance>(entry) {
                Ok(balance) => balances.push(balance),
                Err(e) => debug!(error = %e, "skipping malformed balance entry"),
            }
        }
        Ok(balances)
    }

    /// Metadata for a coin type, or `None` when the coin is not registered.
    pub async fn get_coin_metadata(
        &self,
        coin_type: &str,
    ) -> Result<Option<CoinMetadataDto>, RpcError> {
        let result = self
            .transport
            .call("suix_getCoinMetadata", vec![json!(coin_type)])
            .await?;

        if result.is_null() {
            return Ok(None);
        }
        serde_json::from_value(result)
            .map(Some)
            .map_err(|e| RpcError::MalformedResponse(e.to_string()))
    }

    /// The most recent transactions involving the address as sender or
    /// recipient, newest first, with balance-change effects attached.
    pub async fn query_transaction_blocks(
        &self,
        address: &SuiAddress,
        limit: u64,
    ) -> Result<TransactionBlockPage, RpcError> {
        let query = json!({
            "filter": {
                "Any": [
                    { "FromAddress": address.as_str() },
                    { "ToAddress": address.as_str() },
                ]
            },
            "options": {
                "showBalanceChanges": true,
                "showEffects": true,
                "showInput": false,
                "showEvents": false,
                "showObjectChanges": false,
            },
        });

        let result = self
            .transport
            .call(
                "suix_queryTransactionBlocks",
                vec![query, Value::Null, json!(limit), json!(true)],
            )
            .await?;

        serde_json::from_value(result).map_err(|e| RpcError::MalformedResponse(e.to_string()))
    }

    /// One page of objects owned by the address, with type and content.
    pub async fn get_owned_objects(
        &self,
        address: &SuiAddress,
        cursor: Option<String>,
        limit: u64,
    ) -> Result<OwnedObjectPage, RpcError> {
        let query = json!({
            "options": {
                "showType": true,
                "showContent": true,
            },
        });

        let cursor = cursor.map(Value::String).unwrap_or(Value::Null);
        let result = self
            .transport
            .call(
                "suix_getOwnedObjects",
                vec![json!(address.as_str()), query, cursor, json!(limit)],
            )
            .await?;

        serde_json::from_value(result).map_err(|e| RpcError::MalformedResponse(e.to_string()))
    }
}
