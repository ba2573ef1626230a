//! Session-scoped metadata cache with single-flight resolution.

use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::OnceCell;
use tracing::debug;

use crate::rpc::{RpcError, SuiReadApi};

use super::metadata_model::CoinMetadata;

/// Per-session cache of coin metadata, keyed by coin type.
///
/// Each key is written at most once: the first successful fetch wins, and
/// concurrent resolutions of the same coin type await the in-flight query
/// instead of re-issuing it. An RPC-null result ("coin not registered") is
/// cached as a definitive `None`; a transport error leaves the cell unset so
/// a later lookup may retry.
#[derive(Default)]
pub struct MetadataCache {
    entries: DashMap<String, Arc<OnceCell<Option<CoinMetadata>>>>,
}

impl MetadataCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve metadata for a coin type, issuing at most one query per key.
    pub async fn resolve(
        &self,
        api: &SuiReadApi,
        coin_type: &str,
    ) -> Result<Option<CoinMetadata>, RpcError> {
        let cell = self
            .entries
            .entry(coin_type.to_string())
            .or_insert_with(|| Arc::new(OnceCell::new()))
            .clone();

        cell.get_or_try_init(|| async {
            debug!(coin_type, "fetching coin metadata");
            let dto = api.get_coin_metadata(coin_type).await?;
            Ok(dto.map(|d| CoinMetadata::from_dto(coin_type, d)))
        })
        .await
        .cloned()
    }

    /// Number of resolved (or definitively missing) coin types.
    pub fn len(&self) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.value().initialized())
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use async_trait::async_trait;
    use serde_json::{json, Value};

    use super::*;
    use crate::rpc::RpcTransport;

    /// Counts metadata calls and yields mid-request so concurrent
    /// resolutions genuinely overlap.
    struct CountingTransport {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl RpcTransport for CountingTransport {
        async fn call(&self, method: &str, _params: Vec<Value>) -> Result<Value, RpcError> {
            assert_eq!(method, "suix_getCoinMetadata");
            self.calls.fetch_add(1, Ordering::SeqCst);
            tokio::task::yield_now().await;
            Ok(json!({"symbol": "SUI", "name": "Sui", "decimals": 9}))
        }
    }

    #[tokio::test]
    async fn concurrent_resolutions_issue_one_query() {
        let transport = Arc::new(CountingTransport {
            calls: AtomicUsize::new(0),
        });
        let api = SuiReadApi::new(transport.clone());
        let cache = MetadataCache::new();

        let (a, b, c) = tokio::join!(
            cache.resolve(&api, "0x2::sui::SUI"),
            cache.resolve(&api, "0x2::sui::SUI"),
            cache.resolve(&api, "0x2::sui::SUI"),
        );

        assert_eq!(transport.calls.load(Ordering::SeqCst), 1);
        for result in [a, b, c] {
            assert_eq!(result.unwrap().unwrap().symbol, "SUI");
        }
        assert_eq!(cache.len(), 1);
        assert!(!cache.is_empty());
    }
}
