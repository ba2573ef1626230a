//! Activity aggregation service.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use tracing::debug;

use crate::address::SuiAddress;
use crate::amounts::{format_signed, parse_units};
use crate::metadata::MetadataCache;
use crate::rpc::{owner_address, SuiReadApi};

use super::activity_errors::ActivityFetchError;
use super::activity_model::{ActivityEntry, ActivityGroup, TransactionEvent, ACTIVITY_WINDOW};

/// Upper bound on transactions requested from the history query. The query
/// is issued newest-first, so this bounds the scan without losing the most
/// recent entries.
pub const MAX_TRANSACTIONS: u64 = 50;

/// Aggregates recent balance-change activity per coin type.
pub struct ActivityService {
    api: Arc<SuiReadApi>,
    metadata: Arc<MetadataCache>,
}

impl ActivityService {
    pub fn new(api: Arc<SuiReadApi>, metadata: Arc<MetadataCache>) -> Self {
        Self { api, metadata }
    }

    /// Fetch recent activity for the address, grouped by coin type.
    ///
    /// Only balance changes owned by the queried address and belonging to
    /// one of `coin_types` are kept. Every requested coin type gets a group
    /// in the result, empty when the history holds nothing for it.
    pub async fn get_activity(
        &self,
        address: &SuiAddress,
        coin_types: &HashSet<String>,
    ) -> Result<HashMap<String, ActivityGroup>, ActivityFetchError> {
        let page = self
            .api
            .query_transaction_blocks(address, MAX_TRANSACTIONS)
            .await?;

        let mut grouped: HashMap<String, Vec<TransactionEvent>> = HashMap::new();
        for tx in page.data {
            let timestamp_ms = tx
                .timestamp_ms
                .as_deref()
                .and_then(|raw| raw.parse::<i64>().ok());

            for change in tx.balance_changes.unwrap_or_default() {
                let owned = owner_address(&change.owner)
                    .map(|owner| address.matches(owner))
                    .unwrap_or(false);
                if !owned || !coin_types.contains(&change.coin_type) {
                    continue;
                }

                let delta = match parse_units(&change.amount) {
                    Ok(delta) => delta,
                    Err(e) => {
                        debug!(digest = %tx.digest, error = %e, "skipping balance change with malformed amount");
                        continue;
                    }
                };

                grouped
                    .entry(change.coin_type.clone())
                    .or_default()
                    .push(TransactionEvent {
                        digest: tx.digest.clone(),
                        timestamp_ms,
                        coin_type: change.coin_type,
                        delta,
                    });
            }
        }

        let mut result = HashMap::with_capacity(coin_types.len());
        for coin_type in coin_types {
            let events = grouped.remove(coin_type).unwrap_or_default();
            result.insert(
                coin_type.clone(),
                self.build_group(coin_type, events).await,
            );
        }
        Ok(result)
    }

    /// Order events newest-first (digest tiebreak keeps equal timestamps
    /// deterministic), cap the window, and attach display deltas.
    async fn build_group(&self, coin_type: &str, mut events: Vec<TransactionEvent>) -> ActivityGroup {
        events.sort_by(|a, b| {
            b.timestamp_ms
                .unwrap_or(0)
                .cmp(&a.timestamp_ms.unwrap_or(0))
                .then_with(|| a.digest.cmp(&b.digest))
        });
        events.truncate(ACTIVITY_WINDOW);

        let decimals = match self.metadata.resolve(&self.api, coin_type).await {
            Ok(Some(meta)) => meta.decimals,
            _ => 0,
        };

        let entries = events
            .into_iter()
            .map(|event| {
                let display_delta = format_signed(event.delta, decimals);
                ActivityEntry {
                    event,
                    display_delta,
                }
            })
            .collect();

        ActivityGroup {
            coin_type: coin_type.to_string(),
            entries,
        }
    }
}
