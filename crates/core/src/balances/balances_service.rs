//! Balance aggregation service.

use std::collections::HashSet;
use std::sync::Arc;

use futures::future::join_all;
use tracing::{debug, warn};

use crate::address::SuiAddress;
use crate::amounts::parse_unsigned_units;
use crate::metadata::{CoinMetadata, MetadataCache};
use crate::rpc::SuiReadApi;

use super::balances_errors::BalanceError;
use super::balances_model::CoinBalance;

/// Aggregates per-coin balances with resolved metadata.
pub struct BalanceService {
    api: Arc<SuiReadApi>,
    metadata: Arc<MetadataCache>,
}

impl BalanceService {
    pub fn new(api: Arc<SuiReadApi>, metadata: Arc<MetadataCache>) -> Self {
        Self { api, metadata }
    }

    /// Fetch all coin balances for the address, join each with its
    /// metadata, and order the result for display.
    ///
    /// Metadata lookups run concurrently across coin types; a failed lookup
    /// degrades that coin to fallback metadata instead of aborting the
    /// batch. Output is ordered by descending raw magnitude, ties broken by
    /// coin type, so the ranking is deterministic.
    pub async fn get_balances(&self, address: &SuiAddress) -> Result<Vec<CoinBalance>, BalanceError> {
        let raw = self.api.get_all_balances(address).await?;

        let mut seen: HashSet<String> = HashSet::with_capacity(raw.len());
        let mut parsed: Vec<(String, u128)> = Vec::with_capacity(raw.len());
        for entry in raw {
            let amount = match parse_unsigned_units(&entry.total_balance) {
                Ok(amount) => amount,
                Err(e) => {
                    warn!(coin_type = %entry.coin_type, error = %e, "skipping balance with malformed amount");
                    continue;
                }
            };
            if !seen.insert(entry.coin_type.clone()) {
                debug!(coin_type = %entry.coin_type, "skipping duplicate balance entry");
                continue;
            }
            parsed.push((entry.coin_type, amount));
        }

        let lookups = parsed
            .iter()
            .map(|(coin_type, _)| self.resolve_or_fallback(coin_type));
        let metadata = join_all(lookups).await;

        let mut balances: Vec<CoinBalance> = parsed
            .into_iter()
            .zip(metadata)
            .map(|((_, amount), meta)| CoinBalance::new(meta, amount))
            .collect();

        balances.sort_by(|a, b| {
            b.raw_amount
                .cmp(&a.raw_amount)
                .then_with(|| a.coin_type.cmp(&b.coin_type))
        });

        Ok(balances)
    }

    /// Resolve metadata through the session cache, degrading to a fallback
    /// record on any failure.
    async fn resolve_or_fallback(&self, coin_type: &str) -> CoinMetadata {
        match self.metadata.resolve(&self.api, coin_type).await {
            Ok(Some(meta)) => meta,
            Ok(None) => {
                debug!(coin_type, "coin has no registered metadata, using fallback");
                CoinMetadata::fallback(coin_type)
            }
            Err(e) => {
                warn!(coin_type, error = %e, "metadata query failed, using fallback");
                CoinMetadata::fallback(coin_type)
            }
        }
    }
}
