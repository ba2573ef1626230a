//! Lookup orchestration.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tracing::{debug, warn};

use crate::activity::{ActivityGroup, ActivityService};
use crate::address::SuiAddress;
use crate::balances::BalanceService;
use crate::metadata::MetadataCache;
use crate::positions::PositionService;
use crate::rpc::{RpcTransport, SuiReadApi};

use super::portfolio_errors::LookupError;
use super::portfolio_model::{assemble, Section, WalletView};

/// Runs the full aggregation pipeline for one address at a time.
///
/// Every lookup is tagged with a generation number. Starting a new lookup
/// bumps the generation, so an older in-flight lookup finds itself stale
/// when it completes and its results are discarded instead of being
/// assembled into a view.
pub struct PortfolioService {
    balances: BalanceService,
    activity: ActivityService,
    positions: PositionService,
    generation: AtomicU64,
}

impl PortfolioService {
    /// Wire the pipeline on top of a transport, sharing one metadata cache
    /// across the balance and activity aggregators.
    pub fn new(transport: Arc<dyn RpcTransport>) -> Self {
        let api = Arc::new(SuiReadApi::new(transport));
        let metadata = Arc::new(MetadataCache::new());
        Self {
            balances: BalanceService::new(api.clone(), metadata.clone()),
            activity: ActivityService::new(api.clone(), metadata),
            positions: PositionService::new(api),
            generation: AtomicU64::new(0),
        }
    }

    /// Run the pipeline for a raw address string and assemble the view.
    ///
    /// The address is validated before any RPC is issued. Balances and
    /// positions are fetched concurrently; activity follows once the coin
    /// types are known. Section failures degrade inside the view rather
    /// than failing the lookup.
    pub async fn lookup(&self, raw_address: &str) -> Result<WalletView, LookupError> {
        let address = SuiAddress::parse(raw_address)?;
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        debug!(%address, generation, "starting wallet lookup");

        let (balances_result, positions_result) = tokio::join!(
            self.balances.get_balances(&address),
            self.positions.get_positions(&address),
        );

        let balances = match balances_result {
            Ok(coins) => Section::Loaded(coins),
            Err(e) => {
                warn!(%address, error = %e, "balances section unavailable");
                Section::unavailable(e.to_string())
            }
        };
        let positions = match positions_result {
            Ok(cards) => Section::Loaded(cards),
            Err(e) => {
                warn!(%address, error = %e, "positions section unavailable");
                Section::unavailable(e.to_string())
            }
        };

        let activity = match balances.as_loaded() {
            Some(coins) if !coins.is_empty() => {
                let coin_types: HashSet<String> =
                    coins.iter().map(|c| c.coin_type.clone()).collect();
                match self.activity.get_activity(&address, &coin_types).await {
                    Ok(groups) => Section::Loaded(groups),
                    Err(e) => {
                        warn!(%address, error = %e, "activity section unavailable");
                        Section::unavailable(e.to_string())
                    }
                }
            }
            _ => Section::Loaded(HashMap::<String, ActivityGroup>::new()),
        };

        // A newer lookup may have started while this one was in flight;
        // its results must never reach the view.
        if self.generation.load(Ordering::SeqCst) != generation {
            debug!(%address, generation, "lookup superseded, discarding results");
            return Err(LookupError::Superseded);
        }

        Ok(assemble(address, balances, activity, positions))
    }
}
