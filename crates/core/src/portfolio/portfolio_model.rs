//! Render-ready view models.

use std::collections::HashMap;

use serde::Serialize;

use crate::activity::ActivityGroup;
use crate::address::SuiAddress;
use crate::balances::CoinBalance;
use crate::positions::ProtocolCard;

/// A section of the view that either loaded or degraded.
///
/// Whole-query failures land here as `Unavailable`, so one failing section
/// never blanks out the rest of the view.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "data", rename_all = "camelCase")]
pub enum Section<T> {
    Loaded(T),
    Unavailable { reason: String },
}

impl<T> Section<T> {
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Section::Unavailable {
            reason: reason.into(),
        }
    }

    pub fn as_loaded(&self) -> Option<&T> {
        match self {
            Section::Loaded(value) => Some(value),
            Section::Unavailable { .. } => None,
        }
    }
}

/// One coin with its balance record and recent activity.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoinHolding {
    pub balance: CoinBalance,
    pub activity: Section<ActivityGroup>,
}

/// The complete render-ready wallet summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletView {
    pub address: SuiAddress,
    pub balances: Section<Vec<CoinHolding>>,
    pub positions: Section<Vec<ProtocolCard>>,
}

/// Merge the three aggregation outputs into one view.
///
/// Pure function: no I/O, and identical inputs always produce structurally
/// identical output. Each balance joins its activity group (empty when the
/// map has no entry; unavailable when the whole activity section degraded),
/// and protocol cards come out sorted by protocol name.
pub fn assemble(
    address: SuiAddress,
    balances: Section<Vec<CoinBalance>>,
    activity: Section<HashMap<String, ActivityGroup>>,
    positions: Section<Vec<ProtocolCard>>,
) -> WalletView {
    let balances = match balances {
        Section::Loaded(coins) => Section::Loaded(
            coins
                .into_iter()
                .map(|balance| {
                    let group = match &activity {
                        Section::Loaded(map) => Section::Loaded(
                            map.get(&balance.coin_type)
                                .cloned()
                                .unwrap_or_else(|| ActivityGroup::empty(&balance.coin_type)),
                        ),
                        Section::Unavailable { reason } => Section::unavailable(reason.clone()),
                    };
                    CoinHolding {
                        balance,
                        activity: group,
                    }
                })
                .collect(),
        ),
        Section::Unavailable { reason } => Section::Unavailable { reason },
    };

    let positions = match positions {
        Section::Loaded(mut cards) => {
            cards.sort_by(|a, b| a.protocol_name.cmp(&b.protocol_name));
            Section::Loaded(cards)
        }
        unavailable => unavailable,
    };

    WalletView {
        address,
        balances,
        positions,
    }
}
