//! Balance domain models.

use serde::Serialize;

use crate::amounts::format_unsigned;
use crate::metadata::CoinMetadata;

/// One owned coin with resolved metadata and a derived display amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoinBalance {
    pub coin_type: String,
    pub metadata: CoinMetadata,
    /// Total balance in base units.
    #[serde(serialize_with = "crate::serde_util::u128_as_string")]
    pub raw_amount: u128,
    /// Human-readable amount; always recomputed from `raw_amount` and the
    /// metadata decimals, never stored independently.
    pub display_amount: String,
}

impl CoinBalance {
    pub fn new(metadata: CoinMetadata, raw_amount: u128) -> Self {
        let display_amount = format_unsigned(raw_amount, metadata.decimals);
        Self {
            coin_type: metadata.coin_type.clone(),
            metadata,
            raw_amount,
            display_amount,
        }
    }
}
