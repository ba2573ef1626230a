//! Coin metadata domain model.

use serde::Serialize;

use crate::rpc::CoinMetadataDto;

/// Display metadata for one coin type. Immutable once fetched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoinMetadata {
    pub coin_type: String,
    pub symbol: String,
    pub name: String,
    pub decimals: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
}

impl CoinMetadata {
    /// Build from a successful metadata query.
    pub fn from_dto(coin_type: &str, dto: CoinMetadataDto) -> Self {
        Self {
            coin_type: coin_type.to_string(),
            symbol: dto.symbol,
            name: dto.name,
            decimals: dto.decimals,
            icon_url: dto.icon_url,
        }
    }

    /// Degraded record used when metadata cannot be resolved: the symbol is
    /// derived from the coin type's last path segment and amounts render in
    /// base units (decimals = 0).
    pub fn fallback(coin_type: &str) -> Self {
        Self {
            coin_type: coin_type.to_string(),
            symbol: last_path_segment(coin_type).to_string(),
            name: coin_type.to_string(),
            decimals: 0,
            icon_url: None,
        }
    }
}

/// Last `::`-separated segment of a canonical coin type path.
pub fn last_path_segment(coin_type: &str) -> &str {
    coin_type.rsplit("::").next().unwrap_or(coin_type)
}
