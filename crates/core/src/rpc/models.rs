//! Wire models for the four read methods this crate consumes.
//!
//! All numeric balance and delta fields arrive as decimal-string integers;
//! parsing to 128-bit integers happens at the aggregation boundary, never
//! here, so a malformed field degrades one record instead of one response.

use serde::Deserialize;
use serde_json::Value;

/// One entry from `suix_getAllBalances`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawBalance {
    pub coin_type: String,
    /// Unsigned integer in base units, decimal-string encoded.
    pub total_balance: String,
}

/// Result of `suix_getCoinMetadata` for a registered coin.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoinMetadataDto {
    pub symbol: String,
    pub name: String,
    pub decimals: u8,
    #[serde(default)]
    pub icon_url: Option<String>,
}

/// One page from `suix_queryTransactionBlocks`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionBlockPage {
    #[serde(default)]
    pub data: Vec<TransactionBlockDto>,
    #[serde(default)]
    pub next_cursor: Option<String>,
    #[serde(default)]
    pub has_next_page: bool,
}

/// A transaction record with balance-change effects.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionBlockDto {
    pub digest: String,
    /// Milliseconds since epoch, decimal-string encoded; absent on some
    /// records (e.g. not yet checkpointed).
    #[serde(default)]
    pub timestamp_ms: Option<String>,
    #[serde(default)]
    pub balance_changes: Option<Vec<BalanceChangeDto>>,
}

/// One balance-change effect within a transaction.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceChangeDto {
    /// Owner of the changed balance. The node emits several shapes
    /// (`{"AddressOwner": ..}`, `{"ObjectOwner": ..}`, `"Immutable"`),
    /// so this stays untyped and goes through [`owner_address`].
    pub owner: Value,
    pub coin_type: String,
    /// Signed integer in base units, decimal-string encoded.
    pub amount: String,
}

/// One page from `suix_getOwnedObjects`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnedObjectPage {
    #[serde(default)]
    pub data: Vec<OwnedObjectEntry>,
    #[serde(default)]
    pub next_cursor: Option<String>,
    #[serde(default)]
    pub has_next_page: bool,
}

/// Envelope around one owned object; `data` is absent on per-object errors.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnedObjectEntry {
    #[serde(default)]
    pub data: Option<ObjectData>,
}

/// Type tag and content fields of one owned object.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectData {
    pub object_id: String,
    #[serde(rename = "type")]
    #[serde(default)]
    pub object_type: Option<String>,
    /// Move object content: `{"dataType": "moveObject", "fields": {..}}`.
    #[serde(default)]
    pub content: Option<Value>,
}

impl ObjectData {
    /// The `fields` map of a Move object's content, if present.
    pub fn move_fields(&self) -> Option<&Value> {
        self.content.as_ref()?.get("fields")
    }
}

/// Extract the address out of a balance-change owner value.
///
/// Returns `None` for shared/immutable owners and unknown shapes.
pub fn owner_address(owner: &Value) -> Option<&str> {
    if let Some(addr) = owner.as_str() {
        return Some(addr);
    }
    for key in ["AddressOwner", "GasOwner", "ObjectOwner"] {
        if let Some(addr) = owner.get(key).and_then(Value::as_str) {
            return Some(addr);
        }
    }
    None
}
