//! Activity domain models.

use serde::Serialize;

/// Maximum number of entries kept per coin, most recent first.
pub const ACTIVITY_WINDOW: usize = 10;

/// A signed balance change caused by one transaction.
///
/// One transaction touching several coins produces several events; each
/// (digest, coin type) pair is a distinct event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionEvent {
    pub digest: String,
    /// Milliseconds since epoch; absent on records without a checkpoint
    /// timestamp.
    pub timestamp_ms: Option<i64>,
    pub coin_type: String,
    /// Balance delta in base units: positive = received, negative = sent.
    #[serde(serialize_with = "crate::serde_util::i128_as_string")]
    pub delta: i128,
}

/// An event joined with its formatted, signed display delta.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityEntry {
    #[serde(flatten)]
    pub event: TransactionEvent,
    pub display_delta: String,
}

/// Recent activity for one coin type, strictly ordered by timestamp
/// descending (ties broken by digest) and capped at [`ACTIVITY_WINDOW`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityGroup {
    pub coin_type: String,
    pub entries: Vec<ActivityEntry>,
}

impl ActivityGroup {
    /// A coin with no tracked history. Not an error.
    pub fn empty(coin_type: impl Into<String>) -> Self {
        Self {
            coin_type: coin_type.into(),
            entries: Vec::new(),
        }
    }
}
