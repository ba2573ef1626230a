//! Suifolio Core
//!
//! Read-only aggregation of a Sui wallet's holdings over public JSON-RPC:
//! per-coin balances with display formatting, recent per-coin activity
//! deltas, and detected DeFi protocol positions, merged into one
//! render-ready view model.
//!
//! # Architecture
//!
//! ```text
//! +-----------+     +--------------+
//! |  address  | --> |  SuiAddress  |  (validated, normalized)
//! +-----------+     +--------------+
//!                          |
//!            +-------------+--------------+
//!            v                            v
//!   +----------------+          +-----------------+
//!   | BalanceService |          | PositionService |   (concurrent)
//!   +----------------+          +-----------------+
//!            |                            |
//!            v                            |
//!   +-----------------+                   |
//!   | ActivityService |                   |
//!   +-----------------+                   |
//!            |                            |
//!            +-------------+--------------+
//!                          v
//!                   +------------+
//!                   |  assemble  |  (pure)
//!                   +------------+
//!                          |
//!                          v
//!                   +------------+
//!                   | WalletView |
//!                   +------------+
//! ```
//!
//! All three aggregators talk to the node through the [`RpcTransport`]
//! seam and share a session-scoped [`MetadataCache`]. Amounts stay 128-bit
//! integers through the whole pipeline and become display strings only at
//! the formatting boundary.

pub mod activity;
pub mod address;
pub mod amounts;
pub mod balances;
pub mod metadata;
pub mod portfolio;
pub mod positions;
pub mod rpc;

mod serde_util;

// Re-export the pipeline surface
pub use activity::{ActivityEntry, ActivityFetchError, ActivityGroup, ActivityService, TransactionEvent};
pub use address::{AddressError, SuiAddress};
pub use amounts::{format_signed, format_units, format_unsigned, parse_display, parse_units, FormatError};
pub use balances::{BalanceError, BalanceService, CoinBalance};
pub use metadata::{CoinMetadata, MetadataCache};
pub use portfolio::{assemble, CoinHolding, LookupError, PortfolioService, Section, WalletView};
pub use positions::{DetectedPosition, ExtractionError, PositionError, PositionField, ProtocolCard};

// Re-export transport types
pub use rpc::{HttpRpcTransport, RpcError, RpcTransport, SuiNetwork, SuiReadApi};
