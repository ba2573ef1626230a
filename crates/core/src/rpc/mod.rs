//! JSON-RPC access to a Sui fullnode.
//!
//! The transport itself is a narrow seam: anything that can issue a named
//! remote call and hand back parsed JSON implements [`RpcTransport`].
//! [`HttpRpcTransport`] is the production implementation; tests substitute
//! in-memory fakes. [`SuiReadApi`] layers the four read methods this crate
//! consumes on top of the transport, deserializing into typed wire models.

mod client;
mod http;
mod models;
mod networks;
mod rpc_errors;
mod transport;

pub use client::SuiReadApi;
pub use http::HttpRpcTransport;
pub use models::{
    owner_address, BalanceChangeDto, CoinMetadataDto, ObjectData, OwnedObjectEntry,
    OwnedObjectPage, RawBalance, TransactionBlockDto, TransactionBlockPage,
};
pub use networks::{SuiNetwork, UnknownNetwork};
pub use rpc_errors::RpcError;
pub use transport::RpcTransport;
