//! Per-coin balance aggregation.

mod balances_errors;
mod balances_model;
mod balances_service;


pub use balances_errors::BalanceError;
pub use balances_model::CoinBalance;
pub use balances_service::BalanceService;
