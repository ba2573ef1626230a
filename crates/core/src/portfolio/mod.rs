//! View model assembly and lookup orchestration.

mod portfolio_errors;
mod portfolio_model;
mod portfolio_service;


pub use portfolio_errors::LookupError;
pub use portfolio_model::{assemble, CoinHolding, Section, WalletView};
pub use portfolio_service::PortfolioService;
