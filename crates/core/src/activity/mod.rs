//! Recent per-coin balance-change activity.

mod activity_errors;
mod activity_model;
mod activity_service;

#[cfg(test)]
mod activity_service_tests;

pub use activity_errors::ActivityFetchError;
pub use activity_model::{ActivityEntry, ActivityGroup, TransactionEvent, ACTIVITY_WINDOW};
pub use activity_service::{ActivityService, MAX_TRANSACTIONS};
