//! Coin metadata resolution and session caching.

mod metadata_cache;
mod metadata_model;

pub use metadata_cache::MetadataCache;
pub use metadata_model::{last_path_segment, CoinMetadata};
