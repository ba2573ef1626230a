use thiserror::Error;

use crate::address::AddressError;

/// Failure of a whole lookup.
///
/// Section-level failures never surface here; they degrade to
/// [`Section::Unavailable`](super::Section) inside the view.
#[derive(Debug, Error)]
pub enum LookupError {
    /// The input was rejected before any RPC call was issued.
    #[error("invalid address: {0}")]
    InvalidAddress(#[from] AddressError),

    /// A newer lookup started while this one was in flight; its results
    /// were discarded, never merged into the current view.
    #[error("lookup superseded by a newer request")]
    Superseded,
}
