//! DeFi protocol position detection over owned objects.

mod positions_errors;
mod positions_model;
mod positions_service;
mod registry;


pub use positions_errors::{ExtractionError, PositionError};
pub use positions_model::{DetectedPosition, PositionField, ProtocolCard};
pub use positions_service::{PositionService, MAX_PAGES, PAGE_SIZE};
pub use registry::{registry, FieldExtractor, ProtocolSignature};
