//! Position detection service.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::address::SuiAddress;
use crate::rpc::SuiReadApi;

use super::positions_errors::PositionError;
use super::positions_model::{DetectedPosition, ProtocolCard};
use super::registry::registry;

/// Objects requested per page of the owned-objects scan.
pub const PAGE_SIZE: u64 = 50;

/// Safety cap on pagination round-trips, bounding worst-case latency for
/// addresses owning very many objects.
pub const MAX_PAGES: u32 = 20;

/// Detects known protocol positions among an address's owned objects.
pub struct PositionService {
    api: Arc<SuiReadApi>,
}

impl PositionService {
    pub fn new(api: Arc<SuiReadApi>) -> Self {
        Self { api }
    }

    /// Scan the address's owned objects and group recognized positions
    /// into protocol cards.
    ///
    /// The scan follows pagination cursors until exhausted or until
    /// [`MAX_PAGES`] round-trips, whichever comes first. Unrecognized
    /// objects are skipped silently; a matched object whose fields fail to
    /// extract degrades to a generic position. Protocols without positions
    /// get no card.
    pub async fn get_positions(
        &self,
        address: &SuiAddress,
    ) -> Result<Vec<ProtocolCard>, PositionError> {
        let signatures = registry();
        let mut buckets: Vec<Vec<DetectedPosition>> = vec![Vec::new(); signatures.len()];

        let mut cursor: Option<String> = None;
        let mut pages = 0u32;
        loop {
            let page = self
                .api
                .get_owned_objects(address, cursor.take(), PAGE_SIZE)
                .await?;

            for entry in page.data {
                let Some(object) = entry.data else { continue };
                let Some(object_type) = object.object_type.as_deref() else {
                    continue;
                };
                let Some(index) = signatures.iter().position(|sig| sig.matches(object_type))
                else {
                    continue;
                };

                let signature = &signatures[index];
                let position = match object.move_fields().map(signature.extract) {
                    Some(Ok(fields)) => DetectedPosition {
                        protocol_name: signature.protocol_name.to_string(),
                        object_id: object.object_id.clone(),
                        fields,
                    },
                    Some(Err(e)) => {
                        warn!(
                            object_id = %object.object_id,
                            protocol = signature.protocol_name,
                            error = %e,
                            "position field extraction failed, keeping generic entry"
                        );
                        DetectedPosition::generic(signature.protocol_name, &object.object_id)
                    }
                    None => {
                        warn!(
                            object_id = %object.object_id,
                            protocol = signature.protocol_name,
                            "position object has no content, keeping generic entry"
                        );
                        DetectedPosition::generic(signature.protocol_name, &object.object_id)
                    }
                };
                buckets[index].push(position);
            }

            pages += 1;
            if !page.has_next_page {
                break;
            }
            if pages >= MAX_PAGES {
                warn!(pages, "owned-objects scan hit the page cap, results may be partial");
                break;
            }
            match page.next_cursor {
                Some(next) => cursor = Some(next),
                None => {
                    debug!("owned-objects page claims more data but has no cursor, stopping");
                    break;
                }
            }
        }

        Ok(signatures
            .iter()
            .zip(buckets)
            .filter(|(_, positions)| !positions.is_empty())
            .map(|(signature, positions)| ProtocolCard {
                protocol_name: signature.protocol_name.to_string(),
                positions,
            })
            .collect())
    }
}
