//! Static registry of known protocol object signatures.
//!
//! Detection is a closed set of (type-prefix, extractor) pairs evaluated in
//! registry order. Adding support for a protocol means adding one entry
//! here; the detection loop never changes.

use serde_json::Value;

use super::positions_errors::ExtractionError;
use super::positions_model::PositionField;

/// Pulls display fields out of a matched object's Move content fields.
pub type FieldExtractor = fn(&Value) -> Result<Vec<PositionField>, ExtractionError>;

/// A known protocol object signature: a type prefix to match against owned
/// object type strings, and an extractor for its position fields.
pub struct ProtocolSignature {
    pub protocol_name: &'static str,
    pub type_prefix: &'static str,
    pub extract: FieldExtractor,
}

impl ProtocolSignature {
    /// Prefix match on the canonical `package::module::struct` path, so
    /// generic instantiations (`Type<T>`) of the same struct also match.
    pub fn matches(&self, object_type: &str) -> bool {
        object_type.starts_with(self.type_prefix)
    }
}

/// Cetus concentrated-liquidity position NFT.
const CETUS_POSITION: &str =
    "0x1eabed72c53feb3805120e081dc15963c204dc8d091542592abaf7a35689b2fb::position::Position";

/// Suilend obligation ownership capability.
const SUILEND_OBLIGATION_CAP: &str =
    "0xf95b06141ed4a174f239417323bde3f209b972f5930d8521ea38a52aff3a6ddf::lending_market::ObligationOwnerCap";

/// Scallop obligation key.
const SCALLOP_OBLIGATION_KEY: &str =
    "0xefe8b36d5b2e43728cc323298626b83177803521d195cfb11e15b910e892fddf::obligation::ObligationKey";

static REGISTRY: [ProtocolSignature; 3] = [
    ProtocolSignature {
        protocol_name: "Cetus",
        type_prefix: CETUS_POSITION,
        extract: extract_cetus_position,
    },
    ProtocolSignature {
        protocol_name: "Suilend",
        type_prefix: SUILEND_OBLIGATION_CAP,
        extract: extract_suilend_obligation,
    },
    ProtocolSignature {
        protocol_name: "Scallop",
        type_prefix: SCALLOP_OBLIGATION_KEY,
        extract: extract_scallop_obligation,
    },
];

/// The signatures evaluated by the detector, in match order.
pub fn registry() -> &'static [ProtocolSignature] {
    &REGISTRY
}

fn extract_cetus_position(fields: &Value) -> Result<Vec<PositionField>, ExtractionError> {
    Ok(vec![
        PositionField::new("Pool", str_field(fields, "pool")?),
        PositionField::new("Liquidity", str_field(fields, "liquidity")?),
    ])
}

fn extract_suilend_obligation(fields: &Value) -> Result<Vec<PositionField>, ExtractionError> {
    Ok(vec![PositionField::new(
        "Obligation",
        str_field(fields, "obligation_id")?,
    )])
}

fn extract_scallop_obligation(fields: &Value) -> Result<Vec<PositionField>, ExtractionError> {
    // The obligation id sits one level down: `ownership.fields.of`.
    let ownership = fields
        .get("ownership")
        .ok_or_else(|| ExtractionError::MissingField("ownership".to_string()))?;
    let of = ownership
        .get("fields")
        .and_then(|f| f.get("of"))
        .ok_or_else(|| ExtractionError::MalformedField("ownership".to_string()))?;
    let of = of
        .as_str()
        .ok_or_else(|| ExtractionError::MalformedField("ownership.of".to_string()))?;
    Ok(vec![PositionField::new("Obligation", of)])
}

/// Read a required string field out of a Move fields map.
fn str_field(fields: &Value, name: &str) -> Result<String, ExtractionError> {
    let value = fields
        .get(name)
        .ok_or_else(|| ExtractionError::MissingField(name.to_string()))?;
    value
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| ExtractionError::MalformedField(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn prefix_match_covers_generic_instantiations() {
        let sig = &registry()[0];
        assert!(sig.matches(CETUS_POSITION));
        assert!(sig.matches(&format!("{CETUS_POSITION}<0x2::sui::SUI>")));
        assert!(!sig.matches("0x2::coin::Coin<0x2::sui::SUI>"));
    }

    #[test]
    fn cetus_extractor_reads_pool_and_liquidity() {
        let fields = json!({"pool": "0xpool", "liquidity": "123456", "tick_lower_index": {}});
        let extracted = extract_cetus_position(&fields).unwrap();
        assert_eq!(extracted[0], PositionField::new("Pool", "0xpool"));
        assert_eq!(extracted[1], PositionField::new("Liquidity", "123456"));
    }

    #[test]
    fn extractors_report_missing_fields() {
        let err = extract_cetus_position(&json!({"liquidity": "1"})).unwrap_err();
        assert_eq!(err, ExtractionError::MissingField("pool".to_string()));

        let err = extract_scallop_obligation(&json!({"ownership": {"fields": {}}})).unwrap_err();
        assert_eq!(err, ExtractionError::MalformedField("ownership".to_string()));
    }

    #[test]
    fn scallop_extractor_reads_nested_obligation() {
        let fields = json!({"ownership": {"fields": {"of": "0xobligation"}}});
        let extracted = extract_scallop_obligation(&fields).unwrap();
        assert_eq!(extracted[0], PositionField::new("Obligation", "0xobligation"));
    }
}
