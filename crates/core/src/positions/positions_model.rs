//! Position domain models.

use serde::Serialize;

/// One labeled display value inside a detected position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionField {
    pub label: String,
    pub value: String,
}

impl PositionField {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// A recognized protocol position backed by one owned object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectedPosition {
    pub protocol_name: String,
    pub object_id: String,
    pub fields: Vec<PositionField>,
}

impl DetectedPosition {
    /// Degraded position used when field extraction fails: the object is
    /// still shown under its protocol, labeled only by its id.
    pub fn generic(protocol_name: &str, object_id: &str) -> Self {
        Self {
            protocol_name: protocol_name.to_string(),
            object_id: object_id.to_string(),
            fields: vec![PositionField::new("Position", object_id)],
        }
    }
}

/// All detected positions for one protocol. Cards are only emitted for
/// protocols with at least one position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProtocolCard {
    pub protocol_name: String,
    pub positions: Vec<DetectedPosition>,
}
