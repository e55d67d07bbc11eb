//! Payload and record types exchanged with the objects service.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Body submitted when creating or replacing an object.
///
/// The `data` bag is deliberately open-ended; the service accepts arbitrary
/// attribute maps and echoes them back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatePayload {
    /// Display name of the object.
    pub name: String,
    /// Arbitrary object attributes.
    pub data: Map<String, Value>,
}

/// Body submitted when partially updating an object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatchPayload {
    /// Attributes to merge into the stored object.
    pub data: Map<String, Value>,
}

/// Object record as returned by the service.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ObjectRecord {
    /// Server-assigned identifier.
    pub id: String,
    /// Display name, when the object has one.
    pub name: Option<String>,
    /// Stored attributes; the service returns `null` for objects without
    /// any.
    pub data: Option<Map<String, Value>>,
}
