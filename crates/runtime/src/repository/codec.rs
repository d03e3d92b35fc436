//! JSON codec for the inventory store.
//!
//! # Document Format
//!
//! ```json
//! {
//!   "planets": { "serpulo": { "nuke": 2 } },
//!   "sectors": { "42": {} }
//! }
//! ```
//!
//! Encoding always writes both sections and the map-of-counts record form;
//! empty records stay in the document so the location survives the next
//! load. Decoding also accepts the repeated-identifier list form
//! (`"serpulo": ["nuke", "nuke"]`).
//!
//! Decoding is tolerant below the top level: unknown sections are ignored,
//! and a section or record of the wrong shape is dropped with a warning.
//! Reconciliation re-creates dropped locations with empty records.

use orbital_core::{InventoryRecord, InventoryStore, LocationKey, LocationKind};
use serde_json::{Map, Value};

use crate::repository::{RepositoryError, Result};

pub const PLANETS_SECTION: &str = "planets";
pub const SECTORS_SECTION: &str = "sectors";

/// Serializes the store as pretty-printed JSON.
pub fn encode(store: &InventoryStore) -> Result<String> {
    Ok(serde_json::to_string_pretty(store)?)
}

/// Parses a store document.
///
/// Fails only when the text is not JSON or the top level is not an object.
pub fn decode(text: &str) -> Result<InventoryStore> {
    let document: Value = serde_json::from_str(text)?;
    let Value::Object(sections) = document else {
        return Err(RepositoryError::CorruptedData(
            "inventory document is not a JSON object".to_string(),
        ));
    };

    let mut planets = Vec::new();
    let mut sectors = Vec::new();

    for (name, section) in sections {
        match name.as_str() {
            PLANETS_SECTION => planets = decode_section(LocationKind::Planet, section),
            SECTORS_SECTION => sectors = decode_section(LocationKind::Sector, section),
            _ => tracing::warn!("Ignoring unknown inventory section '{}'", name),
        }
    }

    Ok(InventoryStore::from_records(planets, sectors))
}

fn decode_section(kind: LocationKind, section: Value) -> Vec<(LocationKey, InventoryRecord)> {
    let records: Map<String, Value> = match section {
        Value::Object(records) => records,
        Value::Null => return Vec::new(),
        other => {
            tracing::warn!(
                "Dropping {} section: expected an object, found {}",
                kind,
                json_type(&other)
            );
            return Vec::new();
        }
    };

    records
        .into_iter()
        .filter_map(
            |(key, value)| match serde_json::from_value::<InventoryRecord>(value) {
                Ok(record) => Some((LocationKey::from(key), record)),
                Err(err) => {
                    tracing::warn!("Dropping malformed record for {} {}: {}", kind, key, err);
                    None
                }
            },
        )
        .collect()
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
