//! Serde helpers for the gateway's loosely typed JSON.

use serde::{Deserialize, Deserializer};

/// Deserialize an identifier that the gateway may send as either a
/// JSON string or a number. Numbers are normalized to their decimal
/// string form so lookups compare consistently.
pub fn id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Int(i64),
        Float(f64),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(s) => s,
        Raw::Int(n) => n.to_string(),
        Raw::Float(n) => n.to_string(),
    })
}
