use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{wire, Keyed};

/// A store as the gateway serves it.
///
/// At most one store is "current" at a time; selection is tracked by
/// the store controller, not on the entity itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Store {
    #[serde(rename = "ID", deserialize_with = "wire::id")]
    pub id: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Email")]
    pub email: String,
    #[serde(rename = "PhoneNumber")]
    pub phone_number: String,
    #[serde(rename = "Address")]
    pub address: String,
    #[serde(rename = "Established")]
    pub established: DateTime<Utc>,
    #[serde(rename = "FloorArea")]
    pub floor_area: f64,
}

impl Keyed for Store {
    fn key(&self) -> &str {
        &self.id
    }
}

/// Create payload for a store: every `Store` field minus the
/// gateway-assigned `ID`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreDraft {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Email")]
    pub email: String,
    #[serde(rename = "PhoneNumber")]
    pub phone_number: String,
    #[serde(rename = "Address")]
    pub address: String,
    #[serde(rename = "Established")]
    pub established: DateTime<Utc>,
    #[serde(rename = "FloorArea")]
    pub floor_area: f64,
}
