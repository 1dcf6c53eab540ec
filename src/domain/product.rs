use std::fmt;

use serde::{Deserialize, Serialize};

use super::{wire, Keyed};

/// Stock status of a product, using the gateway's wire values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProductStatus {
    #[serde(rename = "OK")]
    Ok,
    #[serde(rename = "STORAGE")]
    Storage,
    #[serde(rename = "OUT_OF_STOCK")]
    OutOfStock,
}

impl ProductStatus {
    /// Parse a wire value. Returns `None` for anything outside the
    /// three known statuses.
    pub fn from_wire(value: &str) -> Option<Self> {
        match value {
            "OK" => Some(Self::Ok),
            "STORAGE" => Some(Self::Storage),
            "OUT_OF_STOCK" => Some(Self::OutOfStock),
            _ => None,
        }
    }

    pub fn as_wire(&self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::Storage => "STORAGE",
            Self::OutOfStock => "OUT_OF_STOCK",
        }
    }
}

impl fmt::Display for ProductStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_wire())
    }
}

/// A product as the gateway serves it. Every loaded product belongs to
/// the currently selected store (`store_id`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "ID", deserialize_with = "wire::id")]
    pub id: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Price_amount")]
    pub price_amount: f64,
    #[serde(rename = "Price_currency", default)]
    pub price_currency: String,
    /// Rating from 0 to 5, absent when the product has none.
    #[serde(rename = "Rating", default)]
    pub rating: Option<f64>,
    #[serde(rename = "Specs")]
    pub specs: String,
    #[serde(rename = "SupplierInfo")]
    pub supplier_info: String,
    #[serde(rename = "MadeIn")]
    pub made_in: String,
    #[serde(rename = "ProductionCompanyName")]
    pub production_company_name: String,
    #[serde(rename = "Status")]
    pub status: ProductStatus,
    #[serde(rename = "Store_ID", deserialize_with = "wire::id")]
    pub store_id: String,
}

impl Keyed for Product {
    fn key(&self) -> &str {
        &self.id
    }
}

/// Create/update payload for a product. Carries the owning store id;
/// the gateway does not accept a currency on writes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDraft {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Price_amount")]
    pub price_amount: f64,
    #[serde(rename = "Rating")]
    pub rating: Option<f64>,
    #[serde(rename = "Specs")]
    pub specs: String,
    #[serde(rename = "SupplierInfo")]
    pub supplier_info: String,
    #[serde(rename = "MadeIn")]
    pub made_in: String,
    #[serde(rename = "ProductionCompanyName")]
    pub production_company_name: String,
    #[serde(rename = "Status")]
    pub status: ProductStatus,
    #[serde(rename = "Store_ID")]
    pub store_id: String,
}
