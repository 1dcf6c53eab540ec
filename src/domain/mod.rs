//! Domain model - stores, products, and their create/update payloads.
//!
//! Field names on the wire follow the gateway's JSON exactly (`ID`,
//! `Name`, `Price_amount`, ...); the Rust side uses snake_case with
//! serde renames.

mod product;
mod store;
pub(crate) mod wire;

pub use product::{Product, ProductDraft, ProductStatus};
pub use store::{Store, StoreDraft};

/// Trait for entities held in an [`EntityCache`](crate::EntityCache),
/// exposing their string identity.
pub trait Keyed {
    /// Returns the unique identifier for this entity.
    fn key(&self) -> &str;
}
