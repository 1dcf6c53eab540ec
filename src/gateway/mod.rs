//! Remote data gateway - the REST API the caches synchronize against.
//!
//! The gateway owns persistent state; this crate only ever mirrors the
//! last response. Non-2xx responses are failures across the board, and
//! no call retries or times out on its own.

mod http;
mod in_memory;

pub use http::HttpGateway;
pub use in_memory::InMemoryGateway;

use std::fmt;

use async_trait::async_trait;

use crate::domain::{Product, ProductDraft, Store, StoreDraft};

#[derive(Debug)]
pub enum GatewayError {
    /// The request never produced a response (connection refused, DNS,
    /// interrupted body, ...).
    Transport(String),
    /// The gateway answered with a non-2xx status.
    Status { code: u16 },
    /// The response body could not be decoded.
    Decode(String),
}

impl fmt::Display for GatewayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GatewayError::Transport(msg) => write!(f, "gateway transport error: {}", msg),
            GatewayError::Status { code } => write!(f, "gateway error status: {}", code),
            GatewayError::Decode(msg) => write!(f, "gateway response decode error: {}", msg),
        }
    }
}

impl std::error::Error for GatewayError {}

/// Client interface to the store/product REST API.
///
/// Implementations:
/// - [`HttpGateway`] for the real service
/// - [`InMemoryGateway`] for testing and development
#[async_trait]
pub trait Gateway: Send + Sync {
    /// `GET /api/stores`
    async fn fetch_stores(&self) -> Result<Vec<Store>, GatewayError>;

    /// `POST /api/stores`
    async fn create_store(&self, draft: &StoreDraft) -> Result<Store, GatewayError>;

    /// `DELETE /api/stores/{storeId}`
    async fn delete_store(&self, store_id: &str) -> Result<(), GatewayError>;

    /// `GET /api/products/{storeId}`
    async fn fetch_products(&self, store_id: &str) -> Result<Vec<Product>, GatewayError>;

    /// `POST /api/product/{storeId}`
    async fn create_product(
        &self,
        store_id: &str,
        draft: &ProductDraft,
    ) -> Result<Product, GatewayError>;

    /// `PUT /api/products/{productId}`
    async fn update_product(
        &self,
        product_id: &str,
        draft: &ProductDraft,
    ) -> Result<(), GatewayError>;

    /// `DELETE /api/products/{productId}`
    async fn delete_product(&self, product_id: &str) -> Result<(), GatewayError>;
}
