//! reqwest-backed gateway client.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

use crate::domain::{Product, ProductDraft, Store, StoreDraft};

use super::{Gateway, GatewayError};

/// Wire shape of `GET /api/stores`.
#[derive(Deserialize)]
struct StoresPayload {
    stores: Vec<Store>,
}

/// HTTP client for the store/product REST API.
///
/// No timeouts are configured; a hanging gateway blocks that one
/// operation until the connection dies.
#[derive(Clone)]
pub struct HttpGateway {
    base_url: String,
    client: reqwest::Client,
}

impl Default for HttpGateway {
    fn default() -> Self {
        Self::new("http://localhost:5000")
    }
}

impl HttpGateway {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    /// Use a preconfigured client (proxies, custom TLS, ...).
    pub fn with_client(base_url: impl Into<String>, client: reqwest::Client) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, client }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

fn check(response: reqwest::Response) -> Result<reqwest::Response, GatewayError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(GatewayError::Status {
            code: status.as_u16(),
        })
    }
}

fn transport(err: reqwest::Error) -> GatewayError {
    GatewayError::Transport(err.to_string())
}

/// Interpret the product listing body, which the gateway serves either
/// as an array or as a single product object. Any other valid-JSON
/// shape degrades to an empty collection with a warning.
fn decode_products(value: Value) -> Result<Vec<Product>, GatewayError> {
    match value {
        Value::Array(_) => {
            serde_json::from_value(value).map_err(|e| GatewayError::Decode(e.to_string()))
        }
        Value::Object(ref fields) if fields.contains_key("ID") => {
            let product: Product =
                serde_json::from_value(value).map_err(|e| GatewayError::Decode(e.to_string()))?;
            Ok(vec![product])
        }
        other => {
            log::warn!("unexpected product listing shape: {}", other);
            Ok(Vec::new())
        }
    }
}

#[async_trait]
impl Gateway for HttpGateway {
    async fn fetch_stores(&self) -> Result<Vec<Store>, GatewayError> {
        let response = self
            .client
            .get(self.url("/api/stores"))
            .send()
            .await
            .map_err(transport)?;
        let payload: StoresPayload = check(response)?
            .json()
            .await
            .map_err(|e| GatewayError::Decode(e.to_string()))?;
        Ok(payload.stores)
    }

    async fn create_store(&self, draft: &StoreDraft) -> Result<Store, GatewayError> {
        let response = self
            .client
            .post(self.url("/api/stores"))
            .json(draft)
            .send()
            .await
            .map_err(transport)?;
        check(response)?
            .json()
            .await
            .map_err(|e| GatewayError::Decode(e.to_string()))
    }

    async fn delete_store(&self, store_id: &str) -> Result<(), GatewayError> {
        let response = self
            .client
            .delete(self.url(&format!("/api/stores/{}", store_id)))
            .send()
            .await
            .map_err(transport)?;
        check(response)?;
        Ok(())
    }

    async fn fetch_products(&self, store_id: &str) -> Result<Vec<Product>, GatewayError> {
        let response = self
            .client
            .get(self.url(&format!("/api/products/{}", store_id)))
            .send()
            .await
            .map_err(transport)?;
        let value: Value = check(response)?
            .json()
            .await
            .map_err(|e| GatewayError::Decode(e.to_string()))?;
        decode_products(value)
    }

    async fn create_product(
        &self,
        store_id: &str,
        draft: &ProductDraft,
    ) -> Result<Product, GatewayError> {
        let response = self
            .client
            .post(self.url(&format!("/api/product/{}", store_id)))
            .json(draft)
            .send()
            .await
            .map_err(transport)?;
        check(response)?
            .json()
            .await
            .map_err(|e| GatewayError::Decode(e.to_string()))
    }

    async fn update_product(
        &self,
        product_id: &str,
        draft: &ProductDraft,
    ) -> Result<(), GatewayError> {
        let response = self
            .client
            .put(self.url(&format!("/api/products/{}", product_id)))
            .json(draft)
            .send()
            .await
            .map_err(transport)?;
        check(response)?;
        Ok(())
    }

    async fn delete_product(&self, product_id: &str) -> Result<(), GatewayError> {
        let response = self
            .client
            .delete(self.url(&format!("/api/products/{}", product_id)))
            .send()
            .await
            .map_err(transport)?;
        check(response)?;
        Ok(())
    }
}
