//! In-memory gateway for testing and development.

use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use crate::domain::{Product, ProductDraft, Store, StoreDraft};

use super::{Gateway, GatewayError};

#[derive(Default)]
struct GatewayState {
    stores: Vec<Store>,
    products: Vec<Product>,
    next_id: u64,
    failing: bool,
}

/// HashMap-free but otherwise faithful stand-in for the REST service:
/// sequential ids, products scoped per store, deletes cascade.
/// Clone-friendly via `Arc`; clones share state.
///
/// `set_failing(true)` makes every call answer with a 500, which is
/// handy for exercising failure paths without a server.
#[derive(Clone, Default)]
pub struct InMemoryGateway {
    state: Arc<RwLock<GatewayState>>,
}

impl InMemoryGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store list directly, bypassing the API surface.
    pub fn seed_stores(&self, stores: Vec<Store>) {
        let mut state = self.state.write().unwrap();
        state.stores.extend(stores);
    }

    /// Seed products directly, bypassing the API surface.
    pub fn seed_products(&self, products: Vec<Product>) {
        let mut state = self.state.write().unwrap();
        state.products.extend(products);
    }

    /// Toggle blanket failure: while set, every call returns status
    /// 500.
    pub fn set_failing(&self, failing: bool) {
        self.state.write().unwrap().failing = failing;
    }

    pub fn store_count(&self) -> usize {
        self.state.read().unwrap().stores.len()
    }

    pub fn product_count(&self) -> usize {
        self.state.read().unwrap().products.len()
    }

    fn guard(&self) -> Result<(), GatewayError> {
        let failing = self
            .state
            .read()
            .map_err(|_| GatewayError::Transport("gateway state lock poisoned".into()))?
            .failing;
        if failing {
            Err(GatewayError::Status { code: 500 })
        } else {
            Ok(())
        }
    }

    fn write_state(
        &self,
    ) -> Result<std::sync::RwLockWriteGuard<'_, GatewayState>, GatewayError> {
        self.state
            .write()
            .map_err(|_| GatewayError::Transport("gateway state lock poisoned".into()))
    }

    fn read_state(&self) -> Result<std::sync::RwLockReadGuard<'_, GatewayState>, GatewayError> {
        self.state
            .read()
            .map_err(|_| GatewayError::Transport("gateway state lock poisoned".into()))
    }
}

fn next_id(state: &mut GatewayState) -> String {
    state.next_id += 1;
    state.next_id.to_string()
}

#[async_trait]
impl Gateway for InMemoryGateway {
    async fn fetch_stores(&self) -> Result<Vec<Store>, GatewayError> {
        self.guard()?;
        Ok(self.read_state()?.stores.clone())
    }

    async fn create_store(&self, draft: &StoreDraft) -> Result<Store, GatewayError> {
        self.guard()?;
        let mut state = self.write_state()?;
        let store = Store {
            id: next_id(&mut state),
            name: draft.name.clone(),
            email: draft.email.clone(),
            phone_number: draft.phone_number.clone(),
            address: draft.address.clone(),
            established: draft.established,
            floor_area: draft.floor_area,
        };
        state.stores.push(store.clone());
        Ok(store)
    }

    async fn delete_store(&self, store_id: &str) -> Result<(), GatewayError> {
        self.guard()?;
        let mut state = self.write_state()?;
        let before = state.stores.len();
        state.stores.retain(|store| store.id != store_id);
        if state.stores.len() == before {
            return Err(GatewayError::Status { code: 404 });
        }
        state.products.retain(|product| product.store_id != store_id);
        Ok(())
    }

    async fn fetch_products(&self, store_id: &str) -> Result<Vec<Product>, GatewayError> {
        self.guard()?;
        Ok(self
            .read_state()?
            .products
            .iter()
            .filter(|product| product.store_id == store_id)
            .cloned()
            .collect())
    }

    async fn create_product(
        &self,
        store_id: &str,
        draft: &ProductDraft,
    ) -> Result<Product, GatewayError> {
        self.guard()?;
        let mut state = self.write_state()?;
        if !state.stores.iter().any(|store| store.id == store_id) {
            return Err(GatewayError::Status { code: 404 });
        }
        let product = Product {
            id: next_id(&mut state),
            name: draft.name.clone(),
            price_amount: draft.price_amount,
            price_currency: String::new(),
            rating: draft.rating,
            specs: draft.specs.clone(),
            supplier_info: draft.supplier_info.clone(),
            made_in: draft.made_in.clone(),
            production_company_name: draft.production_company_name.clone(),
            status: draft.status,
            store_id: store_id.to_string(),
        };
        state.products.push(product.clone());
        Ok(product)
    }

    async fn update_product(
        &self,
        product_id: &str,
        draft: &ProductDraft,
    ) -> Result<(), GatewayError> {
        self.guard()?;
        let mut state = self.write_state()?;
        let product = state
            .products
            .iter_mut()
            .find(|product| product.id == product_id)
            .ok_or(GatewayError::Status { code: 404 })?;

        product.name = draft.name.clone();
        product.price_amount = draft.price_amount;
        product.rating = draft.rating;
        product.specs = draft.specs.clone();
        product.supplier_info = draft.supplier_info.clone();
        product.made_in = draft.made_in.clone();
        product.production_company_name = draft.production_company_name.clone();
        product.status = draft.status;
        product.store_id = draft.store_id.clone();
        Ok(())
    }

    async fn delete_product(&self, product_id: &str) -> Result<(), GatewayError> {
        self.guard()?;
        let mut state = self.write_state()?;
        let before = state.products.len();
        state.products.retain(|product| product.id != product_id);
        if state.products.len() == before {
            return Err(GatewayError::Status { code: 404 });
        }
        Ok(())
    }
}
