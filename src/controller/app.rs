//! Composition root.
//!
//! Owns both subsystem controllers and the signal routing between
//! them: every store operation is followed by a synchronous drain of
//! the signal queue, so product loads and resets happen in publish
//! order, exactly once.

use crate::gateway::Gateway;
use crate::navigator::Navigator;
use crate::presenter::{ProductPresenter, StorePresenter};
use crate::signal::{SignalQueue, StoreSignal};
use crate::validate::StoreForm;

use super::{ProductController, StoreController};

/// Wires the store and product subsystems to one gateway and routes
/// the store signals the product subsystem observes.
pub struct AppController<G, SP, PP, N> {
    stores: StoreController<G, SP, N>,
    products: ProductController<G, PP>,
    signals: SignalQueue,
}

impl<G, SP, PP, N> AppController<G, SP, PP, N>
where
    G: Gateway + Clone,
    SP: StorePresenter,
    PP: ProductPresenter,
    N: Navigator,
{
    pub fn new(gateway: G, store_presenter: SP, product_presenter: PP, navigator: N) -> Self {
        let signals = SignalQueue::new();
        Self {
            stores: StoreController::new(
                gateway.clone(),
                store_presenter,
                navigator,
                signals.clone(),
            ),
            products: ProductController::new(gateway, product_presenter),
            signals,
        }
    }

    /// Application startup: load the store list and, when the
    /// navigator restores a selection, load that store's products.
    pub async fn init(&mut self) {
        self.stores.init().await;
        self.route_signals().await;
    }

    pub async fn select_store(&mut self, store_id: &str) {
        self.stores.select(store_id);
        self.route_signals().await;
    }

    pub async fn create_store(&mut self, form: &StoreForm) -> bool {
        let created = self.stores.create(form).await;
        self.route_signals().await;
        created
    }

    pub async fn delete_store(&mut self, store_id: &str) -> bool {
        let deleted = self.stores.delete(store_id).await;
        self.route_signals().await;
        deleted
    }

    pub fn search_stores(&self, term: &str) {
        self.stores.search(term);
    }

    pub fn stores(&self) -> &StoreController<G, SP, N> {
        &self.stores
    }

    pub fn products(&self) -> &ProductController<G, PP> {
        &self.products
    }

    /// Product actions (CRUD, filter, sort, search) go straight to the
    /// product controller; none of them signal back.
    pub fn products_mut(&mut self) -> &mut ProductController<G, PP> {
        &mut self.products
    }

    async fn route_signals(&mut self) {
        for signal in self.signals.drain() {
            match signal {
                StoreSignal::Selected { store_id } => self.products.load(&store_id).await,
                StoreSignal::Deleted { .. } => self.products.clear(),
            }
        }
    }
}
