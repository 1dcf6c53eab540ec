//! Store subsystem controller.

use crate::cache::{EntityCache, Selection};
use crate::domain::Store;
use crate::gateway::{Gateway, GatewayError};
use crate::navigator::Navigator;
use crate::presenter::StorePresenter;
use crate::query::search_stores;
use crate::signal::{SignalQueue, StoreSignal};
use crate::validate::{validate_store, StoreForm};

use super::LoadState;

/// Orchestrates the store sidebar and detail pane: bulk loads,
/// client-side selection, create/delete with full reloads, and the
/// signals the product subsystem reacts to.
///
/// Network and lookup failures are caught here, logged, and degraded
/// to an empty list or a not-found presentation; they never propagate
/// to the caller.
pub struct StoreController<G, P, N> {
    gateway: G,
    cache: EntityCache<Store>,
    current: Selection<Store>,
    presenter: P,
    navigator: N,
    signals: SignalQueue,
    load_state: LoadState,
}

impl<G, P, N> StoreController<G, P, N>
where
    G: Gateway,
    P: StorePresenter,
    N: Navigator,
{
    pub fn new(gateway: G, presenter: P, navigator: N, signals: SignalQueue) -> Self {
        Self {
            gateway,
            cache: EntityCache::new(),
            current: Selection::new(),
            presenter,
            navigator,
            signals,
            load_state: LoadState::Idle,
        }
    }

    /// Initial bulk load. On success the collection is replaced
    /// wholesale and, when the navigator carries a store id, that
    /// store is auto-selected (or reported as not found). On failure
    /// the list renders empty. The loader hides on both paths.
    pub async fn init(&mut self) {
        self.presenter.show_loader();
        self.load_state = LoadState::Loading;

        match self.gateway.fetch_stores().await {
            Ok(stores) => {
                if let Err(e) = self.cache.replace(stores.clone()) {
                    log::error!("store cache unavailable: {}", e);
                }
                self.load_state = LoadState::Loaded;
                self.presenter.render_list(&stores);

                if let Some(wanted) = self.navigator.store_id() {
                    if stores.iter().any(|store| store.id == wanted) {
                        self.select(&wanted);
                    } else {
                        log::warn!("store {} from the URL is not in the loaded list", wanted);
                        self.presenter.show_not_found();
                    }
                }
            }
            Err(e) => {
                log::error!("failed to load stores: {}", e);
                if let Err(e) = self.cache.clear() {
                    log::error!("store cache unavailable: {}", e);
                }
                self.load_state = LoadState::LoadFailed;
                self.presenter.render_list(&[]);
            }
        }

        self.presenter.hide_loader();
    }

    /// Select a store by id against the loaded collection. Selection
    /// is resolved client-side; no network call happens here. A hit
    /// updates "current", records the id with the navigator, renders
    /// the detail pane, and signals the product subsystem. A miss
    /// shows the not-found state and leaves "current" untouched.
    pub fn select(&mut self, store_id: &str) {
        let found = match self.cache.get(store_id) {
            Ok(found) => found,
            Err(e) => {
                log::error!("store cache unavailable: {}", e);
                None
            }
        };

        match found {
            Some(store) => {
                self.navigator.push_store_id(&store.id);
                if let Err(e) = self.current.set(store.clone()) {
                    log::error!("store selection unavailable: {}", e);
                }
                self.presenter.render_detail(&store);
                self.signals.publish(StoreSignal::Selected {
                    store_id: store.id.clone(),
                });
            }
            None => {
                log::warn!("store {} not found in the loaded list", store_id);
                self.presenter.show_not_found();
            }
        }
    }

    /// Create a store from raw form input. Validation failures block
    /// the network call and surface inline. A successful write is
    /// followed by a full bulk reload, never a local insert.
    pub async fn create(&mut self, form: &StoreForm) -> bool {
        let draft = match validate_store(form) {
            Ok(draft) => draft,
            Err(errors) => {
                self.presenter.show_form_errors(&errors);
                return false;
            }
        };

        match self.gateway.create_store(&draft).await {
            Ok(store) => {
                log::debug!("created store {}", store.id);
                if let Err(e) = self.refresh_list().await {
                    log::error!("failed to reload stores after create: {}", e);
                }
                self.presenter.notify("Store created successfully!");
                true
            }
            Err(e) => {
                log::error!("failed to create store: {}", e);
                self.presenter
                    .notify(&format!("Error creating store: {}", e));
                false
            }
        }
    }

    /// Delete a store. Clears "current" when the deleted store was
    /// selected, resets the detail pane, reloads the list wholesale,
    /// and signals dependents so they drop their own state.
    pub async fn delete(&mut self, store_id: &str) -> bool {
        match self.gateway.delete_store(store_id).await {
            Ok(()) => {
                match self.current.id() {
                    Ok(Some(current_id)) if current_id == store_id => {
                        if let Err(e) = self.current.clear() {
                            log::error!("store selection unavailable: {}", e);
                        }
                    }
                    Ok(_) => {}
                    Err(e) => log::error!("store selection unavailable: {}", e),
                }

                self.presenter.clear_detail();
                self.presenter.show_not_found();

                if let Err(e) = self.refresh_list().await {
                    log::error!("failed to reload stores after delete: {}", e);
                }

                self.signals.publish(StoreSignal::Deleted {
                    store_id: store_id.to_string(),
                });
                self.presenter.notify("Store deleted successfully!");
                true
            }
            Err(e) => {
                log::error!("failed to delete store {}: {}", store_id, e);
                self.presenter
                    .notify(&format!("Failed to delete store: {}", e));
                false
            }
        }
    }

    /// Search the sidebar. Runs over the loaded collection only; an
    /// empty term renders the full list.
    pub fn search(&self, term: &str) {
        match self.cache.items() {
            Ok(stores) => self.presenter.render_list(&search_stores(&stores, term)),
            Err(e) => log::error!("store cache unavailable: {}", e),
        }
    }

    async fn refresh_list(&mut self) -> Result<(), GatewayError> {
        let stores = self.gateway.fetch_stores().await?;
        if let Err(e) = self.cache.replace(stores.clone()) {
            log::error!("store cache unavailable: {}", e);
        }
        self.load_state = LoadState::Loaded;
        self.presenter.render_list(&stores);
        Ok(())
    }

    pub fn load_state(&self) -> LoadState {
        self.load_state
    }

    /// The currently selected store, if any.
    pub fn current(&self) -> Option<Store> {
        self.current.get().unwrap_or(None)
    }

    /// Snapshot of the loaded collection.
    pub fn stores(&self) -> Vec<Store> {
        self.cache.items().unwrap_or_default()
    }
}
