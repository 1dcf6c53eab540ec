//! Product subsystem controller.

use crate::cache::EntityCache;
use crate::domain::Product;
use crate::gateway::Gateway;
use crate::presenter::ProductPresenter;
use crate::query::{derive_products, search_products, ProductQuery, SortHeader, StatusFilter};
use crate::validate::{validate_product, ProductForm};

use super::LoadState;

/// Orchestrates the product table for the currently selected store:
/// scoped bulk loads, CRUD with full reloads, and the filter/sort/
/// search derivations.
///
/// Every mutation is followed by a full reload of the selected
/// store's products; the cache never drifts from the gateway by way
/// of local patching.
pub struct ProductController<G, P> {
    gateway: G,
    cache: EntityCache<Product>,
    query: ProductQuery,
    presenter: P,
    current_store_id: Option<String>,
    load_state: LoadState,
    // Monotonic guard against overlapping loads: a response only
    // lands if no newer load has started since it was issued.
    load_seq: u64,
}

impl<G, P> ProductController<G, P>
where
    G: Gateway,
    P: ProductPresenter,
{
    pub fn new(gateway: G, presenter: P) -> Self {
        Self {
            gateway,
            cache: EntityCache::new(),
            query: ProductQuery::default(),
            presenter,
            current_store_id: None,
            load_state: LoadState::Idle,
            load_seq: 0,
        }
    }

    /// Bulk load the products of one store, replacing the collection
    /// wholesale. On failure the collection clears and the table
    /// renders empty. The loader hides on both paths. Filter and sort
    /// state persist across loads and store switches.
    pub async fn load(&mut self, store_id: &str) {
        self.load_seq += 1;
        let seq = self.load_seq;
        self.current_store_id = Some(store_id.to_string());
        self.load_state = LoadState::Loading;
        self.presenter.show_loader();

        let fetched = self.gateway.fetch_products(store_id).await;

        if seq != self.load_seq {
            log::debug!("discarding stale product load for store {}", store_id);
            return;
        }

        match fetched {
            Ok(products) => {
                if let Err(e) = self.cache.replace(products) {
                    log::error!("product cache unavailable: {}", e);
                }
                self.load_state = LoadState::Loaded;
                self.render_derived();
                self.presenter.update_status_styles(self.query.status_filter);
            }
            Err(e) => {
                log::error!("failed to load products for store {}: {}", store_id, e);
                if let Err(e) = self.cache.clear() {
                    log::error!("product cache unavailable: {}", e);
                }
                self.load_state = LoadState::LoadFailed;
                self.render_derived();
            }
        }

        self.presenter.hide_loader();
    }

    /// Create a product in the selected store from raw form input.
    /// Validation failures block the network call; a successful write
    /// is followed by a full scoped reload, then the form closes.
    pub async fn add(&mut self, form: &ProductForm) -> bool {
        let Some(store_id) = self.current_store_id.clone() else {
            log::warn!("cannot add a product with no store selected");
            return false;
        };

        let draft = match validate_product(form, &store_id) {
            Ok(draft) => draft,
            Err(errors) => {
                self.presenter.show_form_errors(&errors);
                return false;
            }
        };

        match self.gateway.create_product(&store_id, &draft).await {
            Ok(product) => {
                log::debug!("created product {}", product.id);
                self.load(&store_id).await;
                self.presenter.close_add_form();
                true
            }
            Err(e) => {
                log::error!("failed to add product: {}", e);
                false
            }
        }
    }

    /// Update a product by id, then reload the selected store's
    /// products and close the edit form.
    pub async fn update(&mut self, product_id: &str, form: &ProductForm) -> bool {
        let Some(store_id) = self.current_store_id.clone() else {
            log::warn!("cannot update a product with no store selected");
            return false;
        };

        let draft = match validate_product(form, &store_id) {
            Ok(draft) => draft,
            Err(errors) => {
                self.presenter.show_form_errors(&errors);
                return false;
            }
        };

        match self.gateway.update_product(product_id, &draft).await {
            Ok(()) => {
                self.load(&store_id).await;
                self.presenter.close_edit_form();
                true
            }
            Err(e) => {
                log::error!("failed to update product {}: {}", product_id, e);
                false
            }
        }
    }

    /// Delete a product, reload the selected store's products, and
    /// close the confirmation.
    pub async fn delete(&mut self, product_id: &str) -> bool {
        match self.gateway.delete_product(product_id).await {
            Ok(()) => {
                if let Some(store_id) = self.current_store_id.clone() {
                    self.load(&store_id).await;
                }
                self.presenter.close_delete_confirmation();
                true
            }
            Err(e) => {
                log::error!("failed to delete product {}: {}", product_id, e);
                false
            }
        }
    }

    /// Apply a status filter and re-render the derived table.
    pub fn filter_by_status(&mut self, filter: StatusFilter) {
        self.query.set_status_filter(filter);
        self.render_derived();
        self.presenter.update_status_styles(filter);
    }

    /// React to a header click: toggle or switch the sort column and
    /// re-render the derived table.
    pub fn sort_by_header(&mut self, header: SortHeader) {
        self.query.toggle_header(header);
        self.render_derived();
        self.presenter
            .update_sort_indicators(self.query.sort_header, self.query.sort_direction);
    }

    /// Name search over the loaded collection. An empty term is a
    /// no-op; hits render directly, bypassing filter and sort state.
    pub fn search(&self, term: &str) {
        if term.is_empty() {
            return;
        }
        match self.cache.items() {
            Ok(products) => self
                .presenter
                .render_list(&search_products(&products, term)),
            Err(e) => log::error!("product cache unavailable: {}", e),
        }
    }

    /// Drop everything tied to the previously selected store: the
    /// cache, the scope, and any in-flight load. The table renders
    /// empty. This is the reaction to a store deletion.
    pub fn clear(&mut self) {
        self.load_seq += 1;
        self.current_store_id = None;
        if let Err(e) = self.cache.clear() {
            log::error!("product cache unavailable: {}", e);
        }
        self.load_state = LoadState::Idle;
        self.presenter.render_list(&[]);
    }

    fn render_derived(&self) {
        match self.cache.items() {
            Ok(products) => self
                .presenter
                .render_list(&derive_products(&products, &self.query)),
            Err(e) => log::error!("product cache unavailable: {}", e),
        }
    }

    pub fn load_state(&self) -> LoadState {
        self.load_state
    }

    pub fn query(&self) -> &ProductQuery {
        &self.query
    }

    pub fn current_store_id(&self) -> Option<&str> {
        self.current_store_id.as_deref()
    }

    /// Snapshot of the loaded collection (unfiltered).
    pub fn products(&self) -> Vec<Product> {
        self.cache.items().unwrap_or_default()
    }

    /// Look up a loaded product by id, as the edit form does before
    /// opening.
    pub fn product(&self, product_id: &str) -> Option<Product> {
        self.cache.get(product_id).unwrap_or(None)
    }
}
