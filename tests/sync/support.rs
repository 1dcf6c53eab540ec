//! Shared test scaffolding: the mock gateway server, recording
//! presenters, and entity constructors.

use std::sync::{Arc, Mutex};

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use chrono::DateTime;
use serde_json::json;

use storesync::{
    AppController, FieldError, HttpGateway, InMemoryNavigator, Product, ProductDraft,
    ProductForm, ProductPresenter, ProductStatus, SortDirection, SortHeader, StatusFilter, Store,
    StoreDraft, StoreForm, StorePresenter,
};

#[derive(Default)]
struct MockState {
    stores: Vec<Store>,
    products: Vec<Product>,
    next_id: u64,
    fail_stores: bool,
    fail_products: bool,
    store_posts: usize,
    product_posts: usize,
    product_fetches: usize,
}

type Shared = Arc<Mutex<MockState>>;

/// Handle on the mock REST gateway: seeding, failure toggles, and
/// request counters for asserting the reload-after-mutation pattern.
#[derive(Clone)]
pub struct MockGateway {
    pub base_url: String,
    state: Shared,
}

impl MockGateway {
    /// Bind to port 0, serve the API in the background, and return a
    /// handle with the actual address.
    pub async fn start() -> Self {
        let state: Shared = Arc::default();
        let app = router(state.clone());
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        Self {
            base_url: format!("http://{addr}"),
            state,
        }
    }

    pub fn seed_store(&self, store: Store) {
        self.state.lock().unwrap().stores.push(store);
    }

    pub fn seed_product(&self, product: Product) {
        self.state.lock().unwrap().products.push(product);
    }

    pub fn set_fail_stores(&self, fail: bool) {
        self.state.lock().unwrap().fail_stores = fail;
    }

    pub fn set_fail_products(&self, fail: bool) {
        self.state.lock().unwrap().fail_products = fail;
    }

    pub fn store_count(&self) -> usize {
        self.state.lock().unwrap().stores.len()
    }

    pub fn product_count(&self) -> usize {
        self.state.lock().unwrap().products.len()
    }

    pub fn store_posts(&self) -> usize {
        self.state.lock().unwrap().store_posts
    }

    pub fn product_posts(&self) -> usize {
        self.state.lock().unwrap().product_posts
    }

    pub fn product_fetches(&self) -> usize {
        self.state.lock().unwrap().product_fetches
    }
}

fn router(state: Shared) -> Router {
    Router::new()
        .route("/api/stores", get(list_stores).post(create_store))
        .route("/api/stores/:id", delete(delete_store))
        .route(
            "/api/products/:id",
            get(list_products).put(update_product).delete(delete_product),
        )
        .route("/api/product/:store_id", post(create_product))
        .with_state(state)
}

async fn list_stores(State(state): State<Shared>) -> Response {
    let state = state.lock().unwrap();
    if state.fail_stores {
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    }
    Json(json!({ "stores": state.stores })).into_response()
}

async fn create_store(State(state): State<Shared>, Json(draft): Json<StoreDraft>) -> Response {
    let mut state = state.lock().unwrap();
    state.store_posts += 1;
    state.next_id += 1;
    let store = Store {
        id: format!("s-{}", state.next_id),
        name: draft.name,
        email: draft.email,
        phone_number: draft.phone_number,
        address: draft.address,
        established: draft.established,
        floor_area: draft.floor_area,
    };
    state.stores.push(store.clone());
    Json(store).into_response()
}

async fn delete_store(State(state): State<Shared>, Path(id): Path<String>) -> Response {
    let mut state = state.lock().unwrap();
    let before = state.stores.len();
    state.stores.retain(|store| store.id != id);
    if state.stores.len() == before {
        return StatusCode::NOT_FOUND.into_response();
    }
    state.products.retain(|product| product.store_id != id);
    StatusCode::OK.into_response()
}

async fn list_products(State(state): State<Shared>, Path(store_id): Path<String>) -> Response {
    let mut state = state.lock().unwrap();
    state.product_fetches += 1;
    if state.fail_products {
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    }
    let scoped: Vec<&Product> = state
        .products
        .iter()
        .filter(|product| product.store_id == store_id)
        .collect();
    Json(json!(scoped)).into_response()
}

async fn create_product(
    State(state): State<Shared>,
    Path(store_id): Path<String>,
    Json(draft): Json<ProductDraft>,
) -> Response {
    let mut state = state.lock().unwrap();
    state.product_posts += 1;
    state.next_id += 1;
    let product = Product {
        id: format!("p-{}", state.next_id),
        name: draft.name,
        price_amount: draft.price_amount,
        price_currency: "USD".into(),
        rating: draft.rating,
        specs: draft.specs,
        supplier_info: draft.supplier_info,
        made_in: draft.made_in,
        production_company_name: draft.production_company_name,
        status: draft.status,
        store_id,
    };
    state.products.push(product.clone());
    Json(product).into_response()
}

async fn update_product(
    State(state): State<Shared>,
    Path(id): Path<String>,
    Json(draft): Json<ProductDraft>,
) -> Response {
    let mut state = state.lock().unwrap();
    match state.products.iter_mut().find(|product| product.id == id) {
        Some(product) => {
            product.name = draft.name;
            product.price_amount = draft.price_amount;
            product.rating = draft.rating;
            product.specs = draft.specs;
            product.supplier_info = draft.supplier_info;
            product.made_in = draft.made_in;
            product.production_company_name = draft.production_company_name;
            product.status = draft.status;
            product.store_id = draft.store_id;
            StatusCode::OK.into_response()
        }
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn delete_product(State(state): State<Shared>, Path(id): Path<String>) -> Response {
    let mut state = state.lock().unwrap();
    let before = state.products.len();
    state.products.retain(|product| product.id != id);
    if state.products.len() == before {
        return StatusCode::NOT_FOUND.into_response();
    }
    StatusCode::OK.into_response()
}

#[derive(Clone, Default)]
pub struct RecordingStorePresenter {
    pub lists: Arc<Mutex<Vec<Vec<String>>>>,
    pub details: Arc<Mutex<Vec<String>>>,
    pub not_found: Arc<Mutex<usize>>,
    pub loader: Arc<Mutex<Vec<&'static str>>>,
    pub form_errors: Arc<Mutex<usize>>,
    pub notices: Arc<Mutex<Vec<String>>>,
}

impl RecordingStorePresenter {
    pub fn last_list(&self) -> Vec<String> {
        self.lists.lock().unwrap().last().cloned().unwrap_or_default()
    }

    pub fn not_found_count(&self) -> usize {
        *self.not_found.lock().unwrap()
    }
}

impl StorePresenter for RecordingStorePresenter {
    fn render_list(&self, stores: &[Store]) {
        self.lists
            .lock()
            .unwrap()
            .push(stores.iter().map(|s| s.name.clone()).collect());
    }

    fn render_detail(&self, store: &Store) {
        self.details.lock().unwrap().push(store.id.clone());
    }

    fn clear_detail(&self) {}

    fn show_loader(&self) {
        self.loader.lock().unwrap().push("show");
    }

    fn hide_loader(&self) {
        self.loader.lock().unwrap().push("hide");
    }

    fn show_not_found(&self) {
        *self.not_found.lock().unwrap() += 1;
    }

    fn show_form_errors(&self, errors: &[FieldError]) {
        *self.form_errors.lock().unwrap() += errors.len();
    }

    fn notify(&self, message: &str) {
        self.notices.lock().unwrap().push(message.to_string());
    }
}

#[derive(Clone, Default)]
pub struct RecordingProductPresenter {
    pub lists: Arc<Mutex<Vec<Vec<String>>>>,
    pub loader: Arc<Mutex<Vec<&'static str>>>,
    pub form_errors: Arc<Mutex<usize>>,
    pub closed_forms: Arc<Mutex<Vec<&'static str>>>,
}

impl RecordingProductPresenter {
    pub fn last_list(&self) -> Vec<String> {
        self.lists.lock().unwrap().last().cloned().unwrap_or_default()
    }
}

impl ProductPresenter for RecordingProductPresenter {
    fn render_list(&self, products: &[Product]) {
        self.lists
            .lock()
            .unwrap()
            .push(products.iter().map(|p| p.name.clone()).collect());
    }

    fn show_loader(&self) {
        self.loader.lock().unwrap().push("show");
    }

    fn hide_loader(&self) {
        self.loader.lock().unwrap().push("hide");
    }

    fn update_status_styles(&self, _filter: StatusFilter) {}

    fn update_sort_indicators(&self, _header: SortHeader, _direction: SortDirection) {}

    fn show_form_errors(&self, errors: &[FieldError]) {
        *self.form_errors.lock().unwrap() += errors.len();
    }

    fn close_add_form(&self) {
        self.closed_forms.lock().unwrap().push("add");
    }

    fn close_edit_form(&self) {
        self.closed_forms.lock().unwrap().push("edit");
    }

    fn close_delete_confirmation(&self) {
        self.closed_forms.lock().unwrap().push("delete");
    }
}

pub type App =
    AppController<HttpGateway, RecordingStorePresenter, RecordingProductPresenter, InMemoryNavigator>;

/// Start a mock gateway and wire a full controller stack against it.
pub async fn harness(
    navigator: InMemoryNavigator,
) -> (
    MockGateway,
    RecordingStorePresenter,
    RecordingProductPresenter,
    App,
) {
    let mock = MockGateway::start().await;
    let store_presenter = RecordingStorePresenter::default();
    let product_presenter = RecordingProductPresenter::default();
    let app = AppController::new(
        HttpGateway::new(mock.base_url.clone()),
        store_presenter.clone(),
        product_presenter.clone(),
        navigator,
    );
    (mock, store_presenter, product_presenter, app)
}

pub fn store(id: &str, name: &str, address: &str, floor_area: f64) -> Store {
    Store {
        id: id.into(),
        name: name.into(),
        email: format!("{}@example.com", name.to_lowercase()),
        phone_number: "123456789".into(),
        address: address.into(),
        established: DateTime::UNIX_EPOCH,
        floor_area,
    }
}

pub fn product(id: &str, store_id: &str, name: &str, price: f64, status: ProductStatus) -> Product {
    Product {
        id: id.into(),
        name: name.into(),
        price_amount: price,
        price_currency: "USD".into(),
        rating: Some(4.0),
        specs: "Small".into(),
        supplier_info: "Supplies Inc".into(),
        made_in: "Norway".into(),
        production_company_name: "Widget Co".into(),
        status,
        store_id: store_id.into(),
    }
}

pub fn store_form(name: &str) -> StoreForm {
    StoreForm {
        name: name.into(),
        email: format!("{}@example.com", name.to_lowercase()),
        phone_number: "123456789".into(),
        address: "1 Main St".into(),
        established: "2020-01-01".into(),
        floor_area: "200".into(),
    }
}

pub fn product_form(name: &str, price: &str) -> ProductForm {
    ProductForm {
        name: name.into(),
        price: price.into(),
        rating: "4".into(),
        specs: "Small".into(),
        supplier_info: "Supplies Inc".into(),
        made_in: "Norway".into(),
        company: "Widget Co".into(),
        status: "OK".into(),
    }
}
