//! storesync - a store/product management client backed by a REST
//! gateway.
//!
//! The crate mirrors the gateway's state in per-resource in-memory
//! caches, derives table views through a pure filter/sort/search
//! query engine, and keeps cache, query state, and presentation in
//! step through synchronization controllers. Rendering and URL
//! handling stay behind injected traits, so the same controllers run
//! under a browser shell, a TUI, or a test recorder.

mod cache;
mod controller;
mod domain;
mod gateway;
mod navigator;
mod presenter;
mod query;
mod signal;
mod validate;

pub use cache::{CacheError, EntityCache, Selection};
pub use controller::{AppController, LoadState, ProductController, StoreController};
pub use domain::{Keyed, Product, ProductDraft, ProductStatus, Store, StoreDraft};
pub use gateway::{Gateway, GatewayError, HttpGateway, InMemoryGateway};
pub use navigator::{InMemoryNavigator, Navigator};
pub use presenter::{ProductPresenter, StorePresenter};
pub use query::{
    derive_products, search_products, search_stores, ProductQuery, SortDirection, SortHeader,
    StatusFilter,
};
pub use signal::{SignalQueue, StoreSignal};
pub use validate::{validate_product, validate_store, FieldError, ProductForm, StoreForm};
