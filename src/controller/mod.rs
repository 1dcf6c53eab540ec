//! Synchronization controllers - the fetch, mutate, derive, render
//! cycle per entity type, plus the composition root that wires the
//! two subsystems together.

mod app;
mod product;
mod store;

pub use app::AppController;
pub use product::ProductController;
pub use store::StoreController;

/// Bulk-load state per entity type. Failures degrade to an empty
/// collection; there is no dedicated failure UI beyond that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Loaded,
    LoadFailed,
}
