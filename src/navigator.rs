//! URL state boundary.
//!
//! The browser embedding maps this onto the history API and the
//! `storeId` query parameter; elsewhere the in-memory implementation
//! serves the same contract.

use std::sync::{Arc, RwLock};

/// Persists and recalls the selected store id across sessions.
pub trait Navigator {
    /// Record the selection (history push in a browser).
    fn push_store_id(&self, store_id: &str);

    /// The store id to restore on startup, if one is recorded.
    fn store_id(&self) -> Option<String>;
}

/// In-memory navigator for tests and non-browser embeddings.
/// Clone-friendly via `Arc`; clones share the recorded id.
#[derive(Clone, Default)]
pub struct InMemoryNavigator {
    current: Arc<RwLock<Option<String>>>,
}

impl InMemoryNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start out with a recorded store id, as a browser would after a
    /// page reload with `?storeId=...`.
    pub fn with_store_id(store_id: impl Into<String>) -> Self {
        Self {
            current: Arc::new(RwLock::new(Some(store_id.into()))),
        }
    }
}

impl Navigator for InMemoryNavigator {
    fn push_store_id(&self, store_id: &str) {
        *self.current.write().unwrap() = Some(store_id.to_string());
    }

    fn store_id(&self) -> Option<String> {
        self.current.read().unwrap().clone()
    }
}
