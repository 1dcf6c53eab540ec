//! In-memory entity caches - the holder of the most recently fetched
//! collection per resource type, plus the "current" selection pointer.
//!
//! Collections are always replaced wholesale, never merged; the
//! synchronization controllers are the only writers.

use std::fmt;
use std::sync::{Arc, RwLock};

use crate::domain::Keyed;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    LockPoisoned(&'static str),
}

impl fmt::Display for CacheError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CacheError::LockPoisoned(operation) => {
                write!(f, "cache lock poisoned during {}", operation)
            }
        }
    }
}

impl std::error::Error for CacheError {}

/// Thread-safe holder of the last fetched collection for one resource
/// type. Clone-friendly via `Arc`; clones share contents.
#[derive(Clone)]
pub struct EntityCache<T> {
    items: Arc<RwLock<Vec<T>>>,
}

impl<T> Default for EntityCache<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> EntityCache<T> {
    pub fn new() -> Self {
        Self {
            items: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Replace the whole collection with a freshly fetched one.
    pub fn replace(&self, items: Vec<T>) -> Result<(), CacheError> {
        let mut guard = self
            .items
            .write()
            .map_err(|_| CacheError::LockPoisoned("replace"))?;
        *guard = items;
        Ok(())
    }

    /// Empty the collection.
    pub fn clear(&self) -> Result<(), CacheError> {
        let mut guard = self
            .items
            .write()
            .map_err(|_| CacheError::LockPoisoned("clear"))?;
        guard.clear();
        Ok(())
    }

    pub fn len(&self) -> Result<usize, CacheError> {
        let guard = self
            .items
            .read()
            .map_err(|_| CacheError::LockPoisoned("len"))?;
        Ok(guard.len())
    }

    pub fn is_empty(&self) -> Result<bool, CacheError> {
        Ok(self.len()? == 0)
    }
}

impl<T: Clone> EntityCache<T> {
    /// Cloned snapshot of the collection.
    pub fn items(&self) -> Result<Vec<T>, CacheError> {
        let guard = self
            .items
            .read()
            .map_err(|_| CacheError::LockPoisoned("items"))?;
        Ok(guard.clone())
    }
}

impl<T: Clone + Keyed> EntityCache<T> {
    /// Look up an entity by id in the loaded collection. No network
    /// involved; misses mean the id is simply not loaded.
    pub fn get(&self, id: &str) -> Result<Option<T>, CacheError> {
        let guard = self
            .items
            .read()
            .map_err(|_| CacheError::LockPoisoned("get"))?;
        Ok(guard.iter().find(|item| item.key() == id).cloned())
    }
}

/// The "current" entity pointer. At most one entity is current at a
/// time; clearing it is part of the delete cascade.
#[derive(Clone)]
pub struct Selection<T> {
    current: Arc<RwLock<Option<T>>>,
}

impl<T> Default for Selection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Selection<T> {
    pub fn new() -> Self {
        Self {
            current: Arc::new(RwLock::new(None)),
        }
    }

    pub fn set(&self, entity: T) -> Result<(), CacheError> {
        let mut guard = self
            .current
            .write()
            .map_err(|_| CacheError::LockPoisoned("set"))?;
        *guard = Some(entity);
        Ok(())
    }

    pub fn clear(&self) -> Result<(), CacheError> {
        let mut guard = self
            .current
            .write()
            .map_err(|_| CacheError::LockPoisoned("clear"))?;
        *guard = None;
        Ok(())
    }
}

impl<T: Clone> Selection<T> {
    pub fn get(&self) -> Result<Option<T>, CacheError> {
        let guard = self
            .current
            .read()
            .map_err(|_| CacheError::LockPoisoned("get"))?;
        Ok(guard.clone())
    }
}

impl<T: Clone + Keyed> Selection<T> {
    /// Id of the current entity, if any.
    pub fn id(&self) -> Result<Option<String>, CacheError> {
        Ok(self.get()?.map(|entity| entity.key().to_string()))
    }
}
