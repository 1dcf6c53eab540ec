//! Cross-controller signaling.
//!
//! The store controller publishes signals as it selects and deletes;
//! the composition root drains the queue right after each operation
//! and routes signals to the product subsystem. Delivery is
//! synchronous and ordered, and each signal is handed to exactly one
//! consumer.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Signals the store subsystem emits for dependents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreSignal {
    /// A store became current; its products should be loaded.
    Selected { store_id: String },
    /// A store was removed; dependent presentation state should reset.
    Deleted { store_id: String },
}

/// Ordered in-memory signal queue shared between the publishing
/// controller and the routing composition root. Clone-friendly via
/// `Arc`; clones share the pending list.
#[derive(Clone, Default)]
pub struct SignalQueue {
    pending: Arc<Mutex<VecDeque<StoreSignal>>>,
}

impl SignalQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a signal to the queue.
    pub fn publish(&self, signal: StoreSignal) {
        self.pending.lock().unwrap().push_back(signal);
    }

    /// Take every pending signal, in publish order. The queue is empty
    /// afterwards, so each signal is delivered once.
    pub fn drain(&self) -> Vec<StoreSignal> {
        self.pending.lock().unwrap().drain(..).collect()
    }

    pub fn len(&self) -> usize {
        self.pending.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
