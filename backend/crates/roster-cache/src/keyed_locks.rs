//! Per-key async mutual exclusion.
//!
//! Callers contending on the same key queue behind one `tokio::sync::Mutex`;
//! different keys never block each other. A key's slot is removed as soon as
//! the last holder or waiter lets go, so the table only ever holds keys in
//! flight.

use std::collections::HashMap;
use std::sync::{Arc, Mutex as StdMutex, MutexGuard, PoisonError};

use tokio::sync::{Mutex, OwnedMutexGuard};

type Slot = Arc<Mutex<()>>;

#[derive(Clone, Default)]
pub struct KeyedLocks {
    slots: Arc<StdMutex<HashMap<String, Slot>>>,
}

/// Held lock for one key; releases and tidies the table on drop
pub struct KeyGuard {
    locks: KeyedLocks,
    key: String,
    slot: Slot,
    guard: Option<OwnedMutexGuard<()>>,
}

impl KeyedLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wait until no one else holds `key`
    pub async fn lock(&self, key: &str) -> KeyGuard {
        let slot = self.slots().entry(key.to_string()).or_default().clone();
        let guard = slot.clone().lock_owned().await;

        KeyGuard {
            locks: self.clone(),
            key: key.to_string(),
            slot,
            guard: Some(guard),
        }
    }

    /// Keys currently held or awaited
    pub fn in_flight(&self) -> usize {
        self.slots().len()
    }

    fn slots(&self) -> MutexGuard<'_, HashMap<String, Slot>> {
        self.slots.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Drop for KeyGuard {
    fn drop(&mut self) {
        self.guard.take();

        let mut slots = self.locks.slots();
        // Table + this guard: nobody is waiting
        if Arc::strong_count(&self.slot) == 2 {
            slots.remove(&self.key);
        }
    }
}
