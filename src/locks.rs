//! Per-record mutual exclusion for read-modify-write operations.

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::{Arc, Mutex, PoisonError};
use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

/// Hands out one async lock per record identifier so that at most one
/// mutation is in flight for any record. Mutations of different records do
/// not contend.
#[derive(Debug)]
pub(crate) struct RecordLocks<K> {
    locks: Mutex<HashMap<K, Arc<AsyncMutex<()>>>>,
}

impl<K> Default for RecordLocks<K> {
    fn default() -> Self {
        Self {
            locks: Mutex::new(HashMap::new()),
        }
    }
}

impl<K> RecordLocks<K>
where
    K: Eq + Hash + Copy,
{
    /// Waits until the caller holds the lock for `id`.
    pub(crate) async fn acquire(&self, id: K) -> OwnedMutexGuard<()> {
        let lock = {
            let mut locks = self.locks.lock().unwrap_or_else(PoisonError::into_inner);
            Arc::clone(locks.entry(id).or_default())
        };
        lock.lock_owned().await
    }
}
