//! Thread-safe handle for hosts that touch the order from several threads.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::config::OrderConfig;
use crate::error::OrderError;
use crate::order::{OrderStore, Rank, RankSink, StableKey};

/// Cloneable handle to one [`OrderStore`] behind a single lock.
///
/// Every method takes the lock exactly once. Use [`with`](Self::with) to run
/// several operations under one acquisition.
#[derive(Debug, Clone, Default)]
pub struct SharedOrderStore {
    inner: Arc<Mutex<OrderStore>>,
}

impl SharedOrderStore {
    pub fn new(store: OrderStore) -> Self {
        Self { inner: Arc::new(Mutex::new(store)) }
    }

    pub fn with_config(config: OrderConfig) -> Result<Self, OrderError> {
        Ok(Self::new(OrderStore::with_config(config)?))
    }

    /// Runs `f` with exclusive access to the store.
    pub fn with<R>(&self, f: impl FnOnce(&mut OrderStore) -> R) -> R {
        f(&mut self.inner.lock())
    }

    pub fn move_to_front(&self, id: &str) -> Result<Rank, OrderError> {
        self.inner.lock().move_to_front(id)
    }

    pub fn remove(&self, id: &str) -> Result<bool, OrderError> {
        self.inner.lock().remove(id)
    }

    pub fn reset(&self) {
        self.inner.lock().reset();
    }

    pub fn rank_of(&self, id: &str) -> Rank {
        self.inner.lock().rank_of(id)
    }

    pub fn stable_key_for(&self, id: &str) -> StableKey {
        self.inner.lock().stable_key_for(id)
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    pub fn revision(&self) -> u64 {
        self.inner.lock().revision()
    }

    pub fn ids_in_order(&self) -> Vec<String> {
        self.inner.lock().ids_in_order()
    }

    /// Syncs all ranks into `sink` while holding the lock.
    pub fn sync_into<S: RankSink + ?Sized>(&self, sink: &mut S) {
        self.inner.lock().sync_into(sink);
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use super::*;

    #[test]
    fn clones_share_one_store() {
        let a = SharedOrderStore::default();
        let b = a.clone();
        a.move_to_front("x").unwrap();
        assert_eq!(b.len(), 1);
        assert_eq!(b.ids_in_order(), ["x"]);
    }

    #[test]
    fn concurrent_moves_keep_invariants() {
        let shared = SharedOrderStore::default();
        let workers: Vec<_> = (0..4)
            .map(|t| {
                let shared = shared.clone();
                thread::spawn(move || {
                    for i in 0..200 {
                        let id = format!("tile-{}", (i * 7 + t) % 13);
                        shared.move_to_front(&id).unwrap();
                        if i % 11 == 0 {
                            shared.remove(&id).unwrap();
                        }
                    }
                })
            })
            .collect();
        for w in workers {
            w.join().unwrap();
        }

        shared.with(|store| store.check_invariants()).unwrap();
        assert!(shared.len() <= 13);
    }

    #[test]
    fn with_runs_batch_under_one_lock() {
        let shared = SharedOrderStore::default();
        let order = shared.with(|store| {
            store.move_to_front("a").unwrap();
            store.move_to_front("b").unwrap();
            store.ids_in_order()
        });
        assert_eq!(order, ["b", "a"]);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let err = SharedOrderStore::with_config(OrderConfig::default().rank_gap(0)).unwrap_err();
        assert!(matches!(err, OrderError::InvalidConfig(_)));
    }
}
