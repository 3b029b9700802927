//! # Shared Store
//!
//! Thread-safe handle to a single [`Store`].
//!
//! ## Thread Safety
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  cart_worth, stock compaction and sale completion are not independently │
//! │  atomic, so the whole store is ONE mutual-exclusion domain:             │
//! │                                                                         │
//! │    caller A ──► with_store_mut(|s| s.add_to_cart(id)) ──┐               │
//! │                                                         ├──► Mutex<Store>│
//! │    caller B ──► with_store(|s| s.popular()...) ─────────┘               │
//! │                                                                         │
//! │  Reads take the same lock and release it quickly.                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::store::Store;

/// Cloneable, lock-protected store handle.
#[derive(Debug, Clone)]
pub struct SharedStore {
    store: Arc<Mutex<Store>>,
}

impl SharedStore {
    pub fn new(store: Store) -> Self {
        SharedStore {
            store: Arc::new(Mutex::new(store)),
        }
    }

    /// Store state is plain data, so a panic in another holder leaves it
    /// usable; the poison flag is ignored.
    fn lock(&self) -> MutexGuard<'_, Store> {
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Executes a function with read access to the store.
    ///
    /// ## Usage
    /// ```rust
    /// use watts_core::{catalog::create_default_store, SharedStore};
    ///
    /// let shared = SharedStore::new(create_default_store().unwrap());
    /// let stocked = shared.with_store(|s| s.stock_len());
    /// assert_eq!(stocked, 8);
    /// ```
    pub fn with_store<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Store) -> R,
    {
        let store = self.lock();
        f(&store)
    }

    /// Executes a function with write access to the store.
    pub fn with_store_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Store) -> R,
    {
        let mut store = self.lock();
        f(&mut store)
    }
}

impl From<Store> for SharedStore {
    fn from(store: Store) -> Self {
        Self::new(store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::create_default_store;
    use crate::money::Money;
    use crate::product::ProductId;
    use std::thread;

    #[test]
    fn test_concurrent_adds_keep_cart_worth_consistent() {
        let shared = SharedStore::new(create_default_store().unwrap());
        let toaster: ProductId = shared.with_store(|s| s.stock_items()[6].id());

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let shared = shared.clone();
                thread::spawn(move || {
                    for _ in 0..2 {
                        shared.with_store_mut(|s| s.add_to_cart(toaster)).unwrap();
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }

        shared.with_store(|s| {
            assert_eq!(s.cart_items().len(), 8);
            assert_eq!(s.cart_worth(), Money::from_dollars(25) * 8u32);
            assert!(s.stock_contains(toaster));
        });
    }

    #[test]
    fn test_sale_through_handle() {
        let shared: SharedStore = create_default_store().unwrap().into();
        let id = shared.with_store(|s| s.stock_items()[0].id());

        shared.with_store_mut(|s| s.add_to_cart(id)).unwrap();
        let summary = shared.with_store_mut(|s| s.complete_sale());

        assert_eq!(summary.units, 1);
        assert_eq!(shared.with_store(|s| s.revenue()), Money::from_dollars(100));
    }

    #[test]
    fn test_poisoned_lock_is_recovered() {
        let shared = SharedStore::new(create_default_store().unwrap());
        let clone = shared.clone();

        let result = thread::spawn(move || {
            clone.with_store_mut(|_| panic!("boom"));
        })
        .join();
        assert!(result.is_err());

        assert_eq!(shared.with_store(|s| s.stock_len()), 8);
    }
}
