// src/tables/cache.rs

use alloc::sync::Arc;

#[cfg(feature = "std")]
use alloc::collections::BTreeMap;
#[cfg(feature = "std")]
use std::sync::{Mutex, OnceLock};

#[cfg(not(feature = "std"))]
use core::marker::PhantomData;

/// Lookup tables shared by every instance that asks for the same key.
///
/// With `std` the first request for a key builds the table and later
/// requests get the same `Arc`. Without `std` there is no lock to guard a
/// global map, so every request builds its own table.
pub struct TableCache<V> {
    #[cfg(feature = "std")]
    entries: OnceLock<Mutex<BTreeMap<usize, Arc<V>>>>,
    #[cfg(not(feature = "std"))]
    _marker: PhantomData<fn() -> V>,
}

impl<V> TableCache<V> {
    pub const fn new() -> Self {
        Self {
            #[cfg(feature = "std")]
            entries: OnceLock::new(),
            #[cfg(not(feature = "std"))]
            _marker: PhantomData,
        }
    }

    #[cfg(feature = "std")]
    pub fn get_or_insert_with(&self, key: usize, build: impl FnOnce() -> V) -> Arc<V> {
        let entries = self.entries.get_or_init(|| Mutex::new(BTreeMap::new()));
        // Tables are immutable once inserted, so a poisoned lock still guards valid data.
        let mut map = entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        map.entry(key).or_insert_with(|| Arc::new(build())).clone()
    }

    #[cfg(not(feature = "std"))]
    pub fn get_or_insert_with(&self, _key: usize, build: impl FnOnce() -> V) -> Arc<V> {
        Arc::new(build())
    }
}

impl<V> Default for TableCache<V> {
    fn default() -> Self {
        Self::new()
    }
}
