//! Named toast templates.

use crate::toast::Toast;
use core::borrow::Borrow;
use core::fmt;
use core::hash::Hash;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

/// Produces a fresh toast.
pub type ToastFactory = Arc<dyn Fn() -> Toast + Send + Sync>;

/// A table of toast factories keyed by `K`.
///
/// The registry is safe to share between threads: registration takes a write lock, lookups a
/// read lock. Factories are called outside the lock, so a factory may itself use the registry.
pub struct Registry<K = String> {
    factories: RwLock<HashMap<K, ToastFactory>>,
}

impl<K: Eq + Hash> Registry<K> {
    pub fn new() -> Registry<K> {
        Registry {
            factories: RwLock::new(HashMap::new()),
        }
    }

    /// Registers a factory. Replaces any existing factory for the same key.
    pub fn register<F>(&self, key: K, factory: F)
    where
        F: 'static + Fn() -> Toast + Send + Sync,
    {
        self.factories.write().insert(key, Arc::new(factory));
    }

    /// Removes a factory, if there is one.
    pub fn unregister<Q>(&self, key: &Q)
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.factories.write().remove(key);
    }

    pub fn is_registered<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.factories.read().contains_key(key)
    }

    /// Removes all factories.
    pub fn clear_all(&self) {
        self.factories.write().clear();
    }

    pub fn len(&self) -> usize {
        self.factories.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.factories.read().is_empty()
    }

    /// Creates a toast from the factory registered under `key`.
    ///
    /// Every call returns a toast with a new id, even if the factory hands out the same toast
    /// each time.
    pub fn materialize<Q>(&self, key: &Q) -> Option<Toast>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        let factory = self.factories.read().get(key).map(Arc::clone)?;
        Some(factory().reidentified())
    }
}

impl<K: Eq + Hash> Default for Registry<K> {
    fn default() -> Registry<K> {
        Registry::new()
    }
}

impl<K: fmt::Debug> fmt::Debug for Registry<K> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let factories = self.factories.read();
        f.debug_set().entries(factories.keys()).finish()
    }
}
