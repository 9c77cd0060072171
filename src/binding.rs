//! Shared, observable values.

use core::fmt;
use parking_lot::Mutex;
use std::sync::Arc;

type Observer = Arc<dyn Fn(u64) + Send + Sync>;

struct Inner<T> {
    value: T,
    version: u64,
    next_subscription: u64,
    observers: Vec<(u64, Observer)>,
}

/// A value owned jointly by the host and a toast controller.
///
/// Either side may write to it. Every write bumps the version, which controllers use to notice
/// changes, and notifies subscribers with the new version. Subscribers are expected to re-read
/// the value. Cloning a binding yields another handle to the same value.
pub struct Binding<T> {
    inner: Arc<Mutex<Inner<T>>>,
}

impl<T> Clone for Binding<T> {
    fn clone(&self) -> Self {
        Binding {
            inner: Arc::clone(&self.inner),
        }
    }
}

/// Keeps an observer registered. Dropping it unsubscribes.
#[must_use = "dropping a subscription unsubscribes"]
pub struct Subscription {
    unsubscribe: Option<Box<dyn FnOnce() + Send>>,
}

impl Subscription {
    /// Keeps the observer registered for as long as the binding lives.
    pub fn detach(mut self) {
        self.unsubscribe = None;
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(unsubscribe) = self.unsubscribe.take() {
            unsubscribe();
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Subscription")
    }
}

impl<T: 'static + Send> Binding<T> {
    pub fn new(value: T) -> Binding<T> {
        Binding {
            inner: Arc::new(Mutex::new(Inner {
                value,
                version: 0,
                next_subscription: 0,
                observers: Vec::new(),
            })),
        }
    }

    /// Returns a copy of the current value.
    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.inner.lock().value.clone()
    }

    /// Reads the current value without copying it.
    ///
    /// `f` must not write to this binding.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.inner.lock().value)
    }

    /// The number of writes so far.
    pub fn version(&self) -> u64 {
        self.inner.lock().version
    }

    /// Replaces the value.
    pub fn set(&self, value: T) {
        self.update(|v| {
            *v = value;
            true
        });
    }

    /// Modifies the value in place.
    ///
    /// `f` returns whether it changed anything; if it didn’t, the version stays the same and
    /// nobody is notified. Returns what `f` returned.
    pub fn update(&self, f: impl FnOnce(&mut T) -> bool) -> bool {
        let (version, observers) = {
            let mut inner = self.inner.lock();
            if !f(&mut inner.value) {
                return false;
            }
            inner.version += 1;
            let observers: Vec<Observer> =
                inner.observers.iter().map(|(_, o)| Arc::clone(o)).collect();
            (inner.version, observers)
        };

        // outside the lock so observers can read the binding
        if !observers.is_empty() {
            tracing::trace!(version, count = observers.len(), "binding changed");
        }
        for observer in observers {
            observer(version);
        }
        true
    }

    /// Registers a callback that runs after every write.
    pub fn subscribe<F>(&self, observer: F) -> Subscription
    where
        F: 'static + Fn(u64) + Send + Sync,
    {
        let id = {
            let mut inner = self.inner.lock();
            let id = inner.next_subscription;
            inner.next_subscription += 1;
            inner.observers.push((id, Arc::new(observer)));
            id
        };

        let weak = Arc::downgrade(&self.inner);
        Subscription {
            unsubscribe: Some(Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    inner.lock().observers.retain(|(i, _)| *i != id);
                }
            })),
        }
    }
}

impl<T: 'static + Send + Default> Default for Binding<T> {
    fn default() -> Binding<T> {
        Binding::new(T::default())
    }
}

impl<T: fmt::Debug> fmt::Debug for Binding<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let inner = self.inner.lock();
        f.debug_struct("Binding")
            .field("value", &inner.value)
            .field("version", &inner.version)
            .finish()
    }
}
