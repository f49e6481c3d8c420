use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock};

// =============================================================================
// 1. THE ABSTRACTION (Subscribers)
// =============================================================================

/// Callback invoked with the current value on subscription and on every `set`.
pub type Subscriber<T> = Box<dyn Fn(&T) + Send + Sync>;

fn lock<U>(mutex: &Mutex<U>) -> MutexGuard<'_, U> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

// =============================================================================
// 2. THE REACTIVE STORE
// =============================================================================

/// Holds a single value and pushes every replacement to its subscribers.
///
/// Stores are built once at startup, wrapped in an `Arc` and handed to whoever
/// needs them. Notification is synchronous: `set` returns only after every
/// subscriber has seen the new value, in subscription order.
///
/// Subscribers must not call `subscribe` or `set` on the store that is
/// notifying them.
pub struct ReactiveStore<T> {
    value: RwLock<Arc<T>>,
    subscribers: Mutex<Vec<Subscriber<T>>>,
}

impl<T: Clone + Send + Sync + 'static> ReactiveStore<T> {
    pub fn new(initial: T) -> Self {
        Self {
            value: RwLock::new(Arc::new(initial)),
            subscribers: Mutex::new(Vec::new()),
        }
    }

    /// Registers `callback` and immediately invokes it with the current value.
    pub fn subscribe(&self, callback: impl Fn(&T) + Send + Sync + 'static) {
        let mut subscribers = lock(&self.subscribers);
        {
            let current = self.value.read().unwrap_or_else(PoisonError::into_inner);
            callback(&**current);
        }
        subscribers.push(Box::new(callback));
    }

    /// Replaces the held value and notifies every subscriber with it.
    pub fn set(&self, new_value: T) {
        // Holding the subscriber list for the whole publication keeps
        // concurrent `set` calls from interleaving their notifications.
        let subscribers = lock(&self.subscribers);
        let shared = Arc::new(new_value);
        *self.value.write().unwrap_or_else(PoisonError::into_inner) = Arc::clone(&shared);
        for subscriber in subscribers.iter() {
            subscriber(&*shared);
        }
    }

    pub fn get(&self) -> T {
        let current = self.value.read().unwrap_or_else(PoisonError::into_inner);
        T::clone(&**current)
    }

    #[cfg(test)]
    pub fn subscriber_count(&self) -> usize {
        lock(&self.subscribers).len()
    }

    /// Subscribes a locally cached copy of the value.
    pub fn snapshot(&self) -> Snapshot<T> {
        let cache = Arc::new(RwLock::new(self.get()));
        let sink = Arc::clone(&cache);
        self.subscribe(move |value: &T| {
            *sink.write().unwrap_or_else(PoisonError::into_inner) = value.clone();
        });
        Snapshot { cache }
    }
}

// =============================================================================
// 3. THE CACHED SNAPSHOT
// =============================================================================

/// Last value delivered by a store subscription.
#[derive(Clone)]
pub struct Snapshot<T> {
    cache: Arc<RwLock<T>>,
}

impl<T: Clone> Snapshot<T> {
    pub fn latest(&self) -> T {
        self.cache.read().unwrap_or_else(PoisonError::into_inner).clone()
    }
}
