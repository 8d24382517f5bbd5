//! Owned values that notify registered observers when they change.
//!
//! A [`Reactive`] is not a global binding: it is owned by whoever creates it and changed
//! through `&mut self`, so the borrow checker decides who may write. Views that need to follow
//! the value register a callback with [`Reactive::subscribe`].

use std::fmt::{Debug, Formatter};

/// Handle returned by [`Reactive::subscribe`] and [`Observers::subscribe`], used to remove the
/// observer later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Callback<T> = Box<dyn Fn(&T) + Send + Sync>;

/// Ordered list of observer callbacks.
pub struct Observers<T: ?Sized> {
    next_id: u64,
    callbacks: Vec<(SubscriptionId, Callback<T>)>,
}

impl<T: ?Sized> Default for Observers<T> {
    fn default() -> Self {
        Self {
            next_id: 0,
            callbacks: Vec::new(),
        }
    }
}

impl<T: ?Sized> Observers<T> {
    /// Registers an observer. Observers are called in the order they were registered.
    pub fn subscribe(&mut self, callback: impl Fn(&T) + Send + Sync + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.callbacks.push((id, Box::new(callback)));
        id
    }

    /// Removes an observer. Returns false if there was no observer with this id.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let len = self.callbacks.len();
        self.callbacks.retain(|(entry_id, _)| *entry_id != id);
        self.callbacks.len() != len
    }

    /// Number of registered observers.
    pub fn len(&self) -> usize {
        self.callbacks.len()
    }

    /// Returns true if no observers are registered.
    pub fn is_empty(&self) -> bool {
        self.callbacks.is_empty()
    }

    /// Calls every observer with the value.
    pub fn notify(&self, value: &T) {
        for (_, callback) in &self.callbacks {
            callback(value);
        }
    }
}

impl<T: ?Sized> Debug for Observers<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Observers")
            .field("count", &self.callbacks.len())
            .finish()
    }
}

/// A value with change notifications.
#[derive(Debug, Default)]
pub struct Reactive<T> {
    value: T,
    observers: Observers<T>,
}

impl<T> Reactive<T> {
    /// Wraps the initial value. No observers are notified of it.
    pub fn new(value: T) -> Self {
        Self {
            value,
            observers: Observers::default(),
        }
    }

    /// Current value.
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Replaces the value and notifies the observers.
    pub fn set(&mut self, value: T) {
        self.value = value;
        self.observers.notify(&self.value);
    }

    /// Modifies the value in place and notifies the observers once.
    pub fn update(&mut self, f: impl FnOnce(&mut T)) {
        f(&mut self.value);
        self.observers.notify(&self.value);
    }

    /// Registers an observer called after every change.
    pub fn subscribe(&mut self, callback: impl Fn(&T) + Send + Sync + 'static) -> SubscriptionId {
        self.observers.subscribe(callback)
    }

    /// Removes an observer. Returns false if there was no observer with this id.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }
}
