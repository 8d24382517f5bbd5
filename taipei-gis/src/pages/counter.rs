//! Home page click counter.

use crate::reactive::{Reactive, SubscriptionId};

/// Button click counter of the home page.
#[derive(Debug, Default)]
pub struct ClickCounter {
    count: Reactive<u32>,
}

impl ClickCounter {
    /// Creates a counter at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of clicks so far.
    pub fn count(&self) -> u32 {
        *self.count.get()
    }

    /// Registers one click.
    pub fn increment(&mut self) {
        self.count.update(|count| *count = count.saturating_add(1));
    }

    /// Text shown under the button.
    pub fn label(&self) -> String {
        format!("Button clicked {} times!", self.count())
    }

    /// Registers an observer called with the new count after every click.
    pub fn subscribe(&mut self, callback: impl Fn(&u32) + Send + Sync + 'static) -> SubscriptionId {
        self.count.subscribe(callback)
    }
}
