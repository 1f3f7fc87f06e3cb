// src/callback.rs
//
// Listener notified whenever a remix commits a value.

use crate::range_remix::RangeRemix;

/// Receives a remix each time its value is set, including at construction.
///
/// Called inline, before the mutating call returns. The remix is passed by
/// shared reference, so the listener can read every field but cannot
/// mutate it from inside the notification.
pub trait RemixCallback {
    fn on_value_set(&mut self, remix: &RangeRemix);
}

impl<F> RemixCallback for F
where
    F: FnMut(&RangeRemix),
{
    #[inline]
    fn on_value_set(&mut self, remix: &RangeRemix) {
        self(remix)
    }
}

/// Boxed listener as stored by a remix.
pub type BoxedCallback = Box<dyn RemixCallback>;
