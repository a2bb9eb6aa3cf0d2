// Copyright 2026 the Flyout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Item-added broadcast.
//!
//! A [`Notifier`] is a cheap, clonable handle to one broadcast channel with no
//! payload. Any number of independent observers subscribe with a closure and
//! keep the returned [`Subscription`] alive for as long as they want to hear
//! about added items. Dropping it unsubscribes.
//!
//! Single-threaded: the handle is neither `Send` nor `Sync`.
//!
//! ```
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use flyout_cart::Notifier;
//!
//! let items = Notifier::new();
//! let count = Rc::new(Cell::new(0));
//! let seen = count.clone();
//! let sub = items.subscribe(move || seen.set(seen.get() + 1));
//!
//! items.emit();
//! assert_eq!(count.get(), 1);
//!
//! drop(sub);
//! items.emit();
//! assert_eq!(count.get(), 1);
//! ```

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

type Listener = Box<dyn FnMut()>;

#[derive(Default)]
struct Inner {
    next_id: u64,
    listeners: Vec<(u64, Listener)>,
    // Nesting level of `emit` calls in progress.
    depth: usize,
    // Ids of listeners currently checked out by some `emit`.
    checked_out: Vec<u64>,
    // Unsubscribed while an `emit` was in progress. Cleared when the outermost one ends.
    removed: Vec<u64>,
}

impl Inner {
    // The caller drops the returned listener after releasing its borrow, since
    // a listener may own subscriptions to this same notifier.
    fn unsubscribe(&mut self, id: u64) -> Option<Listener> {
        if self.depth > 0 {
            self.removed.push(id);
        }
        let pos = self.listeners.iter().position(|(l, _)| *l == id)?;
        Some(self.listeners.remove(pos).1)
    }

    fn len(&self) -> usize {
        let live_checked_out = self
            .checked_out
            .iter()
            .filter(|id| !self.removed.contains(id))
            .count();
        self.listeners.len() + live_checked_out
    }
}

/// Handle to an item-added broadcast.
#[derive(Clone, Default)]
pub struct Notifier {
    inner: Rc<RefCell<Inner>>,
}

impl fmt::Debug for Notifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Notifier")
            .field("listeners", &self.listener_count())
            .finish_non_exhaustive()
    }
}

impl Notifier {
    /// Create a broadcast with no listeners.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `listener`. It stays registered until the returned guard is dropped.
    #[must_use = "dropping the subscription unsubscribes immediately"]
    pub fn subscribe(&self, listener: impl FnMut() + 'static) -> Subscription {
        let mut inner = self.inner.borrow_mut();
        inner.next_id += 1;
        let id = inner.next_id;
        inner.listeners.push((id, Box::new(listener)));
        Subscription {
            id,
            inner: Rc::downgrade(&self.inner),
        }
    }

    /// Call every listener once, in subscription order. Returns how many were called.
    ///
    /// Listeners may subscribe or unsubscribe while being called. New listeners
    /// first hear the next emission; a listener unsubscribed mid-emission is
    /// not called again, not even later in the same pass. A nested `emit` from
    /// inside a listener reaches only listeners subscribed since the outer
    /// emission began.
    pub fn emit(&self) -> usize {
        let mut listeners = {
            let mut inner = self.inner.borrow_mut();
            inner.depth += 1;
            let taken = std::mem::take(&mut inner.listeners);
            inner.checked_out.extend(taken.iter().map(|(id, _)| *id));
            taken
        };

        let mut called = 0;
        for (id, listener) in &mut listeners {
            if self.inner.borrow().removed.contains(id) {
                continue;
            }
            listener();
            called += 1;
        }

        let dropped = {
            let mut guard = self.inner.borrow_mut();
            let inner = &mut *guard;
            inner.depth -= 1;
            inner
                .checked_out
                .retain(|id| !listeners.iter().any(|(l, _)| l == id));
            let (dropped, mut kept): (Vec<_>, Vec<_>) = listeners
                .into_iter()
                .partition(|(id, _)| inner.removed.contains(id));
            kept.append(&mut inner.listeners);
            inner.listeners = kept;
            if inner.depth == 0 {
                inner.removed.clear();
            }
            dropped
        };
        drop(dropped);
        called
    }

    /// Number of registered listeners, including any being called right now.
    pub fn listener_count(&self) -> usize {
        self.inner.try_borrow().map_or(0, |i| i.len())
    }
}

/// Keeps a listener registered. Dropping it unsubscribes.
pub struct Subscription {
    id: u64,
    inner: Weak<RefCell<Inner>>,
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("live", &(self.inner.strong_count() > 0))
            .finish()
    }
}

impl Subscription {
    /// Keep the listener registered for the lifetime of the notifier.
    pub fn detach(mut self) {
        self.inner = Weak::new();
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(inner) = self.inner.upgrade() {
            let listener = inner.borrow_mut().unsubscribe(self.id);
            drop(listener);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn counter() -> (Rc<Cell<u32>>, impl FnMut() + 'static) {
        let c = Rc::new(Cell::new(0));
        let c2 = c.clone();
        (c, move || c2.set(c2.get() + 1))
    }

    #[test]
    fn every_listener_hears_each_emit() {
        let n = Notifier::new();
        let (a, fa) = counter();
        let (b, fb) = counter();
        let _sa = n.subscribe(fa);
        let _sb = n.subscribe(fb);
        assert_eq!(n.emit(), 2);
        assert_eq!(n.emit(), 2);
        assert_eq!((a.get(), b.get()), (2, 2));
    }

    #[test]
    fn clones_share_listeners() {
        let n = Notifier::new();
        let other = n.clone();
        let (a, fa) = counter();
        let _s = n.subscribe(fa);
        other.emit();
        assert_eq!(a.get(), 1);
        assert_eq!(other.listener_count(), 1);
    }

    #[test]
    fn detached_subscription_stays_registered() {
        let n = Notifier::new();
        let (a, fa) = counter();
        n.subscribe(fa).detach();
        n.emit();
        assert_eq!(a.get(), 1);
        assert_eq!(n.listener_count(), 1);
    }

    #[test]
    fn unsubscribe_during_emit() {
        let n = Notifier::new();
        let slot: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));
        let slot2 = slot.clone();
        let (a, fa) = counter();
        let mut fa = fa;
        let sub = n.subscribe(move || {
            fa();
            // Drop our own subscription from inside the callback.
            slot2.borrow_mut().take();
        });
        *slot.borrow_mut() = Some(sub);
        assert_eq!(n.emit(), 1);
        assert_eq!(n.emit(), 0);
        assert_eq!(a.get(), 1);
    }

    #[test]
    fn subscribe_during_emit_hears_next_emit() {
        let n = Notifier::new();
        let (a, fa) = counter();
        let fa = RefCell::new(Some(fa));
        let held: Rc<RefCell<Vec<Subscription>>> = Rc::new(RefCell::new(Vec::new()));
        let held2 = held.clone();
        let n2 = n.clone();
        let _outer = n.subscribe(move || {
            if let Some(f) = fa.borrow_mut().take() {
                held2.borrow_mut().push(n2.subscribe(f));
            }
        });
        assert_eq!(n.emit(), 1);
        assert_eq!(a.get(), 0);
        assert_eq!(n.emit(), 2);
        assert_eq!(a.get(), 1);
    }

    #[test]
    fn unsubscribe_after_nested_emit() {
        let n = Notifier::new();
        let slot: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));
        let n2 = n.clone();
        let slot2 = slot.clone();
        let _a = n.subscribe(move || {
            n2.emit();
            // Drop a later listener's subscription after the nested emit returned.
            slot2.borrow_mut().take();
        });
        let (b, fb) = counter();
        *slot.borrow_mut() = Some(n.subscribe(fb));

        assert_eq!(n.emit(), 1);
        assert_eq!(b.get(), 0);
        assert_eq!(n.emit(), 1);
        assert_eq!(b.get(), 0);
        assert_eq!(n.listener_count(), 1);
    }

    #[test]
    fn count_includes_listeners_being_called() {
        let n = Notifier::new();
        let seen = Rc::new(Cell::new(0_usize));
        let (s2, n2) = (seen.clone(), n.clone());
        let _a = n.subscribe(move || s2.set(n2.listener_count()));
        let (_, fb) = counter();
        let _b = n.subscribe(fb);
        n.emit();
        assert_eq!(seen.get(), 2);
        assert_eq!(format!("{n:?}"), "Notifier { listeners: 2, .. }");
    }

    #[test]
    fn subscription_outliving_notifier_is_harmless() {
        let (_, fa) = counter();
        let sub = {
            let n = Notifier::new();
            n.subscribe(fa)
        };
        drop(sub);
    }
}
