// Copyright 2026 the Flyout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A table of named anchor rectangles for hosts without their own lookup.
//!
//! The table holds viewport-space bounds that upstream layout code keeps
//! current. It does no layout and no hit testing; it only answers
//! "where is anchor `id` right now?".

use alloc::collections::BTreeMap;
use alloc::string::String;

use kurbo::{Rect, Vec2};

use crate::resolve::AnchorResolver;
use crate::types::AnchorFlags;

#[derive(Clone, Copy, Debug)]
struct Entry {
    bounds: Rect,
    flags: AnchorFlags,
}

/// Named anchors with their current viewport-space bounds.
///
/// An entry resolves only while its flags are
/// [`resolvable`](AnchorFlags::is_resolvable).
///
/// ```
/// use flyout_anchor::{AnchorFlags, AnchorTable, resolve_center};
/// use kurbo::{Point, Rect};
///
/// let mut anchors = AnchorTable::new();
/// anchors.insert("nav-cart-icon", Rect::new(90.0, 90.0, 110.0, 110.0));
/// assert_eq!(resolve_center(&anchors, "nav-cart-icon"), Some(Point::new(100.0, 100.0)));
///
/// anchors.set_flags("nav-cart-icon", AnchorFlags::MOUNTED);
/// assert_eq!(resolve_center(&anchors, "nav-cart-icon"), None);
/// ```
#[derive(Clone, Debug, Default)]
pub struct AnchorTable {
    entries: BTreeMap<String, Entry>,
}

impl AnchorTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace an anchor with default (resolvable) flags.
    ///
    /// Returns the previous bounds, if any.
    pub fn insert(&mut self, id: impl Into<String>, bounds: Rect) -> Option<Rect> {
        self.insert_with_flags(id, bounds, AnchorFlags::default())
    }

    /// Insert or replace an anchor with explicit flags.
    pub fn insert_with_flags(
        &mut self,
        id: impl Into<String>,
        bounds: Rect,
        flags: AnchorFlags,
    ) -> Option<Rect> {
        self.entries
            .insert(id.into(), Entry { bounds, flags })
            .map(|e| e.bounds)
    }

    /// Update the bounds of an existing anchor. Returns `false` if `id` is unknown.
    pub fn set_bounds(&mut self, id: &str, bounds: Rect) -> bool {
        match self.entries.get_mut(id) {
            Some(e) => {
                e.bounds = bounds;
                true
            }
            None => false,
        }
    }

    /// Update the flags of an existing anchor. Returns `false` if `id` is unknown.
    pub fn set_flags(&mut self, id: &str, flags: AnchorFlags) -> bool {
        match self.entries.get_mut(id) {
            Some(e) => {
                e.flags = flags;
                true
            }
            None => false,
        }
    }

    /// Current flags of an anchor.
    pub fn flags(&self, id: &str) -> Option<AnchorFlags> {
        self.entries.get(id).map(|e| e.flags)
    }

    /// Stored bounds regardless of flags.
    pub fn bounds(&self, id: &str) -> Option<Rect> {
        self.entries.get(id).map(|e| e.bounds)
    }

    /// Shift every anchor by `delta`, for example after the viewport scrolled.
    pub fn translate_all(&mut self, delta: Vec2) {
        for e in self.entries.values_mut() {
            e.bounds = e.bounds + delta;
        }
    }

    /// Remove an anchor. Returns `false` if `id` is unknown.
    pub fn remove(&mut self, id: &str) -> bool {
        self.entries.remove(id).is_some()
    }

    /// True if an entry exists for `id`, resolvable or not.
    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl AnchorResolver for AnchorTable {
    fn anchor_bounds(&self, id: &str) -> Option<Rect> {
        let e = self.entries.get(id)?;
        e.flags.is_resolvable().then_some(e.bounds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_replace_and_remove() {
        let mut t = AnchorTable::new();
        assert!(t.is_empty());
        assert_eq!(t.insert("a", Rect::new(0.0, 0.0, 10.0, 10.0)), None);
        assert_eq!(
            t.insert("a", Rect::new(5.0, 5.0, 15.0, 15.0)),
            Some(Rect::new(0.0, 0.0, 10.0, 10.0))
        );
        assert_eq!(t.len(), 1);
        assert!(t.remove("a"));
        assert!(!t.remove("a"));
        assert_eq!(t.anchor_bounds("a"), None);
    }

    #[test]
    fn unknown_ids_are_not_updated() {
        let mut t = AnchorTable::new();
        assert!(!t.set_bounds("missing", Rect::ZERO));
        assert!(!t.set_flags("missing", AnchorFlags::empty()));
        assert_eq!(t.flags("missing"), None);
    }

    #[test]
    fn hidden_or_unmounted_anchors_do_not_resolve() {
        let mut t = AnchorTable::new();
        let r = Rect::new(0.0, 0.0, 20.0, 20.0);
        t.insert_with_flags("hidden", r, AnchorFlags::MOUNTED);
        t.insert_with_flags("detached", r, AnchorFlags::VISIBLE);
        assert_eq!(t.anchor_bounds("hidden"), None);
        assert_eq!(t.anchor_bounds("detached"), None);
        assert_eq!(t.bounds("hidden"), Some(r));

        t.set_flags("hidden", AnchorFlags::RESOLVABLE);
        assert_eq!(t.anchor_bounds("hidden"), Some(r));
    }

    #[test]
    fn translate_all_moves_every_anchor() {
        let mut t = AnchorTable::new();
        t.insert("a", Rect::new(0.0, 0.0, 10.0, 10.0));
        t.insert("b", Rect::new(50.0, 50.0, 60.0, 60.0));
        t.translate_all(Vec2::new(0.0, -25.0));
        assert_eq!(t.bounds("a"), Some(Rect::new(0.0, -25.0, 10.0, -15.0)));
        assert_eq!(t.bounds("b"), Some(Rect::new(50.0, 25.0, 60.0, 35.0)));
    }
}
