// Copyright 2026 the Flyout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Geometry resolution: anchor centers and trigger origins.

use alloc::rc::Rc;
use core::cell::RefCell;

use kurbo::{Point, Rect};

use crate::types::Trigger;

/// Looks up the current viewport-space rectangle of a named anchor.
///
/// Resolution happens at call time and may fail (the anchor is not mounted or
/// not displayed). Failure is a normal outcome, not an error.
pub trait AnchorResolver {
    /// Current bounds of `id`, or `None` if it cannot be located.
    fn anchor_bounds(&self, id: &str) -> Option<Rect>;
}

impl<T: AnchorResolver + ?Sized> AnchorResolver for &T {
    fn anchor_bounds(&self, id: &str) -> Option<Rect> {
        (**self).anchor_bounds(id)
    }
}

impl<T: AnchorResolver + ?Sized> AnchorResolver for Rc<T> {
    fn anchor_bounds(&self, id: &str) -> Option<Rect> {
        (**self).anchor_bounds(id)
    }
}

/// Shared, host-mutable resolvers. A resolver that is mutably borrowed at
/// lookup time resolves nothing.
impl<T: AnchorResolver + ?Sized> AnchorResolver for RefCell<T> {
    fn anchor_bounds(&self, id: &str) -> Option<Rect> {
        self.try_borrow().ok()?.anchor_bounds(id)
    }
}

/// Adapts a closure into an [`AnchorResolver`].
///
/// ```
/// use flyout_anchor::{FnResolver, resolve_center};
/// use kurbo::{Point, Rect};
///
/// let fake = FnResolver(|id: &str| (id == "cart").then(|| Rect::new(40.0, 40.0, 60.0, 60.0)));
/// assert_eq!(resolve_center(&fake, "cart"), Some(Point::new(50.0, 50.0)));
/// assert_eq!(resolve_center(&fake, "elsewhere"), None);
/// ```
#[derive(Clone, Copy)]
pub struct FnResolver<F>(pub F);

impl<F> core::fmt::Debug for FnResolver<F> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FnResolver").finish_non_exhaustive()
    }
}

impl<F> AnchorResolver for FnResolver<F>
where
    F: Fn(&str) -> Option<Rect>,
{
    fn anchor_bounds(&self, id: &str) -> Option<Rect> {
        (self.0)(id)
    }
}

/// Center of the anchor `id`, or `None` if it cannot currently be located.
///
/// A rectangle with a non-finite center counts as not located.
pub fn resolve_center<R: AnchorResolver + ?Sized>(resolver: &R, id: &str) -> Option<Point> {
    resolver
        .anchor_bounds(id)
        .map(|r| r.center())
        .filter(|p| p.is_finite())
}

/// Which rule produced a trigger origin.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum OriginKind {
    /// Center of the trigger's source element.
    Source,
    /// The trigger's raw pointer coordinates.
    Pointer,
    /// The caller-supplied fallback.
    Fallback,
}

/// A resolved trigger origin.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ResolvedOrigin {
    /// Origin in viewport space.
    pub point: Point,
    /// Rule that produced [`point`](Self::point).
    pub kind: OriginKind,
}

/// Resolve where an animation started by `trigger` should begin.
///
/// Preference order:
/// 1. the center of `trigger.source`, if it resolves;
/// 2. `trigger.pointer`, if present and finite;
/// 3. `fallback` (typically the target's own center, which yields a
///    zero-length path that still runs and completes).
pub fn resolve_trigger_origin<R: AnchorResolver + ?Sized>(
    resolver: &R,
    trigger: &Trigger,
    fallback: Point,
) -> ResolvedOrigin {
    if let Some(point) = trigger
        .source
        .as_deref()
        .and_then(|id| resolve_center(resolver, id))
    {
        return ResolvedOrigin {
            point,
            kind: OriginKind::Source,
        };
    }
    if let Some(point) = trigger.pointer.filter(|p| p.is_finite()) {
        return ResolvedOrigin {
            point,
            kind: OriginKind::Pointer,
        };
    }
    ResolvedOrigin {
        point: fallback,
        kind: OriginKind::Fallback,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::AnchorTable;

    fn table() -> AnchorTable {
        let mut t = AnchorTable::new();
        t.insert("cart", Rect::new(90.0, 90.0, 110.0, 110.0));
        t.insert("add-btn", Rect::new(0.0, 0.0, 20.0, 20.0));
        t
    }

    #[test]
    fn center_of_known_and_unknown_anchor() {
        let t = table();
        assert_eq!(resolve_center(&t, "cart"), Some(Point::new(100.0, 100.0)));
        assert_eq!(resolve_center(&t, "nope"), None);
    }

    #[test]
    fn source_wins_over_pointer() {
        let t = table();
        let trig = Trigger::from_source("add-btn").with_pointer(Point::new(500.0, 500.0));
        let o = resolve_trigger_origin(&t, &trig, Point::ZERO);
        assert_eq!(o.kind, OriginKind::Source);
        assert_eq!(o.point, Point::new(10.0, 10.0));
    }

    #[test]
    fn unresolved_source_falls_back_to_pointer() {
        let t = table();
        let trig = Trigger::from_source("gone").with_pointer(Point::new(7.0, 8.0));
        let o = resolve_trigger_origin(&t, &trig, Point::ZERO);
        assert_eq!(o.kind, OriginKind::Pointer);
        assert_eq!(o.point, Point::new(7.0, 8.0));
    }

    #[test]
    fn unknown_trigger_uses_fallback() {
        let t = table();
        let o = resolve_trigger_origin(&t, &Trigger::unknown(), Point::new(50.0, 50.0));
        assert_eq!(o.kind, OriginKind::Fallback);
        assert_eq!(o.point, Point::new(50.0, 50.0));
    }

    #[test]
    fn non_finite_pointer_is_ignored() {
        let t = table();
        let trig = Trigger::from_pointer(Point::new(f64::NAN, 1.0));
        let o = resolve_trigger_origin(&t, &trig, Point::new(1.0, 2.0));
        assert_eq!(o.kind, OriginKind::Fallback);
    }

    #[test]
    fn non_finite_anchor_is_unresolved() {
        let mut t = table();
        t.insert("broken", Rect::new(f64::NAN, 0.0, 10.0, 10.0));
        t.insert("far", Rect::new(0.0, 0.0, f64::INFINITY, 10.0));
        assert_eq!(resolve_center(&t, "broken"), None);
        assert_eq!(resolve_center(&t, "far"), None);

        // A broken source rectangle does not beat a usable pointer.
        let trig = Trigger::from_source("broken").with_pointer(Point::new(3.0, 4.0));
        let o = resolve_trigger_origin(&t, &trig, Point::ZERO);
        assert_eq!(o.kind, OriginKind::Pointer);
        assert_eq!(o.point, Point::new(3.0, 4.0));
    }

    #[test]
    fn shared_cells_resolve_unless_mutably_borrowed() {
        let shared = Rc::new(RefCell::new(table()));
        assert!(resolve_center(&shared, "cart").is_some());
        let _guard = shared.borrow_mut();
        assert!(resolve_center(&shared, "cart").is_none());
    }
}
