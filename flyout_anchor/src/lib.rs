// Copyright 2026 the Flyout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Flyout Anchor: Kurbo-native geometry resolution for fly-to-target animations.
//!
//! A fly-to-target animation needs two points in viewport space: where the
//! user acted, and where the token should land. This crate answers both.
//!
//! - [`AnchorResolver`]: the lookup capability a host provides, mapping a
//!   stable identifier to the anchor's current rectangle. Lookups may fail.
//! - [`AnchorTable`]: a ready-made resolver over named rectangles, with
//!   [`AnchorFlags`] for mounted/visible state. Useful for headless hosts and tests.
//! - [`Trigger`]: origin information carried by the activating event.
//! - [`resolve_center`] and [`resolve_trigger_origin`]: the resolution rules.
//!
//! ## Not a layout engine
//!
//! Nothing here measures or arranges. Upstream code keeps anchor rectangles
//! current in viewport coordinates; resolution reads them at call time.
//!
//! ## Example
//!
//! ```
//! use flyout_anchor::{AnchorTable, OriginKind, Trigger, resolve_center, resolve_trigger_origin};
//! use kurbo::{Point, Rect};
//!
//! let mut anchors = AnchorTable::new();
//! anchors.insert("nav-cart-icon", Rect::new(40.0, 40.0, 60.0, 60.0));
//! anchors.insert("add-to-cart", Rect::new(0.0, 0.0, 20.0, 20.0));
//!
//! let end = resolve_center(&anchors, "nav-cart-icon").unwrap();
//!
//! // The activated control resolves, so it is the origin.
//! let origin = resolve_trigger_origin(&anchors, &Trigger::from_source("add-to-cart"), end);
//! assert_eq!(origin.kind, OriginKind::Source);
//! assert_eq!(origin.point, Point::new(10.0, 10.0));
//!
//! // Nothing known about the origin: start where we end.
//! let origin = resolve_trigger_origin(&anchors, &Trigger::unknown(), end);
//! assert_eq!(origin.point, end);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod resolve;
mod table;
mod types;

pub use resolve::{
    AnchorResolver, FnResolver, OriginKind, ResolvedOrigin, resolve_center, resolve_trigger_origin,
};
pub use table::AnchorTable;
pub use types::{AnchorFlags, Trigger};
