// Copyright 2026 the Flyout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types: anchor flags and trigger descriptors.

use alloc::string::String;
use kurbo::Point;

bitflags::bitflags! {
    /// Anchor flags controlling whether an anchor can be resolved.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct AnchorFlags: u8 {
        /// Anchor is attached to the view tree.
        const MOUNTED = 0b0000_0001;
        /// Anchor is displayed (not hidden or collapsed).
        const VISIBLE = 0b0000_0010;
    }
}

impl AnchorFlags {
    /// Flags required for an anchor to resolve.
    pub const RESOLVABLE: Self = Self::MOUNTED.union(Self::VISIBLE);

    /// True if both [`MOUNTED`](Self::MOUNTED) and [`VISIBLE`](Self::VISIBLE) are set.
    pub fn is_resolvable(self) -> bool {
        self.contains(Self::RESOLVABLE)
    }
}

impl Default for AnchorFlags {
    fn default() -> Self {
        Self::RESOLVABLE
    }
}

/// Origin information carried by the event that starts an animation.
///
/// Both parts are optional. The source element, when it resolves, wins over
/// the pointer coordinates; with neither, the origin is unknown and callers
/// fall back to a point of their choosing
/// (see [`resolve_trigger_origin`](crate::resolve_trigger_origin)).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Trigger {
    /// Identifier of the activated control, resolved like any other anchor.
    pub source: Option<String>,
    /// Raw pointer coordinates in viewport space.
    pub pointer: Option<Point>,
}

impl Trigger {
    /// A trigger carrying no origin information.
    pub fn unknown() -> Self {
        Self::default()
    }

    /// A trigger originating from the control identified by `source`.
    pub fn from_source(source: impl Into<String>) -> Self {
        Self {
            source: Some(source.into()),
            pointer: None,
        }
    }

    /// A trigger originating at raw pointer coordinates.
    pub fn from_pointer(pointer: Point) -> Self {
        Self {
            source: None,
            pointer: Some(pointer),
        }
    }

    /// Attach pointer coordinates.
    #[must_use]
    pub fn with_pointer(mut self, pointer: Point) -> Self {
        self.pointer = Some(pointer);
        self
    }

    /// Attach a source element identifier.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// True if neither a source nor pointer coordinates are present.
    pub fn is_unknown(&self) -> bool {
        self.source.is_none() && self.pointer.is_none()
    }
}
