// Copyright 2026 the Flyout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overlay renderer: flight progress to visual parameters.
//!
//! ## Phases
//!
//! - Position follows a cubic ease-out from start to end, bowed upward by a
//!   sine arc (`arc_height` at mid-flight, zero at both ends).
//! - Entry (`progress < 0.25`): the token pops in with a back ease-out,
//!   overshooting before holding at `1.05`.
//! - Exit (`progress > 0.7`): the token shrinks toward the target.
//! - From `0.85` the token fades out, reaching opacity `0` at `1`.
//! - Rotation and glow relax toward rest as progress approaches `1`.
//!
//! Output ranges for `progress ∈ [0, 1]`: `scale ∈ [0.45, 1.25]`,
//! `opacity ∈ [0, 1]`, `glow_opacity ∈ [0.15, 0.5]`.
//!
//! ## Presentation
//!
//! [`OverlayDraw`] describes what to draw. It always targets the root overlay
//! layer, above all content and outside every clip, so the flight path is
//! never cut off by a scrolling container. It never takes part in hit testing.

use core::f64::consts::PI;

use flyout_motion::easing::{clamp_unit, ease_out_back, ease_out_cubic, lerp};
use kurbo::{Affine, Point, Rect, Size};
use serde::{Deserialize, Serialize};

/// Visual tuning for the flying token.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayStyle {
    /// Upward bow of the path at mid-flight, in pixels.
    pub arc_height: f64,
    /// Edge length of the (square) token, in pixels.
    pub token_size: f64,
    /// How far the glow extends past the token on each side, in pixels.
    pub glow_inset: f64,
    /// Stacking order on the root overlay layer.
    pub z_index: i32,
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self {
            arc_height: 60.0,
            token_size: 30.0,
            glow_inset: 8.0,
            z_index: 9999,
        }
    }
}

/// Visual parameters of the token for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisualFrame {
    /// Token center in viewport space.
    pub position: Point,
    /// Uniform scale about the token center.
    pub scale: f64,
    /// Token opacity.
    pub opacity: f64,
    /// Clockwise rotation in degrees.
    pub rotation_deg: f64,
    /// Opacity of the soft glow behind the token.
    pub glow_opacity: f64,
    /// Opacity of the drop shadow under the token.
    pub shadow_opacity: f64,
}

/// Render with the default [`OverlayStyle`].
pub fn render(progress: f64, start: Point, end: Point) -> VisualFrame {
    render_with(&OverlayStyle::default(), progress, start, end)
}

/// Map flight progress to visual parameters.
///
/// `progress` is clamped to `[0, 1]`.
pub fn render_with(style: &OverlayStyle, progress: f64, start: Point, end: Point) -> VisualFrame {
    let progress = clamp_unit(progress);
    let eased = ease_out_cubic(progress);

    let x = lerp(start.x, end.x, eased);
    let base_y = lerp(start.y, end.y, eased);
    let y = base_y - (PI * eased).sin() * style.arc_height;

    let entry = (progress / 0.25).min(1.0);
    let exit = if progress > 0.7 {
        ((progress - 0.7) / 0.3).min(1.0)
    } else {
        0.0
    };
    let scale = if progress < 0.7 {
        (0.6 + ease_out_back(entry) * 0.45).clamp(0.6, 1.25)
    } else {
        (1.05 - exit * 0.55).clamp(0.45, 1.1)
    };

    let opacity = if progress < 0.85 {
        1.0
    } else {
        (1.0 - (progress - 0.85) / 0.15).clamp(0.0, 1.0)
    };

    let remaining = 1.0 - progress;
    VisualFrame {
        position: Point::new(x, y),
        scale,
        opacity,
        rotation_deg: remaining * 14.0,
        glow_opacity: (0.2 + remaining * 0.3).clamp(0.15, 0.5),
        shadow_opacity: 0.25 + 0.35 * remaining,
    }
}

/// Instruction to draw the token on the root overlay layer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OverlayDraw {
    /// Visual parameters for this frame.
    pub frame: VisualFrame,
    /// Unscaled token edge length.
    pub token_size: f64,
    /// Unscaled glow extent past the token edge.
    pub glow_inset: f64,
    /// Stacking order on the root overlay layer.
    pub z_index: i32,
}

impl OverlayDraw {
    /// Combine a frame with the style it was rendered with.
    pub fn new(frame: VisualFrame, style: &OverlayStyle) -> Self {
        Self {
            frame,
            token_size: style.token_size,
            glow_inset: style.glow_inset,
            z_index: style.z_index,
        }
    }

    /// Token-local to viewport transform. Token-local space has its origin at the token center.
    pub fn transform(&self) -> Affine {
        Affine::translate(self.frame.position.to_vec2())
            * Affine::rotate(self.frame.rotation_deg.to_radians())
            * Affine::scale(self.frame.scale)
    }

    /// Unrotated, scaled token bounds in viewport space.
    pub fn token_bounds(&self) -> Rect {
        let edge = self.token_size * self.frame.scale;
        Rect::from_center_size(self.frame.position, Size::new(edge, edge))
    }

    /// Unrotated, scaled glow bounds in viewport space.
    pub fn glow_bounds(&self) -> Rect {
        let inset = self.glow_inset * self.frame.scale;
        self.token_bounds().inflate(inset, inset)
    }

    /// Conservative world-space bounds covering the token at any rotation, glow included.
    ///
    /// Suitable as damage for repainting the previous and current frame.
    pub fn damage_bounds(&self) -> Rect {
        let half = (self.token_size * 0.5 + self.glow_inset) * self.frame.scale * core::f64::consts::SQRT_2;
        Rect::from_center_size(self.frame.position, Size::new(2.0 * half, 2.0 * half))
    }

    /// False once the token has fully faded.
    pub fn is_visible(&self) -> bool {
        self.frame.opacity > 0.0
    }
}
