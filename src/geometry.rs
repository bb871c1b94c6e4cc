// Copyright 2026 The Switcher Authors.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! The switch's derived layout, a pure function of bounds and progress.

use kurbo::{Rect, Size};

use crate::util::lerp;

/// Ratio of the icon radius to the track corner radius.
const ICON_RADIUS_RATIO: f64 = 0.6;
/// Ratio of the icon radius to the clip (highlight) radius.
const ICON_CLIP_RATIO: f64 = 2.25;

/// Everything the paint and event paths need to know about where the
/// switch's parts sit, derived from the widget bounds and the morph
/// progress.
///
/// `compute` is idempotent and side-effect free; two calls with the
/// same inputs compare equal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    size: Size,
    shadow_offset: f64,
    /// The switch's background rounded-rect.
    pub track: Rect,
    /// Corner radius shared by the track and the icon body.
    pub corner_radius: f64,
    /// The movable thumb element.
    pub icon: Rect,
    /// Square mask revealing the track-colored highlight inside the
    /// icon; its growth is what morphs the pill into a circle.
    pub icon_clip: Rect,
    pub icon_radius: f64,
    pub icon_clip_radius: f64,
    pub icon_collapsed_width: f64,
}

impl Geometry {
    /// Derive the layout for the given bounds and progress.
    ///
    /// `progress` 0 is the checked rest pose (icon collapsed against
    /// the track's right corner), 1 the unchecked rest pose (icon a
    /// full circle). Values transiently outside `[0, 1]` are accepted
    /// and extrapolated linearly; that is how the bounce overshoot
    /// reaches the screen.
    pub fn compute(size: Size, shadow_offset: f64, click_offset: f64, progress: f64) -> Geometry {
        if size.width <= 0.0 || size.height <= 0.0 {
            return Geometry::empty(size, shadow_offset);
        }
        let (w, h) = (size.width, size.height);

        // the track leaves extra room below so the shadow can fall there
        let track = Rect::new(
            click_offset + shadow_offset,
            click_offset + shadow_offset / 2.0,
            w - click_offset - shadow_offset,
            h - click_offset - shadow_offset * 1.5,
        );
        let corner_radius = (h - shadow_offset * 2.0) / 2.0;

        let icon_radius = corner_radius * ICON_RADIUS_RATIO;
        let icon_clip_radius = icon_radius / ICON_CLIP_RATIO;
        let icon_collapsed_width = icon_radius - icon_clip_radius;
        let icon_height = icon_radius * 2.0;

        let center_x = w - corner_radius;
        let half_width = icon_collapsed_width / 2.0
            + lerp(0.0, icon_radius - icon_collapsed_width / 2.0, progress);
        let top = (h - icon_height) / 2.0 - shadow_offset / 2.0;
        let icon = Rect::new(
            center_x - half_width,
            top,
            center_x + half_width,
            top + icon_height,
        );

        let clip_half = lerp(0.0, icon_clip_radius, progress);
        let center = icon.center();
        let icon_clip = Rect::new(
            center.x - clip_half,
            center.y - clip_half,
            center.x + clip_half,
            center.y + clip_half,
        );

        Geometry {
            size,
            shadow_offset,
            track,
            corner_radius,
            icon,
            icon_clip,
            icon_radius,
            icon_clip_radius,
            icon_collapsed_width,
        }
    }

    fn empty(size: Size, shadow_offset: f64) -> Geometry {
        Geometry {
            size,
            shadow_offset,
            track: Rect::ZERO,
            corner_radius: 0.0,
            icon: Rect::ZERO,
            icon_clip: Rect::ZERO,
            icon_radius: 0.0,
            icon_clip_radius: 0.0,
            icon_collapsed_width: 0.0,
        }
    }

    /// Whether the widget has drawable bounds at all.
    pub fn is_empty(&self) -> bool {
        self.size.width <= 0.0 || self.size.height <= 0.0
    }

    /// The clip square is skipped while the icon is collapsed, so the
    /// narrow pill does not show a stray dot.
    pub fn draws_icon_clip(&self) -> bool {
        self.icon_clip.width() > self.icon_collapsed_width
    }

    /// Icon translation when the switch rests in the checked pose.
    pub fn checked_translation(&self) -> f64 {
        -self.shadow_offset
    }

    /// Icon translation when the switch rests in the unchecked pose.
    pub fn unchecked_translation(&self) -> f64 {
        -(self.size.width - self.shadow_offset - self.corner_radius * 2.0)
    }
}
