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

//! Declarative configuration for a [`Switcher`].
//!
//! [`Switcher`]: crate::Switcher

use kurbo::Size;
use piet::Color;

/// Visual and initial-state configuration for a [`Switcher`].
///
/// Built once and handed to [`Switcher::new`]; the widget derives all
/// of its visual state from these values plus its bounds.
///
/// [`Switcher`]: crate::Switcher
/// [`Switcher::new`]: crate::Switcher::new
#[derive(Debug, Clone)]
pub struct SwitcherStyle {
    /// Track color in the checked state.
    pub on_color: Color,
    /// Track color in the unchecked state.
    pub off_color: Color,
    /// Icon (thumb) color.
    pub icon_color: Color,
    /// Shadow-casting depth; mapped to a blur radius on the software
    /// backend.
    pub elevation: f64,
    /// Size used when the host imposes no exact bounds.
    pub size: Size,
    /// Logical state the widget starts in.
    pub checked: bool,
}

impl Default for SwitcherStyle {
    fn default() -> SwitcherStyle {
        SwitcherStyle {
            on_color: Color::rgb8(0x3f, 0x51, 0xb5),
            off_color: Color::rgb8(0x21, 0x21, 0x21),
            icon_color: Color::WHITE,
            elevation: 4.0,
            size: Size::new(112.0, 56.0),
            checked: true,
        }
    }
}

impl SwitcherStyle {
    pub fn new() -> SwitcherStyle {
        SwitcherStyle::default()
    }

    /// Builder-style method to set the checked track color.
    pub fn with_on_color(mut self, color: Color) -> Self {
        self.on_color = color;
        self
    }

    /// Builder-style method to set the unchecked track color.
    pub fn with_off_color(mut self, color: Color) -> Self {
        self.off_color = color;
        self
    }

    /// Builder-style method to set the icon color.
    pub fn with_icon_color(mut self, color: Color) -> Self {
        self.icon_color = color;
        self
    }

    /// Builder-style method to set the elevation.
    pub fn with_elevation(mut self, elevation: f64) -> Self {
        self.elevation = elevation;
        self
    }

    /// Builder-style method to set the default size.
    pub fn with_size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    /// Builder-style method to set the initial checked flag.
    pub fn with_checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }
}
