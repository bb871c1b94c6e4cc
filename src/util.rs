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

//! Small shared helpers.

use piet::Color;

/// Linearly interpolate between `a` and `b`.
pub(crate) fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Component-wise linear interpolation between two colors in sRGB space.
///
/// Equal endpoints are returned as-is.
pub(crate) fn lerp_color(a: &Color, b: &Color, t: f64) -> Color {
    if a.as_rgba_u32() == b.as_rgba_u32() {
        return a.clone();
    }
    let (ar, ag, ab, aa) = a.as_rgba8();
    let (br, bg, bb, ba) = b.as_rgba8();
    let channel =
        |x: u8, y: u8| (f64::from(x) + (f64::from(y) - f64::from(x)) * t).round() as u8;
    Color::rgba8(
        channel(ar, br),
        channel(ag, bg),
        channel(ab, bb),
        channel(aa, ba),
    )
}
