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

//! Damped-oscillation ("bounce") easing.

use std::f64::consts::PI;

/// Bounce parameters used when the switch animates toward the
/// unchecked pose.
pub(crate) const BOUNCE_TO_UNCHECKED: Bounce = Bounce {
    amplitude: 0.2,
    frequency: 4.5 * PI,
};

/// Bounce parameters used when the switch animates toward the checked
/// pose.
pub(crate) const BOUNCE_TO_CHECKED: Bounce = Bounce {
    amplitude: 0.15,
    frequency: 3.5 * PI,
};

/// An overshoot-then-settle interpolation curve.
///
/// Normalized time maps through `1 − e^(−t/amplitude) · cos(frequency·t)`:
/// the exponential is the decay envelope, the cosine the oscillation.
/// The frequency is always a half-integer multiple of π, so the cosine
/// vanishes at `t = 1` and the curve lands on exactly `1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounce {
    amplitude: f64,
    frequency: f64,
}

impl Bounce {
    /// Create a bounce curve from a decay time constant and the number
    /// of half-oscillations completed over the unit interval.
    pub fn new(amplitude: f64, half_waves: u32) -> Bounce {
        Bounce {
            amplitude,
            frequency: (f64::from(half_waves) + 0.5) * PI,
        }
    }

    /// Map normalized time `t` to an eased output value.
    ///
    /// Returns exactly `0.0` at `t <= 0` and exactly `1.0` at `t >= 1`;
    /// in between the output overshoots past `1.0` before settling.
    pub fn interpolate(&self, t: f64) -> f64 {
        if t <= 0.0 {
            0.0
        } else if t >= 1.0 {
            1.0
        } else {
            1.0 - (-t / self.amplitude).exp() * (self.frequency * t).cos()
        }
    }
}
