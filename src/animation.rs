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

//! The transition behind a toggle: three interpolation tracks advanced
//! on one shared clock.

use piet::Color;

use crate::easing::{Bounce, BOUNCE_TO_CHECKED, BOUNCE_TO_UNCHECKED};
use crate::util::{lerp, lerp_color};

/// Seconds over which the rounded-rect ↔ circle morph runs.
const MORPH_DURATION: f64 = 0.8;
/// Seconds over which the icon slides between its end positions.
const TRANSLATE_DURATION: f64 = 0.2;
/// Seconds over which the track color cross-fades.
const COLOR_DURATION: f64 = 0.3;

/// One in-flight toggle transition.
///
/// The tracks start together and clamp independently at their own
/// durations; the morph track is the longest and decides completion.
/// Each sampler returns its target exactly once its duration has
/// elapsed.
#[derive(Debug, Clone)]
pub(crate) struct Transition {
    elapsed: f64,
    bounce: Bounce,
    progress_from: f64,
    progress_to: f64,
    translate_from: f64,
    translate_to: f64,
    color_from: Color,
    color_to: Color,
}

impl Transition {
    /// Build the transition for a flip toward `checked`, starting from
    /// the live values of whatever it supersedes.
    pub fn toward(
        checked: bool,
        progress_from: f64,
        translate_from: f64,
        translate_to: f64,
        color_from: Color,
        color_to: Color,
    ) -> Transition {
        Transition {
            elapsed: 0.0,
            bounce: if checked {
                BOUNCE_TO_CHECKED
            } else {
                BOUNCE_TO_UNCHECKED
            },
            progress_from,
            progress_to: if checked { 0.0 } else { 1.0 },
            translate_from,
            translate_to,
            color_from,
            color_to,
        }
    }

    /// Advance the shared clock by an anim-frame interval.
    pub fn advance(&mut self, interval_ns: u64) {
        self.elapsed += interval_ns as f64 * 1e-9;
    }

    /// The bounced morph progress; overshoots its target mid-flight.
    pub fn progress(&self) -> f64 {
        if self.elapsed >= MORPH_DURATION {
            return self.progress_to;
        }
        let t = self.bounce.interpolate(self.elapsed / MORPH_DURATION);
        lerp(self.progress_from, self.progress_to, t)
    }

    /// The linearly interpolated horizontal icon offset.
    pub fn translate_x(&self) -> f64 {
        if self.elapsed >= TRANSLATE_DURATION {
            return self.translate_to;
        }
        lerp(
            self.translate_from,
            self.translate_to,
            self.elapsed / TRANSLATE_DURATION,
        )
    }

    /// The interpolated track color.
    pub fn color(&self) -> Color {
        if self.elapsed >= COLOR_DURATION {
            return self.color_to.clone();
        }
        lerp_color(&self.color_from, &self.color_to, self.elapsed / COLOR_DURATION)
    }

    pub fn translate_finished(&self) -> bool {
        self.elapsed >= TRANSLATE_DURATION
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= MORPH_DURATION
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::approx_eq;

    const SECOND: u64 = 1_000_000_000;

    fn toward_unchecked() -> Transition {
        Transition::toward(
            false,
            0.0,
            0.0,
            -80.0,
            Color::rgb8(0x3f, 0x51, 0xb5),
            Color::rgb8(0x21, 0x21, 0x21),
        )
    }

    #[test]
    fn initial_sample_matches_start_values() {
        let transition = toward_unchecked();
        assert_eq!(transition.progress(), 0.0);
        assert_eq!(transition.translate_x(), 0.0);
        assert_eq!(
            transition.color().as_rgba_u32(),
            Color::rgb8(0x3f, 0x51, 0xb5).as_rgba_u32()
        );
        assert!(!transition.is_finished());
    }

    #[test]
    fn completed_tracks_land_exactly_on_their_targets() {
        let mut transition = toward_unchecked();
        transition.advance(SECOND);
        assert!(transition.is_finished());
        assert_eq!(transition.progress(), 1.0);
        assert_eq!(transition.translate_x(), -80.0);
        assert_eq!(
            transition.color().as_rgba_u32(),
            Color::rgb8(0x21, 0x21, 0x21).as_rgba_u32()
        );
    }

    #[test]
    fn restarted_transition_lands_exactly_from_an_odd_start() {
        // a canceled transition hands over a mid-flight progress value
        let mut transition = Transition::toward(
            true,
            0.634,
            -80.0,
            -4.0,
            Color::rgb8(0x80, 0x80, 0x80),
            Color::rgb8(0x3f, 0x51, 0xb5),
        );
        transition.advance(SECOND);
        assert_eq!(transition.progress(), 0.0);
        assert_eq!(transition.translate_x(), -4.0);
    }

    #[test]
    fn tracks_clamp_at_their_own_durations() {
        let mut transition = toward_unchecked();
        transition.advance(SECOND / 4); // 250 ms
        assert!(transition.translate_finished());
        assert!(!transition.is_finished());
        assert_eq!(transition.translate_x(), -80.0);
        assert_ne!(transition.progress(), 1.0);
    }

    #[test]
    fn morph_overshoots_mid_flight() {
        let mut transition = toward_unchecked();
        // first oscillation extremum: normalized t = 1/4.5, i.e. ~178 ms
        transition.advance(177_800_000);
        assert!(transition.progress() > 1.0);
    }

    #[test]
    fn translation_is_linear() {
        let mut transition = toward_unchecked();
        transition.advance(SECOND / 10); // half the translate duration
        assert!(approx_eq!(f64, transition.translate_x(), -40.0, epsilon = 1e-6));
    }
}
