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

//! The switch widget: state machine, host surface and painting.

use std::any::Any;
use std::fmt;

use kurbo::{Affine, Rect, RoundedRect, Size};
use piet::{Color, Error, ImageFormat, InterpolationMode, RenderContext};
use tracing::{trace, warn};

use crate::animation::Transition;
use crate::geometry::Geometry;
use crate::shadow::{blur_radius_for_elevation, ShadowBackend, ShadowBitmap};
use crate::style::SwitcherStyle;

/// Track inset applied while a press transition is running.
const CLICK_OFFSET: f64 = 2.0;

/// The capabilities a host framework provides to the widget.
///
/// Method names follow the druid context methods of the same purpose.
/// `request_anim_frame` asks the host to call [`Switcher::anim_frame`]
/// on its next frame with the elapsed interval; `request_paint` marks
/// the widget as needing to be redrawn.
pub trait HostCtx {
    fn request_anim_frame(&mut self);
    fn request_paint(&mut self);
}

/// Saved widget state: the checked flag bundled with the host's own
/// opaque state payload.
pub struct SavedState {
    checked: bool,
    host: Option<Box<dyn Any>>,
}

impl SavedState {
    /// The checked flag captured at save time.
    pub fn checked(&self) -> bool {
        self.checked
    }
}

impl fmt::Debug for SavedState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("SavedState")
            .field("checked", &self.checked)
            .field("host", &self.host.is_some())
            .finish()
    }
}

/// An animated toggle switch.
///
/// The widget has two stable states, checked and unchecked, and one
/// transient animating state between them. A toggle flips the logical
/// state immediately, notifies the registered listener, and then runs
/// three interpolations over a shared timeline: the rounded-rect ↔
/// circle morph of the icon, the icon's horizontal slide, and the track
/// color cross-fade. A toggle arriving mid-flight cancels the running
/// transition and restarts from the live interpolated values.
pub struct Switcher {
    style: SwitcherStyle,
    backend: ShadowBackend,
    checked: bool,
    progress: f64,
    translate_x: f64,
    current_color: Color,
    click_offset: f64,
    size: Size,
    shadow_offset: f64,
    blur_radius: f64,
    geometry: Geometry,
    shadow: Option<ShadowBitmap>,
    transition: Option<Transition>,
    listener: Option<Box<dyn FnMut(bool)>>,
}

impl Switcher {
    pub fn new(style: SwitcherStyle, backend: ShadowBackend) -> Switcher {
        let checked = style.checked;
        let progress = if checked { 0.0 } else { 1.0 };
        let current_color = if checked {
            style.on_color.clone()
        } else {
            style.off_color.clone()
        };
        let blur_radius = match backend {
            ShadowBackend::Software => blur_radius_for_elevation(style.elevation),
            ShadowBackend::Native => 0.0,
        };
        Switcher {
            style,
            backend,
            checked,
            progress,
            translate_x: 0.0,
            current_color,
            click_offset: 0.0,
            size: Size::ZERO,
            shadow_offset: 0.0,
            blur_radius,
            geometry: Geometry::compute(Size::ZERO, 0.0, 0.0, progress),
            shadow: None,
            transition: None,
            listener: None,
        }
    }

    /// The size the widget asks for when the host imposes none.
    ///
    /// On the software backend the bounds grow by the elevation on each
    /// side so the blurred shadow has room to render.
    pub fn preferred_size(&self) -> Size {
        let mut size = self.style.size;
        if self.backend == ShadowBackend::Software {
            size.width += self.style.elevation * 2.0;
            size.height += self.style.elevation * 2.0;
        }
        size
    }

    /// Host layout callback: adopt the final bounds and re-derive the
    /// visual state from them.
    pub fn set_size(&mut self, size: Size) {
        self.size = size;
        self.shadow_offset = match self.backend {
            ShadowBackend::Software => self.style.elevation,
            ShadowBackend::Native => 0.0,
        };
        self.refresh_geometry();
        self.refresh_shadow();
        self.translate_x = if self.checked {
            self.geometry.checked_translation()
        } else {
            self.geometry.unchecked_translation()
        };
    }

    /// The widget bounds last given to [`set_size`].
    ///
    /// [`set_size`]: Switcher::set_size
    pub fn size(&self) -> Size {
        self.size
    }

    pub fn is_checked(&self) -> bool {
        self.checked
    }

    /// Whether a toggle transition is currently in flight.
    pub fn is_animating(&self) -> bool {
        self.transition.is_some()
    }

    /// The live morph progress: 0 at the checked rest pose, 1 at the
    /// unchecked rest pose, transiently outside that range mid-bounce.
    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// The live interpolated track color.
    pub fn current_color(&self) -> Color {
        self.current_color.clone()
    }

    /// The live horizontal icon offset.
    pub fn translate_x(&self) -> f64 {
        self.translate_x
    }

    /// The current derived layout.
    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    /// Register the checked-change callback, replacing any previous
    /// registration.
    ///
    /// The callback fires exactly once per toggle, at the moment the
    /// logical state flips — the start of the transition, not its end.
    pub fn on_checked_change(&mut self, listener: impl FnMut(bool) + 'static) {
        self.listener = Some(Box::new(listener));
    }

    /// The widget's rounded outline, for hosts with native elevation.
    pub fn rounded_outline(&self) -> RoundedRect {
        RoundedRect::from_rect(self.size.to_rect(), self.geometry.corner_radius)
    }

    /// The configured elevation, for hosts with native elevation.
    pub fn elevation(&self) -> f64 {
        self.style.elevation
    }

    /// Toggle in response to a recognized click.
    pub fn toggle(&mut self, ctx: &mut impl HostCtx) {
        self.start_transition(ctx);
    }

    /// Set the logical state.
    ///
    /// A no-op when the state already matches (the listener stays
    /// silent). With `animate` the full transition runs; without it the
    /// widget snaps to the rest pose, resetting progress, color and
    /// translation instantly.
    pub fn set_checked(&mut self, checked: bool, animate: bool, ctx: &mut impl HostCtx) {
        if self.checked == checked {
            return;
        }
        if animate {
            self.start_transition(ctx);
        } else {
            self.snap_to(checked);
            ctx.request_paint();
        }
    }

    /// Bundle the checked flag with the host's opaque state payload.
    pub fn save_state(&self, host: Option<Box<dyn Any>>) -> SavedState {
        SavedState {
            checked: self.checked,
            host,
        }
    }

    /// Restore from a previously saved payload, re-deriving the visual
    /// state for the restored flag without animating.
    ///
    /// Returns the host's own payload for it to restore in turn. A
    /// payload of the wrong type is ignored and leaves the widget as
    /// it was.
    pub fn restore_state(&mut self, state: Box<dyn Any>) -> Option<Box<dyn Any>> {
        match state.downcast::<SavedState>() {
            Ok(saved) => {
                self.snap_to(saved.checked);
                saved.host
            }
            Err(_) => {
                warn!("ignoring saved switch state of unexpected type");
                None
            }
        }
    }

    /// Per-frame driver; `interval` is the nanoseconds elapsed since
    /// the previous frame.
    pub fn anim_frame(&mut self, interval: u64, ctx: &mut impl HostCtx) {
        let sampled = match &mut self.transition {
            Some(transition) => {
                transition.advance(interval);
                (
                    transition.progress(),
                    transition.translate_x(),
                    transition.color(),
                    transition.translate_finished(),
                    transition.is_finished(),
                )
            }
            None => return,
        };
        let (progress, translate_x, color, translate_finished, finished) = sampled;

        self.translate_x = translate_x;
        self.current_color = color;
        if progress != self.progress {
            self.progress = progress;
            self.refresh_geometry();
        }
        // the press inset is released when the slide completes
        if translate_finished && self.click_offset != 0.0 {
            self.click_offset = 0.0;
            self.refresh_geometry();
            self.refresh_shadow();
        }
        if finished {
            self.transition = None;
        } else {
            ctx.request_anim_frame();
        }
        ctx.request_paint();
    }

    /// Draw callback: shadow (software backend), then the track, then
    /// the icon and its clip under the icon translation.
    pub fn paint(&mut self, rc: &mut impl RenderContext) -> Result<(), Error> {
        if self.geometry.is_empty() {
            return Ok(());
        }

        if let Some(shadow) = &self.shadow {
            if self.blur_radius > 0.0 && shadow.width() > 0 {
                let image = rc.make_image(
                    shadow.width(),
                    shadow.height(),
                    shadow.rgba_premul(),
                    ImageFormat::RgbaPremul,
                )?;
                let dst = Rect::new(
                    0.0,
                    self.shadow_offset,
                    shadow.width() as f64,
                    self.shadow_offset + shadow.height() as f64,
                );
                rc.draw_image(&image, dst, InterpolationMode::NearestNeighbor);
            }
        }

        let track = RoundedRect::from_rect(self.geometry.track, self.geometry.corner_radius);
        rc.fill(track, &self.current_color);

        rc.save()?;
        rc.transform(Affine::translate((self.translate_x, 0.0)));
        let icon = RoundedRect::from_rect(self.geometry.icon, self.geometry.corner_radius);
        rc.fill(icon, &self.style.icon_color);
        if self.geometry.draws_icon_clip() {
            let clip = RoundedRect::from_rect(self.geometry.icon_clip, self.geometry.icon_radius);
            rc.fill(clip, &self.current_color);
        }
        rc.restore()?;
        Ok(())
    }

    /// Cancel whatever transition is live and start a fresh one from
    /// the current interpolated values. The logical flip and the
    /// listener fire now, not at completion.
    fn start_transition(&mut self, ctx: &mut impl HostCtx) {
        // latest request wins; no queueing
        self.transition = None;
        self.click_offset = CLICK_OFFSET;
        self.refresh_geometry();
        self.refresh_shadow();

        self.checked = !self.checked;
        trace!(checked = self.checked, "starting switch transition");
        if let Some(listener) = &mut self.listener {
            listener(self.checked);
        }

        let (translate_from, translate_to) = if self.checked {
            (
                self.geometry.unchecked_translation(),
                self.geometry.checked_translation(),
            )
        } else {
            (0.0, self.geometry.unchecked_translation())
        };
        let color_to = if self.checked {
            self.style.on_color.clone()
        } else {
            self.style.off_color.clone()
        };
        self.transition = Some(Transition::toward(
            self.checked,
            self.progress,
            translate_from,
            translate_to,
            self.current_color.clone(),
            color_to,
        ));
        ctx.request_paint();
        ctx.request_anim_frame();
    }

    /// Jump to the rest pose for `checked` with no animation and no
    /// listener invocation.
    fn snap_to(&mut self, checked: bool) {
        self.transition = None;
        self.checked = checked;
        self.click_offset = 0.0;
        self.progress = if checked { 0.0 } else { 1.0 };
        self.current_color = if checked {
            self.style.on_color.clone()
        } else {
            self.style.off_color.clone()
        };
        self.refresh_geometry();
        self.refresh_shadow();
        self.translate_x = if checked {
            self.geometry.checked_translation()
        } else {
            self.geometry.unchecked_translation()
        };
    }

    fn refresh_geometry(&mut self) {
        self.geometry =
            Geometry::compute(self.size, self.shadow_offset, self.click_offset, self.progress);
    }

    /// Re-render the shadow raster. Only called when the track shape or
    /// the bounds change; the morph never moves the track, so progress
    /// updates skip this.
    fn refresh_shadow(&mut self) {
        if self.backend != ShadowBackend::Software || self.blur_radius <= 0.0 {
            return;
        }
        if self.geometry.is_empty() {
            return;
        }
        let bitmap = self.shadow.get_or_insert_with(ShadowBitmap::new);
        bitmap.regenerate(
            self.size,
            self.geometry.track,
            self.geometry.corner_radius,
            self.blur_radius,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::approx_eq;
    use std::cell::RefCell;
    use std::rc::Rc;

    const FRAME: u64 = 16_666_667;

    #[derive(Default)]
    struct Host {
        anim_frames: usize,
        paints: usize,
    }

    impl HostCtx for Host {
        fn request_anim_frame(&mut self) {
            self.anim_frames += 1;
        }
        fn request_paint(&mut self) {
            self.paints += 1;
        }
    }

    fn switcher(checked: bool) -> Switcher {
        let style = SwitcherStyle::new().with_checked(checked);
        let mut switcher = Switcher::new(style, ShadowBackend::Software);
        let size = switcher.preferred_size();
        switcher.set_size(size);
        switcher
    }

    fn run_to_rest(switcher: &mut Switcher, host: &mut Host) {
        let mut frames = 0;
        while switcher.is_animating() {
            switcher.anim_frame(FRAME, host);
            frames += 1;
            assert!(frames < 200, "transition never finished");
        }
    }

    fn recorded_listener(switcher: &mut Switcher) -> Rc<RefCell<Vec<bool>>> {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let recorder = Rc::clone(&calls);
        switcher.on_checked_change(move |checked| recorder.borrow_mut().push(checked));
        calls
    }

    #[test]
    fn unanimated_set_checked_is_idempotent() {
        let mut switcher = switcher(true);
        let calls = recorded_listener(&mut switcher);
        let mut host = Host::default();

        let before = *switcher.geometry();
        switcher.set_checked(true, false, &mut host);
        switcher.set_checked(true, false, &mut host);

        assert!(calls.borrow().is_empty());
        assert!(switcher.is_checked());
        assert_eq!(switcher.progress(), 0.0);
        assert_eq!(*switcher.geometry(), before);
        assert_eq!(host.paints, 0);
    }

    #[test]
    fn listener_fires_at_transition_start() {
        let mut switcher = switcher(true);
        let calls = recorded_listener(&mut switcher);
        let mut host = Host::default();

        switcher.toggle(&mut host);

        // logical state flipped before any frame ran; visuals have not
        assert_eq!(calls.borrow().as_slice(), &[false]);
        assert!(!switcher.is_checked());
        assert!(switcher.is_animating());
        assert_eq!(switcher.progress(), 0.0);
        assert_eq!(host.anim_frames, 1);
    }

    #[test]
    fn animated_toggle_lands_exactly_on_the_rest_pose() {
        let mut switcher = switcher(true);
        let mut host = Host::default();

        switcher.toggle(&mut host);
        run_to_rest(&mut switcher, &mut host);

        assert!(!switcher.is_checked());
        assert_eq!(switcher.progress(), 1.0);
        assert_eq!(
            switcher.current_color().as_rgba_u32(),
            SwitcherStyle::new().off_color.as_rgba_u32()
        );
        assert_eq!(
            switcher.translate_x(),
            switcher.geometry().unchecked_translation()
        );
        // the press inset was released when the slide completed
        let rest = Geometry::compute(switcher.size(), switcher.elevation(), 0.0, 1.0);
        assert_eq!(*switcher.geometry(), rest);
    }

    #[test]
    fn double_toggle_mid_flight_cancels_and_restarts() {
        let mut switcher = switcher(true);
        let calls = recorded_listener(&mut switcher);
        let mut host = Host::default();

        switcher.toggle(&mut host);
        for _ in 0..4 {
            switcher.anim_frame(FRAME, &mut host);
        }
        let mid_progress = switcher.progress();
        assert!(mid_progress > 0.0);

        switcher.toggle(&mut host);
        run_to_rest(&mut switcher, &mut host);

        assert_eq!(calls.borrow().as_slice(), &[false, true]);
        assert!(switcher.is_checked());
        assert_eq!(switcher.progress(), 0.0);
        assert!(!switcher.is_animating());
    }

    #[test]
    fn snap_round_trip_to_unchecked() {
        let mut switcher = switcher(true);
        let mut host = Host::default();

        switcher.set_checked(false, false, &mut host);

        assert!(!switcher.is_checked());
        assert!(!switcher.is_animating());
        assert_eq!(switcher.progress(), 1.0);
        assert_eq!(
            switcher.current_color().as_rgba_u32(),
            SwitcherStyle::new().off_color.as_rgba_u32()
        );
        let geometry = switcher.geometry();
        assert!(approx_eq!(
            f64,
            geometry.icon.width(),
            geometry.icon_radius * 2.0,
            epsilon = 1e-9
        ));
        assert!(geometry.draws_icon_clip());
        assert_eq!(switcher.translate_x(), geometry.unchecked_translation());
        assert_eq!(host.paints, 1);
    }

    #[test]
    fn anim_frames_run_until_the_morph_completes() {
        let mut switcher = switcher(true);
        let mut host = Host::default();

        switcher.toggle(&mut host);
        let mut frames = 0;
        while switcher.is_animating() {
            let before = host.paints;
            switcher.anim_frame(FRAME, &mut host);
            assert_eq!(host.paints, before + 1);
            frames += 1;
        }
        // 800 ms of 16.67 ms frames
        assert_eq!(frames, 48);
        // one request at start, then one per non-final frame
        assert_eq!(host.anim_frames, frames);
    }

    #[test]
    fn save_restore_round_trip() {
        let mut source = switcher(true);
        let saved = source.save_state(Some(Box::new(42u32)));
        assert!(saved.checked());

        let mut restored = switcher(false);
        let host_blob = restored.restore_state(Box::new(saved));

        let blob = host_blob.expect("host payload should be handed back");
        assert_eq!(*blob.downcast::<u32>().unwrap(), 42);
        assert!(restored.is_checked());
        assert_eq!(restored.progress(), 0.0);
        assert!(!restored.geometry().draws_icon_clip());
        assert!(!restored.is_animating());
    }

    #[test]
    fn malformed_saved_state_is_ignored() {
        let mut switcher = switcher(true);
        let before_geometry = *switcher.geometry();

        let returned = switcher.restore_state(Box::new("not a saved state"));

        assert!(returned.is_none());
        assert!(switcher.is_checked());
        assert_eq!(switcher.progress(), 0.0);
        assert_eq!(*switcher.geometry(), before_geometry);
    }

    #[test]
    fn software_backend_keeps_a_shadow_sized_to_the_bounds() {
        let switcher = switcher(true);
        let shadow = switcher.shadow.as_ref().expect("shadow bitmap");
        assert_eq!(shadow.width(), switcher.size().width.round() as usize);
        assert_eq!(shadow.height(), switcher.size().height.round() as usize);
    }

    #[test]
    fn zero_elevation_short_circuits_the_shadow() {
        let style = SwitcherStyle::new().with_elevation(0.0);
        let mut switcher = Switcher::new(style, ShadowBackend::Software);
        let size = switcher.preferred_size();
        switcher.set_size(size);
        assert!(switcher.shadow.is_none());
    }

    #[test]
    fn native_backend_skips_the_shadow_entirely() {
        let mut switcher = Switcher::new(SwitcherStyle::new(), ShadowBackend::Native);
        switcher.set_size(switcher.preferred_size());
        assert!(switcher.shadow.is_none());
        // no shadow offset either; the icon rests flush at zero
        assert_eq!(switcher.translate_x(), 0.0);
        assert_eq!(switcher.rounded_outline().rect(), switcher.size().to_rect());
    }

    #[test]
    fn preferred_size_reserves_room_for_the_software_shadow() {
        let style = SwitcherStyle::new();
        let software = Switcher::new(style.clone(), ShadowBackend::Software);
        let native = Switcher::new(style.clone(), ShadowBackend::Native);
        assert_eq!(native.preferred_size(), style.size);
        assert_eq!(
            software.preferred_size(),
            Size::new(
                style.size.width + style.elevation * 2.0,
                style.size.height + style.elevation * 2.0,
            )
        );
    }

    #[test]
    fn degenerate_bounds_keep_the_widget_inert() {
        let mut switcher = Switcher::new(SwitcherStyle::new(), ShadowBackend::Software);
        let mut host = Host::default();
        switcher.set_size(Size::ZERO);
        assert!(switcher.geometry().is_empty());
        assert!(switcher.shadow.is_none());
        // toggling still flips logical state without panicking
        switcher.toggle(&mut host);
        assert!(!switcher.is_checked());
    }
}
