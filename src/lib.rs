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

//! An animated toggle switch widget core.
//!
//! [`Switcher`] is a single widget's state machine and geometry model:
//! a rounded-rect track, a thumb icon that morphs between a narrow
//! pill and a full circle while sliding across the track, a color
//! cross-fade, and (on hosts without native elevation) a software
//! rendered blurred drop shadow. It is not a general animation engine
//! or a layout system; the host framework's view lifecycle, rendering
//! backend and input recognition stay outside and are reached through
//! a narrow surface: [`HostCtx`], [`Switcher::set_size`],
//! [`Switcher::anim_frame`] and [`Switcher::paint`] (the latter over
//! any [`piet::RenderContext`]).
//!
//! A toggle flips the logical state and notifies the listener
//! immediately, then drives three interpolations over one timeline:
//! the shape morph under a damped-bounce easing ([`Bounce`]), the
//! icon's horizontal slide, and the track color. A second toggle
//! arriving mid-flight cancels the first and restarts from the live
//! interpolated values.
//!
//! ```
//! use switcher::{HostCtx, ShadowBackend, Switcher, SwitcherStyle};
//!
//! struct Host;
//!
//! impl HostCtx for Host {
//!     fn request_anim_frame(&mut self) {}
//!     fn request_paint(&mut self) {}
//! }
//!
//! let mut switcher = Switcher::new(SwitcherStyle::new(), ShadowBackend::Software);
//! let size = switcher.preferred_size();
//! switcher.set_size(size);
//! switcher.on_checked_change(|checked| println!("checked: {}", checked));
//!
//! let mut host = Host;
//! switcher.toggle(&mut host);
//! while switcher.is_animating() {
//!     switcher.anim_frame(16_666_667, &mut host);
//! }
//! assert!(!switcher.is_checked());
//! ```

#![deny(unsafe_code)]

pub use kurbo;
pub use piet;

mod animation;
mod easing;
mod geometry;
mod shadow;
mod style;
mod switcher;
mod util;

pub use crate::easing::Bounce;
pub use crate::geometry::Geometry;
pub use crate::shadow::ShadowBackend;
pub use crate::style::SwitcherStyle;
pub use crate::switcher::{HostCtx, SavedState, Switcher};
