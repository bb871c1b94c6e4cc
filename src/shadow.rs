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

//! Software shadow fallback: an alpha raster of the track shape run
//! through a separable Gaussian blur.

use kurbo::{Rect, Size};

/// How shadow casting is performed; fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShadowBackend {
    /// The host compositor applies elevation to the widget's rounded
    /// outline; nothing is rasterized here.
    Native,
    /// No native elevation available; a blurred bitmap is generated
    /// and composited below the track.
    Software,
}

/// Elevation beyond this no longer widens the blur.
const MAX_ELEVATION: f64 = 24.0;
const MAX_BLUR_RADIUS: f64 = 25.0;
/// Shadow ink: black at 20% opacity.
const SHADOW_ALPHA: f64 = 0.2;
/// Kernel support in standard deviations.
const KERNEL_SUPPORT: f64 = 2.5;

/// Map an elevation value into the bounded blur-radius range.
pub(crate) fn blur_radius_for_elevation(elevation: f64) -> f64 {
    if elevation <= 0.0 {
        return 0.0;
    }
    (MAX_BLUR_RADIUS * (elevation / MAX_ELEVATION)).min(MAX_BLUR_RADIUS)
}

/// The reusable shadow raster.
///
/// Allocated at the widget's first layout and afterwards cleared and
/// redrawn in place; buffers are only reallocated when the bounds
/// change. Regeneration with identical inputs is bitwise identical.
#[derive(Debug, Default)]
pub(crate) struct ShadowBitmap {
    width: usize,
    height: usize,
    alpha: Vec<u8>,
    scratch: Vec<u8>,
    rgba: Vec<u8>,
}

impl ShadowBitmap {
    pub fn new() -> ShadowBitmap {
        ShadowBitmap::default()
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// The blurred alpha channel, row-major, one byte per pixel.
    pub fn alpha(&self) -> &[u8] {
        &self.alpha
    }

    /// Premultiplied RGBA view of the shadow for compositing: black
    /// tinted at 20% of the blurred coverage.
    pub fn rgba_premul(&self) -> &[u8] {
        &self.rgba
    }

    /// Rasterize `track` (rounded by `corner_radius`) into the alpha
    /// channel and blur it by `blur_radius`.
    pub fn regenerate(&mut self, size: Size, track: Rect, corner_radius: f64, blur_radius: f64) {
        let w = size.width.round().max(0.0) as usize;
        let h = size.height.round().max(0.0) as usize;
        if w == 0 || h == 0 {
            self.width = 0;
            self.height = 0;
            self.alpha.clear();
            self.scratch.clear();
            self.rgba.clear();
            return;
        }
        if w != self.width || h != self.height {
            self.width = w;
            self.height = h;
            self.alpha = vec![0; w * h];
            self.scratch = vec![0; w * h];
            self.rgba = vec![0; w * h * 4];
        } else {
            for byte in &mut self.alpha {
                *byte = 0;
            }
        }
        self.rasterize(track, corner_radius);
        self.blur(blur_radius);
        self.tint();
    }

    /// Antialiased coverage from the signed distance to the rounded rect.
    fn rasterize(&mut self, track: Rect, corner_radius: f64) {
        let radius = corner_radius
            .min(track.width() / 2.0)
            .min(track.height() / 2.0)
            .max(0.0);
        let center = track.center();
        let half_w = track.width() / 2.0 - radius;
        let half_h = track.height() / 2.0 - radius;
        for y in 0..self.height {
            let py = y as f64 + 0.5;
            for x in 0..self.width {
                let px = x as f64 + 0.5;
                let dx = ((px - center.x).abs() - half_w).max(0.0);
                let dy = ((py - center.y).abs() - half_h).max(0.0);
                let distance = (dx * dx + dy * dy).sqrt() - radius;
                let coverage = (0.5 - distance).max(0.0).min(1.0);
                self.alpha[y * self.width + x] = (coverage * 255.0).round() as u8;
            }
        }
    }

    /// Two one-dimensional Gaussian passes, zero-padded at the edges.
    fn blur(&mut self, blur_radius: f64) {
        if blur_radius <= 0.0 {
            return;
        }
        let kernel = gaussian_kernel(blur_radius);
        let half = (kernel.len() / 2) as isize;
        let (w, h) = (self.width, self.height);

        for y in 0..h {
            for x in 0..w {
                let mut acc = 0.0;
                for (i, weight) in kernel.iter().enumerate() {
                    let sx = x as isize + i as isize - half;
                    if sx >= 0 && (sx as usize) < w {
                        acc += weight * f64::from(self.alpha[y * w + sx as usize]);
                    }
                }
                self.scratch[y * w + x] = acc.round().min(255.0) as u8;
            }
        }
        for y in 0..h {
            for x in 0..w {
                let mut acc = 0.0;
                for (i, weight) in kernel.iter().enumerate() {
                    let sy = y as isize + i as isize - half;
                    if sy >= 0 && (sy as usize) < h {
                        acc += weight * f64::from(self.scratch[sy as usize * w + x]);
                    }
                }
                self.alpha[y * w + x] = acc.round().min(255.0) as u8;
            }
        }
    }

    fn tint(&mut self) {
        for (pixel, &alpha) in self.rgba.chunks_exact_mut(4).zip(self.alpha.iter()) {
            pixel[0] = 0;
            pixel[1] = 0;
            pixel[2] = 0;
            pixel[3] = (f64::from(alpha) * SHADOW_ALPHA).round() as u8;
        }
    }
}

/// Normalized 1-D Gaussian weights for the given blur radius.
fn gaussian_kernel(blur_radius: f64) -> Vec<f64> {
    let sigma = (blur_radius / 2.0).max(0.5);
    let half = (sigma * KERNEL_SUPPORT).ceil().max(1.0) as usize;
    let mut kernel = Vec::with_capacity(half * 2 + 1);
    for i in 0..=half * 2 {
        let x = i as f64 - half as f64;
        kernel.push((-x * x / (2.0 * sigma * sigma)).exp());
    }
    let sum: f64 = kernel.iter().sum();
    for weight in &mut kernel {
        *weight /= sum;
    }
    kernel
}
