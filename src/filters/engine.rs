// SPDX-License-Identifier: GPL-3.0-only

//! CPU filter implementations
//!
//! All seven filters operate on RGBA buffers. Color filters work per pixel;
//! blur and unsharp mask reuse the separable kernels from `image::imageops`;
//! crystallize assigns pixels to jittered-grid Voronoi cells and averages
//! each cell.

use crate::errors::FilterError;
use crate::filters::{FilterChoice, FilterParams};
use image::{Rgba, RgbaImage, imageops};

/// Applies a named filter with a parameter set to a bitmap.
///
/// Implementations must not mutate the source; a fresh buffer is returned
/// on success.
pub trait FilterEngine {
    fn apply(
        &self,
        source: &RgbaImage,
        choice: FilterChoice,
        params: FilterParams,
    ) -> Result<RgbaImage, FilterError>;
}

/// Software filter engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct CpuFilterEngine;

impl FilterEngine for CpuFilterEngine {
    fn apply(
        &self,
        source: &RgbaImage,
        choice: FilterChoice,
        params: FilterParams,
    ) -> Result<RgbaImage, FilterError> {
        if source.width() == 0 || source.height() == 0 {
            return Err(FilterError::EmptyImage);
        }

        let output = match choice {
            FilterChoice::SepiaTone => sepia_tone(source, params.intensity.unwrap_or(0.0)),
            FilterChoice::Vignette => vignette(
                source,
                params.intensity.unwrap_or(0.0),
                params.radius.unwrap_or(0.0),
            ),
            FilterChoice::GaussianBlur => gaussian_blur(source, params.radius.unwrap_or(0.0)),
            FilterChoice::UnsharpMask => unsharp_mask(
                source,
                params.radius.unwrap_or(0.0),
                params.intensity.unwrap_or(0.0),
            ),
            FilterChoice::Pixellate => pixellate(source, params.scale.unwrap_or(0.0)),
            FilterChoice::Edges => edges(source, params.intensity.unwrap_or(0.0)),
            FilterChoice::Crystallize => crystallize(source, params.radius.unwrap_or(0.0)),
        };

        Ok(output)
    }
}

/// Upper bound on the Gaussian sigma used by the blur-based filters.
/// Sigmas derived from the radius mapping reach ~67 at full intensity,
/// where the separable convolution stalls interactive slider renders;
/// beyond this bound the visual difference is marginal.
const MAX_BLUR_SIGMA: f32 = 25.0;

/// Sigma for the blur-based filters, derived from the radius mapping.
#[inline]
fn blur_sigma(radius: f32) -> f32 {
    (radius / 3.0).min(MAX_BLUR_SIGMA)
}

/// Rec. 601 luma
#[inline]
fn luminance(pixel: &Rgba<u8>) -> f32 {
    let [r, g, b, _] = pixel.0;
    0.299 * r as f32 + 0.587 * g as f32 + 0.114 * b as f32
}

#[inline]
fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Sepia tint blended with the original by `intensity`.
fn sepia_tone(source: &RgbaImage, intensity: f32) -> RgbaImage {
    let t = intensity.clamp(0.0, 1.0);
    let mut output = source.clone();

    for pixel in output.pixels_mut() {
        let luma = luminance(pixel) / 255.0;
        let sepia_r = (luma * 1.2 + 0.1).clamp(0.0, 1.0) * 255.0;
        let sepia_g = (luma * 0.9 + 0.05).clamp(0.0, 1.0) * 255.0;
        let sepia_b = (luma * 0.7).clamp(0.0, 1.0) * 255.0;

        let [r, g, b, a] = pixel.0;
        pixel.0 = [
            (r as f32 + (sepia_r - r as f32) * t) as u8,
            (g as f32 + (sepia_g - g as f32) * t) as u8,
            (b as f32 + (sepia_b - b as f32) * t) as u8,
            a,
        ];
    }

    output
}

/// Radial darkening from the image center.
///
/// `radius` widens the darkened band inward from the corners; `intensity`
/// controls how dark the falloff gets.
fn vignette(source: &RgbaImage, intensity: f32, radius: f32) -> RgbaImage {
    let strength = intensity.clamp(0.0, 1.0);
    // Inner edge moves toward the center as radius grows
    let edge1 = 0.9_f32;
    let edge0 = edge1 - 0.6 * (radius / crate::constants::mapping::RADIUS_MAX).clamp(0.0, 1.0);

    let width = source.width() as f32;
    let height = source.height() as f32;
    let mut output = source.clone();

    for (x, y, pixel) in output.enumerate_pixels_mut() {
        let dx = x as f32 / width - 0.5;
        let dy = y as f32 / height - 0.5;
        let dist = (dx * dx + dy * dy).sqrt();
        let falloff = 1.0 - smoothstep(edge0, edge1, dist) * strength;

        let [r, g, b, a] = pixel.0;
        pixel.0 = [
            (r as f32 * falloff) as u8,
            (g as f32 * falloff) as u8,
            (b as f32 * falloff) as u8,
            a,
        ];
    }

    output
}

fn gaussian_blur(source: &RgbaImage, radius: f32) -> RgbaImage {
    if radius <= 0.0 {
        return source.clone();
    }
    // Treat the radius as roughly three standard deviations
    imageops::blur(source, blur_sigma(radius))
}

/// Sharpen via blurred-mask subtraction, blended by `intensity`.
fn unsharp_mask(source: &RgbaImage, radius: f32, intensity: f32) -> RgbaImage {
    if radius <= 0.0 {
        return source.clone();
    }

    let sharpened = imageops::unsharpen(source, blur_sigma(radius), 0);
    let t = intensity.clamp(0.0, 1.0);
    let mut output = source.clone();

    for (base, sharp) in output.pixels_mut().zip(sharpened.pixels()) {
        let [r, g, b, a] = base.0;
        let [sr, sg, sb, _] = sharp.0;
        base.0 = [
            (r as f32 + (sr as f32 - r as f32) * t).clamp(0.0, 255.0) as u8,
            (g as f32 + (sg as f32 - g as f32) * t).clamp(0.0, 255.0) as u8,
            (b as f32 + (sb as f32 - b as f32) * t).clamp(0.0, 255.0) as u8,
            a,
        ];
    }

    output
}

/// Mosaic blocks, averaged. `scale` is the block edge in pixels.
fn pixellate(source: &RgbaImage, scale: f32) -> RgbaImage {
    let block = (scale.round() as u32).max(1);
    if block == 1 {
        return source.clone();
    }

    let width = source.width();
    let height = source.height();
    let mut output = RgbaImage::new(width, height);

    for by in (0..height).step_by(block as usize) {
        for bx in (0..width).step_by(block as usize) {
            let bw = block.min(width - bx);
            let bh = block.min(height - by);

            let mut sums = [0u64; 4];
            for y in by..by + bh {
                for x in bx..bx + bw {
                    let pixel = source.get_pixel(x, y);
                    for (sum, value) in sums.iter_mut().zip(pixel.0) {
                        *sum += value as u64;
                    }
                }
            }

            let count = (bw * bh) as u64;
            let average = Rgba([
                (sums[0] / count) as u8,
                (sums[1] / count) as u8,
                (sums[2] / count) as u8,
                (sums[3] / count) as u8,
            ]);

            for y in by..by + bh {
                for x in bx..bx + bw {
                    output.put_pixel(x, y, average);
                }
            }
        }
    }

    output
}

/// Sobel gradient magnitude on luma, scaled by `intensity`.
fn edges(source: &RgbaImage, intensity: f32) -> RgbaImage {
    let width = source.width() as isize;
    let height = source.height() as isize;
    let gain = intensity.clamp(0.0, 1.0) * 4.0;

    let sample = |x: isize, y: isize| -> f32 {
        let x = x.clamp(0, width - 1) as u32;
        let y = y.clamp(0, height - 1) as u32;
        luminance(source.get_pixel(x, y)) / 255.0
    };

    let mut output = RgbaImage::new(source.width(), source.height());

    for (px, py, pixel) in output.enumerate_pixels_mut() {
        let x = px as isize;
        let y = py as isize;

        let tl = sample(x - 1, y - 1);
        let tm = sample(x, y - 1);
        let tr = sample(x + 1, y - 1);
        let ml = sample(x - 1, y);
        let mr = sample(x + 1, y);
        let bl = sample(x - 1, y + 1);
        let bm = sample(x, y + 1);
        let br = sample(x + 1, y + 1);

        let gx = -tl - 2.0 * ml - bl + tr + 2.0 * mr + br;
        let gy = -tl - 2.0 * tm - tr + bl + 2.0 * bm + br;
        let magnitude = ((gx * gx + gy * gy).sqrt() * gain).clamp(0.0, 1.0);

        let value = (magnitude * 255.0) as u8;
        let alpha = source.get_pixel(px, py).0[3];
        pixel.0 = [value, value, value, alpha];
    }

    output
}

/// Deterministic per-cell jitter in [0, 1).
#[inline]
fn cell_hash(x: u32, y: u32, salt: u32) -> f32 {
    let mut h = x
        .wrapping_mul(0x9E37_79B9)
        .wrapping_add(y.wrapping_mul(0x85EB_CA6B))
        .wrapping_add(salt.wrapping_mul(0xC2B2_AE35));
    h ^= h >> 15;
    h = h.wrapping_mul(0x2C1B_3C6D);
    h ^= h >> 12;
    (h & 0x00FF_FFFF) as f32 / 16_777_216.0
}

/// Voronoi cell averaging over a jittered grid.
///
/// One seed point is placed per grid cell; each pixel joins the nearest
/// seed among its 3x3 neighboring cells and every cell is flattened to its
/// average color.
fn crystallize(source: &RgbaImage, radius: f32) -> RgbaImage {
    let cell_size = radius.max(2.0);
    let width = source.width();
    let height = source.height();

    let cells_x = ((width as f32 / cell_size).ceil() as i32).max(1);
    let cells_y = ((height as f32 / cell_size).ceil() as i32).max(1);
    let cell_count = (cells_x * cells_y) as usize;

    // Jittered seed point per grid cell
    let mut seeds: Vec<(f32, f32)> = Vec::with_capacity(cell_count);
    for cy in 0..cells_y {
        for cx in 0..cells_x {
            let jx = cell_hash(cx as u32, cy as u32, 0);
            let jy = cell_hash(cx as u32, cy as u32, 77);
            seeds.push((
                (cx as f32 + jx) * cell_size,
                (cy as f32 + jy) * cell_size,
            ));
        }
    }

    // First pass: assign each pixel to the nearest seed among its 3x3
    // neighboring cells and accumulate that cell's color sum.
    let mut assignment: Vec<u32> = vec![0; (width * height) as usize];
    let mut sums: Vec<[u64; 4]> = vec![[0; 4]; cell_count];
    let mut counts: Vec<u32> = vec![0; cell_count];

    for (x, y, pixel) in source.enumerate_pixels() {
        let cx = (x as f32 / cell_size) as i32;
        let cy = (y as f32 / cell_size) as i32;

        let mut best = 0usize;
        let mut best_dist = f32::MAX;
        for ny in (cy - 1).max(0)..=(cy + 1).min(cells_y - 1) {
            for nx in (cx - 1).max(0)..=(cx + 1).min(cells_x - 1) {
                let index = (ny * cells_x + nx) as usize;
                let (sx, sy) = seeds[index];
                let dx = x as f32 - sx;
                let dy = y as f32 - sy;
                let dist = dx * dx + dy * dy;
                if dist < best_dist {
                    best_dist = dist;
                    best = index;
                }
            }
        }

        assignment[(y * width + x) as usize] = best as u32;
        for (sum, value) in sums[best].iter_mut().zip(pixel.0) {
            *sum += value as u64;
        }
        counts[best] += 1;
    }

    // Second pass: paint each pixel with its cell's average
    let averages: Vec<Rgba<u8>> = sums
        .iter()
        .zip(&counts)
        .map(|(sum, &count)| {
            if count == 0 {
                Rgba([0, 0, 0, 0])
            } else {
                Rgba([
                    (sum[0] / count as u64) as u8,
                    (sum[1] / count as u64) as u8,
                    (sum[2] / count as u64) as u8,
                    (sum[3] / count as u64) as u8,
                ])
            }
        })
        .collect();

    let mut output = RgbaImage::new(width, height);
    for (x, y, pixel) in output.enumerate_pixels_mut() {
        *pixel = averages[assignment[(y * width + x) as usize] as usize];
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::FilterParams;

    fn test_image() -> RgbaImage {
        RgbaImage::from_fn(16, 16, |x, y| {
            if (x + y) % 2 == 0 {
                Rgba([200, 120, 40, 255])
            } else {
                Rgba([20, 60, 180, 255])
            }
        })
    }

    #[test]
    fn all_filters_preserve_dimensions() {
        let engine = CpuFilterEngine;
        let source = test_image();

        for choice in FilterChoice::ALL {
            let params = FilterParams::for_choice(choice, 0.5);
            let output = engine.apply(&source, choice, params).unwrap();
            assert_eq!(output.dimensions(), source.dimensions(), "{:?}", choice);
        }
    }

    #[test]
    fn empty_image_is_rejected() {
        let engine = CpuFilterEngine;
        let source = RgbaImage::new(0, 0);
        let params = FilterParams::for_choice(FilterChoice::SepiaTone, 0.5);

        assert!(matches!(
            engine.apply(&source, FilterChoice::SepiaTone, params),
            Err(FilterError::EmptyImage)
        ));
    }

    #[test]
    fn zero_intensity_sepia_is_identity() {
        let engine = CpuFilterEngine;
        let source = test_image();
        let params = FilterParams::for_choice(FilterChoice::SepiaTone, 0.0);

        let output = engine.apply(&source, FilterChoice::SepiaTone, params).unwrap();
        assert_eq!(output, source);
    }

    #[test]
    fn zero_radius_blur_is_identity() {
        let engine = CpuFilterEngine;
        let source = test_image();
        let params = FilterParams::for_choice(FilterChoice::GaussianBlur, 0.0);

        let output = engine
            .apply(&source, FilterChoice::GaussianBlur, params)
            .unwrap();
        assert_eq!(output, source);
    }

    #[test]
    fn full_intensity_sepia_desaturates() {
        let engine = CpuFilterEngine;
        let source = test_image();
        let params = FilterParams::for_choice(FilterChoice::SepiaTone, 1.0);

        let output = engine.apply(&source, FilterChoice::SepiaTone, params).unwrap();
        for pixel in output.pixels() {
            let [r, g, b, _] = pixel.0;
            // Sepia keeps a warm channel ordering
            assert!(r >= g && g >= b, "not sepia-toned: {:?}", pixel);
        }
    }

    #[test]
    fn pixellate_produces_uniform_blocks() {
        let engine = CpuFilterEngine;
        let source = test_image();
        // Intensity 0.8 -> scale 8 -> 8px blocks on a 16px image
        let params = FilterParams::for_choice(FilterChoice::Pixellate, 0.8);

        let output = engine.apply(&source, FilterChoice::Pixellate, params).unwrap();
        let first = output.get_pixel(0, 0);
        for y in 0..8 {
            for x in 0..8 {
                assert_eq!(output.get_pixel(x, y), first);
            }
        }
    }

    #[test]
    fn edges_output_is_grayscale() {
        let engine = CpuFilterEngine;
        let source = test_image();
        let params = FilterParams::for_choice(FilterChoice::Edges, 1.0);

        let output = engine.apply(&source, FilterChoice::Edges, params).unwrap();
        for pixel in output.pixels() {
            let [r, g, b, _] = pixel.0;
            assert_eq!(r, g);
            assert_eq!(g, b);
        }
    }

    #[test]
    fn blur_sigma_is_bounded() {
        // Full-intensity radius (200) must not exceed the sigma cap
        assert_eq!(blur_sigma(200.0), MAX_BLUR_SIGMA);
        // Small radii keep the radius/3 derivation
        assert_eq!(blur_sigma(30.0), 10.0);
    }

    #[test]
    fn crystallize_is_deterministic() {
        let engine = CpuFilterEngine;
        let source = test_image();
        let params = FilterParams::for_choice(FilterChoice::Crystallize, 0.1);

        let first = engine
            .apply(&source, FilterChoice::Crystallize, params)
            .unwrap();
        let second = engine
            .apply(&source, FilterChoice::Crystallize, params)
            .unwrap();
        assert_eq!(first, second);
    }
}
