// SPDX-License-Identifier: MPL-2.0
//! Free-angle rotation with an expanded canvas.
//!
//! Quarter turns are exact pixel moves. Any other angle is resampled by
//! inverse mapping: for each output pixel we find the source position it
//! came from and interpolate there with a Lanczos3 kernel (bilinear within
//! the kernel radius of the border). Output pixels with no source are fully
//! transparent.
//!
//! Angles are counter-clockwise as seen on screen. With y pointing down the
//! inverse map of a counter-clockwise turn by θ is:
//! ```text
//! src_x =  dx * cos(θ) - dy * sin(θ) + src_cx
//! src_y =  dx * sin(θ) + dy * cos(θ) + src_cy
//! ```

use image_rs::{DynamicImage, Rgba, RgbaImage};
use std::f64::consts::PI;

const LANCZOS_RADIUS: i64 = 3;

/// Size of the smallest canvas holding a `width` x `height` image turned by
/// `angle_degrees`.
pub fn compute_rotated_bounds(width: u32, height: u32, angle_degrees: f64) -> (u32, u32) {
    let normalized = angle_degrees.rem_euclid(360.0);

    if normalized.abs() < 0.001 || (360.0 - normalized).abs() < 0.001 {
        return (width, height);
    }
    if (normalized - 90.0).abs() < 0.001 || (normalized - 270.0).abs() < 0.001 {
        return (height, width);
    }
    if (normalized - 180.0).abs() < 0.001 {
        return (width, height);
    }

    let (sin, cos) = normalized.to_radians().sin_cos();
    let (sin, cos) = (sin.abs(), cos.abs());
    let w = f64::from(width);
    let h = f64::from(height);

    let new_w = (w * cos + h * sin).round() as u32;
    let new_h = (w * sin + h * cos).round() as u32;

    (new_w.max(1), new_h.max(1))
}

/// Rotates `image` counter-clockwise by `degrees`, growing the canvas so
/// no corner is clipped.
///
/// Quarter turns keep the source pixel type. Free angles are resampled in
/// 8-bit RGBA, so 16-bit and float images come back as `ImageRgba8`; the
/// canvas only ever uploads 8-bit RGBA.
///
/// The caller is responsible for checking [`compute_rotated_bounds`]
/// against a size budget first.
#[must_use]
pub fn rotate_counter_clockwise(image: &DynamicImage, degrees: u32) -> DynamicImage {
    match degrees % 360 {
        0 => image.clone(),
        90 => image.rotate270(),
        180 => image.rotate180(),
        270 => image.rotate90(),
        angle => DynamicImage::ImageRgba8(rotate_free(&image.to_rgba8(), f64::from(angle))),
    }
}

fn rotate_free(src: &RgbaImage, angle_degrees: f64) -> RgbaImage {
    let (src_w, src_h) = src.dimensions();
    let (dst_w, dst_h) = compute_rotated_bounds(src_w, src_h, angle_degrees);

    let (sin, cos) = angle_degrees.to_radians().sin_cos();
    let src_cx = f64::from(src_w) / 2.0;
    let src_cy = f64::from(src_h) / 2.0;
    let dst_cx = f64::from(dst_w) / 2.0;
    let dst_cy = f64::from(dst_h) / 2.0;

    RgbaImage::from_fn(dst_w, dst_h, |x, y| {
        // Pixel centers, so that pixel i covers [i, i + 1).
        let dx = f64::from(x) + 0.5 - dst_cx;
        let dy = f64::from(y) + 0.5 - dst_cy;

        let src_x = dx * cos - dy * sin + src_cx - 0.5;
        let src_y = dx * sin + dy * cos + src_cy - 0.5;

        sample_lanczos3(src, src_x, src_y)
    })
}

fn lanczos3(x: f64) -> f64 {
    let x = x.abs();
    if x < f64::EPSILON {
        return 1.0;
    }
    if x >= LANCZOS_RADIUS as f64 {
        return 0.0;
    }
    let pi_x = PI * x;
    let radius = LANCZOS_RADIUS as f64;
    radius * pi_x.sin() * (pi_x / radius).sin() / (pi_x * pi_x)
}

fn sample_lanczos3(image: &RgbaImage, x: f64, y: f64) -> Rgba<u8> {
    let (w, h) = (i64::from(image.width()), i64::from(image.height()));
    let x0 = x.floor() as i64;
    let y0 = y.floor() as i64;

    if x0 - (LANCZOS_RADIUS - 1) < 0
        || x0 + LANCZOS_RADIUS >= w
        || y0 - (LANCZOS_RADIUS - 1) < 0
        || y0 + LANCZOS_RADIUS >= h
    {
        return sample_bilinear(image, x, y);
    }

    let mut sum = [0.0f64; 4];
    let mut weight_sum = 0.0;

    for ky in -(LANCZOS_RADIUS - 1)..=LANCZOS_RADIUS {
        let py = y0 + ky;
        let wy = lanczos3(y - py as f64);
        for kx in -(LANCZOS_RADIUS - 1)..=LANCZOS_RADIUS {
            let px = x0 + kx;
            let weight = lanczos3(x - px as f64) * wy;
            let pixel = image.get_pixel(px as u32, py as u32);
            for (acc, channel) in sum.iter_mut().zip(pixel.0) {
                *acc += f64::from(channel) * weight;
            }
            weight_sum += weight;
        }
    }

    if weight_sum.abs() < f64::EPSILON {
        return sample_bilinear(image, x, y);
    }

    Rgba(sum.map(|v| (v / weight_sum).round().clamp(0.0, 255.0) as u8))
}

fn sample_bilinear(image: &RgbaImage, x: f64, y: f64) -> Rgba<u8> {
    let (w, h) = (image.width(), image.height());
    let max_x = f64::from(w) - 0.5;
    let max_y = f64::from(h) - 0.5;

    if x < -0.5 || y < -0.5 || x >= max_x || y >= max_y {
        return Rgba([0, 0, 0, 0]);
    }

    let x = x.clamp(0.0, f64::from(w - 1));
    let y = y.clamp(0.0, f64::from(h - 1));
    let x0 = x.floor() as u32;
    let y0 = y.floor() as u32;
    let x1 = (x0 + 1).min(w - 1);
    let y1 = (y0 + 1).min(h - 1);
    let fx = x - f64::from(x0);
    let fy = y - f64::from(y0);

    let p00 = image.get_pixel(x0, y0).0;
    let p10 = image.get_pixel(x1, y0).0;
    let p01 = image.get_pixel(x0, y1).0;
    let p11 = image.get_pixel(x1, y1).0;

    let mut out = [0u8; 4];
    for i in 0..4 {
        let v = f64::from(p00[i]) * (1.0 - fx) * (1.0 - fy)
            + f64::from(p10[i]) * fx * (1.0 - fy)
            + f64::from(p01[i]) * (1.0 - fx) * fy
            + f64::from(p11[i]) * fx * fy;
        out[i] = v.round().clamp(0.0, 255.0) as u8;
    }
    Rgba(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_rs::GenericImageView;

    fn gradient(width: u32, height: u32) -> DynamicImage {
        DynamicImage::ImageRgba8(RgbaImage::from_fn(width, height, |x, y| {
            Rgba([(x * 10) as u8, (y * 10) as u8, 128, 255])
        }))
    }

    #[test]
    fn bounds_for_quarter_turns_swap_dimensions() {
        assert_eq!(compute_rotated_bounds(100, 50, 90.0), (50, 100));
        assert_eq!(compute_rotated_bounds(100, 50, 270.0), (50, 100));
        assert_eq!(compute_rotated_bounds(100, 50, 180.0), (100, 50));
        assert_eq!(compute_rotated_bounds(100, 50, 0.0), (100, 50));
        assert_eq!(compute_rotated_bounds(100, 50, 360.0), (100, 50));
    }

    #[test]
    fn bounds_for_45_degrees_grow_canvas() {
        let (w, h) = compute_rotated_bounds(100, 100, 45.0);
        // 100 * sqrt(2) = 141.42
        assert_eq!((w, h), (141, 141));
    }

    #[test]
    fn zero_degrees_is_identity() {
        let image = gradient(6, 4);
        let rotated = rotate_counter_clockwise(&image, 0);
        assert_eq!(rotated.to_rgba8(), image.to_rgba8());
    }

    #[test]
    fn full_turn_is_identity() {
        let image = gradient(6, 4);
        assert_eq!(
            rotate_counter_clockwise(&image, 720).to_rgba8(),
            image.to_rgba8()
        );
    }

    #[test]
    fn ninety_degrees_moves_top_right_to_top_left() {
        let mut pixels = RgbaImage::new(3, 2);
        pixels.put_pixel(2, 0, Rgba([255, 0, 0, 255]));
        let rotated = rotate_counter_clockwise(&DynamicImage::ImageRgba8(pixels), 90);

        assert_eq!(rotated.dimensions(), (2, 3));
        assert_eq!(rotated.to_rgba8().get_pixel(0, 0), &Rgba([255, 0, 0, 255]));
    }

    #[test]
    fn free_angle_expands_canvas_with_transparent_corners() {
        let image = gradient(20, 20);
        let rotated = rotate_counter_clockwise(&image, 45);
        let (w, h) = rotated.dimensions();

        assert_eq!((w, h), compute_rotated_bounds(20, 20, 45.0));
        let rgba = rotated.to_rgba8();
        assert_eq!(rgba.get_pixel(0, 0)[3], 0);
        assert_eq!(rgba.get_pixel(w / 2, h / 2)[3], 255);
    }

    #[test]
    fn free_angle_resamples_deep_images_in_eight_bit() {
        let deep = DynamicImage::ImageRgba16(image_rs::ImageBuffer::from_pixel(
            8,
            6,
            Rgba([65_535u16, 0, 0, 65_535]),
        ));

        assert!(matches!(
            rotate_counter_clockwise(&deep, 90),
            DynamicImage::ImageRgba16(_)
        ));
        assert!(matches!(
            rotate_counter_clockwise(&deep, 30),
            DynamicImage::ImageRgba8(_)
        ));
    }

    #[test]
    fn lanczos_kernel_is_interpolating() {
        assert!((lanczos3(0.0) - 1.0).abs() < 1e-12);
        assert!(lanczos3(1.0).abs() < 1e-12);
        assert!(lanczos3(2.0).abs() < 1e-12);
        assert_eq!(lanczos3(3.5), 0.0);
    }
}
