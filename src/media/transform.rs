// SPDX-License-Identifier: MPL-2.0
//! Image transformation functions for fit, zoom, rotate and flip.
//!
//! Every function returns a new image; the input is never modified.

use crate::app::config::MAX_PIXELS;
use crate::error::{Error, Result};
use crate::media::rotation;
use image_rs::{imageops::FilterType, DynamicImage, GenericImageView};

/// Shrinks `image` to fit inside `max_width` x `max_height`, keeping its
/// aspect ratio. Images that already fit are returned unchanged; nothing is
/// ever enlarged.
///
/// If both dimensions would still exceed the box afterwards, the width is
/// forced to `max_width` and the height follows the original aspect ratio.
#[must_use]
pub fn fit_to_viewport(image: &DynamicImage, max_width: u32, max_height: u32) -> DynamicImage {
    let (width, height) = image.dimensions();
    let max_width = max_width.max(1);
    let max_height = max_height.max(1);

    let mut fitted = match thumbnail_size(width, height, max_width, max_height) {
        Some((w, h)) => image.resize_exact(w, h, FilterType::CatmullRom),
        None => image.clone(),
    };

    if fitted.width() > max_width && fitted.height() > max_height {
        let forced_height =
            ((f64::from(max_width) * f64::from(height) / f64::from(width)).round() as u32).max(1);
        fitted = fitted.resize_exact(max_width, forced_height, FilterType::CatmullRom);
    }

    fitted
}

/// Target size for shrinking `width` x `height` into the given box, or
/// `None` when the image already fits.
///
/// The free dimension is rounded to whichever neighbour integer keeps the
/// aspect ratio closest to the original.
pub fn thumbnail_size(width: u32, height: u32, max_width: u32, max_height: u32) -> Option<(u32, u32)> {
    if max_width >= width && max_height >= height {
        return None;
    }

    let aspect = f64::from(width) / f64::from(height);
    let box_w = f64::from(max_width);
    let box_h = f64::from(max_height);

    if box_w / box_h >= aspect {
        let w = round_aspect(box_h * aspect, |n| (aspect - n / box_h).abs());
        Some((w, max_height))
    } else {
        let h = round_aspect(box_w / aspect, |n| {
            if n == 0.0 {
                0.0
            } else {
                (aspect - box_w / n).abs()
            }
        });
        Some((max_width, h))
    }
}

fn round_aspect(value: f64, error: impl Fn(f64) -> f64) -> u32 {
    let floor = value.floor();
    let ceil = value.ceil();
    let best = if error(ceil) < error(floor) { ceil } else { floor };
    (best as u32).max(1)
}

/// Dimensions produced by zooming `width` x `height` by `factor`.
///
/// # Errors
///
/// Returns [`Error::InvalidParameter`] if `factor` is not a positive finite
/// number, if either resulting dimension is below 1, or if the result
/// would exceed [`MAX_PIXELS`].
pub fn scaled_dimensions(width: u32, height: u32, factor: f32) -> Result<(u32, u32)> {
    if !factor.is_finite() || factor <= 0.0 {
        return Err(Error::InvalidParameter(format!(
            "scale factor must be a positive number, got {factor}"
        )));
    }

    let scale = |value: u32| (f64::from(value) * f64::from(factor)).round();
    let (new_width, new_height) = (scale(width), scale(height));

    if new_width < 1.0 || new_height < 1.0 {
        return Err(Error::InvalidParameter(format!(
            "scaling {width}x{height} by {factor} gives an empty image"
        )));
    }
    if new_width * new_height > MAX_PIXELS as f64 {
        return Err(Error::InvalidParameter(format!(
            "scaling {width}x{height} by {factor} exceeds {MAX_PIXELS} pixels"
        )));
    }

    Ok((new_width as u32, new_height as u32))
}

/// Checks a bitmap size against [`MAX_PIXELS`] before it is allocated.
///
/// # Errors
///
/// Returns [`Error::InvalidParameter`] when `width * height` is over budget.
pub fn ensure_within_budget(width: u32, height: u32) -> Result<()> {
    if u64::from(width) * u64::from(height) > MAX_PIXELS {
        return Err(Error::InvalidParameter(format!(
            "a {width}x{height} image exceeds {MAX_PIXELS} pixels"
        )));
    }
    Ok(())
}

/// Resamples `image` by `factor` with a Lanczos3 filter.
///
/// # Errors
///
/// See [`scaled_dimensions`].
pub fn scale(image: &DynamicImage, factor: f32) -> Result<DynamicImage> {
    let (width, height) = image.dimensions();
    let (new_width, new_height) = scaled_dimensions(width, height, factor)?;
    Ok(image.resize_exact(new_width, new_height, FilterType::Lanczos3))
}

/// Rotates `image` counter-clockwise by `degrees`, expanding the canvas.
///
/// # Errors
///
/// Returns [`Error::InvalidParameter`] if the expanded canvas would exceed
/// [`MAX_PIXELS`]; nothing is allocated in that case.
pub fn rotate(image: &DynamicImage, degrees: u32) -> Result<DynamicImage> {
    let (width, height) = image.dimensions();
    let (new_width, new_height) =
        rotation::compute_rotated_bounds(width, height, f64::from(degrees));
    ensure_within_budget(new_width, new_height)?;
    Ok(rotation::rotate_counter_clockwise(image, degrees))
}

/// Flip an image horizontally (mirror left-to-right).
#[must_use]
pub fn flip_horizontal(image: &DynamicImage) -> DynamicImage {
    image.fliph()
}

/// Flip an image vertically (mirror top-to-bottom).
#[must_use]
pub fn flip_vertical(image: &DynamicImage) -> DynamicImage {
    image.flipv()
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_rs::{Rgba, RgbaImage};

    fn create_test_image(width: u32, height: u32) -> DynamicImage {
        DynamicImage::ImageRgba8(RgbaImage::from_fn(width, height, |x, y| {
            Rgba([(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8, 255])
        }))
    }

    #[test]
    fn thumbnail_size_none_when_image_fits() {
        assert_eq!(thumbnail_size(400, 300, 500, 500), None);
        assert_eq!(thumbnail_size(500, 500, 500, 500), None);
    }

    #[test]
    fn thumbnail_size_preserves_aspect_ratio() {
        assert_eq!(thumbnail_size(1000, 800, 500, 500), Some((500, 400)));
        assert_eq!(thumbnail_size(800, 1000, 500, 500), Some((400, 500)));
        assert_eq!(thumbnail_size(400, 800, 500, 500), Some((250, 500)));
    }

    #[test]
    fn thumbnail_size_never_collapses_to_zero() {
        assert_eq!(thumbnail_size(10_000, 1, 500, 500), Some((500, 1)));
    }

    #[test]
    fn fit_to_viewport_shrinks_large_image() {
        let fitted = fit_to_viewport(&create_test_image(1000, 800), 500, 500);
        assert_eq!(fitted.dimensions(), (500, 400));
    }

    #[test]
    fn fit_to_viewport_never_enlarges() {
        let fitted = fit_to_viewport(&create_test_image(120, 80), 500, 500);
        assert_eq!(fitted.dimensions(), (120, 80));
    }

    #[test]
    fn fit_to_viewport_handles_one_oversized_side() {
        let fitted = fit_to_viewport(&create_test_image(300, 900), 500, 450);
        assert_eq!(fitted.dimensions(), (150, 450));
    }

    #[test]
    fn scaled_dimensions_round_to_nearest() {
        assert_eq!(scaled_dimensions(500, 400, 0.5), Ok((250, 200)));
        assert_eq!(scaled_dimensions(3, 3, 0.5), Ok((2, 2)));
        assert_eq!(scaled_dimensions(10, 7, 2.0), Ok((20, 14)));
    }

    #[test]
    fn scaled_dimensions_reject_non_positive_factor() {
        assert!(matches!(
            scaled_dimensions(10, 10, 0.0),
            Err(Error::InvalidParameter(_))
        ));
        assert!(matches!(
            scaled_dimensions(10, 10, -1.5),
            Err(Error::InvalidParameter(_))
        ));
        assert!(matches!(
            scaled_dimensions(10, 10, f32::NAN),
            Err(Error::InvalidParameter(_))
        ));
    }

    #[test]
    fn scaled_dimensions_reject_empty_result() {
        assert!(matches!(
            scaled_dimensions(4, 1, 0.1),
            Err(Error::InvalidParameter(_))
        ));
    }

    #[test]
    fn scaled_dimensions_reject_oversized_result() {
        // Repeated 2x zooms of a fitted image hit the budget long before
        // either side reaches an absurd length.
        assert!(scaled_dimensions(500, 400, 16.0).is_ok());
        assert!(matches!(
            scaled_dimensions(500, 400, 32.0),
            Err(Error::InvalidParameter(_))
        ));
        assert!(matches!(
            scaled_dimensions(500, 400, 65.0),
            Err(Error::InvalidParameter(_))
        ));
    }

    #[test]
    fn budget_counts_pixels_not_sides() {
        assert!(ensure_within_budget(8192, 8192).is_ok());
        assert!(ensure_within_budget(8193, 8192).is_err());
        assert!(ensure_within_budget(1, u32::MAX).is_err());
    }

    #[test]
    fn scale_produces_rounded_dimensions() {
        let scaled = scale(&create_test_image(101, 51), 0.5).expect("scale");
        assert_eq!(scaled.dimensions(), (51, 26));
    }

    #[test]
    fn flip_horizontal_is_an_involution() {
        let image = create_test_image(9, 4);
        let twice = flip_horizontal(&flip_horizontal(&image));
        assert_eq!(twice.to_rgba8(), image.to_rgba8());
    }

    #[test]
    fn flip_vertical_is_an_involution() {
        let image = create_test_image(9, 4);
        let twice = flip_vertical(&flip_vertical(&image));
        assert_eq!(twice.to_rgba8(), image.to_rgba8());
    }

    #[test]
    fn flip_horizontal_mirrors_columns() {
        let image = create_test_image(5, 2);
        let flipped = flip_horizontal(&image).to_rgba8();
        let original = image.to_rgba8();
        assert_eq!(flipped.get_pixel(0, 1), original.get_pixel(4, 1));
    }

    #[test]
    fn rotate_zero_keeps_dimensions() {
        let image = create_test_image(30, 20);
        assert_eq!(rotate(&image, 0).map(|r| r.dimensions()), Ok((30, 20)));
    }
}
