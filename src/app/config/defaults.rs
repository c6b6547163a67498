// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for the viewer.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Window**: Canvas size and the canvas anchor
//! - **Zoom**: Zoom prompt default and bounds, bitmap size budget
//! - **Rotate**: Rotate prompt default and bounds
//! - **Assets**: About panel logo location

// ==========================================================================
// Window Defaults
// ==========================================================================

/// Default canvas width in logical pixels. The window is as wide.
pub const DEFAULT_CANVAS_WIDTH: u32 = 500;

/// Default canvas height in logical pixels. The window adds the menu bar.
pub const DEFAULT_CANVAS_HEIGHT: u32 = 500;

/// Canvas point where a freshly loaded image is centered.
pub const IMAGE_ANCHOR_X: f32 = 250.0;

/// Canvas point where a freshly loaded image is centered.
pub const IMAGE_ANCHOR_Y: f32 = 250.0;

// ==========================================================================
// Zoom Defaults
// ==========================================================================

/// Value pre-filled in the zoom prompt.
pub const DEFAULT_ZOOM_FACTOR: f32 = 2.0;

/// Smallest factor the zoom prompt accepts.
pub const MIN_ZOOM_FACTOR: f32 = 0.1;

/// Largest bitmap, in pixels, a zoom or a rotation may produce.
pub const MAX_PIXELS: u64 = 64 * 1024 * 1024;

// ==========================================================================
// Rotate Defaults
// ==========================================================================

/// Value pre-filled in the rotate prompt.
pub const DEFAULT_ROTATE_DEGREES: u32 = 90;

/// Smallest angle the rotate prompt accepts.
pub const MIN_ROTATE_DEGREES: u32 = 0;

// ==========================================================================
// Asset Defaults
// ==========================================================================

/// Logo shown in the About panel, relative to the working directory.
pub const DEFAULT_LOGO_PATH: &str = "./logo.png";

/// Edge length of the logo as rendered in the About panel.
pub const LOGO_SIZE: u32 = 72;

// Compile-time validation of default values
const _: () = {
    assert!(IMAGE_ANCHOR_X * 2.0 == DEFAULT_CANVAS_WIDTH as f32);
    assert!(IMAGE_ANCHOR_Y * 2.0 == DEFAULT_CANVAS_HEIGHT as f32);
    assert!(MAX_PIXELS >= (DEFAULT_CANVAS_WIDTH as u64) * (DEFAULT_CANVAS_HEIGHT as u64));
    assert!(MIN_ZOOM_FACTOR > 0.0);
    assert!(DEFAULT_ZOOM_FACTOR >= MIN_ZOOM_FACTOR);
    assert!(DEFAULT_ROTATE_DEGREES >= MIN_ROTATE_DEGREES);
};
