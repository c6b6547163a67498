// SPDX-License-Identifier: MPL-2.0
//! The viewer session: the single image slot and everything that acts on it.
//!
//! Every mutating operation either replaces the image wholesale and
//! recomputes its placement, or fails and leaves the previous bitmap and
//! placement untouched. Loading is the exception: it clears the slot before
//! decoding the new file. Operations that find no image loaded do nothing.

use super::drag::DragState;
use super::placement::CanvasPlacement;
use crate::error::Result;
use crate::media::{self, transform};
use image_rs::{DynamicImage, GenericImageView};
use iced::{Point, Size};
use log::debug;
use std::path::Path;

/// State owned by the viewer: at most one image and its canvas placement.
#[derive(Debug, Clone)]
pub struct Session {
    image: Option<DynamicImage>,
    placement: Option<CanvasPlacement>,
    drag: DragState,
    viewport: Size<u32>,
    anchor: Point,
}

impl Session {
    /// Creates an empty session that fits new images into `viewport` and
    /// centers them on `anchor`.
    #[must_use]
    pub fn new(viewport: Size<u32>, anchor: Point) -> Self {
        Self {
            image: None,
            placement: None,
            drag: DragState::default(),
            viewport,
            anchor,
        }
    }

    #[must_use]
    pub fn image(&self) -> Option<&DynamicImage> {
        self.image.as_ref()
    }

    #[must_use]
    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }

    #[must_use]
    pub fn placement(&self) -> Option<&CanvasPlacement> {
        self.placement.as_ref()
    }

    #[must_use]
    pub fn viewport(&self) -> Size<u32> {
        self.viewport
    }

    /// Records the window size used as the fit target for the next load.
    pub fn set_viewport(&mut self, viewport: Size<u32>) {
        self.viewport = viewport;
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging
    }

    /// Decodes `path`, shrinks it to the viewport and places it on the
    /// anchor. Any previous image is discarded first, even on failure.
    ///
    /// # Errors
    ///
    /// [`crate::error::Error::NotFound`] if the path does not exist,
    /// [`crate::error::Error::Decode`] if it cannot be decoded.
    pub fn load_image(&mut self, path: &Path) -> Result<()> {
        self.clear();

        let decoded = media::load_image(path)?;
        let fitted = transform::fit_to_viewport(&decoded, self.viewport.width, self.viewport.height);
        debug!(
            "Loaded {}: {:?} fitted to {:?}",
            path.display(),
            decoded.dimensions(),
            fitted.dimensions()
        );

        let (width, height) = fitted.dimensions();
        self.placement = Some(CanvasPlacement::new(self.anchor, width, height));
        self.image = Some(fitted);
        Ok(())
    }

    /// Resamples the image by `factor`.
    ///
    /// # Errors
    ///
    /// [`crate::error::Error::InvalidParameter`] for a factor that does not
    /// yield a usable bitmap.
    pub fn zoom(&mut self, factor: f32) -> Result<()> {
        self.replace_with(|image| transform::scale(image, factor))
    }

    /// Rotates the image counter-clockwise by `degrees`.
    ///
    /// # Errors
    ///
    /// [`crate::error::Error::InvalidParameter`] if the expanded canvas
    /// would be larger than the pixel budget.
    pub fn rotate(&mut self, degrees: u32) -> Result<()> {
        self.replace_with(|image| transform::rotate(image, degrees))
    }

    /// Mirrors the image left to right.
    ///
    /// # Errors
    ///
    /// Never fails; the `Result` keeps every transform on the same
    /// signature.
    pub fn flip_horizontal(&mut self) -> Result<()> {
        self.replace_with(|image| Ok(transform::flip_horizontal(image)))
    }

    /// Mirrors the image top to bottom.
    ///
    /// # Errors
    ///
    /// Never fails; see [`Session::flip_horizontal`].
    pub fn flip_vertical(&mut self) -> Result<()> {
        self.replace_with(|image| Ok(transform::flip_vertical(image)))
    }

    /// Press: remember the cursor and grab the photo if there is one.
    pub fn begin_drag(&mut self, position: Point) {
        self.drag.start(position, self.placement.is_some());
    }

    /// Move: shift the photo by the cursor delta since the last event.
    pub fn continue_drag(&mut self, position: Point) {
        if let Some(delta) = self.drag.advance(position) {
            if let Some(placement) = self.placement.as_mut() {
                placement.translate(delta);
            }
        }
    }

    /// Release: forget the drag.
    pub fn end_drag(&mut self) {
        self.drag.stop();
    }

    fn clear(&mut self) {
        self.image = None;
        self.placement = None;
        self.drag.stop();
    }

    fn replace_with<F>(&mut self, op: F) -> Result<()>
    where
        F: FnOnce(&DynamicImage) -> Result<DynamicImage>,
    {
        let Some(current) = self.image.as_ref() else {
            debug!("No image loaded, ignoring transform");
            return Ok(());
        };

        let next = op(current)?;
        debug!(
            "Transformed image {:?} -> {:?}",
            current.dimensions(),
            next.dimensions()
        );

        let (width, height) = next.dimensions();
        self.placement = Some(match self.placement {
            Some(placement) => placement.resized(width, height),
            None => CanvasPlacement::new(self.anchor, width, height),
        });
        self.image = Some(next);
        Ok(())
    }
}
