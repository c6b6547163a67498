// SPDX-License-Identifier: MPL-2.0
//! Image decoding and the renderable form of a decoded bitmap.
//!
//! Decoding sniffs the format from the file contents, so any file the user
//! picks is attempted regardless of its extension.

pub mod rotation;
pub mod transform;

use crate::error::{Error, Result};
use iced::widget::image;
use image_rs::{DynamicImage, GenericImageView, ImageReader};
use std::io;
use std::path::Path;

/// A bitmap converted for display on the canvas.
#[derive(Debug, Clone)]
pub struct ImageData {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

impl ImageData {
    /// Copies `dynamic` into an RGBA handle the renderer can upload.
    #[must_use]
    pub fn from_dynamic(dynamic: &DynamicImage) -> Self {
        let (width, height) = dynamic.dimensions();
        let pixels = dynamic.to_rgba8().into_vec();
        Self {
            handle: image::Handle::from_rgba(width, height, pixels),
            width,
            height,
        }
    }
}

/// Decodes the image stored at `path`.
///
/// # Errors
///
/// Returns [`Error::NotFound`] if nothing exists at `path` and
/// [`Error::Decode`] for any read or decode failure.
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<DynamicImage> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(Error::NotFound(path.to_path_buf()));
    }

    let io_error = |err: io::Error| {
        if err.kind() == io::ErrorKind::NotFound {
            Error::NotFound(path.to_path_buf())
        } else {
            err.into()
        }
    };

    let reader = ImageReader::open(path)
        .map_err(io_error)?
        .with_guessed_format()
        .map_err(io_error)?;

    Ok(reader.decode()?)
}
