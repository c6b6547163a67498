// SPDX-License-Identifier: MPL-2.0
//! Error kinds produced by image loading and transforms.
//!
//! Errors never leave the operation that raised them: the application
//! boundary turns them into a localized error dialog.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The chosen or loaded path does not exist on disk.
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The bytes could not be parsed or processed as an image.
    #[error("{0}")]
    Decode(String),

    /// A user-supplied value produced a degenerate result.
    #[error("{0}")]
    InvalidParameter(String),
}

impl Error {
    /// Returns the i18n message key used to display this error.
    ///
    /// `NotFound` has a fixed message; the other kinds are shown through
    /// an operation-specific key that embeds the error text.
    pub fn i18n_key(&self) -> Option<&'static str> {
        match self {
            Error::NotFound(_) => Some("error-not-found"),
            Error::Decode(_) | Error::InvalidParameter(_) => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Decode(err.to_string())
    }
}

/// Every failure surfaced by the decoder counts as a decode error, whatever
/// its `image` category.
impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        Error::Decode(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_not_found() {
        let err = Error::NotFound(PathBuf::from("missing.png"));
        assert_eq!(format!("{}", err), "File not found: missing.png");
    }

    #[test]
    fn decode_and_parameter_display_raw_message() {
        assert_eq!(Error::Decode("bad header".into()).to_string(), "bad header");
        assert_eq!(
            Error::InvalidParameter("width is zero".into()).to_string(),
            "width is zero"
        );
    }

    #[test]
    fn from_io_error_produces_decode_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Decode(message) => assert!(message.contains("boom")),
            _ => panic!("expected Decode variant"),
        }
    }

    #[test]
    fn from_image_error_produces_decode_variant() {
        use image_rs::error::{LimitError, LimitErrorKind};

        let image_error =
            image_rs::ImageError::Limits(LimitError::from_kind(LimitErrorKind::DimensionError));
        assert!(matches!(Error::from(image_error), Error::Decode(_)));
    }

    #[test]
    fn only_not_found_has_fixed_key() {
        assert_eq!(
            Error::NotFound(PathBuf::new()).i18n_key(),
            Some("error-not-found")
        );
        assert_eq!(Error::Decode(String::new()).i18n_key(), None);
        assert_eq!(Error::InvalidParameter(String::new()).i18n_key(), None);
    }
}
