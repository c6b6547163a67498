// SPDX-License-Identifier: MPL-2.0
//! `photo_viewer` is a minimal image viewer built with the Iced GUI framework.
//!
//! It opens one image at a time, shrinks it to the window, and lets the
//! user zoom, rotate, flip and drag it around the canvas. The toolkit-free
//! core lives in [`viewer`] and [`media`]; [`app`] and [`ui`] wire it to
//! iced.

pub mod app;
pub mod error;
pub mod i18n;
pub mod media;
pub mod ui;
pub mod viewer;
