// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! exposes a `Message` and a `view`, and reports outcomes to the
//! application instead of touching the viewer session itself.
//!
//! - [`menu_bar`] - File, Edit and Help menus with accelerator labels
//! - [`photo_canvas`] - Draws the photo and turns mouse gestures into drags
//! - [`prompt`] - Numeric input for zoom factor and rotation degrees
//! - [`error_dialog`] - Blocking error notification
//! - [`about`] - The About Panel
//! - [`modal`] - Overlay shared by every dialog
//! - [`design_tokens`] - Spacing, sizing and color constants

pub mod about;
pub mod design_tokens;
pub mod error_dialog;
pub mod menu_bar;
pub mod modal;
pub mod photo_canvas;
pub mod prompt;
