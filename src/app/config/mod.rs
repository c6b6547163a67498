// SPDX-License-Identifier: MPL-2.0
//! Startup configuration for the viewer.
//!
//! The viewer reads no configuration file and no environment variable.
//! Everything it can be told comes from the command line (see [`Flags`])
//! and is resolved here against the compiled [`defaults`].

pub mod defaults;

pub use defaults::*;

use super::Flags;
use crate::ui::design_tokens::sizing;
use iced::{Point, Size};
use std::path::PathBuf;

/// Resolved settings used while building the application state.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewerConfig {
    /// Initial canvas size, also used as the first fit target.
    pub canvas_size: Size<u32>,
    /// Canvas point a freshly loaded image is centered on.
    pub anchor: Point,
    /// Logo file for the About panel.
    pub logo_path: PathBuf,
    /// Image to open right after startup.
    pub initial_file: Option<PathBuf>,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            canvas_size: Size::new(DEFAULT_CANVAS_WIDTH, DEFAULT_CANVAS_HEIGHT),
            anchor: Point::new(IMAGE_ANCHOR_X, IMAGE_ANCHOR_Y),
            logo_path: PathBuf::from(DEFAULT_LOGO_PATH),
            initial_file: None,
        }
    }
}

impl ViewerConfig {
    /// Applies command line overrides on top of the defaults.
    #[must_use]
    pub fn from_flags(flags: &Flags) -> Self {
        let mut config = Self::default();
        if let Some(logo) = &flags.logo_path {
            config.logo_path = PathBuf::from(logo);
        }
        config.initial_file = flags.file_path.as_ref().map(PathBuf::from);
        config
    }

    /// Inner window size that leaves exactly `canvas_size` below the menu bar.
    #[must_use]
    pub fn window_size(&self) -> Size {
        Size::new(
            self.canvas_size.width as f32,
            self.canvas_size.height as f32 + sizing::MENU_BAR_HEIGHT,
        )
    }
}

/// Canvas area left in a window of inner size `window` once the menu bar
/// is taken out. Never smaller than 1x1.
#[must_use]
pub fn canvas_viewport(window: Size) -> Size<u32> {
    Size::new(
        window.width.round().max(1.0) as u32,
        (window.height - sizing::MENU_BAR_HEIGHT).round().max(1.0) as u32,
    )
}
