// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::{about, error_dialog, menu_bar, photo_canvas, prompt};
use iced::{keyboard, Size};
use std::path::PathBuf;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    MenuBar(menu_bar::Message),
    Canvas(photo_canvas::Message),
    Prompt(prompt::Message),
    ErrorDialog(error_dialog::Message),
    About(about::Message),
    /// A key press not consumed by a focused widget, resolved against the
    /// hotkey table.
    KeyPressed(keyboard::Key, keyboard::Modifiers),
    /// Escape dismisses whatever modal is open.
    EscapePressed,
    /// Result from the open file dialog.
    OpenFileDialogResult(Option<PathBuf>),
    WindowResized(Size),
}

/// Runtime flags passed in from the command line.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `en-US`).
    pub lang: Option<String>,
    /// Optional image path to load right after startup.
    pub file_path: Option<String>,
    /// Optional About Panel logo path.
    pub logo_path: Option<String>,
    /// Log filter level (`error`, `warn`, `info`, `debug`, `trace`).
    pub log_level: Option<String>,
}
