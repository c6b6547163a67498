// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! While a dialog is open only the dialog's own messages are handled;
//! menu selections, accelerators and canvas presses aimed at the main
//! window are dropped until it closes.

use super::config::{self, ViewerConfig};
use super::hotkeys::{Action, HotkeyTable};
use super::modal::{Modal, ModalSlot};
use super::Message;
use crate::error::{Error, Result};
use crate::i18n::fluent::I18n;
use crate::media::ImageData;
use crate::ui::about::{self, AboutPanel, APP_VERSION};
use crate::ui::error_dialog::{self, ErrorDialog, Operation};
use crate::ui::menu_bar::{self, Menu};
use crate::ui::photo_canvas;
use crate::ui::prompt::{self, PromptKind};
use crate::viewer::Session;
use iced::keyboard;
use iced::{Size, Task};
use log::{debug, info, warn};
use std::path::{Path, PathBuf};

/// Mutable view over the application state handed to every handler.
pub struct UpdateContext<'a> {
    pub i18n: &'a I18n,
    pub config: &'a ViewerConfig,
    pub hotkeys: &'a HotkeyTable,
    pub session: &'a mut Session,
    pub rendered: &'a mut Option<ImageData>,
    pub open_menu: &'a mut Option<Menu>,
    pub modals: &'a mut ModalSlot,
}

pub fn update(ctx: &mut UpdateContext<'_>, message: Message) -> Task<Message> {
    match message {
        Message::WindowResized(size) => {
            handle_window_resized(ctx, size);
            Task::none()
        }
        Message::OpenFileDialogResult(path) => handle_open_file_dialog_result(ctx, path),
        // A release must always end the drag, whatever opened meanwhile.
        Message::Canvas(photo_canvas::Message::Released) => {
            ctx.session.end_drag();
            Task::none()
        }
        Message::EscapePressed => {
            handle_escape(ctx);
            Task::none()
        }
        Message::Prompt(prompt_message) => {
            handle_prompt_message(ctx, prompt_message);
            Task::none()
        }
        Message::ErrorDialog(error_dialog::Message::Dismiss) => {
            dismiss_if(ctx, |modal| matches!(modal, Modal::Error(_)));
            Task::none()
        }
        Message::About(about::Message::Close) => {
            dismiss_if(ctx, |modal| matches!(modal, Modal::About(_)));
            Task::none()
        }
        owner_input if ctx.modals.is_open() => {
            debug!("Ignoring {owner_input:?} while a dialog is open");
            Task::none()
        }
        Message::MenuBar(menu_message) => match menu_bar::update(menu_message, ctx.open_menu) {
            menu_bar::Event::None => Task::none(),
            menu_bar::Event::Action(action) => perform_action(ctx, action),
        },
        Message::KeyPressed(key, modifiers) => handle_key_pressed(ctx, &key, modifiers),
        Message::Canvas(canvas_message) => {
            handle_canvas_message(ctx, canvas_message);
            Task::none()
        }
    }
}

/// Runs a menu command, whether it came from a click or an accelerator.
pub fn perform_action(ctx: &mut UpdateContext<'_>, action: Action) -> Task<Message> {
    debug!("Action {action:?}");
    match action {
        Action::Open => open_file_dialog(ctx.i18n.tr("open-dialog-title")),
        Action::Quit => {
            info!("Quit requested");
            iced::exit()
        }
        Action::Zoom => {
            ctx.modals
                .open(Modal::Prompt(prompt::State::new(PromptKind::Zoom)));
            Task::none()
        }
        Action::Rotate => {
            ctx.modals
                .open(Modal::Prompt(prompt::State::new(PromptKind::Rotate)));
            Task::none()
        }
        Action::FlipHorizontal => {
            apply(ctx, Operation::Flip, Session::flip_horizontal);
            Task::none()
        }
        Action::FlipVertical => {
            apply(ctx, Operation::Flip, Session::flip_vertical);
            Task::none()
        }
        Action::About => {
            show_about(ctx);
            Task::none()
        }
    }
}

/// Opens the About Panel, or reports why its logo could not be loaded.
pub fn show_about(ctx: &mut UpdateContext<'_>) {
    match AboutPanel::new(APP_VERSION, &ctx.config.logo_path) {
        Ok(panel) => ctx.modals.open(Modal::About(panel)),
        Err(error) => report_error(ctx, Operation::Load, &error),
    }
}

/// Loads `path` into the session. The previous rendering is cleared even
/// when the load fails.
pub fn load_image(ctx: &mut UpdateContext<'_>, path: &Path) {
    info!("Loading {}", path.display());
    let result = ctx.session.load_image(path);
    refresh_rendering(ctx);
    if let Err(error) = result {
        report_error(ctx, Operation::Load, &error);
    }
}

fn open_file_dialog(title: String) -> Task<Message> {
    Task::perform(
        async move {
            rfd::AsyncFileDialog::new()
                .set_title(title)
                .pick_file()
                .await
                .map(|handle| handle.path().to_path_buf())
        },
        Message::OpenFileDialogResult,
    )
}

fn handle_open_file_dialog_result(
    ctx: &mut UpdateContext<'_>,
    path: Option<PathBuf>,
) -> Task<Message> {
    match path {
        Some(path) => load_image(ctx, &path),
        None => debug!("Open dialog cancelled"),
    }
    Task::none()
}

fn handle_window_resized(ctx: &mut UpdateContext<'_>, size: Size) {
    ctx.session.set_viewport(config::canvas_viewport(size));
}

fn handle_escape(ctx: &mut UpdateContext<'_>) {
    if ctx.modals.dismiss().is_none() {
        *ctx.open_menu = None;
    }
}

fn handle_key_pressed(
    ctx: &mut UpdateContext<'_>,
    key: &keyboard::Key,
    modifiers: keyboard::Modifiers,
) -> Task<Message> {
    match ctx.hotkeys.action_for(key, modifiers) {
        Some(action) => {
            *ctx.open_menu = None;
            perform_action(ctx, action)
        }
        None => Task::none(),
    }
}

fn handle_prompt_message(ctx: &mut UpdateContext<'_>, message: prompt::Message) {
    let Some(Modal::Prompt(state)) = ctx.modals.current_mut() else {
        return;
    };

    match state.update(message) {
        prompt::Event::None => {}
        prompt::Event::Cancelled => {
            ctx.modals.dismiss();
        }
        prompt::Event::Zoom(factor) => {
            ctx.modals.dismiss();
            apply(ctx, Operation::Zoom, |session| session.zoom(factor));
        }
        prompt::Event::Rotate(degrees) => {
            ctx.modals.dismiss();
            apply(ctx, Operation::Rotate, |session| session.rotate(degrees));
        }
    }
}

fn handle_canvas_message(ctx: &mut UpdateContext<'_>, message: photo_canvas::Message) {
    match message {
        photo_canvas::Message::Pressed(position) => {
            *ctx.open_menu = None;
            ctx.session.begin_drag(position);
        }
        photo_canvas::Message::Moved(position) => ctx.session.continue_drag(position),
        photo_canvas::Message::Released => ctx.session.end_drag(),
    }
}

fn apply<F>(ctx: &mut UpdateContext<'_>, operation: Operation, op: F)
where
    F: FnOnce(&mut Session) -> Result<()>,
{
    match op(&mut *ctx.session) {
        Ok(()) => refresh_rendering(ctx),
        Err(error) => report_error(ctx, operation, &error),
    }
}

fn refresh_rendering(ctx: &mut UpdateContext<'_>) {
    *ctx.rendered = ctx.session.image().map(ImageData::from_dynamic);
}

fn report_error(ctx: &mut UpdateContext<'_>, operation: Operation, error: &Error) {
    warn!("{operation:?} failed: {error}");
    ctx.modals
        .open(Modal::Error(ErrorDialog::new(operation, error, ctx.i18n)));
}

fn dismiss_if(ctx: &mut UpdateContext<'_>, is_target: impl Fn(&Modal) -> bool) {
    if ctx.modals.current().is_some_and(is_target) {
        ctx.modals.dismiss();
    }
}
