// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the menu, the canvas
//! and the dialogs.
//!
//! The `App` struct owns the viewer session and the single modal slot, and
//! translates messages into session operations. Failures are turned into
//! error dialogs here and nowhere else.

pub mod config;
pub mod hotkeys;
mod message;
pub mod modal;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::i18n::fluent::I18n;
use crate::media::ImageData;
use crate::ui::menu_bar::Menu;
use crate::viewer::Session;
use config::ViewerConfig;
use hotkeys::HotkeyTable;
use iced::{window, Element, Subscription, Task, Theme};
use log::info;
use modal::{Modal, ModalSlot};
use std::fmt;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    config: ViewerConfig,
    hotkeys: HotkeyTable,
    session: Session,
    /// GPU-ready copy of the session image, refreshed after every change.
    rendered: Option<ImageData>,
    open_menu: Option<Menu>,
    modals: ModalSlot,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("has_image", &self.session.has_image())
            .field("open_menu", &self.open_menu)
            .field("modal", &self.modals.current())
            .finish()
    }
}

/// Builds the main window settings.
pub fn window_settings(config: &ViewerConfig) -> window::Settings {
    window::Settings {
        size: config.window_size(),
        resizable: true,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    let settings = window_settings(&ViewerConfig::from_flags(&flags));

    // iced 0.14 requires the boot closure to be Fn; flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(settings)
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Builds the initial state, shows the About Panel once and loads the
    /// file named on the command line, if any.
    pub fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = ViewerConfig::from_flags(&flags);
        let i18n = I18n::new(flags.lang);
        info!("Starting with locale {}", i18n.current_locale());

        let mut app = App {
            i18n,
            session: Session::new(config.canvas_size, config.anchor),
            hotkeys: HotkeyTable::default(),
            rendered: None,
            open_menu: None,
            modals: ModalSlot::default(),
            config,
        };

        let mut ctx = app.update_context();
        update::show_about(&mut ctx);
        if let Some(path) = ctx.config.initial_file.clone() {
            update::load_image(&mut ctx, &path);
        }

        (app, Task::none())
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription()
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = self.update_context();
        update::update(&mut ctx, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            hotkeys: &self.hotkeys,
            rendered: self.rendered.as_ref(),
            placement: self.session.placement().copied(),
            open_menu: self.open_menu,
            modal: self.modals.current(),
        })
    }

    /// The viewer session, for inspection.
    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// The dialog currently shown, if any.
    #[must_use]
    pub fn modal(&self) -> Option<&Modal> {
        self.modals.current()
    }

    #[must_use]
    pub fn rendered(&self) -> Option<&ImageData> {
        self.rendered.as_ref()
    }

    fn update_context(&mut self) -> update::UpdateContext<'_> {
        update::UpdateContext {
            i18n: &self.i18n,
            config: &self.config,
            hotkeys: &self.hotkeys,
            session: &mut self.session,
            rendered: &mut self.rendered,
            open_menu: &mut self.open_menu,
            modals: &mut self.modals,
        }
    }
}
