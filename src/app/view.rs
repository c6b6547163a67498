// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The main window is the menu bar above the photo canvas. An open dropdown
//! floats over the canvas; an open dialog covers everything.

use super::hotkeys::HotkeyTable;
use super::modal::Modal;
use super::Message;
use crate::i18n::fluent::I18n;
use crate::media::ImageData;
use crate::ui::menu_bar::{self, Menu};
use crate::ui::photo_canvas::PhotoCanvas;
use crate::ui::modal;
use crate::viewer::CanvasPlacement;
use iced::widget::{Canvas, Column, Stack};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub hotkeys: &'a HotkeyTable,
    pub rendered: Option<&'a ImageData>,
    pub placement: Option<CanvasPlacement>,
    pub open_menu: Option<Menu>,
    pub modal: Option<&'a Modal>,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let menu_ctx = menu_bar::ViewContext {
        i18n: ctx.i18n,
        hotkeys: ctx.hotkeys,
        open_menu: ctx.open_menu,
    };

    let canvas: Element<'_, Message> = Element::from(
        Canvas::new(PhotoCanvas {
            image: ctx.rendered,
            placement: ctx.placement,
        })
        .width(Length::Fill)
        .height(Length::Fill),
    )
    .map(Message::Canvas);

    let mut body = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(canvas);
    if let Some(dropdown) = menu_bar::dropdown(&menu_ctx) {
        body = body.push(dropdown.map(Message::MenuBar));
    }

    let main = Column::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(menu_bar::view(menu_ctx).map(Message::MenuBar))
        .push(body);

    match ctx.modal {
        None => main.into(),
        Some(dialog) => modal::overlay(main, view_modal(dialog, ctx.i18n)),
    }
}

fn view_modal<'a>(dialog: &'a Modal, i18n: &'a I18n) -> Element<'a, Message> {
    match dialog {
        Modal::About(panel) => panel.view(i18n).map(Message::About),
        Modal::Prompt(state) => state.view(i18n).map(Message::Prompt),
        Modal::Error(error) => error.view(i18n).map(Message::ErrorDialog),
    }
}
