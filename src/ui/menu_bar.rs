// SPDX-License-Identifier: MPL-2.0
//! Menu bar with the File, Edit and Help menus.
//!
//! Clicking a menu title toggles its dropdown. Every item names the
//! [`Action`] it triggers and shows its accelerator label, when it has one.

use crate::app::hotkeys::{Action, HotkeyTable};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{radius, sizing, spacing, typography};
use iced::alignment::Vertical;
use iced::widget::{button, container, Column, Container, Row, Space, Text};
use iced::{Border, Element, Length, Theme};

/// Top-level menus, left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Menu {
    File,
    Edit,
    Help,
}

impl Menu {
    pub const ALL: [Menu; 3] = [Menu::File, Menu::Edit, Menu::Help];

    fn title_key(self) -> &'static str {
        match self {
            Menu::File => "menu-file",
            Menu::Edit => "menu-edit",
            Menu::Help => "menu-help",
        }
    }

    /// Items in display order, with their i18n keys.
    #[must_use]
    pub fn items(self) -> &'static [(Action, &'static str)] {
        match self {
            Menu::File => &[
                (Action::Open, "menu-file-open"),
                (Action::Quit, "menu-file-quit"),
            ],
            Menu::Edit => &[
                (Action::Zoom, "menu-edit-zoom"),
                (Action::Rotate, "menu-edit-rotate"),
                (Action::FlipHorizontal, "menu-edit-flip-horizontal"),
                (Action::FlipVertical, "menu-edit-flip-vertical"),
            ],
            Menu::Help => &[(Action::About, "menu-help-about")],
        }
    }
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub hotkeys: &'a HotkeyTable,
    pub open_menu: Option<Menu>,
}

#[derive(Debug, Clone)]
pub enum Message {
    ToggleMenu(Menu),
    Select(Action),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    Action(Action),
}

/// Applies a menu bar message. Selecting an item closes the dropdown.
pub fn update(message: Message, open_menu: &mut Option<Menu>) -> Event {
    match message {
        Message::ToggleMenu(menu) => {
            *open_menu = if *open_menu == Some(menu) {
                None
            } else {
                Some(menu)
            };
            Event::None
        }
        Message::Select(action) => {
            *open_menu = None;
            Event::Action(action)
        }
    }
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let titles = Menu::ALL.iter().fold(
        Row::new().spacing(spacing::XXS).align_y(Vertical::Center),
        |row, menu| {
            let title = button(Text::new(ctx.i18n.tr(menu.title_key())).size(typography::BODY))
                .on_press(Message::ToggleMenu(*menu))
                .width(Length::Fixed(sizing::MENU_TITLE_WIDTH))
                .padding([spacing::XXS, spacing::XS])
                .style(menu_item_style);
            row.push(title)
        },
    );

    Container::new(titles)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::MENU_BAR_HEIGHT))
        .padding(spacing::XXS)
        .style(|theme: &Theme| container::Style {
            background: Some(theme.extended_palette().background.weak.color.into()),
            ..container::Style::default()
        })
        .into()
}

/// The open menu's item list, meant to be stacked over the content below
/// the bar so opening a menu does not shift the canvas.
pub fn dropdown<'a>(ctx: &ViewContext<'a>) -> Option<Element<'a, Message>> {
    let menu = ctx.open_menu?;

    let items = menu
        .items()
        .iter()
        .fold(Column::new().spacing(spacing::XXS), |column, (action, key)| {
            let shortcut = ctx
                .hotkeys
                .accelerator(*action)
                .map(|accelerator| accelerator.label())
                .unwrap_or_default();

            let row = Row::new()
                .spacing(spacing::SM)
                .align_y(Vertical::Center)
                .push(Text::new(ctx.i18n.tr(key)).size(typography::BODY))
                .push(Space::new().width(Length::Fill))
                .push(Text::new(shortcut).size(typography::CAPTION));

            column.push(
                button(row)
                    .on_press(Message::Select(*action))
                    .padding([spacing::XXS, spacing::XS])
                    .width(Length::Fill)
                    .style(menu_item_style),
            )
        });

    // Titles have a fixed width, so the dropdown lines up under its title.
    let index = Menu::ALL
        .iter()
        .position(|candidate| *candidate == menu)
        .unwrap_or(0);
    let offset = spacing::XXS + index as f32 * (sizing::MENU_TITLE_WIDTH + spacing::XXS);

    let dropdown = Container::new(items)
        .width(Length::Fixed(sizing::MENU_WIDTH))
        .padding(spacing::XXS)
        .style(|theme: &Theme| container::Style {
            background: Some(theme.extended_palette().background.weak.color.into()),
            border: Border {
                radius: radius::SM.into(),
                width: 1.0,
                color: theme.extended_palette().background.strong.color,
            },
            ..container::Style::default()
        });

    Some(
        Row::new()
            .push(Space::new().width(Length::Fixed(offset)))
            .push(dropdown)
            .into(),
    )
}

fn menu_item_style(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();

    match status {
        button::Status::Active | button::Status::Disabled => button::Style {
            background: None,
            text_color: palette.background.base.text,
            border: Border::default(),
            ..Default::default()
        },
        button::Status::Hovered => button::Style {
            background: Some(palette.background.strong.color.into()),
            text_color: palette.background.base.text,
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            ..Default::default()
        },
        button::Status::Pressed => button::Style {
            background: Some(palette.primary.strong.color.into()),
            text_color: palette.primary.strong.text,
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            ..Default::default()
        },
    }
}
