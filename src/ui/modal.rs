// SPDX-License-Identifier: MPL-2.0
//! Modal overlay shared by the About Panel, the prompts and error dialogs.
//!
//! The dialog is stacked over the owner view behind an opaque backdrop, so
//! clicks and drags never reach the widgets underneath while it is open.

use crate::ui::design_tokens::{opacity, palette, radius, spacing};
use iced::widget::{center, container, opaque, stack, Container};
use iced::{Border, Color, Element, Length, Theme};

/// Stacks `dialog` centred over `base`.
pub fn overlay<'a, Message: 'a>(
    base: impl Into<Element<'a, Message>>,
    dialog: impl Into<Element<'a, Message>>,
) -> Element<'a, Message> {
    let backdrop = center(opaque(dialog)).style(|_theme: &Theme| container::Style {
        background: Some(
            Color {
                a: opacity::BACKDROP,
                ..palette::BLACK
            }
            .into(),
        ),
        ..container::Style::default()
    });

    stack![base.into(), opaque(backdrop)].into()
}

/// Rounded surface used as the body of every dialog.
pub fn card<'a, Message: 'a>(
    content: impl Into<Element<'a, Message>>,
    width: f32,
) -> Container<'a, Message> {
    Container::new(content)
        .width(Length::Fixed(width))
        .padding(spacing::MD)
        .style(|theme: &Theme| {
            let palette = theme.extended_palette();
            container::Style {
                background: Some(palette.background.base.color.into()),
                text_color: Some(palette.background.base.text),
                border: Border {
                    radius: radius::MD.into(),
                    width: 1.0,
                    color: palette.background.strong.color,
                },
                ..container::Style::default()
            }
        })
}
