// SPDX-License-Identifier: MPL-2.0
//! Blocking error notification shown when an operation fails.

use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::modal;
use iced::widget::{button, Column, Row, Space, Text};
use iced::{Element, Length};

/// The operation that failed. Selects the message prefix shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Load,
    Zoom,
    Rotate,
    Flip,
}

impl Operation {
    fn i18n_key(self) -> &'static str {
        match self {
            Operation::Load => "error-load",
            Operation::Zoom => "error-zoom",
            Operation::Rotate => "error-rotate",
            Operation::Flip => "error-flip",
        }
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    Dismiss,
}

/// A translated error message waiting to be acknowledged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorDialog {
    body: String,
}

impl ErrorDialog {
    /// Translates `error` for display. A missing file gets its own fixed
    /// message; everything else is prefixed by what was being attempted.
    #[must_use]
    pub fn new(operation: Operation, error: &Error, i18n: &I18n) -> Self {
        let body = match error.i18n_key() {
            Some(key) => i18n.tr(key),
            None => {
                let detail = error.to_string();
                i18n.tr_with_args(operation.i18n_key(), &[("error", &detail)])
            }
        };
        Self { body }
    }

    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let dismiss = Row::new()
            .push(Space::new().width(Length::Fill))
            .push(button(Text::new(i18n.tr("error-dismiss-button"))).on_press(Message::Dismiss));

        let content = Column::new()
            .spacing(spacing::SM)
            .push(Text::new(i18n.tr("error-title")).size(typography::TITLE_SM))
            .push(Text::new(&self.body).size(typography::BODY))
            .push(dismiss);

        modal::card(content, sizing::ERROR_WIDTH).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn not_found_uses_fixed_message() {
        let i18n = I18n::default();
        let dialog = ErrorDialog::new(
            Operation::Load,
            &Error::NotFound(PathBuf::from("/nope.png")),
            &i18n,
        );
        assert_eq!(dialog.body(), "无法找到此文件");
    }

    #[test]
    fn other_errors_are_prefixed_by_operation() {
        let i18n = I18n::default();
        let error = Error::Decode("unsupported format".into());

        let load = ErrorDialog::new(Operation::Load, &error, &i18n);
        assert_eq!(load.body(), "加载图片时发生错误: unsupported format");

        let rotate = ErrorDialog::new(Operation::Rotate, &error, &i18n);
        assert_eq!(rotate.body(), "旋转图片时发生错误: unsupported format");

        let flip = ErrorDialog::new(Operation::Flip, &error, &i18n);
        assert_eq!(flip.body(), "翻转图片时发生错误: unsupported format");
    }

    #[test]
    fn invalid_zoom_names_the_zoom_operation() {
        let i18n = I18n::new(Some("en-US".to_string()));
        let dialog = ErrorDialog::new(
            Operation::Zoom,
            &Error::InvalidParameter("zero width".into()),
            &i18n,
        );
        assert!(dialog.body().starts_with("An error occurred while zooming"));
        assert!(dialog.body().ends_with("zero width"));
    }

    #[test]
    fn error_dialog_view_renders() {
        let i18n = I18n::default();
        let dialog = ErrorDialog::new(Operation::Load, &Error::Decode("x".into()), &i18n);
        let _element = dialog.view(&i18n);
    }
}
