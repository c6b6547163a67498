// SPDX-License-Identifier: MPL-2.0
//! About Panel: logo, application name, version and copyright.
//!
//! The panel is a fixed-size card shown modally over the main window. Its
//! only state is the decoded logo, loaded once when the panel is built.

use crate::app::config::LOGO_SIZE;
use crate::error::Result;
use crate::i18n::fluent::I18n;
use crate::media::{self, ImageData};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::modal;
use iced::alignment::Horizontal;
use iced::widget::{button, image, Column, Text};
use iced::{Element, Length};
use image_rs::imageops::FilterType;
use std::path::Path;

/// Application version from Cargo.toml.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Clone)]
pub enum Message {
    Close,
}

#[derive(Debug, Clone)]
pub struct AboutPanel {
    logo: ImageData,
    version: String,
}

impl AboutPanel {
    /// Builds the panel, decoding the logo at `logo_path`.
    ///
    /// # Errors
    ///
    /// Fails like any other image load when the logo is missing or cannot
    /// be decoded.
    pub fn new(version: impl Into<String>, logo_path: &Path) -> Result<Self> {
        let logo = media::load_image(logo_path)?.resize(LOGO_SIZE, LOGO_SIZE, FilterType::Lanczos3);

        Ok(Self {
            logo: ImageData::from_dynamic(&logo),
            version: version.into(),
        })
    }

    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    #[must_use]
    pub fn logo(&self) -> &ImageData {
        &self.logo
    }

    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let logo = image(self.logo.handle.clone())
            .width(Length::Fixed(self.logo.width as f32))
            .height(Length::Fixed(self.logo.height as f32));

        let content = Column::new()
            .spacing(spacing::XXS)
            .align_x(Horizontal::Center)
            .width(Length::Fill)
            .push(logo)
            .push(Text::new(i18n.tr("about-app-name")).size(typography::TITLE_MD))
            .push(
                Text::new(i18n.tr_with_args("about-version", &[("version", &self.version)]))
                    .size(typography::BODY),
            )
            .push(Text::new(i18n.tr("about-copyright")).size(typography::CAPTION))
            .push(
                button(Text::new(i18n.tr("about-close-button")).size(typography::CAPTION))
                    .on_press(Message::Close)
                    .padding([spacing::XXS, spacing::XS]),
            );

        modal::card(content, sizing::ABOUT_WIDTH)
            .height(Length::Fixed(sizing::ABOUT_HEIGHT))
            .padding(spacing::XS)
            .into()
    }
}
