// SPDX-License-Identifier: MPL-2.0
//! Numeric input prompt used by Zoom and Rotate.
//!
//! The prompt starts pre-filled with the operation's default. Submitting a
//! value that does not parse or is below the minimum keeps the prompt open
//! and shows an inline message; only a valid value or Cancel closes it.

use crate::app::config::{
    DEFAULT_ROTATE_DEGREES, DEFAULT_ZOOM_FACTOR, MIN_ROTATE_DEGREES, MIN_ZOOM_FACTOR,
};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::modal;
use iced::alignment::Horizontal;
use iced::widget::{button, text_input, Column, Row, Space, Text};
use iced::{Element, Length};

/// Which value is being asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    /// Floating-point scale factor.
    Zoom,
    /// Whole degrees, counter-clockwise.
    Rotate,
}

/// Why the current input was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputError {
    NotAFloat,
    NotAnInteger,
    BelowMinimum,
}

#[derive(Debug, Clone, PartialEq)]
pub struct State {
    kind: PromptKind,
    input: String,
    error: Option<InputError>,
}

#[derive(Debug, Clone)]
pub enum Message {
    InputChanged(String),
    Submit,
    Cancel,
}

/// Outcome reported to the application.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    Cancelled,
    Zoom(f32),
    Rotate(u32),
}

impl State {
    #[must_use]
    pub fn new(kind: PromptKind) -> Self {
        let input = match kind {
            PromptKind::Zoom => format!("{DEFAULT_ZOOM_FACTOR:.1}"),
            PromptKind::Rotate => DEFAULT_ROTATE_DEGREES.to_string(),
        };
        Self {
            kind,
            input,
            error: None,
        }
    }

    #[must_use]
    pub fn kind(&self) -> PromptKind {
        self.kind
    }

    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    #[must_use]
    pub fn error(&self) -> Option<InputError> {
        self.error
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::InputChanged(value) => {
                self.input = value;
                self.error = None;
                Event::None
            }
            Message::Submit => match self.parse() {
                Ok(event) => event,
                Err(error) => {
                    self.error = Some(error);
                    Event::None
                }
            },
            Message::Cancel => Event::Cancelled,
        }
    }

    fn parse(&self) -> Result<Event, InputError> {
        let raw = self.input.trim();
        match self.kind {
            PromptKind::Zoom => {
                let factor: f32 = raw.parse().map_err(|_| InputError::NotAFloat)?;
                if !factor.is_finite() {
                    return Err(InputError::NotAFloat);
                }
                if factor < MIN_ZOOM_FACTOR {
                    return Err(InputError::BelowMinimum);
                }
                Ok(Event::Zoom(factor))
            }
            PromptKind::Rotate => {
                // Parse signed first so "-5" reads as below minimum, not as garbage.
                let degrees: i64 = raw.parse().map_err(|_| InputError::NotAnInteger)?;
                if degrees < i64::from(MIN_ROTATE_DEGREES) {
                    return Err(InputError::BelowMinimum);
                }
                u32::try_from(degrees)
                    .map(Event::Rotate)
                    .map_err(|_| InputError::NotAnInteger)
            }
        }
    }

    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let (title_key, label_key) = match self.kind {
            PromptKind::Zoom => ("prompt-zoom-title", "prompt-zoom-label"),
            PromptKind::Rotate => ("prompt-rotate-title", "prompt-rotate-label"),
        };

        let input = text_input("", &self.input)
            .on_input(Message::InputChanged)
            .on_submit(Message::Submit)
            .size(typography::BODY)
            .padding(spacing::XS);

        let mut content = Column::new()
            .spacing(spacing::SM)
            .push(Text::new(i18n.tr(title_key)).size(typography::TITLE_SM))
            .push(Text::new(i18n.tr(label_key)).size(typography::BODY))
            .push(input);

        if let Some(error) = self.error {
            content = content.push(
                Text::new(self.error_text(error, i18n))
                    .size(typography::CAPTION)
                    .color(palette::ERROR_500),
            );
        }

        let buttons = Row::new()
            .spacing(spacing::XS)
            .push(Space::new().width(Length::Fill))
            .push(button(Text::new(i18n.tr("prompt-cancel-button"))).on_press(Message::Cancel))
            .push(button(Text::new(i18n.tr("prompt-ok-button"))).on_press(Message::Submit));

        modal::card(
            content.push(buttons).align_x(Horizontal::Left),
            sizing::PROMPT_WIDTH,
        )
        .into()
    }

    fn error_text(&self, error: InputError, i18n: &I18n) -> String {
        match error {
            InputError::NotAFloat => i18n.tr("prompt-invalid-float"),
            InputError::NotAnInteger => i18n.tr("prompt-invalid-integer"),
            InputError::BelowMinimum => {
                let min = match self.kind {
                    PromptKind::Zoom => MIN_ZOOM_FACTOR.to_string(),
                    PromptKind::Rotate => MIN_ROTATE_DEGREES.to_string(),
                };
                i18n.tr_with_args("prompt-below-minimum", &[("min", &min)])
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submit(kind: PromptKind, input: &str) -> (State, Event) {
        let mut state = State::new(kind);
        state.update(Message::InputChanged(input.to_string()));
        let event = state.update(Message::Submit);
        (state, event)
    }

    #[test]
    fn prompts_start_with_defaults() {
        assert_eq!(State::new(PromptKind::Zoom).input(), "2.0");
        assert_eq!(State::new(PromptKind::Rotate).input(), "90");
    }

    #[test]
    fn submitting_defaults_yields_default_values() {
        let mut zoom = State::new(PromptKind::Zoom);
        assert_eq!(zoom.update(Message::Submit), Event::Zoom(2.0));

        let mut rotate = State::new(PromptKind::Rotate);
        assert_eq!(rotate.update(Message::Submit), Event::Rotate(90));
    }

    #[test]
    fn zoom_accepts_minimum_and_trims_whitespace() {
        assert_eq!(submit(PromptKind::Zoom, " 0.1 ").1, Event::Zoom(0.1));
        assert_eq!(submit(PromptKind::Zoom, "3").1, Event::Zoom(3.0));
    }

    #[test]
    fn zoom_rejects_values_below_minimum() {
        let (state, event) = submit(PromptKind::Zoom, "0.05");
        assert_eq!(event, Event::None);
        assert_eq!(state.error(), Some(InputError::BelowMinimum));

        let (state, _) = submit(PromptKind::Zoom, "-1");
        assert_eq!(state.error(), Some(InputError::BelowMinimum));
    }

    #[test]
    fn zoom_rejects_garbage_and_non_finite_values() {
        for input in ["abc", "", "inf", "NaN"] {
            let (state, event) = submit(PromptKind::Zoom, input);
            assert_eq!(event, Event::None, "input {input:?}");
            assert_eq!(state.error(), Some(InputError::NotAFloat), "input {input:?}");
        }
    }

    #[test]
    fn rotate_accepts_zero_and_large_angles() {
        assert_eq!(submit(PromptKind::Rotate, "0").1, Event::Rotate(0));
        assert_eq!(submit(PromptKind::Rotate, "450").1, Event::Rotate(450));
    }

    #[test]
    fn rotate_rejects_negative_and_fractional_input() {
        let (state, _) = submit(PromptKind::Rotate, "-5");
        assert_eq!(state.error(), Some(InputError::BelowMinimum));

        let (state, _) = submit(PromptKind::Rotate, "45.5");
        assert_eq!(state.error(), Some(InputError::NotAnInteger));
    }

    #[test]
    fn editing_clears_the_validation_message() {
        let (mut state, _) = submit(PromptKind::Rotate, "x");
        assert!(state.error().is_some());

        state.update(Message::InputChanged("45".into()));

        assert_eq!(state.error(), None);
        assert_eq!(state.input(), "45");
    }

    #[test]
    fn cancel_reports_cancelled() {
        let mut state = State::new(PromptKind::Zoom);
        assert_eq!(state.update(Message::Cancel), Event::Cancelled);
    }

    #[test]
    fn below_minimum_message_names_the_minimum() {
        let i18n = I18n::new(Some("en-US".to_string()));
        let state = State::new(PromptKind::Zoom);
        let text = state.error_text(InputError::BelowMinimum, &i18n);
        assert!(text.contains("0.1"), "{text}");
    }

    #[test]
    fn prompt_view_renders_with_error() {
        let i18n = I18n::default();
        let (state, _) = submit(PromptKind::Zoom, "nope");
        let _element = state.view(&i18n);
    }
}
