// SPDX-License-Identifier: MPL-2.0
//! Canvas that draws the photo at its placement and reports drags.
//!
//! Coordinates are canvas-local: the placement centre and the reported
//! cursor positions share the same origin, the canvas' top-left corner.

use crate::media::ImageData;
use crate::ui::design_tokens::palette;
use crate::viewer::CanvasPlacement;
use iced::widget::canvas::{self, Frame, Geometry};
use iced::widget::Action;
use iced::{mouse, Point, Rectangle, Renderer, Theme};

/// Mouse gestures forwarded to the viewer session.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    Pressed(Point),
    Moved(Point),
    Released,
}

/// Canvas program borrowing the current rendering.
pub struct PhotoCanvas<'a> {
    pub image: Option<&'a ImageData>,
    pub placement: Option<CanvasPlacement>,
}

/// Per-widget state kept by iced between events.
#[derive(Debug, Default)]
pub struct State {
    pressed: bool,
}

impl PhotoCanvas<'_> {
    /// Translates a raw event into a drag message, updating `state`.
    fn drag_message(
        state: &mut State,
        event: &iced::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<Message> {
        match event {
            iced::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                let position = cursor.position_in(bounds)?;
                state.pressed = true;
                Some(Message::Pressed(position))
            }
            iced::Event::Mouse(mouse::Event::CursorMoved { .. }) if state.pressed => {
                // Keep following the cursor outside the canvas until release.
                cursor
                    .position_from(bounds.position())
                    .map(Message::Moved)
            }
            iced::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left))
                if state.pressed =>
            {
                state.pressed = false;
                Some(Message::Released)
            }
            _ => None,
        }
    }
}

impl canvas::Program<Message> for PhotoCanvas<'_> {
    type State = State;

    fn update(
        &self,
        state: &mut Self::State,
        event: &iced::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<Action<Message>> {
        Self::drag_message(state, event, bounds, cursor)
            .map(|message| Action::publish(message).and_capture())
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        frame.fill_rectangle(Point::ORIGIN, bounds.size(), palette::CANVAS_BACKGROUND);

        if let (Some(image), Some(placement)) = (self.image, self.placement) {
            frame.draw_image(placement.bounds(), canvas::Image::new(image.handle.clone()));
        }

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        let Some(placement) = self.placement else {
            return mouse::Interaction::default();
        };

        if state.pressed {
            mouse::Interaction::Grabbing
        } else if cursor
            .position_in(bounds)
            .is_some_and(|position| placement.bounds().contains(position))
        {
            mouse::Interaction::Grab
        } else {
            mouse::Interaction::default()
        }
    }
}
