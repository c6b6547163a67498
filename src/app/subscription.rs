// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Routes native keyboard and window events into top-level messages. Mouse
//! input reaches the canvas through its own widget events instead.

use super::Message;
use iced::keyboard::{self, key::Named};
use iced::{event, window, Event, Subscription};

/// Keyboard accelerators, Escape and window resizes.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(route_event)
}

fn route_event(event: Event, status: event::Status, _window: window::Id) -> Option<Message> {
    match event {
        Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized(size)),
        // Escape closes dialogs even while their text field has focus.
        Event::Keyboard(keyboard::Event::KeyPressed {
            key: keyboard::Key::Named(Named::Escape),
            ..
        }) => Some(Message::EscapePressed),
        Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => match status {
            event::Status::Ignored => Some(Message::KeyPressed(key, modifiers)),
            event::Status::Captured => None,
        },
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::Size;

    #[test]
    fn resize_is_forwarded() {
        let message = route_event(
            Event::Window(window::Event::Resized(Size::new(640.0, 480.0))),
            event::Status::Ignored,
            window::Id::unique(),
        );
        assert!(
            matches!(message, Some(Message::WindowResized(size)) if size == Size::new(640.0, 480.0))
        );
    }

    #[test]
    fn other_window_events_are_dropped() {
        let message = route_event(
            Event::Window(window::Event::Focused),
            event::Status::Ignored,
            window::Id::unique(),
        );
        assert!(message.is_none());
    }
}
