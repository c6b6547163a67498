// SPDX-License-Identifier: MPL-2.0
//! The application's single modal slot.
//!
//! At most one dialog is shown at a time. A dialog raised while another is
//! visible waits its turn and appears once the current one is dismissed;
//! this only happens at startup, when the About Panel and a failed initial
//! load can both ask for the screen.

use crate::ui::about::AboutPanel;
use crate::ui::error_dialog::ErrorDialog;
use crate::ui::prompt;
use std::collections::VecDeque;

#[derive(Debug, Clone)]
pub enum Modal {
    About(AboutPanel),
    Prompt(prompt::State),
    Error(ErrorDialog),
}

#[derive(Debug, Default)]
pub struct ModalSlot {
    queue: VecDeque<Modal>,
}

impl ModalSlot {
    #[must_use]
    pub fn is_open(&self) -> bool {
        !self.queue.is_empty()
    }

    #[must_use]
    pub fn current(&self) -> Option<&Modal> {
        self.queue.front()
    }

    pub fn current_mut(&mut self) -> Option<&mut Modal> {
        self.queue.front_mut()
    }

    pub fn open(&mut self, modal: Modal) {
        self.queue.push_back(modal);
    }

    /// Closes the visible dialog, revealing the next one if any.
    pub fn dismiss(&mut self) -> Option<Modal> {
        self.queue.pop_front()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::i18n::fluent::I18n;
    use crate::ui::error_dialog::Operation;
    use crate::ui::prompt::PromptKind;

    fn error_modal() -> Modal {
        let i18n = I18n::default();
        Modal::Error(ErrorDialog::new(
            Operation::Load,
            &Error::Decode("bad".into()),
            &i18n,
        ))
    }

    #[test]
    fn empty_slot_is_closed() {
        let slot = ModalSlot::default();
        assert!(!slot.is_open());
        assert!(slot.current().is_none());
    }

    #[test]
    fn dialogs_are_shown_one_at_a_time_in_order() {
        let mut slot = ModalSlot::default();
        slot.open(Modal::Prompt(prompt::State::new(PromptKind::Zoom)));
        slot.open(error_modal());

        assert!(matches!(slot.current(), Some(Modal::Prompt(_))));
        slot.dismiss();
        assert!(matches!(slot.current(), Some(Modal::Error(_))));
        slot.dismiss();
        assert!(!slot.is_open());
        assert!(slot.dismiss().is_none());
    }
}
