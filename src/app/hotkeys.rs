// SPDX-License-Identifier: MPL-2.0
//! Keyboard accelerators for the menu commands.
//!
//! The table is an explicit `action -> accelerator` mapping built once at
//! startup for the running platform. macOS uses the Command key, every
//! other platform uses Control.

use iced::keyboard::{self, Modifiers};

/// User commands reachable from the menu bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Open,
    Quit,
    Zoom,
    Rotate,
    FlipHorizontal,
    FlipVertical,
    About,
}

/// Platform families with distinct accelerator modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    MacOs,
    Other,
}

impl Platform {
    #[must_use]
    pub fn current() -> Self {
        if cfg!(target_os = "macos") {
            Platform::MacOs
        } else {
            Platform::Other
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modifier {
    Command,
    Control,
}

/// A modifier plus a letter key. Letters match regardless of Shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Accelerator {
    pub modifier: Modifier,
    pub key: char,
}

impl Accelerator {
    /// Text shown next to the menu entry, e.g. `Ctrl+O`.
    #[must_use]
    pub fn label(&self) -> String {
        let modifier = match self.modifier {
            Modifier::Command => "Cmd",
            Modifier::Control => "Ctrl",
        };
        format!("{modifier}+{}", self.key.to_ascii_uppercase())
    }

    #[must_use]
    pub fn matches(&self, key: &keyboard::Key, modifiers: Modifiers) -> bool {
        let modifier_held = match self.modifier {
            Modifier::Command => modifiers.logo(),
            Modifier::Control => modifiers.control(),
        };
        if !modifier_held || modifiers.alt() {
            return false;
        }

        match key {
            keyboard::Key::Character(c) => {
                let mut chars = c.as_str().chars();
                matches!(
                    (chars.next(), chars.next()),
                    (Some(pressed), None) if pressed.eq_ignore_ascii_case(&self.key)
                )
            }
            _ => false,
        }
    }
}

/// Fixed, ordered accelerator table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HotkeyTable {
    entries: Vec<(Action, Accelerator)>,
}

impl HotkeyTable {
    #[must_use]
    pub fn for_platform(platform: Platform) -> Self {
        let modifier = match platform {
            Platform::MacOs => Modifier::Command,
            Platform::Other => Modifier::Control,
        };
        let bind = |action, key| (action, Accelerator { modifier, key });

        Self {
            entries: vec![
                bind(Action::Open, 'o'),
                bind(Action::Quit, 'q'),
                bind(Action::Zoom, 'z'),
                bind(Action::Rotate, 'r'),
                bind(Action::About, 'a'),
            ],
        }
    }

    /// Accelerator bound to `action`, if any. Flips have none.
    #[must_use]
    pub fn accelerator(&self, action: Action) -> Option<Accelerator> {
        self.entries
            .iter()
            .find(|(bound, _)| *bound == action)
            .map(|(_, accelerator)| *accelerator)
    }

    /// Action triggered by a key press, if any.
    #[must_use]
    pub fn action_for(&self, key: &keyboard::Key, modifiers: Modifiers) -> Option<Action> {
        self.entries
            .iter()
            .find(|(_, accelerator)| accelerator.matches(key, modifiers))
            .map(|(action, _)| *action)
    }

    pub fn iter(&self) -> impl Iterator<Item = &(Action, Accelerator)> {
        self.entries.iter()
    }
}

impl Default for HotkeyTable {
    fn default() -> Self {
        Self::for_platform(Platform::current())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn char_key(c: &str) -> keyboard::Key {
        keyboard::Key::Character(c.into())
    }

    #[test]
    fn table_uses_control_off_macos() {
        let table = HotkeyTable::for_platform(Platform::Other);
        let open = table.accelerator(Action::Open).expect("open is bound");
        assert_eq!(open.modifier, Modifier::Control);
        assert_eq!(open.label(), "Ctrl+O");
    }

    #[test]
    fn table_uses_command_on_macos() {
        let table = HotkeyTable::for_platform(Platform::MacOs);
        let quit = table.accelerator(Action::Quit).expect("quit is bound");
        assert_eq!(quit.label(), "Cmd+Q");
    }

    #[test]
    fn flips_have_no_accelerator() {
        let table = HotkeyTable::for_platform(Platform::Other);
        assert!(table.accelerator(Action::FlipHorizontal).is_none());
        assert!(table.accelerator(Action::FlipVertical).is_none());
    }

    #[test]
    fn table_order_is_fixed() {
        let table = HotkeyTable::for_platform(Platform::Other);
        let actions: Vec<Action> = table.iter().map(|(action, _)| *action).collect();
        assert_eq!(
            actions,
            vec![
                Action::Open,
                Action::Quit,
                Action::Zoom,
                Action::Rotate,
                Action::About
            ]
        );
    }

    #[test]
    fn key_press_resolves_action_case_insensitively() {
        let table = HotkeyTable::for_platform(Platform::Other);
        assert_eq!(
            table.action_for(&char_key("z"), Modifiers::CTRL),
            Some(Action::Zoom)
        );
        assert_eq!(
            table.action_for(&char_key("R"), Modifiers::CTRL | Modifiers::SHIFT),
            Some(Action::Rotate)
        );
    }

    #[test]
    fn key_press_requires_platform_modifier() {
        let table = HotkeyTable::for_platform(Platform::Other);
        assert_eq!(table.action_for(&char_key("o"), Modifiers::empty()), None);
        assert_eq!(table.action_for(&char_key("o"), Modifiers::LOGO), None);
        assert_eq!(
            table.action_for(&char_key("o"), Modifiers::CTRL | Modifiers::ALT),
            None
        );

        let mac = HotkeyTable::for_platform(Platform::MacOs);
        assert_eq!(
            mac.action_for(&char_key("o"), Modifiers::LOGO),
            Some(Action::Open)
        );
        assert_eq!(mac.action_for(&char_key("o"), Modifiers::CTRL), None);
    }

    #[test]
    fn unbound_keys_resolve_to_nothing() {
        let table = HotkeyTable::for_platform(Platform::Other);
        assert_eq!(table.action_for(&char_key("x"), Modifiers::CTRL), None);
        assert_eq!(
            table.action_for(
                &keyboard::Key::Named(keyboard::key::Named::Enter),
                Modifiers::CTRL
            ),
            None
        );
    }
}
