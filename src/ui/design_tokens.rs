// SPDX-License-Identifier: MPL-2.0
//! Shared sizes, spacings and colors for the viewer's widgets.
//!
//! Values sit on a 4px grid. Dialog dimensions live in [`sizing`] so the
//! About Panel and the prompts stay the same size on every platform.

use iced::Color;

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const CANVAS_BACKGROUND: Color = Color::from_rgb(0.93, 0.93, 0.93);
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
}

pub mod opacity {
    /// Dim layer drawn between the owner window and an open modal.
    pub const BACKDROP: f32 = 0.45;
}

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
}

pub mod sizing {
    /// Fixed About Panel card.
    pub const ABOUT_WIDTH: f32 = 285.0;
    pub const ABOUT_HEIGHT: f32 = 190.0;

    pub const PROMPT_WIDTH: f32 = 300.0;
    pub const ERROR_WIDTH: f32 = 320.0;
    pub const MENU_WIDTH: f32 = 220.0;
    pub const MENU_TITLE_WIDTH: f32 = 64.0;

    /// The menu bar takes this much of the window above the canvas.
    pub const MENU_BAR_HEIGHT: f32 = 36.0;
}

pub mod typography {
    pub const TITLE_MD: f32 = 20.0;
    pub const TITLE_SM: f32 = 16.0;
    pub const BODY: f32 = 14.0;
    pub const CAPTION: f32 = 12.0;
}

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
}

const _: () = {
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);

    assert!(sizing::MENU_BAR_HEIGHT > typography::BODY + 2.0 * spacing::XXS);

    assert!(opacity::BACKDROP > 0.0 && opacity::BACKDROP < 1.0);

    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);
};
