// SPDX-License-Identifier: MPL-2.0
//! Toolkit-independent viewer state: the loaded image, where it sits on the
//! canvas, and the drag in progress.

pub mod drag;
pub mod placement;
pub mod session;

pub use drag::DragState;
pub use placement::CanvasPlacement;
pub use session::Session;
