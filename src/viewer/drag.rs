// SPDX-License-Identifier: MPL-2.0
//! Drag state management
//!
//! Handles press-move-release interaction state for repositioning the photo
//! on the canvas.

use iced::{Point, Vector};

/// Manages click-and-drag state
#[derive(Debug, Clone, Default)]
pub struct DragState {
    /// Whether a drag operation is moving an item
    pub is_dragging: bool,

    /// Cursor position recorded by the last press or move
    pub last_position: Option<Point>,
}

impl DragState {
    /// Starts a drag operation. Without an item under control the position
    /// is still recorded but later moves have no effect.
    pub fn start(&mut self, position: Point, has_item: bool) {
        self.is_dragging = has_item;
        self.last_position = Some(position);
    }

    /// Stops the drag operation
    pub fn stop(&mut self) {
        self.is_dragging = false;
        self.last_position = None;
    }

    /// Returns how far the cursor moved since the last recorded position
    /// and records `current_position` as the new reference.
    #[must_use]
    pub fn advance(&mut self, current_position: Point) -> Option<Vector> {
        if !self.is_dragging {
            return None;
        }

        let last = self.last_position?;
        self.last_position = Some(current_position);

        Some(current_position - last)
    }
}
