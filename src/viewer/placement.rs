// SPDX-License-Identifier: MPL-2.0
//! On-screen placement of the photo item on the canvas.

use iced::{Point, Rectangle, Size, Vector};

/// Where the photo sits on the canvas and the scroll region derived from it.
///
/// The scroll region is the item's bounding box at the moment the bitmap
/// was last replaced; dragging moves the item without touching it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasPlacement {
    center: Point,
    size: Size,
    scroll_region: Rectangle,
}

impl CanvasPlacement {
    /// Places a `width` x `height` item centered on `center`.
    #[must_use]
    pub fn new(center: Point, width: u32, height: u32) -> Self {
        let size = Size::new(width as f32, height as f32);
        Self {
            center,
            size,
            scroll_region: bounding_box(center, size),
        }
    }

    /// Same center, new item size, scroll region recomputed.
    #[must_use]
    pub fn resized(&self, width: u32, height: u32) -> Self {
        Self::new(self.center, width, height)
    }

    /// Moves the item by `delta`.
    pub fn translate(&mut self, delta: Vector) {
        self.center = self.center + delta;
    }

    #[must_use]
    pub fn center(&self) -> Point {
        self.center
    }

    #[must_use]
    pub fn size(&self) -> Size {
        self.size
    }

    /// Current bounding box of the item.
    #[must_use]
    pub fn bounds(&self) -> Rectangle {
        bounding_box(self.center, self.size)
    }

    #[must_use]
    pub fn scroll_region(&self) -> Rectangle {
        self.scroll_region
    }
}

fn bounding_box(center: Point, size: Size) -> Rectangle {
    Rectangle::new(
        Point::new(center.x - size.width / 2.0, center.y - size.height / 2.0),
        size,
    )
}
