//! Canvas geometry: keeping labels inside the drawing area.

use kurbo::{Point, Rect, Size};

/// The canvas dimensions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasBounds {
    pub width: f64,
    pub height: f64,
}

impl Default for CanvasBounds {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
        }
    }
}

impl CanvasBounds {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }

    /// Clamp a label origin so a label of `size` stays on the canvas:
    /// `0 <= x <= width - w`, `0 <= y <= height - h`.
    ///
    /// A label larger than the canvas pins to 0 on that axis.
    pub fn clamp_position(&self, origin: Point, size: Size) -> Point {
        let max_x = self.width - size.width;
        let max_y = self.height - size.height;
        let clamped = Point::new(
            origin.x.min(max_x).max(0.0),
            origin.y.min(max_y).max(0.0),
        );
        if clamped != origin {
            log::trace!("clamped {origin:?} -> {clamped:?}");
        }
        clamped
    }

    /// Where a label lands when dropped with the pointer at `pointer`
    /// (canvas-relative): centred on the pointer, then clamped.
    pub fn drop_position(&self, pointer: Point, size: Size) -> Point {
        let origin = Point::new(
            pointer.x - size.width / 2.0,
            pointer.y - size.height / 2.0,
        );
        self.clamp_position(origin, size)
    }
}
