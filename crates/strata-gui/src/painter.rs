//! Frame draw recording
//!
//! Widgets do not rasterize anything themselves. They record an ordered
//! list of [`Shape`]s into a [`Painter`]; a rendering backend consumes the
//! recorded list after the frame's widgets have run. Recording order is
//! draw order, so repeated recording of unchanged widget state yields an
//! identical shape sequence.

use crate::color::Color;
use crate::primitives::{FilledRect, Point, Rect, Shape, TextShape};

/// Records the shapes produced by one frame of widget evaluation
#[derive(Debug, Default)]
pub struct Painter {
    shapes: Vec<Shape>,
}

impl Painter {
    /// Create an empty painter
    pub fn new() -> Self {
        Self { shapes: Vec::new() }
    }

    /// Record a filled rectangle
    pub fn fill_rect(&mut self, rect: Rect, fill: Color) {
        self.shapes.push(Shape::Rect(FilledRect { rect, fill }));
    }

    /// Record a text run at a position
    pub fn text(
        &mut self,
        text: impl Into<String>,
        position: Point,
        font_size: f32,
        color: Color,
    ) {
        self.shapes.push(Shape::Text(TextShape {
            position,
            text: text.into(),
            font_size,
            color,
        }));
    }

    /// Discard all recorded shapes, ready for the next frame
    pub fn clear(&mut self) {
        self.shapes.clear();
    }

    /// The shapes recorded so far this frame, in draw order
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Take ownership of the recorded shapes, leaving the painter empty
    pub fn take_shapes(&mut self) -> Vec<Shape> {
        std::mem::take(&mut self.shapes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette;

    #[test]
    fn test_recording_order() {
        let mut painter = Painter::new();
        let rect = Rect::from_min_size([10.0, 10.0], [80.0, 40.0]);

        painter.fill_rect(rect, palette::GRAY);
        painter.text("800x600", rect.min_point(), 14.0, palette::BLACK);

        let shapes = painter.shapes();
        assert_eq!(shapes.len(), 2);
        assert!(matches!(shapes[0], Shape::Rect(_)));
        assert!(matches!(shapes[1], Shape::Text(_)));
    }

    #[test]
    fn test_clear_and_take() {
        let mut painter = Painter::new();
        painter.fill_rect(Rect::default(), palette::GRAY);

        let taken = painter.take_shapes();
        assert_eq!(taken.len(), 1);
        assert!(painter.shapes().is_empty());

        painter.fill_rect(Rect::default(), palette::GRAY);
        painter.clear();
        assert!(painter.shapes().is_empty());
    }
}
