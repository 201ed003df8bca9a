use crate::color::Color;

/// A 2D point in screen space
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    /// Create a new point
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Create a point at the origin (0, 0)
    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }
}

impl From<[f32; 2]> for Point {
    fn from(arr: [f32; 2]) -> Self {
        Self {
            x: arr[0],
            y: arr[1],
        }
    }
}

impl From<Point> for [f32; 2] {
    fn from(point: Point) -> Self {
        [point.x, point.y]
    }
}

/// Axis-aligned rectangle defined by min and max corners
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub min: [f32; 2],
    pub max: [f32; 2],
}

impl Rect {
    pub const fn new(min: [f32; 2], max: [f32; 2]) -> Self {
        Self { min, max }
    }

    pub fn from_min_size(min: [f32; 2], size: [f32; 2]) -> Self {
        Self {
            min,
            max: [min[0] + size[0], min[1] + size[1]],
        }
    }

    pub fn width(&self) -> f32 {
        self.max[0] - self.min[0]
    }

    pub fn height(&self) -> f32 {
        self.max[1] - self.min[1]
    }

    /// Check if a point is inside this rectangle.
    ///
    /// Min edges are inclusive, max edges exclusive, so a zero-size or
    /// inverted rect contains no points.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.min[0]
            && point.x < self.max[0]
            && point.y >= self.min[1]
            && point.y < self.max[1]
    }

    /// Convert min corner to Point
    pub fn min_point(&self) -> Point {
        Point::new(self.min[0], self.min[1])
    }

    /// Convert max corner to Point
    pub fn max_point(&self) -> Point {
        Point::new(self.max[0], self.max[1])
    }
}

/// Rectangle filled with a solid color
#[derive(Clone, Debug, PartialEq)]
pub struct FilledRect {
    pub rect: Rect,
    pub fill: Color,
}

/// Text run for rendering at a fixed position
#[derive(Clone, Debug, PartialEq)]
pub struct TextShape {
    /// Top-left corner of the text
    pub position: Point,
    /// The text content to render
    pub text: String,
    /// Font size in logical pixels
    pub font_size: f32,
    /// Text color
    pub color: Color,
}

/// Shapes that can be recorded for rendering
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    Rect(FilledRect),
    Text(TextShape),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_from_min_size() {
        let rect = Rect::from_min_size([10.0, 10.0], [80.0, 40.0]);
        assert_eq!(rect.max, [90.0, 50.0]);
        assert_eq!(rect.width(), 80.0);
        assert_eq!(rect.height(), 40.0);
    }

    #[test]
    fn test_rect_contains() {
        let rect = Rect::from_min_size([10.0, 10.0], [80.0, 40.0]);

        assert!(rect.contains(Point::new(20.0, 20.0)));
        assert!(rect.contains(Point::new(10.0, 10.0)));
        assert!(!rect.contains(Point::new(90.0, 50.0)));
        assert!(!rect.contains(Point::new(200.0, 200.0)));
        assert!(!rect.contains(Point::new(9.9, 20.0)));
    }

    #[test]
    fn test_degenerate_rect_contains_nothing() {
        let empty = Rect::from_min_size([10.0, 10.0], [0.0, 0.0]);
        assert!(!empty.contains(Point::new(10.0, 10.0)));

        let inverted = Rect::new([50.0, 50.0], [10.0, 10.0]);
        assert!(!inverted.contains(Point::new(30.0, 30.0)));
    }
}
