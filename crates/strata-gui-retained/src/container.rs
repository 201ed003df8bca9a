use strata_gui::{Painter, Point, Rect, WindowControl};

use crate::widget::Widget;

/// A widget that owns an ordered list of child widgets
///
/// Insertion order is draw order. The container draws nothing itself, so
/// drawing is a pre-order traversal of the subtree.
pub struct Container {
    bounds: Rect,
    children: Vec<Box<dyn Widget>>,
}

impl Container {
    /// Create an empty container with the given bounds
    pub fn new(bounds: Rect) -> Self {
        Self {
            bounds,
            children: Vec::new(),
        }
    }

    /// Append a child; it will draw above every child added before it
    pub fn add_child(&mut self, child: impl Widget + 'static) {
        self.children.push(Box::new(child));
    }

    /// Number of direct children
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Whether the container has no children
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl Widget for Container {
    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn draw(&self, painter: &mut Painter) {
        for child in &self.children {
            child.draw(painter);
        }
    }

    fn handle_click(&mut self, position: Point, window: &mut dyn WindowControl) -> bool {
        // Later children draw on top, so they get first claim on the
        // click; the first one to consume it stops the traversal.
        for child in self.children.iter_mut().rev() {
            if child.handle_click(position, window) {
                return true;
            }
        }
        false
    }
}
