use strata_gui::{Painter, Point, Rect, WindowControl};

/// A node in the retained widget tree
///
/// Implementors own their rectangular bounds and know how to record their
/// shapes and react to a click. Window side effects (resizing) go through
/// the [`WindowControl`] collaborator passed into `handle_click`, which
/// keeps the tree testable without a live window.
pub trait Widget {
    /// The rectangular bounds of this widget in window coordinates
    fn bounds(&self) -> Rect;

    /// Record this widget's shapes into the painter
    fn draw(&self, painter: &mut Painter);

    /// Handle a click at `position`
    ///
    /// Returns true when this widget consumed the click, which stops
    /// propagation to widgets below it.
    fn handle_click(&mut self, position: Point, window: &mut dyn WindowControl) -> bool;
}
