use log::trace;
use strata_gui::{InputState, MouseButton, Painter, WindowControl};

use crate::container::Container;
use crate::widget::Widget;

/// Wraps the root container and drives it once per frame
pub struct Ui {
    root: Container,
}

impl Ui {
    /// Wrap a fully built root container
    pub fn new(root: Container) -> Self {
        Self { root }
    }

    /// The root container
    pub fn root(&self) -> &Container {
        &self.root
    }

    /// Mutable access to the root container
    pub fn root_mut(&mut self) -> &mut Container {
        &mut self.root
    }

    /// Dispatch this frame's input to the tree
    ///
    /// When the left mouse button was released this frame, the cursor
    /// position is offered to the root container's `handle_click`.
    /// Returns whether any widget consumed the click.
    pub fn update(&mut self, input: &InputState, window: &mut dyn WindowControl) -> bool {
        if input.is_button_just_released(MouseButton::Left) {
            if let Some(cursor) = input.cursor_position {
                let handled = self.root.handle_click(cursor, window);
                trace!("click at ({}, {}) handled: {handled}", cursor.x, cursor.y);
                return handled;
            }
        }
        false
    }

    /// Record the whole tree's shapes in draw order
    pub fn draw(&self, painter: &mut Painter) {
        self.root.draw(painter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Button, Label};
    use strata_gui::{HeadlessWindow, Point, Rect};

    fn demo_tree() -> Ui {
        let mut root = Container::new(Rect::from_min_size([10.0, 10.0], [600.0, 500.0]));
        root.add_child(Button::new(
            "800x600",
            Rect::from_min_size([120.0, 10.0], [80.0, 40.0]),
            (800, 600),
        ));
        root.add_child(Button::new(
            "1280x720",
            Rect::from_min_size([210.0, 10.0], [80.0, 40.0]),
            (1280, 720),
        ));
        root.add_child(Label::new(
            "Resolution",
            Rect::from_min_size([10.0, 20.0], [100.0, 40.0]),
        ));
        Ui::new(root)
    }

    fn release_at(x: f32, y: f32) -> InputState {
        let mut input = InputState::new();
        input.set_cursor_position(Some(Point::new(x, y)));
        input.press_button(MouseButton::Left);
        input.begin_frame();
        input.release_button(MouseButton::Left);
        input
    }

    #[test]
    fn click_resizes_through_window_control() {
        let mut ui = demo_tree();
        let mut window = HeadlessWindow::new(800, 600);

        assert!(ui.update(&release_at(250.0, 30.0), &mut window));
        assert_eq!(window.size(), (1280, 720));
    }

    #[test]
    fn click_outside_every_widget_is_unhandled() {
        let mut ui = demo_tree();
        let mut window = HeadlessWindow::new(800, 600);

        assert!(!ui.update(&release_at(500.0, 400.0), &mut window));
        assert!(window.sizes_requested().is_empty());
    }

    #[test]
    fn update_only_dispatches_on_release() {
        let mut ui = demo_tree();
        let mut window = HeadlessWindow::new(800, 600);

        // Held but not released this frame
        let mut input = InputState::new();
        input.set_cursor_position(Some(Point::new(250.0, 30.0)));
        input.press_button(MouseButton::Left);
        input.begin_frame();

        assert!(!ui.update(&input, &mut window));
        assert!(window.sizes_requested().is_empty());
    }

    /// Overlapping buttons: the later-added (topmost) one consumes the
    /// click and the traversal short-circuits before the one below.
    #[test]
    fn topmost_overlapping_button_wins() {
        let overlap = Rect::from_min_size([50.0, 50.0], [80.0, 40.0]);
        let mut root = Container::new(Rect::from_min_size([0.0, 0.0], [600.0, 500.0]));
        root.add_child(Button::new("below", overlap, (800, 600)));
        root.add_child(Button::new("above", overlap, (1366, 768)));
        let mut ui = Ui::new(root);
        let mut window = HeadlessWindow::new(800, 600);

        assert!(ui.update(&release_at(60.0, 60.0), &mut window));
        assert_eq!(window.sizes_requested(), &[(1366, 768)]);
    }

    #[test]
    fn label_consumes_click_without_side_effect() {
        let mut root = Container::new(Rect::from_min_size([0.0, 0.0], [600.0, 500.0]));
        root.add_child(Label::new(
            "Resolution",
            Rect::from_min_size([10.0, 20.0], [100.0, 40.0]),
        ));
        let mut ui = Ui::new(root);
        let mut window = HeadlessWindow::new(800, 600);

        assert!(ui.update(&release_at(20.0, 30.0), &mut window));
        assert!(window.sizes_requested().is_empty());
    }

    #[test]
    fn draw_is_idempotent() {
        let ui = demo_tree();

        let mut first = Painter::new();
        let mut second = Painter::new();
        ui.draw(&mut first);
        ui.draw(&mut second);

        assert!(!first.shapes().is_empty());
        assert_eq!(first.shapes(), second.shapes());
    }

    #[test]
    fn draw_follows_insertion_order() {
        let ui = demo_tree();
        let mut painter = Painter::new();
        ui.draw(&mut painter);

        // Two buttons (rect + text each) then the caption label
        let texts: Vec<&str> = painter
            .shapes()
            .iter()
            .filter_map(|s| match s {
                strata_gui::Shape::Text(t) => Some(t.text.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(texts, ["800x600", "1280x720", "Resolution"]);
    }

    #[test]
    fn label_toggle_flag_is_inert() {
        let mut label = Label::new("Lock Screen", Rect::from_min_size([0.0, 0.0], [80.0, 20.0]));
        assert!(!label.is_checked());
        label.toggle();
        assert!(label.is_checked());

        // Clicking does not flip the flag by itself
        let mut window = HeadlessWindow::new(800, 600);
        assert!(label.handle_click(Point::new(5.0, 5.0), &mut window));
        assert!(label.is_checked());
    }
}
