//! Retained mode demo
//!
//! The widget tree is built once before the frame loop; each frame only
//! dispatches the latest click and re-records the tree's shapes. The
//! lock-screen toggle below the tree is an immediate-mode label rather
//! than a tree node, since retained labels consume clicks without side
//! effects.

use strata_gui::Rect;
use strata_gui_retained::{Button, Container, Label, Ui};
use strata_gui_winit::{run, App, EventLoopError, FrameContext};

struct RetainedDemo {
    ui: Ui,
    overlay: strata_gui_immediate::Ui,
    screen_locked: bool,
    lock_label: String,
}

impl RetainedDemo {
    fn new() -> Self {
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
        root.add_child(Button::new(
            "1366x768",
            Rect::from_min_size([300.0, 10.0], [80.0, 40.0]),
            (1366, 768),
        ));
        root.add_child(Label::new(
            "Resolution",
            Rect::from_min_size([10.0, 20.0], [100.0, 40.0]),
        ));

        Self {
            ui: Ui::new(root),
            overlay: strata_gui_immediate::Ui::new(),
            screen_locked: false,
            lock_label: "[ ] Lock Screen".to_string(),
        }
    }
}

impl App for RetainedDemo {
    fn window_title() -> &'static str {
        "Retained Mode"
    }

    fn frame(&mut self, ctx: &mut FrameContext<'_>) {
        self.ui.update(ctx.input, ctx.window);
        self.ui.draw(ctx.painter);

        let lock_bounds = Rect::from_min_size([10.0, 60.0], [120.0, 30.0]);
        if self
            .overlay
            .label(0, &self.lock_label, lock_bounds, ctx.input, ctx.painter)
        {
            self.screen_locked = !self.screen_locked;
            ctx.window.set_resizable(!self.screen_locked);
            self.lock_label = if self.screen_locked {
                "[X] Lock Screen"
            } else {
                "[ ] Lock Screen"
            }
            .to_string();
        }
    }
}

fn main() -> Result<(), EventLoopError> {
    env_logger::init();
    run(RetainedDemo::new())
}
