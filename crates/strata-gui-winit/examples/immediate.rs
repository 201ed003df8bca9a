//! Immediate mode demo
//!
//! Three resolution buttons and a lock-screen label, re-evaluated inline
//! every frame. The buttons resize the window while it is resizable; the
//! label toggles the resizable flag and its own checkbox prefix.

use strata_gui::Rect;
use strata_gui_immediate::Ui;
use strata_gui_winit::{run, App, EventLoopError, FrameContext};

const BUTTON_SIZE: [f32; 2] = [80.0, 40.0];

const RESOLUTIONS: [(&str, (u32, u32)); 3] = [
    ("800x600", (800, 600)),
    ("1280x720", (1280, 720)),
    ("1366x768", (1366, 768)),
];

struct ImmediateDemo {
    ui: Ui,
    screen_locked: bool,
    lock_label: String,
}

impl ImmediateDemo {
    fn new() -> Self {
        Self {
            ui: Ui::with_release_flash_suppression(),
            screen_locked: false,
            lock_label: "[ ] Lock Screen".to_string(),
        }
    }
}

impl App for ImmediateDemo {
    fn window_title() -> &'static str {
        "Immediate Mode"
    }

    fn frame(&mut self, ctx: &mut FrameContext<'_>) {
        for (i, (text, (width, height))) in RESOLUTIONS.iter().enumerate() {
            let bounds = Rect::from_min_size([10.0 + 95.0 * i as f32, 10.0], BUTTON_SIZE);
            if self.ui.button(i as u32, text, bounds, ctx.input, ctx.painter)
                && ctx.window.is_resizable()
            {
                ctx.window.set_size(*width, *height);
            }
        }

        let lock_bounds = Rect::from_min_size([300.0, 10.0], BUTTON_SIZE);
        if self
            .ui
            .label(3, &self.lock_label, lock_bounds, ctx.input, ctx.painter)
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
    run(ImmediateDemo::new())
}
