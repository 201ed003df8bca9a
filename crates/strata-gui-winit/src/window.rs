//! WindowControl implementation over a winit window

use strata_gui::WindowControl;
use winit::dpi::LogicalSize;
use winit::window::Window;

/// Implements the core's [`WindowControl`] contract for a winit window
///
/// Borrow one per frame around the live window; resize requests go
/// straight to winit and take effect when the platform applies them.
pub struct WinitWindowControl<'a> {
    window: &'a Window,
}

impl<'a> WinitWindowControl<'a> {
    pub fn new(window: &'a Window) -> Self {
        Self { window }
    }
}

impl WindowControl for WinitWindowControl<'_> {
    fn set_size(&mut self, width: u32, height: u32) {
        // The platform may apply the size asynchronously or not at all;
        // the returned immediate size is not needed here.
        let _ = self.window.request_inner_size(LogicalSize::new(width, height));
    }

    fn is_resizable(&self) -> bool {
        self.window.is_resizable()
    }

    fn set_resizable(&mut self, resizable: bool) {
        self.window.set_resizable(resizable);
    }
}
