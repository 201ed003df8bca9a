//! Window-side collaborator contract
//!
//! Widgets that resize the window or toggle its resizable flag go through
//! this trait rather than a concrete windowing library. Adapter crates
//! implement it over a real window; [`HeadlessWindow`] implements it
//! in-memory for tests and headless runs.

/// Operations widgets may request from the host window
pub trait WindowControl {
    /// Request a resize to an explicit size in logical pixels.
    ///
    /// The request is direct and unqueued; the host may ignore it (for
    /// example when the window is not resizable).
    fn set_size(&mut self, width: u32, height: u32);

    /// Whether the window currently allows resizing
    fn is_resizable(&self) -> bool;

    /// Allow or forbid window resizing
    fn set_resizable(&mut self, resizable: bool);
}

/// In-memory [`WindowControl`] implementation
///
/// Applies resize requests immediately and keeps a history of them, which
/// interaction tests use to observe widget side effects.
#[derive(Debug, Clone)]
pub struct HeadlessWindow {
    size: (u32, u32),
    resizable: bool,
    sizes_requested: Vec<(u32, u32)>,
}

impl HeadlessWindow {
    /// Create a headless window with an initial size, resizable
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            size: (width, height),
            resizable: true,
            sizes_requested: Vec::new(),
        }
    }

    /// Current window size
    pub fn size(&self) -> (u32, u32) {
        self.size
    }

    /// Every size requested through [`WindowControl::set_size`], in order
    pub fn sizes_requested(&self) -> &[(u32, u32)] {
        &self.sizes_requested
    }
}

impl WindowControl for HeadlessWindow {
    fn set_size(&mut self, width: u32, height: u32) {
        self.sizes_requested.push((width, height));
        self.size = (width, height);
    }

    fn is_resizable(&self) -> bool {
        self.resizable
    }

    fn set_resizable(&mut self, resizable: bool) {
        self.resizable = resizable;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headless_window_resize() {
        let mut window = HeadlessWindow::new(800, 600);
        assert_eq!(window.size(), (800, 600));
        assert!(window.is_resizable());

        window.set_size(1280, 720);
        assert_eq!(window.size(), (1280, 720));
        assert_eq!(window.sizes_requested(), &[(1280, 720)]);
    }

    #[test]
    fn test_resizable_flag() {
        let mut window = HeadlessWindow::new(800, 600);
        window.set_resizable(false);
        assert!(!window.is_resizable());
    }
}
