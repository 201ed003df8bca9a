//! Backend-agnostic input state tracking for mouse events
//!
//! This module provides a structure to track mouse state across frames,
//! independent of any specific windowing library (winit, SDL, etc.).

use crate::Point;
use std::collections::HashSet;

/// Backend-agnostic mouse button representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Left mouse button
    Left,
    /// Right mouse button
    Right,
    /// Middle mouse button (scroll wheel click)
    Middle,
    /// Additional mouse buttons (back, forward, etc.)
    Other(u8),
}

/// Tracks the current state of mouse input
///
/// This structure maintains both the current state and frame-specific events
/// (just pressed/just released) to enable easy input handling in the UI.
///
/// This is backend-agnostic - windowing libraries should convert their
/// events to update this structure.
#[derive(Debug, Clone)]
pub struct InputState {
    /// Current cursor position in window coordinates, if known
    pub cursor_position: Option<Point>,

    /// Set of mouse buttons currently held down
    pub buttons_pressed: HashSet<MouseButton>,

    /// Set of mouse buttons that were pressed this frame
    pub buttons_just_pressed: HashSet<MouseButton>,

    /// Set of mouse buttons that were released this frame
    pub buttons_just_released: HashSet<MouseButton>,
}

impl InputState {
    /// Create a new input state with no active input
    pub fn new() -> Self {
        Self {
            cursor_position: None,
            buttons_pressed: HashSet::new(),
            buttons_just_pressed: HashSet::new(),
            buttons_just_released: HashSet::new(),
        }
    }

    /// Call at the start of each frame to clear frame-specific state
    ///
    /// This clears the "just pressed" and "just released" sets so they only
    /// contain events from the current frame.
    pub fn begin_frame(&mut self) {
        self.buttons_just_pressed.clear();
        self.buttons_just_released.clear();
    }

    /// Record a mouse button press
    pub fn press_button(&mut self, button: MouseButton) {
        self.buttons_pressed.insert(button);
        self.buttons_just_pressed.insert(button);
    }

    /// Record a mouse button release
    pub fn release_button(&mut self, button: MouseButton) {
        self.buttons_pressed.remove(&button);
        self.buttons_just_released.insert(button);
    }

    /// Update cursor position
    pub fn set_cursor_position(&mut self, position: Option<Point>) {
        self.cursor_position = position;
    }

    /// Check if a mouse button is currently held down
    pub fn is_button_down(&self, button: MouseButton) -> bool {
        self.buttons_pressed.contains(&button)
    }

    /// Check if a mouse button was pressed this frame
    pub fn is_button_just_pressed(&self, button: MouseButton) -> bool {
        self.buttons_just_pressed.contains(&button)
    }

    /// Check if a mouse button was released this frame
    pub fn is_button_just_released(&self, button: MouseButton) -> bool {
        self.buttons_just_released.contains(&button)
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_press_release() {
        let mut input = InputState::new();

        // Press left button
        input.press_button(MouseButton::Left);
        assert!(input.is_button_down(MouseButton::Left));
        assert!(input.is_button_just_pressed(MouseButton::Left));
        assert!(!input.is_button_just_released(MouseButton::Left));

        // New frame
        input.begin_frame();
        assert!(input.is_button_down(MouseButton::Left));
        assert!(!input.is_button_just_pressed(MouseButton::Left));

        // Release
        input.release_button(MouseButton::Left);
        assert!(!input.is_button_down(MouseButton::Left));
        assert!(input.is_button_just_released(MouseButton::Left));
    }

    #[test]
    fn test_cursor_position() {
        let mut input = InputState::new();
        assert!(input.cursor_position.is_none());

        input.set_cursor_position(Some(Point::new(20.0, 20.0)));
        assert_eq!(input.cursor_position, Some(Point::new(20.0, 20.0)));

        // Cursor left the window
        input.set_cursor_position(None);
        assert!(input.cursor_position.is_none());
    }

    #[test]
    fn test_independent_buttons() {
        let mut input = InputState::new();

        input.press_button(MouseButton::Left);
        input.press_button(MouseButton::Right);
        input.begin_frame();
        input.release_button(MouseButton::Right);

        assert!(input.is_button_down(MouseButton::Left));
        assert!(!input.is_button_down(MouseButton::Right));
        assert!(input.is_button_just_released(MouseButton::Right));
        assert!(!input.is_button_just_released(MouseButton::Left));
    }
}
