//! Winit input adapter for strata-gui
//!
//! This module provides conversion from winit events to strata-gui's
//! backend-agnostic input types.

use strata_gui::{InputState, MouseButton, Point};
use winit::event::{ElementState, WindowEvent};

/// Extension trait for InputState to handle winit events
pub trait WinitInputExt {
    /// Process a winit WindowEvent and update internal state
    ///
    /// This should be called for each WindowEvent received from winit.
    fn handle_winit_event(&mut self, event: &WindowEvent);
}

impl WinitInputExt for InputState {
    fn handle_winit_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                self.set_cursor_position(Some(Point {
                    x: position.x as f32,
                    y: position.y as f32,
                }));
            }
            WindowEvent::CursorLeft { .. } => {
                self.set_cursor_position(None);
            }
            WindowEvent::MouseInput { state, button, .. } => {
                let btn = convert_mouse_button(*button);
                match state {
                    ElementState::Pressed => {
                        self.press_button(btn);
                    }
                    ElementState::Released => {
                        self.release_button(btn);
                    }
                }
            }
            _ => {
                // Ignore other events
            }
        }
    }
}

/// Convert winit MouseButton to strata-gui MouseButton
pub fn convert_mouse_button(button: winit::event::MouseButton) -> MouseButton {
    match button {
        winit::event::MouseButton::Left => MouseButton::Left,
        winit::event::MouseButton::Right => MouseButton::Right,
        winit::event::MouseButton::Middle => MouseButton::Middle,
        winit::event::MouseButton::Back => MouseButton::Other(3),
        winit::event::MouseButton::Forward => MouseButton::Other(4),
        winit::event::MouseButton::Other(n) => MouseButton::Other(n as u8),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mouse_button_conversion() {
        assert_eq!(
            convert_mouse_button(winit::event::MouseButton::Left),
            MouseButton::Left
        );
        assert_eq!(
            convert_mouse_button(winit::event::MouseButton::Back),
            MouseButton::Other(3)
        );
    }
}
