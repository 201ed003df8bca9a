use log::debug;
use strata_gui::{palette, Color, Painter, Point, Rect, WindowControl};

use crate::widget::Widget;

/// Visual styling for a retained [`Button`]
#[derive(Debug, Clone)]
pub struct ButtonStyle {
    /// Background fill color
    pub fill: Color,
    /// Label text color
    pub text_color: Color,
    /// Label font size in logical pixels
    pub font_size: f32,
}

impl Default for ButtonStyle {
    fn default() -> Self {
        Self {
            fill: palette::GRAY,
            text_color: palette::BLACK,
            font_size: 14.0,
        }
    }
}

/// A leaf widget that resizes the window to a stored target size
pub struct Button {
    bounds: Rect,
    text: String,
    target_size: (u32, u32),
    style: ButtonStyle,
}

impl Button {
    /// Create a button that requests `target_size` when clicked
    pub fn new(text: impl Into<String>, bounds: Rect, target_size: (u32, u32)) -> Self {
        Self {
            bounds,
            text: text.into(),
            target_size,
            style: ButtonStyle::default(),
        }
    }

    /// Set a custom style for the button
    pub fn with_style(mut self, style: ButtonStyle) -> Self {
        self.style = style;
        self
    }

    /// The button's label text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The window size this button requests on click
    pub fn target_size(&self) -> (u32, u32) {
        self.target_size
    }
}

impl Widget for Button {
    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn draw(&self, painter: &mut Painter) {
        painter.fill_rect(self.bounds, self.style.fill);
        painter.text(
            self.text.clone(),
            self.bounds.min_point(),
            self.style.font_size,
            self.style.text_color,
        );
    }

    fn handle_click(&mut self, position: Point, window: &mut dyn WindowControl) -> bool {
        if self.bounds.contains(position) {
            debug!("button {:?} clicked", self.text);
            let (width, height) = self.target_size;
            window.set_size(width, height);
            return true;
        }
        false
    }
}
