use strata_gui::{palette, Color, Painter, Point, Rect, WindowControl};

use crate::widget::Widget;

/// Visual styling for a retained [`Label`]
#[derive(Debug, Clone)]
pub struct LabelStyle {
    /// Text color
    pub text_color: Color,
    /// Font size in logical pixels
    pub font_size: f32,
}

impl Default for LabelStyle {
    fn default() -> Self {
        Self {
            text_color: palette::BLACK,
            font_size: 14.0,
        }
    }
}

/// A leaf widget that draws text and carries a checkbox-style flag
///
/// Clicks inside the bounds are consumed but have no further effect; the
/// `checked` flag is host-driven and currently inert.
pub struct Label {
    bounds: Rect,
    text: String,
    checked: bool,
    style: LabelStyle,
}

impl Label {
    /// Create a label with the given text, unchecked
    pub fn new(text: impl Into<String>, bounds: Rect) -> Self {
        Self {
            bounds,
            text: text.into(),
            checked: false,
            style: LabelStyle::default(),
        }
    }

    /// Set a custom style for the label
    pub fn with_style(mut self, style: LabelStyle) -> Self {
        self.style = style;
        self
    }

    /// The label's text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the label's text
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Whether the checkbox-style flag is set
    pub fn is_checked(&self) -> bool {
        self.checked
    }

    /// Flip the checkbox-style flag
    pub fn toggle(&mut self) {
        self.checked = !self.checked;
    }
}

impl Widget for Label {
    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn draw(&self, painter: &mut Painter) {
        painter.text(
            self.text.clone(),
            self.bounds.min_point(),
            self.style.font_size,
            self.style.text_color,
        );
    }

    fn handle_click(&mut self, position: Point, _window: &mut dyn WindowControl) -> bool {
        self.bounds.contains(position)
    }
}
