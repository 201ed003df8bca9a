use strata_gui::{palette, Color};

/// Visual styling shared by the widgets of one [`crate::Ui`]
#[derive(Debug, Clone)]
pub struct ButtonStyle {
    /// Fill color when the widget is neither hot nor active
    pub idle_color: Color,
    /// Fill color while the cursor is over the widget
    pub hover_color: Color,
    /// Fill color while the widget is being pressed
    pub pressed_color: Color,
    /// Label text color
    pub text_color: Color,
    /// Label font size in logical pixels
    pub font_size: f32,
    /// Inset of the button label from the top-left corner of its bounds
    pub label_inset: f32,
}

impl Default for ButtonStyle {
    fn default() -> Self {
        Self {
            idle_color: Color::srgba(62, 181, 29, 255),
            hover_color: Color::srgba(152, 252, 124, 255),
            pressed_color: Color::srgba(31, 89, 15, 255),
            text_color: palette::BLACK,
            font_size: 16.0,
            label_inset: 10.0,
        }
    }
}
