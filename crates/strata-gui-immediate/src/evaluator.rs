//! The hot/active widget evaluator
//!
//! Interaction state is keyed by caller-chosen widget ids rather than
//! widget objects. `hot` tracks the widget under the cursor and is
//! recomputed every frame from hit-testing; `active` tracks the widget
//! that owns the current press and survives the cursor leaving its
//! bounds, which is what makes drag-off-and-release cancel a click.

use log::{debug, trace};
use strata_gui::{InputState, MouseButton, Painter, Point, Rect};

use crate::style::ButtonStyle;

/// Caller-chosen widget identifier, unique per frame
pub type WidgetId = u32;

/// Immediate mode interaction state, one instance per application run
///
/// Two construction variants exist and behave differently on the frame a
/// press is released while the cursor is still over the widget:
///
/// - [`Ui::new`] re-records the widget with the hover fill on that frame
///   (a brief full-emphasis flash);
/// - [`Ui::with_release_flash_suppression`] remembers the released widget
///   in `prev_active` and records the idle fill instead until the cursor
///   leaves it.
pub struct Ui {
    hot: Option<WidgetId>,
    active: Option<WidgetId>,
    prev_active: Option<WidgetId>,
    suppress_release_flash: bool,
    style: ButtonStyle,
}

impl Ui {
    /// Create an evaluator without release-flash suppression
    pub fn new() -> Self {
        Self {
            hot: None,
            active: None,
            prev_active: None,
            suppress_release_flash: false,
            style: ButtonStyle::default(),
        }
    }

    /// Create an evaluator that suppresses the hover redraw on release
    pub fn with_release_flash_suppression() -> Self {
        Self {
            suppress_release_flash: true,
            ..Self::new()
        }
    }

    /// Set a custom widget style
    pub fn with_style(mut self, style: ButtonStyle) -> Self {
        self.style = style;
        self
    }

    /// The widget currently under the cursor, if any
    pub fn hot(&self) -> Option<WidgetId> {
        self.hot
    }

    /// The widget currently owning a press, if any
    pub fn active(&self) -> Option<WidgetId> {
        self.active
    }

    /// Evaluate a button for this frame
    ///
    /// Hit-tests the cursor against `bounds`, updates the hot/active
    /// state, records the button's rectangle and label into `painter`,
    /// and returns whether a click completed on this frame. A click
    /// completes only when the press that started on this widget is
    /// released while the cursor is still over it.
    pub fn button(
        &mut self,
        id: WidgetId,
        text: &str,
        bounds: Rect,
        input: &InputState,
        painter: &mut Painter,
    ) -> bool {
        let mut activated = false;

        // The widget owning the press sees the release first, whether or
        // not the cursor is still over it.
        if self.active == Some(id) && input.is_button_just_released(MouseButton::Left) {
            if self.hot == Some(id) {
                activated = true;
                debug!("button {id} ({text:?}) activated");
            }
            if self.suppress_release_flash {
                self.prev_active = self.active;
            }
            self.active = None;
        }

        if self.hot == Some(id) {
            let mut fill = self.style.hover_color;
            if input.is_button_down(MouseButton::Left) {
                if self.active != Some(id) {
                    trace!("button {id} became active");
                }
                self.active = Some(id);
                fill = self.style.pressed_color;
            }
            painter.fill_rect(bounds, fill);
        }

        match input.cursor_position {
            Some(cursor) if bounds.contains(cursor) => {
                self.hot = Some(id);
            }
            _ => {
                // Only clear hotness we still own; another widget
                // evaluated earlier this frame may have claimed it.
                if self.hot == Some(id) {
                    self.hot = None;
                    if self.suppress_release_flash {
                        self.prev_active = None;
                    }
                }
            }
        }

        // The prev_active comparison re-records the just-released widget
        // with the idle fill while the cursor stays over it.
        if (self.hot != Some(id) && self.active != Some(id))
            || (self.suppress_release_flash && self.hot == self.prev_active)
        {
            painter.fill_rect(bounds, self.style.idle_color);
        }

        painter.text(
            text,
            Point::new(
                bounds.min[0] + self.style.label_inset,
                bounds.min[1] + self.style.label_inset,
            ),
            self.style.font_size,
            self.style.text_color,
        );

        activated
    }

    /// Evaluate a label for this frame
    ///
    /// Same state machine as [`Ui::button`] with three differences: the
    /// press must start on the label (a held button dragged in does not
    /// take it), no release-flash bookkeeping, and only the text is
    /// recorded. Hosts typically flip an external flag on activation.
    pub fn label(
        &mut self,
        id: WidgetId,
        text: &str,
        bounds: Rect,
        input: &InputState,
        painter: &mut Painter,
    ) -> bool {
        let mut activated = false;

        if self.active == Some(id) && input.is_button_just_released(MouseButton::Left) {
            if self.hot == Some(id) {
                activated = true;
                debug!("label {id} ({text:?}) activated");
            }
            self.active = None;
        }

        if self.hot == Some(id) && input.is_button_just_pressed(MouseButton::Left) {
            trace!("label {id} became active");
            self.active = Some(id);
        }

        match input.cursor_position {
            Some(cursor) if bounds.contains(cursor) => {
                self.hot = Some(id);
            }
            _ => {
                if self.hot == Some(id) {
                    self.hot = None;
                }
            }
        }

        painter.text(
            text,
            bounds.min_point(),
            self.style.font_size,
            self.style.text_color,
        );

        activated
    }
}

impl Default for Ui {
    fn default() -> Self {
        Self::new()
    }
}
