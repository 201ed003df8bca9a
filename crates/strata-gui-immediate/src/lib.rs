//! # strata-gui-immediate
//!
//! Immediate mode widget evaluation over the `strata-gui` core.
//!
//! Widgets here are not objects. A single [`Ui`] value carries the hot and
//! active widget identifiers across frames; the host calls [`Ui::button`]
//! and [`Ui::label`] inline every frame with an id, label text, and
//! bounds. Each call hit-tests the cursor, updates the interaction state,
//! records its draw shapes, and returns whether the widget's click
//! completed this frame - the host consumes the result immediately:
//!
//! ```ignore
//! if ui.button(0, "800x600", bounds, &input, &mut painter) {
//!     window.set_size(800, 600);
//! }
//! ```

mod evaluator;
mod style;

pub use evaluator::*;
pub use style::*;
