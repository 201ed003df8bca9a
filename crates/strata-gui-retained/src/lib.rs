//! # strata-gui-retained
//!
//! Retained mode widget tree over the `strata-gui` core.
//!
//! Where the immediate mode evaluator re-derives everything from ids each
//! frame, this crate keeps a persistent tree of boxed [`Widget`] trait
//! objects, built once before the frame loop:
//!
//! ```ignore
//! let mut root = Container::new(Rect::from_min_size([10.0, 10.0], [600.0, 500.0]));
//! root.add_child(Button::new("800x600", bounds, (800, 600)));
//! root.add_child(Label::new("Resolution", caption_bounds));
//! let mut ui = Ui::new(root);
//!
//! // each frame:
//! ui.update(&input, &mut window);
//! ui.draw(&mut painter);
//! ```
//!
//! Children are drawn in insertion order and hit-tested in reverse
//! insertion order, so the widget drawn last (topmost) receives a click
//! first.

mod button;
mod container;
mod label;
mod ui;
mod widget;

pub use button::*;
pub use container::*;
pub use label::*;
pub use ui::*;
pub use widget::*;
