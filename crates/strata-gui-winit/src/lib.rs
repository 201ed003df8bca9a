//! # strata-gui-winit
//!
//! Winit adapter for strata-gui.
//!
//! This crate supplies the windowing side of the collaborator contract:
//! converting winit window events into the core's [`InputState`],
//! implementing [`WindowControl`] over a winit window, and driving the
//! single-threaded frame loop through an [`App`] implementation.
//!
//! Rasterizing the shapes recorded each frame is out of scope here; hosts
//! take them from [`FrameContext::painter`] and hand them to whatever
//! renderer they use.
//!
//! [`InputState`]: strata_gui::InputState
//! [`WindowControl`]: strata_gui::WindowControl

mod input;
mod runner;
mod window;

pub use input::*;
pub use runner::*;
pub use window::*;

pub use winit::error::EventLoopError;
