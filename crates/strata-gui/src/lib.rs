//! # strata-gui
//!
//! Rendering backend agnostic widget interaction core.
//!
//! This crate provides the primitives shared by the two widget
//! architectures in this workspace (`strata-gui-immediate` and
//! `strata-gui-retained`) with zero dependencies on any windowing or
//! graphics API. Windowing is handled by adapter crates like
//! `strata-gui-winit`; rasterization of recorded shapes is left to the
//! host entirely.
//!
//! ## Core Types
//!
//! - [`Point`], [`Rect`] - screen-space geometry used for hit-testing
//! - [`Color`] - linear RGBA color
//! - [`InputState`] - per-frame mouse tracking (position, button edges)
//! - [`Painter`] - records an ordered list of [`Shape`]s each frame
//! - [`WindowControl`] - the window-side collaborator contract (resize,
//!   resizable flag)

mod color;
mod input;
mod painter;
mod primitives;
mod window;

pub use color::*;
pub use input::*;
pub use painter::*;
pub use primitives::*;
pub use window::*;
