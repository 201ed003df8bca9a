//! Application runner driving the cooperative frame loop
//!
//! One frame = accumulated input -> [`App::frame`] (interaction update +
//! shape recording) -> input edge reset, repeated under
//! `ControlFlow::Poll` until the window is closed.

use std::sync::Arc;

use log::trace;
use strata_gui::{InputState, Painter, WindowControl};
use winit::{
    application::ApplicationHandler,
    event::{ElementState, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use crate::input::WinitInputExt;
use crate::window::WinitWindowControl;

/// Everything an [`App`] needs for one frame
pub struct FrameContext<'a> {
    /// Input accumulated since the previous frame
    pub input: &'a InputState,
    /// Records this frame's shapes
    pub painter: &'a mut Painter,
    /// The live window's control surface
    pub window: &'a mut dyn WindowControl,
}

/// A program driven by [`run`]
pub trait App {
    /// Title of the window to create
    fn window_title() -> &'static str;

    /// Initial inner size of the window in logical pixels
    fn window_size() -> (u32, u32) {
        (800, 600)
    }

    /// Run one frame of widget evaluation
    fn frame(&mut self, ctx: &mut FrameContext<'_>);
}

/// Winit application handler wrapping an [`App`]
pub struct AppRunner<T: App> {
    window: Option<Arc<Window>>,
    input: InputState,
    painter: Painter,
    app: T,
}

impl<T: App> AppRunner<T> {
    pub fn new(app: T) -> Self {
        Self {
            window: None,
            input: InputState::new(),
            painter: Painter::new(),
            app,
        }
    }

    fn redraw(&mut self) {
        let Some(window) = self.window.clone() else {
            return;
        };

        self.painter.clear();

        let mut control = WinitWindowControl::new(&window);
        let mut ctx = FrameContext {
            input: &self.input,
            painter: &mut self.painter,
            window: &mut control,
        };
        self.app.frame(&mut ctx);

        trace!("frame recorded {} shapes", self.painter.shapes().len());

        // Edge events (just pressed/released) are consumed by this frame
        self.input.begin_frame();
    }
}

impl<T: App> ApplicationHandler for AppRunner<T> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let (width, height) = T::window_size();
        let window_attributes = Window::default_attributes()
            .with_title(T::window_title())
            .with_inner_size(winit::dpi::LogicalSize::new(width, height));

        let window = match event_loop.create_window(window_attributes) {
            Ok(window) => Arc::new(window),
            Err(err) => {
                log::error!("failed to create window: {err}");
                event_loop.exit();
                return;
            }
        };

        self.window = Some(window);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        self.input.handle_winit_event(&event);

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::KeyboardInput {
                event: ref key_event,
                ..
            } if matches!(
                key_event.physical_key,
                PhysicalKey::Code(KeyCode::Escape)
            ) && key_event.state == ElementState::Pressed =>
            {
                event_loop.exit();
            }

            WindowEvent::RedrawRequested => {
                self.redraw();
            }

            _ => {}
        }

        // Always request redraw for Poll mode
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

/// Create the event loop and run `app` until its window closes
pub fn run<T: App>(app: T) -> Result<(), winit::error::EventLoopError> {
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut runner = AppRunner::new(app);
    event_loop.run_app(&mut runner)
}
