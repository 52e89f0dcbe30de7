//! Slim winit shell: window creation, cursor capture, and event forwarding.
//!
//! The shell owns the window and the event loop; everything else happens in
//! the [`FrameHooks`] implementation the game supplies. Status text is
//! presented through the window title, refreshed once per frame.
//!
//! Capture mirrors pointer-lock behavior: the first click grabs and hides
//! the cursor, Escape releases it. Look input only flows while captured.

use grenier_config::WindowSettings;
use grenier_input::RawKeyEvent;
use tracing::{info, trace, warn};
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{DeviceEvent, DeviceId, ElementState, MouseButton, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{CursorGrabMode, Fullscreen, Window, WindowId};

/// Callbacks the game supplies to the shell.
pub trait FrameHooks {
    /// A keyboard event arrived. Repeats are forwarded, not filtered.
    fn on_key(&mut self, event: RawKeyEvent);
    /// Raw mouse motion while the cursor is captured.
    fn on_mouse_motion(&mut self, dx: f64, dy: f64);
    /// A left click arrived.
    fn on_click(&mut self);
    /// Cursor capture changed: `true` after the grabbing click, `false` on
    /// Escape.
    fn on_capture_changed(&mut self, captured: bool);
    /// Run one frame and return the status line for the title bar.
    fn tick(&mut self) -> String;
}

/// Shell startup/runtime errors.
#[derive(Debug, thiserror::Error)]
pub enum ShellError {
    /// The windowing system refused the event loop.
    #[error("event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),
}

/// Open the window and run the frame loop until the session ends.
pub fn run(settings: &WindowSettings, hooks: impl FrameHooks) -> Result<(), ShellError> {
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut shell = WalkerShell {
        settings: settings.clone(),
        window: None,
        captured: false,
        hooks,
    };
    event_loop.run_app(&mut shell)?;
    Ok(())
}

struct WalkerShell<H: FrameHooks> {
    settings: WindowSettings,
    window: Option<Window>,
    captured: bool,
    hooks: H,
}

impl<H: FrameHooks> WalkerShell<H> {
    fn set_captured(&mut self, captured: bool) {
        let Some(window) = &self.window else {
            return;
        };
        if captured {
            // Locked is the pointer-lock equivalent; Confined is the
            // closest some platforms offer.
            if window.set_cursor_grab(CursorGrabMode::Locked).is_err() {
                let _ = window.set_cursor_grab(CursorGrabMode::Confined);
            }
            window.set_cursor_visible(false);
        } else {
            let _ = window.set_cursor_grab(CursorGrabMode::None);
            window.set_cursor_visible(true);
        }
        self.captured = captured;
        self.hooks.on_capture_changed(captured);
    }
}

impl<H: FrameHooks> ApplicationHandler for WalkerShell<H> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        let mut attrs = Window::default_attributes()
            .with_title(&self.settings.title)
            .with_inner_size(LogicalSize::new(self.settings.width, self.settings.height));
        if self.settings.fullscreen {
            attrs = attrs.with_fullscreen(Some(Fullscreen::Borderless(None)));
        }

        match event_loop.create_window(attrs) {
            Ok(window) => {
                info!(
                    "window open: {}x{}",
                    self.settings.width, self.settings.height
                );
                window.request_redraw();
                self.window = Some(window);
            }
            Err(err) => {
                warn!("window creation failed: {err}");
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                info!("close requested, ending session");
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                trace!("window resized to {}x{}", size.width, size.height);
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if event.physical_key == PhysicalKey::Code(KeyCode::Escape)
                    && event.state == ElementState::Pressed
                {
                    self.set_captured(false);
                    return;
                }
                self.hooks.on_key(RawKeyEvent::from_key_event(&event));
            }
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Left,
                ..
            } => {
                if !self.captured {
                    self.set_captured(true);
                }
                self.hooks.on_click();
            }
            WindowEvent::RedrawRequested => {
                let title = self.hooks.tick();
                if let Some(window) = &self.window {
                    window.set_title(&title);
                }
            }
            _ => {}
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: DeviceId,
        event: DeviceEvent,
    ) {
        if let DeviceEvent::MouseMotion { delta: (dx, dy) } = event
            && self.captured
        {
            self.hooks.on_mouse_motion(dx, dy);
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}
