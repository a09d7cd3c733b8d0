//=========================================================================
// Platform Subsystem
//
// Bridges Winit (OS-level events) with the game core and the renderer.
//
// Architecture:
// ```text
//  Main Thread (single-threaded):
//  ┌──────────────────────────────────────────────────────────┐
//  │  Winit Event Loop                                        │
//  │   ↓ KeyboardInput                                        │
//  │  input_processor → InputBuffer                           │
//  │   ↓ about_to_wait (input pending or core due)            │
//  │  crossbeam channel ──► GameCore::tick(now)               │
//  │   ↓ request_redraw                                       │
//  │  RedrawRequested → Renderer::draw → softbuffer present   │
//  │   ↓                                                      │
//  │  ControlFlow from GameCore::wakeup()                     │
//  └──────────────────────────────────────────────────────────┘
// ```
//
// Key Design Decisions:
// - **about_to_wait = tick boundary**: all input gathered since the last
//   tick is sent as one batch, then the core runs
// - **The core decides pacing**: `Wakeup::At` becomes `WaitUntil`,
//   `Wakeup::OnInput` becomes `Wait`, so the waiting states use no CPU
// - **Graceful channel failure**: a full or disconnected channel is
//   logged and the batch dropped, never a panic
//
// Responsibilities:
// - Create and manage the OS window and its pixel surface
// - Convert Winit key events → core InputEvents
// - Drive the core and present frames
//
//=========================================================================

//=== Submodules ==========================================================

mod input_buffer;
mod input_processor;

//=== External Crates =====================================================

use std::num::NonZeroU32;
use std::rc::Rc;
use std::time::Instant;

use crossbeam_channel::{Sender, TrySendError};
use log::*;
use softbuffer::{Context, Surface};
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowAttributes, WindowId},
};

//=== Internal Imports ====================================================

use crate::core::platform_bridge::{PlatformError, PlatformEvent};
use crate::core::{GameCore, TickControl, Wakeup};
use crate::render::Renderer;
use input_buffer::InputBuffer;

//=== Platform ============================================================

/// Window owner and event loop driver.
///
/// # Lifecycle
///
/// 1. **Construction**: `Platform::new(...)` - no window yet
/// 2. **Execution**: `platform.run()` - blocks in the Winit event loop
/// 3. **Shutdown**: close/Escape → core returns `Exit` → loop exits
///
/// The window and surface are created lazily in `resumed()`.
pub(crate) struct Platform {
    /// Window caption.
    title: String,

    /// OS window handle (None until `resumed()` called).
    window: Option<Rc<Window>>,

    /// CPU pixel surface bound to `window`.
    surface: Option<Surface<Rc<Window>, Rc<Window>>>,

    /// Buffers key events until the next tick.
    buffer: InputBuffer,

    /// Channel to the core.
    event_sender: Sender<PlatformEvent>,

    core: GameCore,
    renderer: Renderer,

    /// First unrecoverable error, returned from `run()`.
    fatal: Option<PlatformError>,
}

impl Platform {
    //--- Construction -----------------------------------------------------

    pub(crate) fn new(
        title: String,
        event_sender: Sender<PlatformEvent>,
        core: GameCore,
        renderer: Renderer,
    ) -> Self {
        info!(target: "platform", "Platform subsystem initialized");
        Self {
            title,
            window: None,
            surface: None,
            buffer: InputBuffer::new(),
            event_sender,
            core,
            renderer,
            fatal: None,
        }
    }

    //--- Execution --------------------------------------------------------

    /// Runs the event loop until the game quits.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError`] if the event loop cannot start, or if the
    /// window or surface could not be created.
    pub(crate) fn run(mut self) -> Result<(), PlatformError> {
        debug!(target: "platform", "Starting Winit event loop");

        let event_loop =
            EventLoop::new().map_err(|e| PlatformError::EventLoopCreation(e.to_string()))?;
        event_loop.set_control_flow(ControlFlow::Wait);

        event_loop
            .run_app(&mut self)
            .map_err(|e| PlatformError::EventLoopExecution(e.to_string()))?;

        match self.fatal.take() {
            Some(err) => Err(err),
            None => {
                info!(target: "platform", "Event loop finished");
                Ok(())
            }
        }
    }

    //--- Internal Helpers -------------------------------------------------

    fn create_window(&mut self, event_loop: &ActiveEventLoop) -> Result<(), PlatformError> {
        let (width, height) = self.renderer.logical_size();
        let attrs = WindowAttributes::default()
            .with_title(self.title.clone())
            .with_inner_size(LogicalSize::new(width, height))
            .with_resizable(false);

        let window = Rc::new(
            event_loop
                .create_window(attrs)
                .map_err(|e| PlatformError::WindowCreation(e.to_string()))?,
        );

        let context =
            Context::new(Rc::clone(&window)).map_err(|e| PlatformError::Surface(e.to_string()))?;
        let surface = Surface::new(&context, Rc::clone(&window))
            .map_err(|e| PlatformError::Surface(e.to_string()))?;

        info!(
            target: "platform",
            "Window created: {}x{} @ {}x DPI",
            window.inner_size().width,
            window.inner_size().height,
            window.scale_factor()
        );

        window.request_redraw();
        self.window = Some(window);
        self.surface = Some(surface);
        Ok(())
    }

    /// Draws the current game state and presents it.
    fn redraw(&mut self) -> Result<(), PlatformError> {
        let (Some(window), Some(surface)) = (&self.window, &mut self.surface) else {
            return Ok(());
        };

        let size = window.inner_size();
        let (Some(width), Some(height)) =
            (NonZeroU32::new(size.width), NonZeroU32::new(size.height))
        else {
            // Minimized
            return Ok(());
        };

        surface
            .resize(width, height)
            .map_err(|e| PlatformError::Surface(e.to_string()))?;

        self.renderer.draw(self.core.state(), self.core.world());

        let mut buffer = surface
            .buffer_mut()
            .map_err(|e| PlatformError::Surface(e.to_string()))?;
        self.renderer.present(&mut buffer, width.get(), height.get());
        buffer
            .present()
            .map_err(|e| PlatformError::Surface(e.to_string()))
    }

    /// Sets the loop's control flow from the core's next wakeup.
    fn schedule(&self, event_loop: &ActiveEventLoop) {
        let flow = match self.core.wakeup() {
            Wakeup::At(at) => ControlFlow::WaitUntil(at),
            Wakeup::OnInput => ControlFlow::Wait,
        };
        event_loop.set_control_flow(flow);
    }

    fn abort(&mut self, event_loop: &ActiveEventLoop, err: PlatformError) {
        error!(target: "platform", "{}", err);
        self.fatal = Some(err);
        event_loop.exit();
    }
}

//=== Channel Flush =======================================================

/// Sends buffered input to the core as one batch.
///
/// If the channel is full or disconnected, the batch is dropped with a
/// warning. Empty buffers send nothing.
fn flush_input_buffer(buffer: &mut InputBuffer, sender: &Sender<PlatformEvent>) {
    let Some(events) = buffer.drain() else {
        return;
    };
    let count = events.len();

    trace!(target: "platform::input", "Flushing {} events", count);

    match sender.try_send(PlatformEvent::Inputs(events)) {
        Ok(()) => {}
        Err(TrySendError::Full(_)) => {
            warn!(target: "platform::input", "Event queue full, dropping {} events", count);
        }
        Err(TrySendError::Disconnected(_)) => {
            warn!(target: "platform::input", "Channel disconnected, dropping {} events", count);
        }
    }
}

//=== Winit Integration ===================================================

impl ApplicationHandler for Platform {
    /// Creates the window on first activation.
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            debug!(target: "platform", "Window already exists (resume)");
            return;
        }

        if let Err(err) = self.create_window(event_loop) {
            let _ = self.event_sender.try_send(PlatformEvent::WindowClosed);
            self.abort(event_loop, err);
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                info!(target: "platform", "Window close requested");
                if self.event_sender.try_send(PlatformEvent::WindowClosed).is_err() {
                    debug!(target: "platform", "Core gone before close request");
                }
                event_loop.exit();
            }

            WindowEvent::KeyboardInput { event: key_event, .. } => {
                match input_processor::process_key_event(&key_event) {
                    Some(event) => self.buffer.push(event),
                    None => trace!(target: "platform::input", "Unmapped or repeated key ignored"),
                }
            }

            WindowEvent::Resized(_) | WindowEvent::ScaleFactorChanged { .. } => {
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }

            WindowEvent::RedrawRequested => {
                if let Err(err) = self.redraw() {
                    warn!(target: "platform", "Frame skipped: {}", err);
                }
            }

            _ => {}
        }
    }

    /// Tick boundary: flush input, run the core if needed, reschedule.
    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if event_loop.exiting() {
            return;
        }

        let now = Instant::now();
        let due = match self.core.wakeup() {
            Wakeup::At(at) => now >= at,
            Wakeup::OnInput => false,
        };

        if due || !self.buffer.is_empty() {
            flush_input_buffer(&mut self.buffer, &self.event_sender);

            if self.core.tick(now) == TickControl::Exit {
                info!(target: "platform", "Core requested exit");
                event_loop.exit();
                return;
            }

            if let Some(window) = &self.window {
                window.request_redraw();
            }
        }

        self.schedule(event_loop);
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::{InputEvent, KeyCode};
    use crossbeam_channel::{bounded, unbounded};

    fn space_down() -> InputEvent {
        InputEvent::KeyDown { key: KeyCode::Space }
    }

    #[test]
    fn flush_empty_buffer_is_noop() {
        let (tx, rx) = unbounded();
        let mut buffer = InputBuffer::new();

        flush_input_buffer(&mut buffer, &tx);

        assert!(rx.try_recv().is_err(), "No events should be sent for empty buffer");
    }

    #[test]
    fn flush_sends_buffered_events() {
        let (tx, rx) = unbounded();
        let mut buffer = InputBuffer::new();
        buffer.push(space_down());

        flush_input_buffer(&mut buffer, &tx);

        assert_eq!(rx.try_recv(), Ok(PlatformEvent::Inputs(vec![space_down()])));
        assert!(buffer.is_empty());
    }

    #[test]
    fn flush_handles_disconnected_channel() {
        let (tx, rx) = unbounded();
        let mut buffer = InputBuffer::new();
        buffer.push(space_down());
        drop(rx);

        // Should not panic, just log warning
        flush_input_buffer(&mut buffer, &tx);
        assert!(buffer.is_empty());
    }

    #[test]
    fn flush_drops_batch_when_queue_is_full() {
        let (tx, rx) = bounded(1);
        let mut buffer = InputBuffer::new();

        buffer.push(space_down());
        flush_input_buffer(&mut buffer, &tx);
        buffer.push(InputEvent::KeyDown { key: KeyCode::Escape });
        flush_input_buffer(&mut buffer, &tx);

        assert_eq!(rx.try_recv(), Ok(PlatformEvent::Inputs(vec![space_down()])));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn multiple_flushes_send_once() {
        let (tx, rx) = unbounded();
        let mut buffer = InputBuffer::new();
        buffer.push(space_down());

        flush_input_buffer(&mut buffer, &tx);
        flush_input_buffer(&mut buffer, &tx);

        assert!(rx.try_recv().is_ok(), "First flush should send");
        assert!(rx.try_recv().is_err(), "Second flush should not send");
    }
}
