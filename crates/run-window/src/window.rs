//! winit event loop and pixels surface.
//!
//! The event loop is the refresh-driven scheduler: each `RedrawRequested`
//! is one candidate tick, paced to the core's frame rate, and the
//! controller's [`TickOutcome`] decides whether the chain continues.

use std::time::{Duration, Instant};

use pixels::{Pixels, SurfaceTexture};
use run_control::{DisplaySink, RunLoopController, RunState, TickOutcome};
use run_core::{EmulationCore, FrameView};
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

/// Configuration for the window runner.
pub struct WindowConfig {
    /// Window title.
    pub title: String,
    /// Integer scale factor for sharp pixels.
    pub scale: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Emulator".to_string(),
            scale: 3,
        }
    }
}

/// Run a controller under a winit window until the user quits.
///
/// Debug keys: Space pauses/resumes, N single-steps while paused, D dumps
/// registers and disassembly, F prints frame statistics, Escape exits.
pub fn run<C: EmulationCore + 'static>(controller: RunLoopController<C>, config: WindowConfig) {
    let event_loop = match EventLoop::new() {
        Ok(el) => el,
        Err(e) => {
            eprintln!("Failed to create event loop: {e}");
            std::process::exit(1);
        }
    };
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut runner = WindowRunner::new(controller, config);
    if let Err(e) = event_loop.run_app(&mut runner) {
        eprintln!("Event loop error: {e}");
        std::process::exit(1);
    }
}

/// Sink that copies each presented frame into the pixels framebuffer.
///
/// The copy consumes the borrowed view within the call; painting to the
/// surface happens once per redraw, so the last presented frame stays
/// visible while the loop is paused.
struct PixelsSink {
    pixels: Pixels<'static>,
}

impl DisplaySink for PixelsSink {
    fn present(&mut self, frame: FrameView<'_>) -> Result<(), String> {
        crate::blit::copy_frame(&frame, self.pixels.frame_mut())
    }
}

/// Window and run-loop driver for any emulation core.
pub struct WindowRunner<C: EmulationCore> {
    controller: RunLoopController<C>,
    config: WindowConfig,
    window: Option<&'static Window>,
    sink: Option<PixelsSink>,
    frame_duration: Duration,
    last_tick: Instant,
}

impl<C: EmulationCore> WindowRunner<C> {
    pub fn new(controller: RunLoopController<C>, config: WindowConfig) -> Self {
        let fps = controller.core().video_config().fps;
        Self {
            controller,
            config,
            window: None,
            sink: None,
            frame_duration: Duration::from_secs_f64(1.0 / f64::from(fps)),
            last_tick: Instant::now(),
        }
    }

    fn toggle_run(&mut self) {
        match self.controller.state() {
            RunState::Stopped => {
                if let Err(e) = self.controller.start() {
                    eprintln!("{e}");
                }
            }
            RunState::Running => {
                if let Err(e) = self.controller.request_stop(|| eprintln!("paused")) {
                    eprintln!("{e}");
                }
            }
            // A stop is already on its way to the next tick boundary.
            RunState::StopRequested => {}
        }
    }

    fn step_once(&mut self) {
        let Some(sink) = self.sink.as_mut() else {
            return;
        };
        match self.controller.single_step(sink) {
            Ok(()) => eprintln!("{}", self.controller.debug_view().registers),
            Err(e) => eprintln!("single step: {e}"),
        }
    }

    fn dump_debug_view(&self) {
        let view = self.controller.debug_view();
        eprintln!("{}", view.registers);
        for entry in &view.disassembly {
            eprintln!("{entry}");
        }
    }

    fn dump_stats(&self) {
        let stats = self.controller.stats();
        eprintln!(
            "fps: {:.1} (min {:.1} / max {:.1} / mean {:.1})",
            stats.latest, stats.min, stats.max, stats.mean,
        );
    }

    fn handle_key(&mut self, keycode: KeyCode) {
        match keycode {
            KeyCode::Space => self.toggle_run(),
            KeyCode::KeyN => self.step_once(),
            KeyCode::KeyD => self.dump_debug_view(),
            KeyCode::KeyF => self.dump_stats(),
            _ => {}
        }
    }

    fn tick(&mut self, event_loop: &ActiveEventLoop) {
        let Some(sink) = self.sink.as_mut() else {
            return;
        };
        match self.controller.tick(sink) {
            Ok(TickOutcome::Continue) => {}
            Ok(TickOutcome::Stopped) => eprintln!("stopped"),
            Err(e) => {
                eprintln!("{e}");
                event_loop.exit();
            }
        }
    }
}

impl<C: EmulationCore> ApplicationHandler for WindowRunner<C> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let video = self.controller.core().video_config();
        let window_size = LogicalSize::new(
            video.width * self.config.scale,
            video.height * self.config.scale,
        );
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(window_size)
            .with_resizable(false);

        match event_loop.create_window(attrs) {
            Ok(window) => {
                let window: &'static Window = Box::leak(Box::new(window));
                let inner = window.inner_size();
                let surface = SurfaceTexture::new(inner.width, inner.height, window);
                match Pixels::new(video.width, video.height, surface) {
                    Ok(pixels) => {
                        self.sink = Some(PixelsSink { pixels });
                    }
                    Err(e) => {
                        eprintln!("Failed to create pixels: {e}");
                        event_loop.exit();
                        return;
                    }
                }
                self.window = Some(window);
            }
            Err(e) => {
                eprintln!("Failed to create window: {e}");
                event_loop.exit();
                return;
            }
        }

        self.last_tick = Instant::now();
        if let Err(e) = self.controller.start() {
            eprintln!("{e}");
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
                event_loop.exit();
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(keycode) = event.physical_key {
                    if keycode == KeyCode::Escape && event.state == ElementState::Pressed {
                        event_loop.exit();
                        return;
                    }
                    if event.state == ElementState::Pressed && !event.repeat {
                        self.handle_key(keycode);
                    }
                }
            }
            WindowEvent::RedrawRequested => {
                let now = Instant::now();
                if self.controller.state() != RunState::Stopped
                    && now.duration_since(self.last_tick) >= self.frame_duration
                {
                    self.tick(event_loop);
                    self.last_tick = now;
                }

                if let Some(sink) = self.sink.as_mut() {
                    if let Err(e) = sink.pixels.render() {
                        eprintln!("Render error: {e}");
                        event_loop.exit();
                    }
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = self.window {
            window.request_redraw();
        }
    }
}
