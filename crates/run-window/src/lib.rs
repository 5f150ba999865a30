//! Windowed frontend for the run-loop controller.
//!
//! Provides the winit event loop that acts as the refresh-driven
//! scheduler, and a pixels-backed [`DisplaySink`](run_control::DisplaySink)
//! that presents frames at native resolution with nearest-neighbor
//! scaling.
//!
//! # Example
//!
//! ```ignore
//! use run_control::RunLoopController;
//! use run_window::{WindowConfig, run};
//!
//! let controller = RunLoopController::new(core);
//! run(controller, WindowConfig {
//!     title: "Game Boy".into(),
//!     scale: 3,
//! });
//! ```

mod blit;
mod window;

pub use blit::copy_frame;
pub use window::{WindowConfig, WindowRunner, run};
