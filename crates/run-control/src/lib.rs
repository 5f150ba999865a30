//! Run-loop controller for refresh-driven emulation.
//!
//! Decides on every display refresh tick whether to advance the emulated
//! machine, hands completed frames to a [`DisplaySink`], records frame-rate
//! telemetry, and arbitrates between continuous play, single-stepping, and
//! stopped debug states without losing or duplicating a frame.
//!
//! The model is single-threaded and cooperative: the host calls
//! [`RunLoopController::tick`] once per refresh and schedules the next tick
//! while the controller reports [`TickOutcome::Continue`]. Stops are
//! deferred to the next tick boundary, so a frame is never split.

mod controller;
mod debug;
mod sink;
mod stats;

pub use controller::{ControlError, RunLoopController, RunState, StopCallback, TickOutcome};
pub use debug::{DISASM_RADIUS, DebugView, address_window, inspect};
pub use sink::DisplaySink;
pub use stats::{FrameStats, FrameStatsSampler, WINDOW_CAPACITY};
