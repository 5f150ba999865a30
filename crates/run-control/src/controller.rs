//! Run-loop state machine: play, pause, and single-step arbitration.

use std::fmt;

use run_core::{EmulationCore, EmulationFault};

use crate::debug::{self, DebugView};
use crate::sink::DisplaySink;
use crate::stats::{FrameStats, FrameStatsSampler};

/// Execution state of the run loop.
///
/// `StopRequested` is only reachable from `Running`; `Stopped` is both the
/// initial state and the state every stop lands in. There is no direct
/// `Running` → `Stopped` edge for stop requests, which is what guarantees
/// the stop callback fires exactly once per request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Stopped,
    Running,
    StopRequested,
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stopped => write!(f, "stopped"),
            Self::Running => write!(f, "running"),
            Self::StopRequested => write!(f, "stop requested"),
        }
    }
}

/// One-shot notification fired when a requested stop completes.
pub type StopCallback = Box<dyn FnOnce()>;

/// What the host scheduler should do after a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum TickOutcome {
    /// Still running; schedule the next refresh tick.
    Continue,
    /// The loop stopped at this tick boundary; do not reschedule.
    Stopped,
}

/// Controller failures.
#[derive(Debug)]
pub enum ControlError {
    /// An operation was called in a state that does not permit it.
    InvalidTransition {
        op: &'static str,
        state: RunState,
    },
    /// The core faulted during a step. The controller has already
    /// transitioned to `Stopped` and fired any pending stop callback.
    Emulation(EmulationFault),
    /// The display sink rejected a frame.
    Render(String),
}

impl fmt::Display for ControlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidTransition { op, state } => {
                write!(f, "invalid {op} while {state}")
            }
            Self::Emulation(fault) => write!(f, "{fault}"),
            Self::Render(reason) => write!(f, "render failed: {reason}"),
        }
    }
}

impl std::error::Error for ControlError {}

/// Drives an emulation core through the host's refresh cycle.
///
/// Owns the core, the run state, and the one-shot stop callback
/// exclusively; no other component reads or writes them. The host calls
/// [`tick`](Self::tick) once per display refresh while running and
/// [`single_step`](Self::single_step) while stopped.
pub struct RunLoopController<C: EmulationCore> {
    core: C,
    state: RunState,
    on_stop: Option<StopCallback>,
    breakpoint: Option<u16>,
    stats: FrameStatsSampler,
}

impl<C: EmulationCore> RunLoopController<C> {
    pub fn new(core: C) -> Self {
        Self {
            core,
            state: RunState::Stopped,
            on_stop: None,
            breakpoint: None,
            stats: FrameStatsSampler::new(),
        }
    }

    #[must_use]
    pub fn state(&self) -> RunState {
        self.state
    }

    /// Current frame-rate statistics.
    #[must_use]
    pub fn stats(&self) -> FrameStats {
        self.stats.snapshot()
    }

    /// Registers and disassembly around the current program counter.
    #[must_use]
    pub fn debug_view(&self) -> DebugView {
        debug::inspect(&self.core)
    }

    #[must_use]
    pub fn core(&self) -> &C {
        &self.core
    }

    /// Mutable access for the embedding frontend (input injection and the
    /// like). The run state itself is only ever mutated by this
    /// controller's own methods.
    pub fn core_mut(&mut self) -> &mut C {
        &mut self.core
    }

    /// Stop cooperatively when the program counter reaches `pc` at a tick
    /// boundary. `None` clears the breakpoint.
    pub fn set_breakpoint(&mut self, pc: Option<u16>) {
        self.breakpoint = pc;
    }

    /// Begin continuous execution.
    ///
    /// Any stale stop callback from a previous session is discarded.
    ///
    /// # Errors
    ///
    /// `InvalidTransition` unless currently `Stopped`. Restarting a live
    /// loop would double-schedule concurrent tick chains.
    pub fn start(&mut self) -> Result<(), ControlError> {
        if self.state != RunState::Stopped {
            return Err(ControlError::InvalidTransition {
                op: "start",
                state: self.state,
            });
        }
        self.on_stop = None;
        self.state = RunState::Running;
        Ok(())
    }

    /// Request a cooperative stop; `callback` fires once the in-flight
    /// tick completes.
    ///
    /// While already `Stopped` this is an idempotent no-op and the
    /// callback is dropped unfired.
    ///
    /// # Errors
    ///
    /// `InvalidTransition` if a stop is already in flight — replacing the
    /// stored callback would break its fires-exactly-once guarantee.
    pub fn request_stop(
        &mut self,
        callback: impl FnOnce() + 'static,
    ) -> Result<(), ControlError> {
        match self.state {
            RunState::Running => {
                self.on_stop = Some(Box::new(callback));
                self.state = RunState::StopRequested;
                Ok(())
            }
            RunState::Stopped => Ok(()),
            RunState::StopRequested => Err(ControlError::InvalidTransition {
                op: "request_stop",
                state: self.state,
            }),
        }
    }

    /// Advance the machine for one host refresh tick.
    ///
    /// Runs the core to the next presentable-frame boundary; a completed
    /// frame goes to the sink and then to the stats sampler, exactly once
    /// each. Returns [`TickOutcome::Stopped`] when a requested stop (or a
    /// breakpoint hit) completed at this boundary, firing the stop
    /// callback.
    ///
    /// # Errors
    ///
    /// `InvalidTransition` while `Stopped`. A core fault forces the
    /// transition to `Stopped`, fires any pending stop callback, and
    /// propagates as `Emulation`.
    pub fn tick(&mut self, sink: &mut dyn DisplaySink) -> Result<TickOutcome, ControlError> {
        if self.state == RunState::Stopped {
            return Err(ControlError::InvalidTransition {
                op: "tick",
                state: self.state,
            });
        }

        match self.core.run_until_frame() {
            Ok(true) => self.frame_completed(sink)?,
            Ok(false) => {}
            Err(fault) => {
                self.halt();
                return Err(ControlError::Emulation(fault));
            }
        }

        let at_breakpoint = self.breakpoint.is_some_and(|pc| pc == self.core.registers().pc);
        if self.state == RunState::StopRequested || at_breakpoint {
            self.halt();
            Ok(TickOutcome::Stopped)
        } else {
            Ok(TickOutcome::Continue)
        }
    }

    /// Advance by exactly one stepping unit, synchronously.
    ///
    /// Renders and records if the unit landed on a presentable-frame
    /// boundary, through the same path a tick uses. The state stays
    /// `Stopped`.
    ///
    /// # Errors
    ///
    /// `InvalidTransition` unless `Stopped` — stepping a live loop would
    /// race the scheduled tick and duplicate or skip emulation cycles.
    pub fn single_step(&mut self, sink: &mut dyn DisplaySink) -> Result<(), ControlError> {
        if self.state != RunState::Stopped {
            return Err(ControlError::InvalidTransition {
                op: "single_step",
                state: self.state,
            });
        }

        let presented = self
            .core
            .step_instruction()
            .map_err(ControlError::Emulation)?;
        if presented {
            self.frame_completed(sink)?;
        }
        Ok(())
    }

    /// Hand a completed frame to the sink, then record it.
    ///
    /// Render before record: a sink failure must not corrupt the stats
    /// window.
    fn frame_completed(&mut self, sink: &mut dyn DisplaySink) -> Result<(), ControlError> {
        sink.present(self.core.frame()).map_err(ControlError::Render)?;
        self.stats.record(1.0);
        Ok(())
    }

    /// Stop at this tick boundary and fire the pending notification, if any.
    fn halt(&mut self) {
        self.state = RunState::Stopped;
        if let Some(callback) = self.on_stop.take() {
            callback();
        }
    }
}
