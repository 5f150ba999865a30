//! Stepping and inspection contract for driven emulation cores.

use crate::{DisassemblyEntry, EmulationFault, RegisterSnapshot};

/// Video output configuration for a core.
#[derive(Debug, Clone, Copy)]
pub struct VideoConfig {
    /// Native display width in pixels.
    pub width: u32,
    /// Native display height in pixels.
    pub height: u32,
    /// Presentable-frame rate in frames per second.
    pub fps: f32,
}

/// Borrowed view of the core's current pixel buffer (RGBA, 4 bytes per pixel).
///
/// The underlying memory may be reused by the core on the next step, so the
/// view must be consumed within the call that received it.
#[derive(Debug, Clone, Copy)]
pub struct FrameView<'a> {
    pub pixels: &'a [u8],
    pub width: u32,
    pub height: u32,
}

/// Contract an emulation core exposes to the run-loop controller.
///
/// The controller owns the core exclusively; all mutation happens through
/// the stepping methods, and the query methods never advance emulation.
pub trait EmulationCore {
    /// Get the video output configuration.
    fn video_config(&self) -> VideoConfig;

    /// Advance the machine by one stepping unit.
    ///
    /// Returns `true` when that single unit completed a presentable frame.
    ///
    /// # Errors
    ///
    /// [`EmulationFault`] if the machine reaches an unrecoverable state.
    fn step_instruction(&mut self) -> Result<bool, EmulationFault>;

    /// Run until the next presentable-frame boundary.
    ///
    /// Returns `true` when a frame became ready for output. A core may
    /// return `false` if it bounds the burst internally and the boundary
    /// was not reached.
    ///
    /// # Errors
    ///
    /// [`EmulationFault`] if the machine reaches an unrecoverable state.
    fn run_until_frame(&mut self) -> Result<bool, EmulationFault>;

    /// Snapshot the processor register file. Pure query.
    fn registers(&self) -> RegisterSnapshot;

    /// Disassemble the address range `[low, high]` into an ordered listing.
    /// Pure query.
    fn disassemble(&self, low: u16, high: u16) -> Vec<DisassemblyEntry>;

    /// Get the current pixel buffer. Callers must not retain the view.
    fn frame(&self) -> FrameView<'_>;
}
