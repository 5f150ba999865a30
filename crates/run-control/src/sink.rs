//! Presentation boundary for completed frames.

use run_core::FrameView;

/// Receives each presentable frame exactly once.
///
/// Implementations must consume the borrowed view before returning; the
/// underlying buffer may be reused by the core on the next step. Pixels
/// are presented at native resolution with nearest-neighbor semantics.
pub trait DisplaySink {
    /// Present one frame.
    ///
    /// # Errors
    ///
    /// A description of the failure. Sink failures are not expected in
    /// normal operation and surface as
    /// [`ControlError::Render`](crate::ControlError::Render).
    fn present(&mut self, frame: FrameView<'_>) -> Result<(), String>;
}
