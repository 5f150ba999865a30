//! Boundary contract between the run-loop controller and an emulation core.
//!
//! The controller drives any machine implementing [`EmulationCore`]. The
//! types in this crate are the only data that crosses the boundary: the
//! core is stepped and queried, never reached into.

mod disasm;
mod fault;
mod machine;
mod registers;

pub use disasm::DisassemblyEntry;
pub use fault::EmulationFault;
pub use machine::{EmulationCore, FrameView, VideoConfig};
pub use registers::RegisterSnapshot;
