//! Disassembly listing entries.

use std::fmt;

/// One disassembled instruction: address plus human-readable description.
///
/// Produced by [`EmulationCore::disassemble`](crate::EmulationCore::disassemble)
/// in address order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisassemblyEntry {
    pub addr: u16,
    pub desc: String,
}

impl fmt::Display for DisassemblyEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04X}  {}", self.addr, self.desc)
    }
}
