//! Unrecoverable emulation failures.

use std::fmt;

/// Raised by a core when the emulated machine cannot continue, for example
/// on an illegal instruction. The fault is terminal for the current run;
/// the controller does not retry a faulted core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmulationFault {
    /// Program counter at the point of failure.
    pub pc: u16,
    /// Human-readable cause.
    pub reason: String,
}

impl fmt::Display for EmulationFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "emulation fault at {:#06X}: {}", self.pc, self.reason)
    }
}

impl std::error::Error for EmulationFault {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_pc_and_reason() {
        let fault = EmulationFault {
            pc: 0xC303,
            reason: "illegal opcode 0xFD".to_string(),
        };
        assert_eq!(
            fault.to_string(),
            "emulation fault at 0xC303: illegal opcode 0xFD",
        );
    }
}
