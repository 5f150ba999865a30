//! On-demand register and disassembly inspection.
//!
//! Queries never affect emulation state.

use run_core::{DisassemblyEntry, EmulationCore, RegisterSnapshot};

/// Half-width of the disassembly window around the program counter.
pub const DISASM_RADIUS: u16 = 1000;

/// Registers plus the disassembly surrounding the current program counter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DebugView {
    pub registers: RegisterSnapshot,
    pub disassembly: Vec<DisassemblyEntry>,
}

/// Compute the inspected address range: `pc ± DISASM_RADIUS`.
///
/// Each bound clamps to the 16-bit address space independently, so the
/// window may be asymmetric near either end.
#[must_use]
pub fn address_window(pc: u16) -> (u16, u16) {
    (
        pc.saturating_sub(DISASM_RADIUS),
        pc.saturating_add(DISASM_RADIUS),
    )
}

/// Capture a debug view of the core.
#[must_use]
pub fn inspect<C: EmulationCore>(core: &C) -> DebugView {
    let registers = core.registers();
    let (low, high) = address_window(registers.pc);
    DebugView {
        disassembly: core.disassemble(low, high),
        registers,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use run_core::{EmulationFault, FrameView, VideoConfig};
    use std::cell::Cell;

    #[test]
    fn window_clamps_low_bound() {
        assert_eq!(address_window(0), (0, 1000));
        assert_eq!(address_window(500), (0, 1500));
    }

    #[test]
    fn window_clamps_high_bound() {
        assert_eq!(address_window(0xFFFF), (0xFC17, 0xFFFF));
        assert_eq!(address_window(0xFFFE), (0xFC16, 0xFFFF));
    }

    #[test]
    fn window_unclamped_in_the_middle() {
        // 0x8000 ± 1000 decimal.
        assert_eq!(address_window(0x8000), (0x7C18, 0x83E8));
    }

    struct QueryCore {
        pc: u16,
        asked: Cell<Option<(u16, u16)>>,
    }

    impl EmulationCore for QueryCore {
        fn video_config(&self) -> VideoConfig {
            VideoConfig {
                width: 1,
                height: 1,
                fps: 60.0,
            }
        }

        fn step_instruction(&mut self) -> Result<bool, EmulationFault> {
            unreachable!("inspection must not step the core")
        }

        fn run_until_frame(&mut self) -> Result<bool, EmulationFault> {
            unreachable!("inspection must not step the core")
        }

        fn registers(&self) -> RegisterSnapshot {
            RegisterSnapshot {
                pc: self.pc,
                ..RegisterSnapshot::default()
            }
        }

        fn disassemble(&self, low: u16, high: u16) -> Vec<DisassemblyEntry> {
            self.asked.set(Some((low, high)));
            vec![DisassemblyEntry {
                addr: low,
                desc: "NOP".to_string(),
            }]
        }

        fn frame(&self) -> FrameView<'_> {
            FrameView {
                pixels: &[],
                width: 1,
                height: 1,
            }
        }
    }

    #[test]
    fn inspect_disassembles_around_pc() {
        let core = QueryCore {
            pc: 0x8000,
            asked: Cell::new(None),
        };

        let view = inspect(&core);
        assert_eq!(core.asked.get(), Some((0x7C18, 0x83E8)));
        assert_eq!(view.registers.pc, 0x8000);
        assert_eq!(view.disassembly.len(), 1);
        assert_eq!(view.disassembly[0].addr, 0x7C18);
    }
}
