//! Processor register snapshot.

use std::fmt;

const FLAG_Z: u8 = 0x80;
const FLAG_N: u8 = 0x40;
const FLAG_H: u8 = 0x20;
const FLAG_C: u8 = 0x10;

/// Immutable record of the register file captured at a single instant.
///
/// Layout follows the SM83 register set: accumulator, six general-purpose
/// registers, the flags register, and the two 16-bit pointers.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RegisterSnapshot {
    pub pc: u16,
    pub sp: u16,
    pub a: u8,
    pub b: u8,
    pub c: u8,
    pub d: u8,
    pub e: u8,
    pub f: u8,
    pub h: u8,
    pub l: u8,
}

impl RegisterSnapshot {
    /// Zero flag (bit 7 of `f`).
    #[must_use]
    pub const fn zero_flag(&self) -> bool {
        self.f & FLAG_Z != 0
    }

    /// Subtract flag (bit 6 of `f`).
    #[must_use]
    pub const fn subtract_flag(&self) -> bool {
        self.f & FLAG_N != 0
    }

    /// Half-carry flag (bit 5 of `f`).
    #[must_use]
    pub const fn half_carry_flag(&self) -> bool {
        self.f & FLAG_H != 0
    }

    /// Carry flag (bit 4 of `f`).
    #[must_use]
    pub const fn carry_flag(&self) -> bool {
        self.f & FLAG_C != 0
    }
}

impl fmt::Display for RegisterSnapshot {
    /// One-line trace format: `A:01 F:Z-HC BC:0013 DE:00D8 HL:014D SP:FFFE PC:0100`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let z = if self.zero_flag() { 'Z' } else { '-' };
        let n = if self.subtract_flag() { 'N' } else { '-' };
        let h = if self.half_carry_flag() { 'H' } else { '-' };
        let c = if self.carry_flag() { 'C' } else { '-' };
        write!(
            f,
            "A:{:02X} F:{}{}{}{} BC:{:02X}{:02X} DE:{:02X}{:02X} HL:{:02X}{:02X} SP:{:04X} PC:{:04X}",
            self.a, z, n, h, c, self.b, self.c, self.d, self.e, self.h, self.l, self.sp, self.pc,
        )
    }
}
