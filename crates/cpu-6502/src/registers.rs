//! 6502 CPU registers.

use crate::Status;

/// Base of the hardware stack page.
pub const STACK_BASE: u16 = 0x0100;

/// 6502 CPU register set.
///
/// The 6502 has minimal registers:
/// - A: 8-bit accumulator
/// - X, Y: 8-bit index registers
/// - S: 8-bit stack pointer (stack is at $0100-$01FF)
/// - PC: 16-bit program counter
/// - P: 8-bit processor status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Registers {
    /// Accumulator.
    pub a: u8,
    /// X index register.
    pub x: u8,
    /// Y index register.
    pub y: u8,
    /// Stack pointer (points to next free location).
    pub s: u8,
    /// Program counter.
    pub pc: u16,
    /// Processor status flags.
    pub p: Status,
}

impl Default for Registers {
    fn default() -> Self {
        Self::new()
    }
}

impl Registers {
    /// Create registers in reset state.
    ///
    /// PC is left at 0; the reset sequence loads it from $FFFC-$FFFD.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            a: 0,
            x: 0,
            y: 0,
            s: 0xFC,
            pc: 0,
            p: Status::new(),
        }
    }

    /// Claim the next stack slot for a push, return the address to write.
    pub fn push(&mut self) -> u16 {
        let addr = STACK_BASE | u16::from(self.s);
        self.s = self.s.wrapping_sub(1);
        addr
    }

    /// Release the top stack slot, return the address to read.
    pub fn pop(&mut self) -> u16 {
        self.s = self.s.wrapping_add(1);
        STACK_BASE | u16::from(self.s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stack_wraps_within_page_one() {
        let mut regs = Registers::new();
        regs.s = 0x00;
        assert_eq!(regs.push(), 0x0100);
        assert_eq!(regs.s, 0xFF);
        assert_eq!(regs.pop(), 0x0100);
        assert_eq!(regs.s, 0x00);

        regs.s = 0xFF;
        assert_eq!(regs.pop(), 0x0100);
    }

    #[test]
    fn reset_state() {
        let regs = Registers::new();
        assert_eq!((regs.a, regs.x, regs.y), (0, 0, 0));
        assert_eq!(regs.s, 0xFC);
        assert_eq!(regs.p.0, 0x20);
    }
}
