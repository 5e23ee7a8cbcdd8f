//! 6502 processor status register (P).
//!
//! The status register contains flags that reflect the result of operations
//! and control CPU behavior. Opcode bodies go through [`Status`] rather than
//! doing bit arithmetic on the raw byte.

/// A named bit in the status register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Flag {
    /// Carry - set if operation resulted in carry / no borrow.
    C = 0x01,
    /// Zero - set if result is zero.
    Z = 0x02,
    /// Interrupt disable - when set, IRQ requests are ignored.
    I = 0x04,
    /// Decimal mode. Stored but has no arithmetic effect here.
    D = 0x08,
    /// Break - only meaningful in a pushed copy of the status byte.
    B = 0x10,
    /// Unused bit - forced to 1.
    U = 0x20,
    /// Overflow - set if signed arithmetic overflowed.
    V = 0x40,
    /// Negative - set if result has bit 7 set.
    N = 0x80,
}

impl Flag {
    #[must_use]
    pub const fn bits(self) -> u8 {
        self as u8
    }
}

/// Processor status register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Status(pub u8);

impl Default for Status {
    fn default() -> Self {
        Self::new()
    }
}

impl Status {
    /// Status after reset: only the unused bit set.
    #[must_use]
    pub const fn new() -> Self {
        Self(Flag::U.bits())
    }

    /// Flag as 0 or 1, for feeding carry into arithmetic.
    #[must_use]
    pub const fn get(self, flag: Flag) -> u8 {
        self.is_set(flag) as u8
    }

    #[must_use]
    pub const fn is_set(self, flag: Flag) -> bool {
        self.0 & flag.bits() != 0
    }

    /// Set or clear a flag.
    pub fn set(&mut self, flag: Flag, value: bool) {
        if value {
            self.0 |= flag.bits();
        } else {
            self.0 &= !flag.bits();
        }
    }

    /// Update N and Z flags based on a value.
    pub fn update_nz(&mut self, value: u8) {
        self.set(Flag::Z, value == 0);
        self.set(Flag::N, value & 0x80 != 0);
    }

    /// Copy pushed by PHP and BRK (break and unused both set).
    #[must_use]
    pub const fn to_byte_brk(self) -> u8 {
        self.0 | Flag::B.bits() | Flag::U.bits()
    }

    /// Copy pushed by IRQ and NMI (unused set, break clear).
    #[must_use]
    pub const fn to_byte_irq(self) -> u8 {
        (self.0 | Flag::U.bits()) & !Flag::B.bits()
    }
}
