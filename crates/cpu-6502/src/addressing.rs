//! 6502 addressing modes.
//!
//! Each mode consumes its operand bytes from PC and leaves the effective
//! address in `addr_abs` (or the branch displacement in `addr_rel`). The
//! return value is 1 when the mode may cost an extra cycle (an indexed
//! address crossed a page), otherwise 0.
//!
//! - Implicit: no operand (e.g., CLC, RTS, ASL A)
//! - Immediate: #$nn (literal value)
//! - Zero Page: $nn (8-bit address in page zero)
//! - Zero Page,X / Zero Page,Y: $nn,X (wraps in page zero)
//! - Relative: branch offset (-128 to +127)
//! - Absolute: $nnnn (16-bit address)
//! - Absolute,X / Absolute,Y: $nnnn,X (may cross page)
//! - Indirect: ($nnnn) (JMP only)
//! - Indexed Indirect: ($nn,X) (pointer in zero page indexed by X)
//! - Indirect Indexed: ($nn),Y (zero page pointer + Y)

use emu_core::Bus;

use crate::Mos6502;

/// Addressing mode of an instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddrMode {
    /// Implicit; shift and rotate use it for the accumulator form.
    Imp,
    /// Immediate.
    Imm,
    /// Zero page.
    Zp0,
    /// Zero page,X.
    Zpx,
    /// Zero page,Y.
    Zpy,
    /// Relative (branches).
    Rel,
    /// Absolute.
    Abs,
    /// Absolute,X.
    Abx,
    /// Absolute,Y.
    Aby,
    /// Indirect (JMP).
    Ind,
    /// Indexed indirect, ($nn,X).
    Izx,
    /// Indirect indexed, ($nn),Y.
    Izy,
}

impl AddrMode {
    /// Three-letter tag used in disassembly listings.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            AddrMode::Imp => "IMP",
            AddrMode::Imm => "IMM",
            AddrMode::Zp0 => "ZP0",
            AddrMode::Zpx => "ZPX",
            AddrMode::Zpy => "ZPY",
            AddrMode::Rel => "REL",
            AddrMode::Abs => "ABS",
            AddrMode::Abx => "ABX",
            AddrMode::Aby => "ABY",
            AddrMode::Ind => "IND",
            AddrMode::Izx => "IZX",
            AddrMode::Izy => "IZY",
        }
    }

    /// Number of operand bytes following the opcode.
    #[must_use]
    pub const fn operand_len(self) -> u16 {
        match self {
            AddrMode::Imp => 0,
            AddrMode::Imm
            | AddrMode::Zp0
            | AddrMode::Zpx
            | AddrMode::Zpy
            | AddrMode::Rel
            | AddrMode::Izx
            | AddrMode::Izy => 1,
            AddrMode::Abs | AddrMode::Abx | AddrMode::Aby | AddrMode::Ind => 2,
        }
    }
}

/// True if `a` and `b` lie in different 256-byte pages.
pub(crate) const fn page_crossed(a: u16, b: u16) -> bool {
    a & 0xFF00 != b & 0xFF00
}

impl Mos6502 {
    /// Read the byte at PC and advance PC.
    pub(crate) fn fetch_pc(&mut self, bus: &mut dyn Bus) -> u8 {
        let value = bus.read(self.regs.pc);
        self.regs.pc = self.regs.pc.wrapping_add(1);
        value
    }

    /// Read a little-endian word at PC and advance PC past it.
    fn fetch_pc_word(&mut self, bus: &mut dyn Bus) -> u16 {
        let lo = self.fetch_pc(bus);
        let hi = self.fetch_pc(bus);
        u16::from_le_bytes([lo, hi])
    }

    /// Read a pointer stored in zero page; the high byte wraps to $00.
    fn read_zp_word(bus: &mut dyn Bus, ptr: u8) -> u16 {
        let lo = bus.read(u16::from(ptr));
        let hi = bus.read(u16::from(ptr.wrapping_add(1)));
        u16::from_le_bytes([lo, hi])
    }

    /// Resolve `mode`, leaving the effective address in `addr_abs`.
    ///
    /// Returns 1 if the mode may add a cycle.
    pub(crate) fn resolve(&mut self, mode: AddrMode, bus: &mut dyn Bus) -> u8 {
        match mode {
            AddrMode::Imp => 0,
            AddrMode::Imm => {
                self.addr_abs = self.regs.pc;
                self.regs.pc = self.regs.pc.wrapping_add(1);
                0
            }
            AddrMode::Zp0 => {
                self.addr_abs = u16::from(self.fetch_pc(bus));
                0
            }
            AddrMode::Zpx => {
                let base = self.fetch_pc(bus);
                self.addr_abs = u16::from(base.wrapping_add(self.regs.x));
                0
            }
            AddrMode::Zpy => {
                let base = self.fetch_pc(bus);
                self.addr_abs = u16::from(base.wrapping_add(self.regs.y));
                0
            }
            AddrMode::Rel => {
                // Sign-extend so a wrapping add moves PC backwards.
                self.addr_rel = self.fetch_pc(bus) as i8 as u16;
                0
            }
            AddrMode::Abs => {
                self.addr_abs = self.fetch_pc_word(bus);
                0
            }
            AddrMode::Abx => self.indexed(bus, self.regs.x),
            AddrMode::Aby => self.indexed(bus, self.regs.y),
            AddrMode::Ind => {
                let ptr = self.fetch_pc_word(bus);
                let hi_ptr = if self.config.indirect_page_wrap && ptr & 0x00FF == 0x00FF {
                    ptr & 0xFF00
                } else {
                    ptr.wrapping_add(1)
                };
                let lo = bus.read(ptr);
                let hi = bus.read(hi_ptr);
                self.addr_abs = u16::from_le_bytes([lo, hi]);
                0
            }
            AddrMode::Izx => {
                let ptr = self.fetch_pc(bus).wrapping_add(self.regs.x);
                self.addr_abs = Self::read_zp_word(bus, ptr);
                0
            }
            AddrMode::Izy => {
                let ptr = self.fetch_pc(bus);
                let base = Self::read_zp_word(bus, ptr);
                self.addr_abs = base.wrapping_add(u16::from(self.regs.y));
                u8::from(page_crossed(base, self.addr_abs))
            }
        }
    }

    /// Absolute,X and Absolute,Y.
    fn indexed(&mut self, bus: &mut dyn Bus, index: u8) -> u8 {
        let base = self.fetch_pc_word(bus);
        self.addr_abs = base.wrapping_add(u16::from(index));
        u8::from(page_crossed(base, self.addr_abs))
    }
}
