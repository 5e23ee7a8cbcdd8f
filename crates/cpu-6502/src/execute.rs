//! 6502 operations.
//!
//! Each operation runs after its addressing mode has been resolved, so the
//! operand is either the accumulator (implicit mode) or the byte at
//! `addr_abs`. The return value is 1 when the operation takes the extra
//! page-cross cycle, which the clock engine ANDs with the addressing mode's
//! own signal.

use emu_core::Bus;

use crate::Mos6502;
use crate::addressing::{AddrMode, page_crossed};
use crate::flags::Flag;

/// IRQ/BRK vector.
pub const IRQ_VECTOR: u16 = 0xFFFE;

/// Operation of an instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Adc,
    And,
    Asl,
    Bcc,
    Bcs,
    Beq,
    Bit,
    Bmi,
    Bne,
    Bpl,
    Brk,
    Bvc,
    Bvs,
    Clc,
    Cld,
    Cli,
    Clv,
    Cmp,
    Cpx,
    Cpy,
    Dec,
    Dex,
    Dey,
    Eor,
    Inc,
    Inx,
    Iny,
    Jmp,
    Jsr,
    Lda,
    Ldx,
    Ldy,
    Lsr,
    Nop,
    Ora,
    Pha,
    Php,
    Pla,
    Plp,
    Rol,
    Ror,
    Rti,
    Rts,
    Sbc,
    Sec,
    Sed,
    Sei,
    Sta,
    Stx,
    Sty,
    Tax,
    Tay,
    Tsx,
    Txa,
    Txs,
    Tya,
    /// Undefined opcode: no effect beyond its tabulated cycles.
    Xxx,
}

/// Index register selector for loads, stores, compares and steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Reg {
    A,
    X,
    Y,
}

/// Shift and rotate kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shift {
    Asl,
    Lsr,
    Rol,
    Ror,
}

impl Mos6502 {
    /// Execute `op` against the already resolved operand.
    ///
    /// Returns 1 if the operation may add a cycle.
    pub(crate) fn execute(&mut self, op: Op, mode: AddrMode, bus: &mut dyn Bus) -> u8 {
        match op {
            Op::Adc => {
                let value = self.operand(mode, bus);
                self.add_with_carry(value);
                1
            }
            Op::Sbc => {
                let value = self.operand(mode, bus);
                self.add_with_carry(value ^ 0xFF);
                1
            }

            Op::And => self.logic(mode, bus, |a, m| a & m),
            Op::Ora => self.logic(mode, bus, |a, m| a | m),
            Op::Eor => self.logic(mode, bus, |a, m| a ^ m),

            Op::Bit => {
                let value = self.operand(mode, bus);
                self.regs.p.set(Flag::Z, self.regs.a & value == 0);
                self.regs.p.set(Flag::N, value & 0x80 != 0);
                self.regs.p.set(Flag::V, value & 0x40 != 0);
                0
            }

            Op::Cmp => {
                self.compare(Reg::A, mode, bus);
                1
            }
            Op::Cpx => {
                self.compare(Reg::X, mode, bus);
                0
            }
            Op::Cpy => {
                self.compare(Reg::Y, mode, bus);
                0
            }

            Op::Asl => self.shift(Shift::Asl, mode, bus),
            Op::Lsr => self.shift(Shift::Lsr, mode, bus),
            Op::Rol => self.shift(Shift::Rol, mode, bus),
            Op::Ror => self.shift(Shift::Ror, mode, bus),

            Op::Inc => {
                let value = bus.read(self.addr_abs).wrapping_add(1);
                self.regs.p.update_nz(value);
                bus.write(self.addr_abs, value);
                0
            }
            Op::Dec => {
                let value = bus.read(self.addr_abs).wrapping_sub(1);
                self.regs.p.update_nz(value);
                bus.write(self.addr_abs, value);
                0
            }
            Op::Inx => self.step_register(Reg::X, 1),
            Op::Iny => self.step_register(Reg::Y, 1),
            Op::Dex => self.step_register(Reg::X, 0xFF),
            Op::Dey => self.step_register(Reg::Y, 0xFF),

            Op::Lda => self.load(Reg::A, mode, bus),
            Op::Ldx => self.load(Reg::X, mode, bus),
            Op::Ldy => self.load(Reg::Y, mode, bus),
            Op::Sta => {
                bus.write(self.addr_abs, self.regs.a);
                0
            }
            Op::Stx => {
                bus.write(self.addr_abs, self.regs.x);
                0
            }
            Op::Sty => {
                bus.write(self.addr_abs, self.regs.y);
                0
            }

            Op::Bcc => self.branch(!self.regs.p.is_set(Flag::C)),
            Op::Bcs => self.branch(self.regs.p.is_set(Flag::C)),
            Op::Bne => self.branch(!self.regs.p.is_set(Flag::Z)),
            Op::Beq => self.branch(self.regs.p.is_set(Flag::Z)),
            Op::Bpl => self.branch(!self.regs.p.is_set(Flag::N)),
            Op::Bmi => self.branch(self.regs.p.is_set(Flag::N)),
            Op::Bvc => self.branch(!self.regs.p.is_set(Flag::V)),
            Op::Bvs => self.branch(self.regs.p.is_set(Flag::V)),

            Op::Clc => self.flag(Flag::C, false),
            Op::Cld => self.flag(Flag::D, false),
            Op::Cli => self.flag(Flag::I, false),
            Op::Clv => self.flag(Flag::V, false),
            Op::Sec => self.flag(Flag::C, true),
            Op::Sed => self.flag(Flag::D, true),
            Op::Sei => self.flag(Flag::I, true),

            Op::Pha => {
                self.push(bus, self.regs.a);
                0
            }
            Op::Pla => {
                self.regs.a = self.pull(bus);
                self.regs.p.update_nz(self.regs.a);
                0
            }
            Op::Php => {
                self.push(bus, self.regs.p.to_byte_brk());
                self.regs.p.set(Flag::B, false);
                self.regs.p.set(Flag::U, true);
                0
            }
            Op::Plp => {
                self.regs.p.0 = self.pull(bus);
                self.regs.p.set(Flag::U, true);
                0
            }

            Op::Jmp => {
                self.regs.pc = self.addr_abs;
                0
            }
            Op::Jsr => {
                let ret = self.regs.pc.wrapping_sub(1);
                self.push_word(bus, ret);
                self.regs.pc = self.addr_abs;
                0
            }
            Op::Rts => {
                self.regs.pc = self.pull_word(bus).wrapping_add(1);
                0
            }
            Op::Brk => {
                // Imm already stepped PC over the padding byte. I is set
                // before the push, so the pushed copy (and RTI) keeps it set.
                self.regs.p.set(Flag::I, true);
                self.push_word(bus, self.regs.pc);
                self.push(bus, self.regs.p.to_byte_brk());
                self.regs.p.set(Flag::B, false);
                self.regs.pc = Self::read_vector(bus, IRQ_VECTOR);
                0
            }
            Op::Rti => {
                self.regs.p.0 = self.pull(bus);
                self.regs.p.set(Flag::B, false);
                self.regs.p.set(Flag::U, false);
                self.regs.pc = self.pull_word(bus);
                0
            }

            Op::Tax => self.transfer(Reg::X, self.regs.a),
            Op::Tay => self.transfer(Reg::Y, self.regs.a),
            Op::Txa => self.transfer(Reg::A, self.regs.x),
            Op::Tsx => self.transfer(Reg::X, self.regs.s),
            Op::Tya => {
                self.regs.a = self.regs.y;
                0
            }
            Op::Txs => {
                self.regs.s = self.regs.x;
                0
            }

            Op::Nop => match self.opcode {
                0x1C | 0x3C | 0x5C | 0x7C | 0xDC | 0xFC => 1,
                _ => 0,
            },
            Op::Xxx => 0,
        }
    }

    /// Operand for the current instruction: A in implicit mode, else memory.
    fn operand(&self, mode: AddrMode, bus: &mut dyn Bus) -> u8 {
        match mode {
            AddrMode::Imp => self.regs.a,
            _ => bus.read(self.addr_abs),
        }
    }

    fn reg_mut(&mut self, reg: Reg) -> &mut u8 {
        match reg {
            Reg::A => &mut self.regs.a,
            Reg::X => &mut self.regs.x,
            Reg::Y => &mut self.regs.y,
        }
    }

    const fn reg(&self, reg: Reg) -> u8 {
        match reg {
            Reg::A => self.regs.a,
            Reg::X => self.regs.x,
            Reg::Y => self.regs.y,
        }
    }

    /// Binary add shared by ADC and SBC.
    fn add_with_carry(&mut self, value: u8) {
        let a = u16::from(self.regs.a);
        let m = u16::from(value);
        let sum = a + m + u16::from(self.regs.p.get(Flag::C));

        self.regs.p.set(Flag::C, sum > 0xFF);
        self.regs.p.set(Flag::V, !(a ^ m) & (a ^ sum) & 0x0080 != 0);
        self.regs.a = sum as u8;
        self.regs.p.update_nz(self.regs.a);
    }

    fn logic(&mut self, mode: AddrMode, bus: &mut dyn Bus, f: fn(u8, u8) -> u8) -> u8 {
        let value = self.operand(mode, bus);
        self.regs.a = f(self.regs.a, value);
        self.regs.p.update_nz(self.regs.a);
        1
    }

    fn load(&mut self, reg: Reg, mode: AddrMode, bus: &mut dyn Bus) -> u8 {
        let value = self.operand(mode, bus);
        *self.reg_mut(reg) = value;
        self.regs.p.update_nz(value);
        1
    }

    fn compare(&mut self, reg: Reg, mode: AddrMode, bus: &mut dyn Bus) {
        let lhs = u16::from(self.reg(reg));
        let rhs = u16::from(self.operand(mode, bus));
        let diff = lhs.wrapping_sub(rhs);
        self.regs.p.set(Flag::C, lhs >= rhs);
        self.regs.p.set(Flag::Z, diff & 0x00FF == 0);
        self.regs.p.set(Flag::N, diff & 0x0080 != 0);
    }

    /// INX/INY/DEX/DEY; `delta` is 1 or $FF.
    fn step_register(&mut self, reg: Reg, delta: u8) -> u8 {
        let value = self.reg(reg).wrapping_add(delta);
        *self.reg_mut(reg) = value;
        self.regs.p.update_nz(value);
        0
    }

    fn transfer(&mut self, dest: Reg, value: u8) -> u8 {
        *self.reg_mut(dest) = value;
        self.regs.p.update_nz(value);
        0
    }

    fn flag(&mut self, flag: Flag, value: bool) -> u8 {
        self.regs.p.set(flag, value);
        0
    }

    /// Shift or rotate A (implicit mode) or memory in place.
    fn shift(&mut self, kind: Shift, mode: AddrMode, bus: &mut dyn Bus) -> u8 {
        let value = self.operand(mode, bus);
        let carry_in = self.regs.p.get(Flag::C);
        let (result, carry_out) = match kind {
            Shift::Asl => (value << 1, value & 0x80 != 0),
            Shift::Lsr => (value >> 1, value & 0x01 != 0),
            Shift::Rol => ((value << 1) | carry_in, value & 0x80 != 0),
            Shift::Ror => ((value >> 1) | (carry_in << 7), value & 0x01 != 0),
        };
        self.regs.p.set(Flag::C, carry_out);
        self.regs.p.update_nz(result);

        match mode {
            AddrMode::Imp => self.regs.a = result,
            _ => bus.write(self.addr_abs, result),
        }
        0
    }

    /// Take a relative branch if `condition` holds.
    ///
    /// Charges the taken-branch cycles directly on the instruction.
    fn branch(&mut self, condition: bool) -> u8 {
        if condition {
            self.cycles += 1;
            let target = self.regs.pc.wrapping_add(self.addr_rel);
            if page_crossed(target, self.regs.pc) {
                self.cycles += 1;
            }
            self.addr_abs = target;
            self.regs.pc = target;
        }
        0
    }

    pub(crate) fn push(&mut self, bus: &mut dyn Bus, value: u8) {
        let addr = self.regs.push();
        bus.write(addr, value);
    }

    pub(crate) fn pull(&mut self, bus: &mut dyn Bus) -> u8 {
        let addr = self.regs.pop();
        bus.read(addr)
    }

    /// Push high byte then low byte.
    pub(crate) fn push_word(&mut self, bus: &mut dyn Bus, value: u16) {
        let [lo, hi] = value.to_le_bytes();
        self.push(bus, hi);
        self.push(bus, lo);
    }

    /// Pull low byte then high byte.
    fn pull_word(&mut self, bus: &mut dyn Bus) -> u16 {
        let lo = self.pull(bus);
        let hi = self.pull(bus);
        u16::from_le_bytes([lo, hi])
    }

    pub(crate) fn read_vector(bus: &mut dyn Bus, vector: u16) -> u16 {
        let lo = bus.read(vector);
        let hi = bus.read(vector.wrapping_add(1));
        u16::from_le_bytes([lo, hi])
    }
}
