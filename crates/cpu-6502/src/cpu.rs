//! 6502 CPU: clock engine and interrupt controller.
//!
//! Instruction-level emulation. On the first tick of an instruction the
//! opcode is fetched, decoded, resolved and executed in one go, and the
//! instruction's cycle cost is loaded into a countdown. The remaining ticks
//! only count down, so `complete()` tells the host when the next tick will
//! fetch.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use emu_core::{Bus, BusError, BusLink, Cpu, Observable, Value};

use crate::execute::IRQ_VECTOR;
use crate::flags::Flag;
use crate::{CpuConfig, Registers, disasm, opcodes};

/// Reset vector.
pub const RESET_VECTOR: u16 = 0xFFFC;

/// NMI vector.
pub const NMI_VECTOR: u16 = 0xFFFA;

/// Cycles charged for the reset sequence.
const RESET_CYCLES: u8 = 8;

/// Cycles charged for IRQ and NMI servicing.
const INTERRUPT_CYCLES: u8 = 7;

/// The MOS 6502 CPU.
///
/// The CPU does not own memory. The host connects a shared bus with
/// [`Cpu::connect`] and every bus-touching call fails with
/// [`BusError::NotConnected`] until it does.
#[derive(Debug)]
pub struct Mos6502 {
    /// CPU registers.
    pub regs: Registers,

    /// Effective address produced by the last addressing mode.
    pub(crate) addr_abs: u16,

    /// Sign-extended branch displacement.
    pub(crate) addr_rel: u16,

    /// Opcode of the current instruction.
    pub(crate) opcode: u8,

    /// Cycles left in the current instruction (0 = at boundary).
    pub(crate) cycles: u8,

    /// Total cycles clocked.
    cycle_count: u64,

    pub(crate) config: CpuConfig,

    bus: BusLink,
}

impl Default for Mos6502 {
    fn default() -> Self {
        Self::new()
    }
}

impl Mos6502 {
    /// Create an unconnected 6502 with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(CpuConfig::default())
    }

    /// Create an unconnected 6502 with the given configuration.
    #[must_use]
    pub fn with_config(config: CpuConfig) -> Self {
        Self {
            regs: Registers::new(),
            addr_abs: 0,
            addr_rel: 0,
            opcode: 0,
            cycles: 0,
            cycle_count: 0,
            config,
            bus: BusLink::new(),
        }
    }

    /// Configuration the CPU was built with.
    #[must_use]
    pub fn config(&self) -> CpuConfig {
        self.config
    }

    /// True if a live bus is connected.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.bus.is_connected()
    }

    /// Drop the bus link. Bus-touching calls fail until the next `connect`.
    pub fn disconnect(&mut self) {
        self.bus.disconnect();
    }

    /// Opcode of the instruction in flight (or the last one executed).
    #[must_use]
    pub fn opcode(&self) -> u8 {
        self.opcode
    }

    /// Cycles left before the next fetch.
    #[must_use]
    pub fn cycles_remaining(&self) -> u8 {
        self.cycles
    }

    /// Clock until the current instruction (or pending reset/interrupt
    /// sequence) completes. Returns the number of ticks used.
    pub fn step(&mut self) -> Result<u32, BusError> {
        let mut ticks = 0;
        loop {
            self.clock()?;
            ticks += 1;
            if self.complete() {
                return Ok(ticks);
            }
        }
    }

    /// Disassemble `start..=stop` from the connected bus.
    pub fn disassemble(&self, start: u16, stop: u16) -> Result<BTreeMap<u16, String>, BusError> {
        self.bus.with(|bus| disasm::disassemble(bus, start, stop))
    }

    /// Run `f` against the connected bus.
    fn with_bus<R>(&mut self, f: impl FnOnce(&mut Self, &mut dyn Bus) -> R) -> Result<R, BusError> {
        let link = self.bus.clone();
        link.with(|bus| f(self, bus))
    }

    /// One clock tick against `bus`.
    fn tick(&mut self, bus: &mut dyn Bus) {
        if self.cycles == 0 {
            self.opcode = bus.read(self.regs.pc);
            self.regs.p.set(Flag::U, true);
            self.regs.pc = self.regs.pc.wrapping_add(1);

            let ins = opcodes::lookup(self.opcode);
            self.cycles = ins.cycles;
            let addr_extra = self.resolve(ins.mode, bus);
            let op_extra = self.execute(ins.op, ins.mode, bus);
            self.cycles += addr_extra & op_extra;
            self.regs.p.set(Flag::U, true);

            log::trace!(
                "cycle_count:{} instruction:{} cycles:{} a:{:02X} x:{:02X} y:{:02X} p:{:02X} s:{:02X} pc:{:04X}",
                self.cycle_count,
                ins.name,
                self.cycles,
                self.regs.a,
                self.regs.x,
                self.regs.y,
                self.regs.p.0,
                self.regs.s,
                self.regs.pc
            );
        }

        self.cycle_count += 1;
        self.cycles -= 1;
    }

    fn reset_on(&mut self, bus: &mut dyn Bus) {
        let pc = Self::read_vector(bus, RESET_VECTOR);
        self.regs = Registers::new();
        self.regs.pc = pc;
        self.addr_abs = 0;
        self.addr_rel = 0;
        self.opcode = 0;
        self.cycles = RESET_CYCLES;
        log::debug!("reset: pc={pc:04X}");
    }

    /// Shared IRQ/NMI sequence: save context, vector PC.
    fn interrupt(&mut self, bus: &mut dyn Bus, vector: u16) {
        self.push_word(bus, self.regs.pc);
        self.regs.p.set(Flag::B, false);
        self.regs.p.set(Flag::I, true);
        self.regs.p.set(Flag::U, true);
        self.push(bus, self.regs.p.to_byte_irq());
        self.regs.pc = Self::read_vector(bus, vector);
        self.cycles = INTERRUPT_CYCLES;
    }
}

// ============================================================================
// Trait implementations
// ============================================================================

impl Cpu for Mos6502 {
    type Registers = Registers;

    fn connect<B: Bus + 'static>(&mut self, bus: &Rc<RefCell<B>>) {
        self.bus.connect(bus);
    }

    fn clock(&mut self) -> Result<(), BusError> {
        self.with_bus(Self::tick)
    }

    fn complete(&self) -> bool {
        self.cycles == 0
    }

    fn pc(&self) -> u16 {
        self.regs.pc
    }

    fn registers(&self) -> Self::Registers {
        self.regs
    }

    fn cycle_count(&self) -> u64 {
        self.cycle_count
    }

    fn irq(&mut self) -> Result<bool, BusError> {
        self.with_bus(|cpu, bus| {
            if cpu.regs.p.is_set(Flag::I) {
                log::debug!("irq masked at pc={:04X}", cpu.regs.pc);
                return false;
            }
            log::debug!("irq at pc={:04X}", cpu.regs.pc);
            cpu.interrupt(bus, IRQ_VECTOR);
            true
        })
    }

    fn nmi(&mut self) -> Result<(), BusError> {
        self.with_bus(|cpu, bus| {
            log::debug!("nmi at pc={:04X}", cpu.regs.pc);
            cpu.interrupt(bus, NMI_VECTOR);
        })
    }

    fn reset(&mut self) -> Result<(), BusError> {
        self.with_bus(Self::reset_on)
    }
}

impl Observable for Mos6502 {
    fn query(&self, path: &str) -> Option<Value> {
        match path {
            "pc" => Some(self.regs.pc.into()),
            "a" => Some(self.regs.a.into()),
            "x" => Some(self.regs.x.into()),
            "y" => Some(self.regs.y.into()),
            "s" | "sp" => Some(self.regs.s.into()),
            "p" | "status" => Some(self.regs.p.0.into()),
            "flags.c" | "c" => Some(self.regs.p.is_set(Flag::C).into()),
            "flags.z" | "z" => Some(self.regs.p.is_set(Flag::Z).into()),
            "flags.i" | "i" => Some(self.regs.p.is_set(Flag::I).into()),
            "flags.d" | "d" => Some(self.regs.p.is_set(Flag::D).into()),
            "flags.b" | "b" => Some(self.regs.p.is_set(Flag::B).into()),
            "flags.v" | "v" => Some(self.regs.p.is_set(Flag::V).into()),
            "flags.n" | "n" => Some(self.regs.p.is_set(Flag::N).into()),
            "cycles" => Some(self.cycle_count.into()),
            "cycles_remaining" => Some(self.cycles.into()),
            "opcode" => Some(self.opcode.into()),
            "instruction" => Some(opcodes::lookup(self.opcode).name.into()),
            "addr_abs" => Some(self.addr_abs.into()),
            _ => None,
        }
    }

    fn query_paths(&self) -> &'static [&'static str] {
        &[
            "pc",
            "a",
            "x",
            "y",
            "s",
            "p",
            "flags.c",
            "flags.z",
            "flags.i",
            "flags.d",
            "flags.b",
            "flags.v",
            "flags.n",
            "cycles",
            "cycles_remaining",
            "opcode",
            "instruction",
            "addr_abs",
        ]
    }
}
