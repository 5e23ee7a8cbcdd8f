//! CPU core trait.

use std::cell::RefCell;
use std::rc::Rc;

use crate::{Bus, BusError};

/// A CPU core driven one clock tick at a time.
///
/// The host owns the bus and wires it in with [`Cpu::connect`]. Every call
/// that touches memory reports [`BusError`] instead of proceeding when the
/// bus is missing.
///
/// CPUs expose their internal state for observation and debugging.
pub trait Cpu {
    /// The type used for register inspection.
    type Registers;

    /// Attach the CPU to a host-owned bus. The CPU keeps only a weak link.
    fn connect<B: Bus + 'static>(&mut self, bus: &Rc<RefCell<B>>);

    /// Advance the CPU by one clock cycle.
    fn clock(&mut self) -> Result<(), BusError>;

    /// True when the current instruction has used all of its cycles and the
    /// next tick will fetch a new opcode.
    fn complete(&self) -> bool;

    /// Returns the current program counter.
    fn pc(&self) -> u16;

    /// Returns a snapshot of all registers for inspection.
    fn registers(&self) -> Self::Registers;

    /// Total cycles clocked since the CPU was created.
    fn cycle_count(&self) -> u64;

    /// Request a maskable interrupt. Returns true if it was serviced.
    fn irq(&mut self) -> Result<bool, BusError>;

    /// Request a non-maskable interrupt.
    fn nmi(&mut self) -> Result<(), BusError>;

    /// Reset the CPU through its reset vector.
    fn reset(&mut self) -> Result<(), BusError>;
}
