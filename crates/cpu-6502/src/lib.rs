//! Instruction-level MOS 6502 CPU interpreter.
//!
//! Each `clock()` is one CPU cycle. The whole instruction executes on its
//! first cycle; the rest of its cost (base cycles plus page-cross and branch
//! penalties) is counted down before the next fetch. Decimal mode is not
//! implemented and undocumented opcodes are timed no-ops.

mod addressing;
mod config;
mod cpu;
mod disasm;
mod execute;
mod flags;
mod opcodes;
mod registers;

pub use addressing::AddrMode;
pub use config::CpuConfig;
pub use cpu::{Mos6502, NMI_VECTOR, RESET_VECTOR};
pub use disasm::disassemble;
pub use emu_core::{Bus, BusError, Cpu, Observable, Ram, Value};
pub use execute::{IRQ_VECTOR, Op};
pub use flags::{Flag, Status};
pub use opcodes::{INSTRUCTIONS, Instruction, lookup};
pub use registers::{Registers, STACK_BASE};
