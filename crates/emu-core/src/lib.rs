//! Core traits and types for instruction-level CPU emulation.
//!
//! The host owns memory; CPUs reach it through a weak [`BusLink`] and report
//! a [`BusError`] rather than touching a bus that was never wired in.

mod bus;
mod cpu;
mod error;
mod link;
mod observable;

pub use bus::{ADDRESS_SPACE, Bus, Ram};
pub use cpu::Cpu;
pub use error::BusError;
pub use link::BusLink;
pub use observable::{Observable, Value};
