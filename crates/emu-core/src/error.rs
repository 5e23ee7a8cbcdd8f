//! Bus access errors.

use thiserror::Error;

/// Failure to reach the bus a CPU is wired to.
///
/// These are configuration faults, not transient conditions: retrying the
/// same call without changing the wiring fails the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BusError {
    /// No bus was connected, or the host dropped it.
    #[error("bus is not connected")]
    NotConnected,

    /// The host holds a mutable borrow of the bus.
    #[error("bus is already borrowed by the host")]
    Busy,
}
