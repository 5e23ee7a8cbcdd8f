//! Non-owning link from a CPU to the bus it runs on.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::{Bus, BusError};

/// A weak, optional reference to a shared bus.
///
/// The host owns the bus (`Rc<RefCell<B>>`); the CPU only keeps a `Weak`.
/// Every access upgrades the link for the duration of one call, so the CPU
/// never extends the bus's lifetime and never touches a bus that is gone.
/// Cloning a link yields another weak handle to the same bus.
#[derive(Clone, Default)]
pub struct BusLink {
    bus: Option<Weak<RefCell<dyn Bus>>>,
}

impl BusLink {
    /// Create an unconnected link.
    #[must_use]
    pub const fn new() -> Self {
        Self { bus: None }
    }

    /// Point the link at `bus`, replacing any previous connection.
    pub fn connect<B: Bus + 'static>(&mut self, bus: &Rc<RefCell<B>>) {
        let shared: Rc<RefCell<dyn Bus>> = bus.clone();
        self.bus = Some(Rc::downgrade(&shared));
    }

    /// Drop the connection.
    pub fn disconnect(&mut self) {
        self.bus = None;
    }

    /// True if a bus is connected and still alive.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.bus.as_ref().is_some_and(|weak| weak.strong_count() > 0)
    }

    /// Run `f` with exclusive access to the bus.
    pub fn with<R>(&self, f: impl FnOnce(&mut dyn Bus) -> R) -> Result<R, BusError> {
        let Some(bus) = self.bus.as_ref().and_then(Weak::upgrade) else {
            log::error!("bus is not connected");
            return Err(BusError::NotConnected);
        };
        let Ok(mut guard) = bus.try_borrow_mut() else {
            log::error!("bus is already borrowed");
            return Err(BusError::Busy);
        };
        Ok(f(&mut *guard))
    }
}

impl std::fmt::Debug for BusLink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BusLink")
            .field("connected", &self.is_connected())
            .finish()
    }
}
