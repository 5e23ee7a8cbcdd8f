//! Memory bus interface and a flat RAM implementation.

/// Size of the full 16-bit address space.
pub const ADDRESS_SPACE: usize = 0x1_0000;

/// Memory bus interface.
///
/// CPUs access memory through this trait. Reads and writes complete
/// immediately; there is no wait state, retry or partial transfer.
pub trait Bus {
    /// Read a byte from the given address.
    ///
    /// Addresses the backing store does not cover read as 0.
    fn read(&mut self, address: u16) -> u8;

    /// Write a byte to the given address.
    ///
    /// Writes to addresses the backing store does not cover are dropped.
    fn write(&mut self, address: u16, value: u8);

    /// Clear the backing store to zero.
    fn reset(&mut self);
}

/// Flat RAM bus.
///
/// Defaults to the full 64K address space. A smaller store can be built with
/// [`Ram::with_size`], in which case everything above it is unmapped.
#[derive(Debug, Clone)]
pub struct Ram {
    data: Vec<u8>,
}

impl Default for Ram {
    fn default() -> Self {
        Self::new()
    }
}

impl Ram {
    /// Create a zeroed 64K RAM.
    #[must_use]
    pub fn new() -> Self {
        Self::with_size(ADDRESS_SPACE)
    }

    /// Create a zeroed RAM covering `len` bytes from address 0.
    #[must_use]
    pub fn with_size(len: usize) -> Self {
        Self {
            data: vec![0; len.min(ADDRESS_SPACE)],
        }
    }

    /// Number of mapped bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Copy a program image into memory starting at `address`.
    ///
    /// The destination address wraps at $FFFF. Bytes landing outside the
    /// mapped range are dropped.
    pub fn load(&mut self, address: u16, bytes: &[u8]) {
        let mut addr = address;
        for &byte in bytes {
            self.write(addr, byte);
            addr = addr.wrapping_add(1);
        }
    }

    /// Read a byte without going through the bus trait.
    #[must_use]
    pub fn peek(&self, address: u16) -> u8 {
        self.data.get(usize::from(address)).copied().unwrap_or(0)
    }
}

impl Bus for Ram {
    fn read(&mut self, address: u16) -> u8 {
        self.peek(address)
    }

    fn write(&mut self, address: u16, value: u8) {
        if let Some(slot) = self.data.get_mut(usize::from(address)) {
            *slot = value;
        }
    }

    fn reset(&mut self) {
        self.data.fill(0);
    }
}
