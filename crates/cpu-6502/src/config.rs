//! CPU configuration.

/// Options that change observable CPU behavior.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CpuConfig {
    /// Reproduce the NMOS `JMP ($xxFF)` bug: the high byte of the target is
    /// fetched from $xx00 instead of crossing into the next page.
    ///
    /// Off by default, in which case the pointer is read as a plain 16-bit
    /// little-endian word.
    pub indirect_page_wrap: bool,
}
