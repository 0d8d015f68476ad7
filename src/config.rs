//! Compile-time limits and the runtime range configuration.
//!
//! The constants mirror the Boot Services `FreePages` syntax accepted from the
//! shell. `Limits` carries the ranges actually enforced so a caller can narrow
//! them without touching the dispatcher.

use static_assertions::{const_assert, const_assert_eq};

/// Token capacity of the command line, including the sentinel slot.
pub const MAX_ARGS: usize = 256;

/// Largest page count accepted on the command line.
pub const MAX_NUM_PAGES: u64 = 0x0000_0000_0F00_0000;

/// Width of the physical address space the tool will hand to firmware.
pub const PHYS_ADDR_BITS: u32 = 46;

/// Highest physical address accepted on the command line.
pub const MAX_ADDR: u64 = (1u64 << PHYS_ADDR_BITS) - 1;

/// Size of a UEFI page in bytes.
pub const PAGE_SIZE: u64 = 4096;

const_assert!(MAX_ARGS >= 4);
const_assert!(PHYS_ADDR_BITS < 64);
const_assert_eq!(MAX_ADDR, 0x3FFF_FFFF_FFFF);

/// Ranges enforced on the parsed operands. Both bounds are inclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Limits {
    pub max_pages: u64,
    pub max_addr: u64,
}

impl Limits {
    pub const fn new(max_pages: u64, max_addr: u64) -> Self {
        Self { max_pages, max_addr }
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self::new(MAX_NUM_PAGES, MAX_ADDR)
    }
}

/// Log level used by the application at startup.
#[inline(always)]
pub fn log_level() -> log::LevelFilter {
    if cfg!(feature = "verbose") {
        log::LevelFilter::Trace
    } else {
        log::LevelFilter::Info
    }
}
