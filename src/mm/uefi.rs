//! Boot Services page release and console output behind the `Firmware` trait.

use core::fmt;

use uefi::prelude::Boot;
use uefi::table::SystemTable;
use uefi::Status;

use crate::cmd::{Firmware, FirmwareError};

/// `Firmware` backed by the running system table.
pub struct BootFirmware<'a> {
    system_table: &'a mut SystemTable<Boot>,
}

impl<'a> BootFirmware<'a> {
    pub fn new(system_table: &'a mut SystemTable<Boot>) -> Self {
        Self { system_table }
    }
}

impl fmt::Write for BootFirmware<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.system_table.stdout().write_str(s)
    }
}

impl Firmware for BootFirmware<'_> {
    fn free_pages(&mut self, addr: u64, pages: u64) -> Result<(), FirmwareError> {
        let count = usize::try_from(pages).map_err(|_| FirmwareError(Status::INVALID_PARAMETER.0))?;
        // SAFETY: the caller names the range; firmware validates that it was
        // allocated and reports NOT_FOUND otherwise.
        unsafe { self.system_table.boot_services().free_pages(addr, count) }
            .map_err(|e| FirmwareError(e.status().0))
    }
}
