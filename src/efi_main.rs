#![cfg_attr(target_os = "uefi", no_std)]
#![cfg_attr(target_os = "uefi", no_main)]

//! `FreePages __PhysAddr__ __PgCnt__` for the UEFI shell.
//!
//! Example, returning a 5 page BS_Code segment at 0x20000000:
//!
//! ```text
//! FS1:\> FreePages 20000000 5
//! FreePages: __PhysAddr__ __PgCnt__
//! __PhysAddr__   0... 3fffffffffff
//! __PgCnt__     [0..f000000]
//! All numbers hex w/ no leading 0x
//!
//! FreePages(20000000,5)
//! ```

#[cfg(target_os = "uefi")]
use uefi::prelude::*;

#[cfg(target_os = "uefi")]
use freepages::{
    argv::{argify, ArgBuffer, Argv},
    cmd::{self, FirmwareError},
    config::{self, Limits, MAX_ARGS},
    mm::uefi::BootFirmware,
    shell,
    util::Ucs2,
};

/// UEFI application entry point.
///
/// Bad input is reported and still returns `SUCCESS`; a failed `FreePages`
/// call returns the firmware's status.
#[cfg(target_os = "uefi")]
#[entry]
fn efi_main(image: Handle, mut system_table: SystemTable<Boot>) -> Status {
    if uefi_services::init(&mut system_table).is_err() {
        return Status::LOAD_ERROR;
    }
    log::set_max_level(config::log_level());

    let mut arglist: ArgBuffer = [0; MAX_ARGS + 1];
    let len = match shell::load_options(image, &system_table, &mut arglist) {
        Ok(len) => len,
        Err(e) => {
            log::debug!("LoadedImage unavailable: {:?}", e.status());
            0
        }
    };
    log::debug!("arglist = <{}>", Ucs2(&arglist));

    let argv: Argv<'_> = argify(&mut arglist, len);
    let mut fw = BootFirmware::new(&mut system_table);
    match cmd::run(&argv, &Limits::default(), &mut fw) {
        Ok(_) => Status::SUCCESS,
        Err(FirmwareError(code)) => Status(code),
    }
}

#[cfg(not(target_os = "uefi"))]
fn main() {
    eprintln!("freepages is a UEFI shell application; build it for a *-unknown-uefi target");
    std::process::exit(1);
}
