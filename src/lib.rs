#![cfg_attr(not(test), no_std)]

pub mod argv;
pub mod cmd;
pub mod config;
pub mod i18n;
pub mod mm;
#[cfg(target_os = "uefi")]
pub mod shell;
pub mod util;
