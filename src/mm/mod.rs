//! Firmware memory services.

#[cfg(target_os = "uefi")]
pub mod uefi;
