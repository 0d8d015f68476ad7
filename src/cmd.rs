//! `FreePages __PhysAddr__ __PgCnt__`
//!
//! Validates the two hex operands and hands them to Boot Services. Bad input
//! is reported on the console and still ends the command successfully; only a
//! failure of the firmware call itself is returned as an error.

use core::fmt::{self, Write as _};

use bitflags::bitflags;

use crate::argv::Argv;
use crate::config::{Limits, PAGE_SIZE};
use crate::i18n::{self, key, Lang};
use crate::util::hex::xtoi;
use crate::util::Ucs2;

/// Number of tokens the command takes, its own name included.
pub const ARGC: usize = 3;

/// Status code returned by a failed firmware call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FirmwareError(pub usize);

impl fmt::Display for FirmwareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

/// Host side of the command: a console to write to and the page release call.
pub trait Firmware: fmt::Write {
    /// Return `pages` pages starting at physical address `addr` to the free pool.
    fn free_pages(&mut self, addr: u64, pages: u64) -> Result<(), FirmwareError>;
}

/// Parsed operands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Request {
    pub phys_addr: u64,
    pub pages: u64,
}

bitflags! {
    /// Range checks that failed for a request.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct Violation: u8 {
        const PAGE_COUNT = 1 << 0;
        const ADDRESS = 1 << 1;
    }
}

impl Request {
    /// Parse operands from tokens 1 and 2. Returns `None` unless exactly
    /// [`ARGC`] tokens are present.
    pub fn from_argv<const N: usize>(argv: &Argv<'_, N>) -> Option<Self> {
        if argv.len() != ARGC {
            return None;
        }
        Some(Self {
            phys_addr: xtoi(argv.get(1)?),
            pages: xtoi(argv.get(2)?),
        })
    }

    /// Every range check is evaluated; an empty set means the request may go
    /// to firmware.
    pub fn check(&self, limits: &Limits) -> Violation {
        let mut v = Violation::empty();
        if self.pages > limits.max_pages {
            v |= Violation::PAGE_COUNT;
        }
        if self.phys_addr > limits.max_addr {
            v |= Violation::ADDRESS;
        }
        v
    }

    /// Last byte covered by the request, if it fits in 64 bits.
    pub fn end_addr(&self) -> Option<u64> {
        self.pages
            .checked_mul(PAGE_SIZE)
            .and_then(|len| self.phys_addr.checked_add(len))
            .map(|end| end.saturating_sub(1))
    }
}

/// Successful terminal states of [`run`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Wrong number of arguments.
    Usage,
    /// Operands out of range; firmware was not called.
    Rejected(Violation),
    /// Firmware accepted the request.
    Released(Request),
}

/// Print the syntax banner.
pub fn usage<W: fmt::Write>(out: &mut W, lang: Lang, limits: &Limits) {
    let _ = out.write_str(i18n::t(lang, key::USAGE));
    let _ = write!(out, "{}{:x}\r\n", i18n::t(lang, key::USAGE_ADDR), limits.max_addr);
    let _ = write!(out, "{}{:x}]\r\n", i18n::t(lang, key::USAGE_PAGES), limits.max_pages);
    let _ = out.write_str(i18n::t(lang, key::USAGE_HEX));
    let _ = out.write_str("\r\n");
}

/// Run the command over an already split command line.
pub fn run<F: Firmware, const N: usize>(
    argv: &Argv<'_, N>,
    limits: &Limits,
    fw: &mut F,
) -> Result<Outcome, FirmwareError> {
    let lang = i18n::detect_lang();
    usage(fw, lang, limits);

    if argv.truncated() {
        log::debug!("command line truncated at {} arguments", argv.len());
        let _ = write!(fw, "{}{}\r\n", i18n::t(lang, key::TRUNCATED), argv.len());
    }

    log::debug!("argc = {}", argv.len());
    for (i, arg) in argv.iter().enumerate() {
        log::debug!("argv[{}] = <{}>", i, Ucs2(arg));
    }

    let req = match Request::from_argv(argv) {
        Some(req) => req,
        None => {
            let _ = fw.write_str(i18n::t(lang, key::BAD_ARGC));
            return Ok(Outcome::Usage);
        }
    };

    let violations = req.check(limits);
    if violations.contains(Violation::PAGE_COUNT) {
        let _ = fw.write_str(i18n::t(lang, key::BAD_PAGES));
    }
    if violations.contains(Violation::ADDRESS) {
        let _ = fw.write_str(i18n::t(lang, key::BAD_ADDR));
    }
    if !violations.is_empty() {
        log::debug!("rejected {:?}: {} error(s)", req, violations.bits().count_ones());
        return Ok(Outcome::Rejected(violations));
    }

    let _ = write!(fw, "FreePages({:x},{})\r\n", req.phys_addr, req.pages);
    if let Some(end) = req.end_addr() {
        log::debug!("releasing {:#x}..={:#x}", req.phys_addr, end);
    }

    if let Err(e) = fw.free_pages(req.phys_addr, req.pages) {
        log::debug!("FreePages({:#x}, {}) failed: {}", req.phys_addr, req.pages, e);
        let _ = write!(fw, "{}{}\r\n", i18n::t(lang, key::FAILED), e);
        return Err(e);
    }

    Ok(Outcome::Released(req))
}
