use std::fmt;

use freepages::argv::{argify, copy_load_options, ArgBuffer, Argv};
use freepages::cmd::{self, Firmware, FirmwareError, Outcome, Request, Violation};
use freepages::config::{Limits, MAX_ARGS};

/// Records console output and release calls.
#[derive(Default)]
struct Recorder {
    console: String,
    released: Vec<(u64, u64)>,
    status: Option<usize>,
}

impl fmt::Write for Recorder {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.console.push_str(s);
        Ok(())
    }
}

impl Firmware for Recorder {
    fn free_pages(&mut self, addr: u64, pages: u64) -> Result<(), FirmwareError> {
        self.released.push((addr, pages));
        self.status.map_or(Ok(()), |code| Err(FirmwareError(code)))
    }
}

/// Load options the way the shell builds them: UCS-2LE, NUL terminated.
fn load_options(line: &str) -> Vec<u8> {
    line.encode_utf16()
        .chain(Some(0))
        .flat_map(u16::to_le_bytes)
        .collect()
}

fn invoke(options: &[u8], reported_len: usize, fw: &mut Recorder) -> Result<Outcome, FirmwareError> {
    let mut arglist: ArgBuffer = [0; MAX_ARGS + 1];
    copy_load_options(&mut arglist, options);
    let argv: Argv<'_> = argify(&mut arglist, reported_len);
    cmd::run(&argv, &Limits::default(), fw)
}

#[test]
fn frees_bs_code_segment() {
    let opts = load_options("FreePages 0000000020000000 5");
    let mut fw = Recorder::default();
    let r = invoke(&opts, opts.len(), &mut fw);
    assert_eq!(r, Ok(Outcome::Released(Request { phys_addr: 0x2000_0000, pages: 5 })));
    assert_eq!(fw.released, [(0x2000_0000, 5)]);
    assert_eq!(
        fw.console,
        "FreePages: __PhysAddr__ __PgCnt__\r\n\
         __PhysAddr__   0... 3fffffffffff\r\n\
         __PgCnt__     [0..f000000]\r\n\
         All numbers hex w/ no leading 0x\r\n\
         \r\n\
         FreePages(20000000,5)\r\n"
    );
}

#[test]
fn overstated_length_is_harmless() {
    let mut opts = load_options("FreePages 1000 1");
    // stale bytes after the terminator, and a length far past the buffer
    opts.extend_from_slice(&load_options("9 9 9"));
    let mut fw = Recorder::default();
    let r = invoke(&opts, 64 * 1024, &mut fw);
    assert_eq!(r, Ok(Outcome::Released(Request { phys_addr: 0x1000, pages: 1 })));
}

#[test]
fn missing_operand_is_usage() {
    let opts = load_options("FreePages 20000000");
    let mut fw = Recorder::default();
    assert_eq!(invoke(&opts, opts.len(), &mut fw), Ok(Outcome::Usage));
    assert!(fw.released.is_empty());
    assert!(fw.console.ends_with("Invalid argument count\r\n"));
}

#[test]
fn no_load_options_is_usage() {
    let mut fw = Recorder::default();
    assert_eq!(invoke(&[], 0, &mut fw), Ok(Outcome::Usage));
    assert!(fw.released.is_empty());
}

#[test]
fn out_of_range_operands_are_reported_not_released() {
    let opts = load_options("FreePages FFFFFFFFFFFFFF 5");
    let mut fw = Recorder::default();
    assert_eq!(
        invoke(&opts, opts.len(), &mut fw),
        Ok(Outcome::Rejected(Violation::ADDRESS))
    );

    let opts = load_options("FreePages 1000 10000000");
    let mut fw = Recorder::default();
    assert_eq!(
        invoke(&opts, opts.len(), &mut fw),
        Ok(Outcome::Rejected(Violation::PAGE_COUNT))
    );
    assert!(fw.released.is_empty());
}

#[test]
fn firmware_status_is_returned() {
    // EFI_NOT_FOUND
    let not_found = (1usize << (usize::BITS - 1)) | 14;
    let opts = load_options("FreePages 20000000 5");
    let mut fw = Recorder { status: Some(not_found), ..Recorder::default() };
    assert_eq!(invoke(&opts, opts.len(), &mut fw), Err(FirmwareError(not_found)));
    assert_eq!(fw.released.len(), 1);
    assert!(fw.console.contains("Free Pages Failed: 0x"));
}

#[test]
fn long_command_line_is_clipped_to_buffer() {
    let mut line = String::from("FreePages");
    while line.len() < 2 * MAX_ARGS {
        line.push_str(" 1");
    }
    let opts = load_options(&line);
    let mut fw = Recorder::default();
    assert_eq!(invoke(&opts, opts.len(), &mut fw), Ok(Outcome::Usage));
    assert!(fw.released.is_empty());
}
