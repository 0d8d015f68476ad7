//! Hexadecimal operand conversion.

const SPACE: u16 = b' ' as u16;

#[inline]
fn hex_digit(c: u16) -> Option<u64> {
    match c {
        0x30..=0x39 => Some((c - 0x30) as u64),
        0x41..=0x46 => Some((c - 0x41 + 10) as u64),
        0x61..=0x66 => Some((c - 0x61 + 10) as u64),
        _ => None,
    }
}

/// Convert a UCS-2 hex string to an unsigned integer.
///
/// Leading spaces are skipped and conversion stops at NUL or at the first
/// character that is not a hex digit, returning whatever was accumulated.
/// No `0x` prefix is recognized: `"0x10"` yields 0. Digits beyond the 16th
/// shift the high bits out.
pub fn xtoi(s: &[u16]) -> u64 {
    let mut v = 0u64;
    for c in s.iter().copied().skip_while(|&c| c == SPACE) {
        match hex_digit(c) {
            Some(d) => v = (v << 4) | d,
            None => break,
        }
    }
    v
}
