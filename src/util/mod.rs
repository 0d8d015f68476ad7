pub mod hex;

use core::fmt;
use core::fmt::Write as _;

/// Display adapter for a UCS-2 slice as handed over by the shell.
///
/// Output stops at the first NUL. Unpaired surrogates print as U+FFFD.
pub struct Ucs2<'a>(pub &'a [u16]);

impl fmt::Display for Ucs2<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let end = self.0.iter().position(|&c| c == 0).unwrap_or(self.0.len());
        for c in char::decode_utf16(self.0[..end].iter().copied()) {
            f.write_char(c.unwrap_or(char::REPLACEMENT_CHARACTER))?;
        }
        Ok(())
    }
}
