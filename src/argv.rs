//! Command-line splitting over the shell's load-options buffer.
//!
//! The UEFI shell passes the command line as UCS-2 text together with a byte
//! length that is frequently larger than the real content. The text is always
//! NUL terminated where the arguments stop, so the scan trusts the NUL and
//! uses the length only as a hard bound.
//!
//! Tokens are delimited in place: every separator that ends a token is
//! overwritten with NUL and the token is handed out as a view into the same
//! buffer. Nothing is copied and nothing is allocated.

use crate::config::MAX_ARGS;

pub const CHAR_NULL: u16 = 0;
pub const CHAR_SPACE: u16 = b' ' as u16;

/// Backing storage for the raw command line.
pub type ArgBuffer = [u16; MAX_ARGS + 1];

/// Tokens found by [`argify`].
///
/// `N` is the slot capacity; the last slot is reserved for the sentinel so at
/// most `N - 1` tokens are kept and `get(len())` is always `None`.
pub struct Argv<'a, const N: usize = MAX_ARGS> {
    buf: &'a [u16],
    spans: [(usize, usize); N],
    argc: usize,
    truncated: bool,
}

impl<'a, const N: usize> Argv<'a, N> {
    /// Number of tokens.
    #[inline]
    pub fn len(&self) -> usize {
        self.argc
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.argc == 0
    }

    /// Token `index`, without its terminator.
    pub fn get(&self, index: usize) -> Option<&'a [u16]> {
        if index >= self.argc {
            return None;
        }
        let (start, end) = self.spans[index];
        Some(&self.buf[start..end])
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a [u16]> + '_ {
        (0..self.argc).filter_map(move |i| self.get(i))
    }

    /// True when input was dropped because the token capacity was reached.
    #[inline]
    pub fn truncated(&self) -> bool {
        self.truncated
    }

    /// The delimited buffer the tokens point into.
    #[inline]
    pub fn buffer(&self) -> &'a [u16] {
        self.buf
    }
}

/// Split `buf` into space separated tokens.
///
/// `byte_len` is the length reported by firmware in bytes. The scan never
/// touches an element at or beyond `byte_len / 2` (nor beyond `buf.len()`),
/// and ends early at the first NUL. A token that runs into the bound is not
/// followed by a written NUL; its view still ends at the bound.
///
/// Once `N - 1` tokens have been delimited by a separator the scan stops and
/// the result is marked truncated.
pub fn argify<const N: usize>(buf: &mut [u16], byte_len: usize) -> Argv<'_, N> {
    let bound = (byte_len >> 1).min(buf.len());
    let cap = N.saturating_sub(1);
    let mut spans = [(0usize, 0usize); N];
    let mut argc = 0;
    let mut truncated = false;
    let mut i = 0;

    loop {
        while i < bound && buf[i] == CHAR_SPACE {
            i += 1;
        }
        if i == bound || buf[i] == CHAR_NULL {
            break;
        }
        if argc == cap {
            // zero capacity, nothing can be kept
            truncated = true;
            break;
        }

        let start = i;
        i += 1;
        while i < bound && buf[i] != CHAR_SPACE && buf[i] != CHAR_NULL {
            i += 1;
        }
        spans[argc] = (start, i);
        argc += 1;

        if i == bound || buf[i] == CHAR_NULL {
            break;
        }
        buf[i] = CHAR_NULL;
        i += 1;

        if argc == cap {
            truncated = true;
            break;
        }
    }

    Argv { buf, spans, argc, truncated }
}

/// Copy little-endian UCS-2 bytes into `dst`, returning the number of bytes
/// that landed in the buffer.
///
/// Firmware hands load options over as raw bytes with no alignment promise,
/// so they are reassembled pairwise. A trailing odd byte is ignored and
/// anything past the capacity of `dst` is dropped.
pub fn copy_load_options(dst: &mut [u16], options: &[u8]) -> usize {
    let mut n = 0;
    for (slot, pair) in dst.iter_mut().zip(options.chunks_exact(2)) {
        *slot = u16::from_le_bytes([pair[0], pair[1]]);
        n += 1;
    }
    n * 2
}
