// Base-85 transcoding.
//
// - `encoder`: bytes to symbols (pad, split into digits, compress runs, frame)
// - `decoder`: symbols to bytes (unframe, expand runs, pad, fold digits)
//
// Both directions share the padding rule: a trailing group of `n` bytes
// (n < 4) becomes `n + 1` symbols, and a trailing group of `m` symbols
// (m < 5) becomes `m - 1` bytes.

pub mod decoder;
pub mod encoder;

pub use decoder::{DecodeError, decode};
pub use encoder::encode;

/// Bytes per group.
pub const GROUP_BYTES: usize = 4;

/// Symbols per group.
pub const GROUP_SYMBOLS: usize = 5;

const RADIX: u32 = 85;

/// Digits of a group of four zero bytes.
pub const ZERO_RUN_DIGITS: [u8; GROUP_SYMBOLS] = to_digits(0);

/// Digits of the group the space-run marker stands for.
///
/// This is the btoa-compatible pattern `[16, 11, 25, 52, 30]`, i.e. the bytes
/// `"2222"` (`0x32323232`), not four ASCII spaces.
pub const SPACE_RUN_DIGITS: [u8; GROUP_SYMBOLS] = to_digits(u32::from_be_bytes(*b"2222"));

/// Split a 32-bit group into five base-85 digits, most significant first.
#[inline]
pub const fn to_digits(mut word: u32) -> [u8; GROUP_SYMBOLS] {
    let mut digits = [0u8; GROUP_SYMBOLS];
    let mut i = GROUP_SYMBOLS;
    while i > 0 {
        i -= 1;
        digits[i] = (word % RADIX) as u8;
        word /= RADIX;
    }
    digits
}

/// Fold five base-85 digits back into a 32-bit group.
///
/// Returns `None` if the digits describe a value above `u32::MAX`.
#[inline]
pub fn from_digits(digits: [u8; GROUP_SYMBOLS]) -> Option<u32> {
    digits.iter().try_fold(0u32, |acc, &d| {
        acc.checked_mul(RADIX)?.checked_add(u32::from(d))
    })
}
