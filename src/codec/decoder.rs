// Base-85 decoder.
//
// Framing is stripped when present, run markers are expanded to their
// five-symbol spelling, and a short final group is padded with the digit-84
// symbol. Each group of five symbols folds into a big-endian u32; the bytes
// standing for the padding are dropped again.

use std::borrow::Cow;

use thiserror::Error;

use super::{GROUP_BYTES, GROUP_SYMBOLS, SPACE_RUN_DIGITS, ZERO_RUN_DIGITS, from_digits};
use crate::alphabet::ALPHABET_SIZE;
use crate::encoding::Encoding;

/// Digit used to pad a short final group.
const PAD_DIGIT: u8 = (ALPHABET_SIZE - 1) as u8;

// ---------------------------------------------------------------------------
// Decoder error
// ---------------------------------------------------------------------------

/// Input that is not valid Base-85 for the given encoding.
///
/// Offsets refer to the input after delimiters are stripped and run markers
/// are expanded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// A byte that is neither an alphabet symbol nor a configured marker.
    #[error("invalid symbol {symbol:#04x} at offset {offset}")]
    InvalidSymbol { symbol: u8, offset: usize },
    /// A five-symbol group whose value does not fit in 32 bits.
    #[error("group at offset {offset} exceeds 32 bits")]
    Overflow { offset: usize },
}

// ---------------------------------------------------------------------------
// Decoding
// ---------------------------------------------------------------------------

/// Decode `data` with `encoding`.
///
/// Delimiters are optional on input: they are removed when present and
/// their absence is not an error.
///
/// # Examples
///
/// ```
/// use base85::{Encoding, decode};
///
/// assert_eq!(decode(b"Xk~0{Zy<MXa%^M", &Encoding::RFC1924).unwrap(), b"hello world");
/// assert_eq!(decode(b"<~z!!~>", &Encoding::ADOBE).unwrap(), [0; 5]);
/// assert!(decode(b"hello world", &Encoding::Z85).is_err());
/// ```
///
/// # Errors
///
/// Returns [`DecodeError`] if the input contains a byte outside the
/// alphabet or a group that overflows 32 bits.
pub fn decode(data: &[u8], encoding: &Encoding) -> Result<Vec<u8>, DecodeError> {
    let body = strip_framing(data, encoding);
    let symbols = expand_runs(body, encoding);
    let decoded = decode_symbols(&symbols, encoding).inspect_err(|e| {
        log::debug!("rejecting {} byte input: {e}", data.len());
    })?;

    log::trace!("decoded {} symbols into {} bytes", symbols.len(), decoded.len());
    Ok(decoded)
}

/// Number of bytes produced by `len` symbols (after run expansion, without framing).
pub const fn decoded_len(len: usize) -> usize {
    let full = len / GROUP_SYMBOLS;
    let tail = len % GROUP_SYMBOLS;
    full * GROUP_BYTES + tail.saturating_sub(1)
}

fn strip_framing<'a>(data: &'a [u8], encoding: &Encoding) -> &'a [u8] {
    let mut body = data;
    if let Some(start) = encoding.start_delimiter() {
        body = body.strip_prefix(start).unwrap_or(body);
    }
    if let Some(end) = encoding.end_delimiter() {
        body = body.strip_suffix(end).unwrap_or(body);
    }
    body
}

fn expand_runs<'a>(body: &'a [u8], encoding: &Encoding) -> Cow<'a, [u8]> {
    let zero = encoding.zero_run();
    let space = encoding.space_run();
    let is_marker = |b: u8| Some(b) == zero || Some(b) == space;

    if !body.iter().any(|&b| is_marker(b)) {
        return Cow::Borrowed(body);
    }

    let alphabet = encoding.alphabet();
    let spell = |digits: [u8; GROUP_SYMBOLS]| digits.map(|d| alphabet.symbol(d));
    let zeros = spell(ZERO_RUN_DIGITS);
    let spaces = spell(SPACE_RUN_DIGITS);

    let mut expanded = Vec::with_capacity(body.len() + 4 * GROUP_SYMBOLS);
    for &b in body {
        if Some(b) == zero {
            expanded.extend_from_slice(&zeros);
        } else if Some(b) == space {
            expanded.extend_from_slice(&spaces);
        } else {
            expanded.push(b);
        }
    }
    Cow::Owned(expanded)
}

fn decode_symbols(symbols: &[u8], encoding: &Encoding) -> Result<Vec<u8>, DecodeError> {
    let alphabet = encoding.alphabet();
    let mut out = Vec::with_capacity(decoded_len(symbols.len()));

    for (index, chunk) in symbols.chunks(GROUP_SYMBOLS).enumerate() {
        let offset = index * GROUP_SYMBOLS;
        let mut digits = [PAD_DIGIT; GROUP_SYMBOLS];
        for (i, &symbol) in chunk.iter().enumerate() {
            digits[i] = alphabet.digit(symbol).ok_or(DecodeError::InvalidSymbol {
                symbol,
                offset: offset + i,
            })?;
        }

        let word = from_digits(digits).ok_or(DecodeError::Overflow { offset })?;
        // A chunk of n < 5 symbols carries n - 1 bytes.
        let keep = if chunk.len() == GROUP_SYMBOLS {
            GROUP_BYTES
        } else {
            chunk.len() - 1
        };
        out.extend_from_slice(&word.to_be_bytes()[..keep]);
    }

    Ok(out)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
