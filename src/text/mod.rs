// Text and formatting adapters over the byte-level codec.
//
// - `wrap`: line wrapping on encode, unknown-byte filtering on decode
// - `serde`: `#[serde(with = ...)]` helpers (feature `serde`)

#[cfg(feature = "serde")]
pub mod serde;
pub mod wrap;

pub use wrap::{DecodeOptions, EncodeOptions};

use crate::codec::{self, DecodeError};
use crate::encoding::Encoding;

/// Encode `data`, then apply the line wrapping selected in `options`.
pub fn encode_with_options(data: &[u8], options: EncodeOptions, encoding: &Encoding) -> Vec<u8> {
    let encoded = codec::encode(data, encoding);
    match options.line_length() {
        Some(len) => wrap::wrap_lines(&encoded, len, options.line_break()),
        None => encoded,
    }
}

/// Filter `data` as selected in `options`, then decode it.
///
/// # Errors
///
/// Fails like [`codec::decode`] on bytes that are still present after filtering.
pub fn decode_with_options(
    data: &[u8],
    options: DecodeOptions,
    encoding: &Encoding,
) -> Result<Vec<u8>, DecodeError> {
    if options.contains(DecodeOptions::IGNORE_UNKNOWN) {
        codec::decode(&wrap::retain_known(data, encoding), encoding)
    } else {
        codec::decode(data, encoding)
    }
}

/// Encode `data` into a string.
///
/// # Examples
///
/// ```
/// use base85::Encoding;
/// use base85::text::{EncodeOptions, encode_to_string};
///
/// let text = encode_to_string(b"hello world", EncodeOptions::empty(), &Encoding::Z85);
/// assert_eq!(text, "xK#0@zY<mxA+]m");
/// ```
pub fn encode_to_string(data: &[u8], options: EncodeOptions, encoding: &Encoding) -> String {
    let bytes = encode_with_options(data, options, encoding);
    // Symbols and markers are ASCII, delimiters come from `&str` and wrapping
    // never splits a multi-byte sequence, so this is always valid UTF-8.
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
    }
}

/// Decode a Base-85 string.
///
/// # Errors
///
/// Fails like [`decode_with_options`].
pub fn decode_str(
    text: &str,
    options: DecodeOptions,
    encoding: &Encoding,
) -> Result<Vec<u8>, DecodeError> {
    decode_with_options(text.as_bytes(), options, encoding)
}
