// Base-85 encoder.
//
// Input is zero-padded to a multiple of four bytes, each big-endian group
// becomes five digits, and the digits belonging to the padding are dropped
// again (one per pad byte). Complete groups may collapse into a run marker;
// the final complete group never becomes the zero-run marker, so the output
// never ends in it.

use super::{GROUP_BYTES, GROUP_SYMBOLS, SPACE_RUN_DIGITS, ZERO_RUN_DIGITS, to_digits};
use crate::encoding::Encoding;

/// Encode `data` with `encoding`.
///
/// Every byte sequence is encodable; the result contains only alphabet
/// symbols, run markers and the configured delimiters.
///
/// # Examples
///
/// ```
/// use base85::{Encoding, encode};
///
/// assert_eq!(encode(b"hello world", &Encoding::RFC1924), b"Xk~0{Zy<MXa%^M");
/// assert_eq!(encode(&[0; 8], &Encoding::BTOA), b"z!!!!!x");
/// assert_eq!(encode(b"", &Encoding::ADOBE), b"<~~>");
/// ```
pub fn encode(data: &[u8], encoding: &Encoding) -> Vec<u8> {
    let start = encoding.start_delimiter().unwrap_or_default();
    let end = encoding.end_delimiter().unwrap_or_default();

    let mut out = Vec::with_capacity(start.len() + encoded_len(data.len()) + end.len());
    out.extend_from_slice(start);
    encode_body(data, encoding, &mut out);
    out.extend_from_slice(end);

    log::trace!("encoded {} bytes into {} symbols", data.len(), out.len());
    out
}

/// Number of symbols for `len` input bytes before run compression and framing.
pub const fn encoded_len(len: usize) -> usize {
    let full = len / GROUP_BYTES;
    let tail = len % GROUP_BYTES;
    full * GROUP_SYMBOLS + if tail == 0 { 0 } else { tail + 1 }
}

fn encode_body(data: &[u8], encoding: &Encoding, out: &mut Vec<u8>) {
    let alphabet = encoding.alphabet();
    let groups = data.len().div_ceil(GROUP_BYTES);

    for (index, chunk) in data.chunks(GROUP_BYTES).enumerate() {
        let mut word = [0u8; GROUP_BYTES];
        word[..chunk.len()].copy_from_slice(chunk);
        let digits = to_digits(u32::from_be_bytes(word));

        // A short chunk keeps one digit per byte plus one; it is never a run.
        if chunk.len() < GROUP_BYTES {
            out.extend(digits[..=chunk.len()].iter().map(|&d| alphabet.symbol(d)));
            continue;
        }

        let is_last = index + 1 == groups;
        match (encoding.zero_run(), encoding.space_run()) {
            (Some(marker), _) if digits == ZERO_RUN_DIGITS && !is_last => out.push(marker),
            (_, Some(marker)) if digits == SPACE_RUN_DIGITS => out.push(marker),
            _ => out.extend(digits.iter().map(|&d| alphabet.symbol(d))),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_is_framing_only() {
        assert!(encode(b"", &Encoding::ASCII).is_empty());
        assert_eq!(encode(b"", &Encoding::BTOA), b"x");
        assert_eq!(encode(b"", &Encoding::ADOBE), b"<~~>");
    }

    #[test]
    fn partial_groups_keep_len_plus_one_symbols() {
        assert_eq!(encode(&[0], &Encoding::ASCII), b"!!");
        assert_eq!(encode(&[0, 0], &Encoding::ASCII), b"!!!");
        assert_eq!(encode(&[0, 0, 0], &Encoding::ASCII), b"!!!!");
        assert_eq!(encode(&[0, 0, 0, 0, 0], &Encoding::ASCII), b"!!!!!!!");
    }

    #[test]
    fn known_vectors() {
        assert_eq!(
            encode(b"Man is distinguished", &Encoding::ADOBE),
            b"<~9jqo^BlbD-BleB1DJ+*+F(f,q~>"
        );
        assert_eq!(
            encode(&[0x86, 0x4F, 0xD2, 0x6F, 0xB5, 0x59, 0xF7, 0x5B], &Encoding::Z85),
            b"HelloWorld"
        );
        assert_eq!(encode(b"hello world", &Encoding::BTOA), b"BOu!rD]j7BEbo7x");
    }

    #[test]
    fn zero_run_in_the_middle() {
        assert_eq!(encode(b"abcd\0\0\0\0efgh", &Encoding::BTOA), b"@:E_WzAS,Rgx");
        assert_eq!(encode(b"\0\0\0\0ab", &Encoding::ADOBE), b"<~z@:B~>");
    }

    #[test]
    fn trailing_zero_group_is_spelled_out() {
        assert_eq!(encode(&[0; 4], &Encoding::BTOA), b"!!!!!x");
        assert_eq!(encode(b"abcd\0\0\0\0", &Encoding::BTOA), b"@:E_W!!!!!x");
        assert_eq!(encode(&[0; 8], &Encoding::ADOBE), b"<~z!!!!!~>");
    }

    #[test]
    fn zero_group_before_partial_tail_is_compressed() {
        assert_eq!(encode(&[0; 5], &Encoding::BTOA), b"z!!x");
    }

    #[test]
    fn space_run() {
        // "2222" encodes to the digits 16 11 25 52 30.
        assert_eq!(encode(b"2222", &Encoding::BTOA), b"yx");
        assert_eq!(encode(b"abcd2222efgh", &Encoding::BTOA), b"@:E_WyAS,Rgx");
        assert_eq!(encode(b"\0\0\0\02222", &Encoding::BTOA), b"zyx");
        // The last complete group may still be a space run.
        assert_eq!(encode(b"2222\0\0\0\0", &Encoding::BTOA), b"y!!!!!x");
        // No marker configured: spelled out.
        assert_eq!(encode(b"2222", &Encoding::ADOBE), b"<~1,:U?~>");
    }

    #[test]
    fn ascii_spaces_are_spelled_out() {
        assert_eq!(encode(b"    ", &Encoding::BTOA), b"+<VdLx");
        assert_eq!(encode(b"        ab", &Encoding::BTOA), b"+<VdL+<VdL@:Bx");
    }

    #[test]
    fn zeros_straddling_groups_are_not_a_run() {
        let data = [1, 0, 0, 0, 0, 1, 1, 1];
        assert_eq!(encode(&data, &Encoding::BTOA), b"!<<*\"!!**$x");
        assert!(!encode(&data, &Encoding::ADOBE).contains(&b'z'));
    }

    #[test]
    fn encoded_len_matches_output() {
        for len in 0..32 {
            let data = vec![0xA5; len];
            assert_eq!(encode(&data, &Encoding::Z85).len(), encoded_len(len));
        }
    }
}
