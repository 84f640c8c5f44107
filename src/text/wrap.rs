// Line wrapping and input filtering around the core codec.

use bitflags::bitflags;

use crate::encoding::Encoding;

bitflags! {
    /// Output formatting for encoded data.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct EncodeOptions: u32 {
        /// Break lines after 64 symbols. Takes precedence over `LINE_LENGTH_76`.
        const LINE_LENGTH_64 = 1 << 0;
        /// Break lines after 76 symbols.
        const LINE_LENGTH_76 = 1 << 1;
        /// End lines with CR (CR LF if `LINE_FEED` is also set).
        const CARRIAGE_RETURN = 1 << 4;
        /// End lines with LF (CR LF if `CARRIAGE_RETURN` is also set).
        const LINE_FEED = 1 << 5;
    }
}

bitflags! {
    /// Input handling for encoded data.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct DecodeOptions: u32 {
        /// Skip bytes that cannot appear in the encoding (line breaks,
        /// whitespace, stray punctuation) instead of failing on them.
        const IGNORE_UNKNOWN = 1 << 0;
    }
}

impl EncodeOptions {
    /// Configured line length, if any.
    pub fn line_length(self) -> Option<usize> {
        if self.contains(Self::LINE_LENGTH_64) {
            Some(64)
        } else if self.contains(Self::LINE_LENGTH_76) {
            Some(76)
        } else {
            None
        }
    }

    /// Bytes inserted between lines.
    pub fn line_break(self) -> &'static [u8] {
        match (
            self.contains(Self::CARRIAGE_RETURN),
            self.contains(Self::LINE_FEED),
        ) {
            (true, false) => b"\r",
            (false, true) => b"\n",
            _ => b"\r\n",
        }
    }
}

/// Insert `line_break` after every `line_length` bytes of `encoded`.
///
/// No break follows the last line. A line that would end inside a multi-byte
/// UTF-8 sequence (only possible with a non-ASCII delimiter) is extended to
/// the end of that sequence, so valid UTF-8 input stays valid.
pub fn wrap_lines(encoded: &[u8], line_length: usize, line_break: &[u8]) -> Vec<u8> {
    if line_length == 0 || encoded.len() <= line_length {
        return encoded.to_vec();
    }

    let lines = encoded.len().div_ceil(line_length);
    let mut out = Vec::with_capacity(encoded.len() + (lines - 1) * line_break.len());
    let mut rest = encoded;
    while !rest.is_empty() {
        if rest.len() != encoded.len() {
            out.extend_from_slice(line_break);
        }
        let mut end = line_length.min(rest.len());
        while end < rest.len() && is_continuation(rest[end]) {
            end += 1;
        }
        let (line, tail) = rest.split_at(end);
        out.extend_from_slice(line);
        rest = tail;
    }
    out
}

fn is_continuation(b: u8) -> bool {
    b & 0xC0 == 0x80
}

/// Keep only bytes that carry meaning for `encoding`: alphabet symbols, run
/// markers and delimiter bytes.
pub fn retain_known(data: &[u8], encoding: &Encoding) -> Vec<u8> {
    let alphabet = encoding.alphabet();
    let framing = [encoding.start_delimiter(), encoding.end_delimiter()];
    let known = |b: u8| {
        alphabet.contains(b)
            || Some(b) == encoding.zero_run()
            || Some(b) == encoding.space_run()
            || framing.iter().flatten().any(|d| d.contains(&b))
    };

    let kept: Vec<u8> = data.iter().copied().filter(|&b| known(b)).collect();
    if kept.len() != data.len() {
        log::debug!("ignored {} unknown bytes", data.len() - kept.len());
    }
    kept
}
