// Encoding descriptors.
//
// An `Encoding` bundles an alphabet with optional framing delimiters and
// optional single-byte run markers. Descriptors are plain values: presets
// are associated constants, custom ones come from `customized` / `custom`.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use crate::alphabet::{Alphabet, AlphabetError, presets};

/// Full parameterization of one Base-85 variant.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Encoding {
    alphabet: Alphabet,
    start_delimiter: Option<Cow<'static, [u8]>>,
    end_delimiter: Option<Cow<'static, [u8]>>,
    zero_run: Option<u8>,
    space_run: Option<u8>,
}

impl Encoding {
    /// ASCII85 symbols `!` through `u`, no framing, no run markers.
    pub const ASCII: Self = Self::unframed(presets::ASCII85);

    /// RFC 1924 alphabet, no framing, no run markers.
    pub const RFC1924: Self = Self::unframed(presets::RFC1924);

    /// `btoa` flavour: ASCII85 symbols, `x` after the data, `z` for four
    /// zero bytes and `y` for the space-run group (see [`space_run`](Self::space_run)).
    pub const BTOA: Self = Self {
        alphabet: presets::ASCII85,
        start_delimiter: None,
        end_delimiter: Some(Cow::Borrowed(b"x".as_slice())),
        zero_run: Some(b'z'),
        space_run: Some(b'y'),
    };

    /// Adobe ASCII85: data enclosed in `<~` and `~>`, `z` for four zero bytes.
    pub const ADOBE: Self = Self {
        alphabet: presets::ASCII85,
        start_delimiter: Some(Cow::Borrowed(b"<~".as_slice())),
        end_delimiter: Some(Cow::Borrowed(b"~>".as_slice())),
        zero_run: Some(b'z'),
        space_run: None,
    };

    /// ZeroMQ Z85 alphabet, no framing, no run markers.
    ///
    /// Z85 proper requires input lengths divisible by 4 (and encoded lengths
    /// divisible by 5); other lengths are accepted and padded like every
    /// other variant.
    pub const Z85: Self = Self::unframed(presets::Z85);

    /// Descriptor used by callers that do not pick one.
    pub const DEFAULT: Self = Self::RFC1924;

    const fn unframed(alphabet: Alphabet) -> Self {
        Self {
            alphabet,
            start_delimiter: None,
            end_delimiter: None,
            zero_run: None,
            space_run: None,
        }
    }

    /// Reuse the alphabet of `base` with new framing and run markers.
    ///
    /// Empty delimiters mean no delimiter. Marker characters without a
    /// single-byte ASCII value are ignored.
    pub fn customized(
        base: &Encoding,
        start_delimiter: Option<&str>,
        end_delimiter: Option<&str>,
        zero_run: Option<char>,
        space_run: Option<char>,
    ) -> Self {
        Self::assemble(
            base.alphabet,
            start_delimiter,
            end_delimiter,
            zero_run,
            space_run,
        )
    }

    /// Build a descriptor around a brand-new alphabet.
    ///
    /// Characters without a single-byte ASCII value are dropped first. At
    /// least 85 symbols must remain, none below `!`; the first 85 become
    /// digits 0..=84.
    pub fn custom<I>(
        symbols: I,
        start_delimiter: Option<&str>,
        end_delimiter: Option<&str>,
        zero_run: Option<char>,
        space_run: Option<char>,
    ) -> Result<Self, AlphabetError>
    where
        I: IntoIterator<Item = char>,
    {
        let symbols: Vec<u8> = symbols.into_iter().filter_map(ascii_byte).collect();
        let alphabet = Alphabet::from_slice(&symbols)?;
        log::trace!(
            "custom alphabet: {} symbols supplied, range {:#04x}..={:#04x}",
            symbols.len(),
            alphabet.min_symbol(),
            alphabet.max_symbol()
        );
        Ok(Self::assemble(
            alphabet,
            start_delimiter,
            end_delimiter,
            zero_run,
            space_run,
        ))
    }

    fn assemble(
        alphabet: Alphabet,
        start_delimiter: Option<&str>,
        end_delimiter: Option<&str>,
        zero_run: Option<char>,
        space_run: Option<char>,
    ) -> Self {
        Self {
            alphabet,
            start_delimiter: delimiter(start_delimiter),
            end_delimiter: delimiter(end_delimiter),
            zero_run: zero_run.and_then(ascii_byte),
            space_run: space_run.and_then(ascii_byte),
        }
    }

    /// The symbol tables.
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Bytes written before the encoded data, if any.
    pub fn start_delimiter(&self) -> Option<&[u8]> {
        self.start_delimiter.as_deref()
    }

    /// Bytes written after the encoded data, if any.
    pub fn end_delimiter(&self) -> Option<&[u8]> {
        self.end_delimiter.as_deref()
    }

    /// Marker standing in for four zero bytes.
    pub fn zero_run(&self) -> Option<u8> {
        self.zero_run
    }

    /// Marker standing in for the space-run group.
    ///
    /// The group is the one whose digits are `[16, 11, 25, 52, 30]`, which is
    /// the bytes `"2222"`. Four ASCII spaces are spelled out like any other
    /// group.
    pub fn space_run(&self) -> Option<u8> {
        self.space_run
    }
}

impl Default for Encoding {
    fn default() -> Self {
        Self::DEFAULT
    }
}

fn ascii_byte(c: char) -> Option<u8> {
    c.is_ascii().then_some(c as u8)
}

fn delimiter(text: Option<&str>) -> Option<Cow<'static, [u8]>> {
    text.filter(|t| !t.is_empty())
        .map(|t| Cow::Owned(t.as_bytes().to_vec()))
}

// ---------------------------------------------------------------------------
// Named presets
// ---------------------------------------------------------------------------

/// The preset variants, addressable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preset {
    /// [`Encoding::ASCII`]
    Ascii,
    /// [`Encoding::RFC1924`]
    Rfc1924,
    /// [`Encoding::BTOA`]
    Btoa,
    /// [`Encoding::ADOBE`]
    Adobe,
    /// [`Encoding::Z85`]
    Z85,
}

impl Preset {
    /// Every preset, in declaration order.
    pub const ALL: [Preset; 5] = [
        Preset::Ascii,
        Preset::Rfc1924,
        Preset::Btoa,
        Preset::Adobe,
        Preset::Z85,
    ];

    /// The descriptor this preset names.
    pub fn encoding(self) -> Encoding {
        match self {
            Preset::Ascii => Encoding::ASCII,
            Preset::Rfc1924 => Encoding::RFC1924,
            Preset::Btoa => Encoding::BTOA,
            Preset::Adobe => Encoding::ADOBE,
            Preset::Z85 => Encoding::Z85,
        }
    }

    /// Lower-case name, as accepted by `FromStr` and printed by `Display`.
    pub const fn name(self) -> &'static str {
        match self {
            Preset::Ascii => "ascii",
            Preset::Rfc1924 => "rfc1924",
            Preset::Btoa => "btoa",
            Preset::Adobe => "adobe",
            Preset::Z85 => "z85",
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Returned when a preset name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown Base-85 variant '{0}'")]
pub struct UnknownPreset(pub String);

impl FromStr for Preset {
    type Err = UnknownPreset;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Preset::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownPreset(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
