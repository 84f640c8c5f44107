// Forward/inverse symbol tables for a Base-85 alphabet.
//
// The forward table maps a digit (0..=84) to its printable symbol byte.
// The inverse table is a fixed array keyed by `symbol - MIN_SYMBOL`, so
// every lookup on the decode path is a bounds check plus one load.

use std::fmt;

use thiserror::Error;

/// Number of digits in a Base-85 alphabet.
pub const ALPHABET_SIZE: usize = 85;

/// Smallest byte accepted as a symbol (ASCII `!`).
pub const MIN_SYMBOL: u8 = 33;

/// Largest byte accepted as a symbol (ASCII DEL, the last single-byte ASCII value).
pub const MAX_SYMBOL: u8 = 127;

const INVERSE_LEN: usize = (MAX_SYMBOL - MIN_SYMBOL) as usize + 1;

/// Marks inverse slots that no digit maps to.
const UNUSED: u8 = u8::MAX;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Reasons an alphabet cannot be built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AlphabetError {
    /// Fewer than 85 single-byte symbols were supplied.
    #[error("alphabet needs 85 symbols, got {found}")]
    TooFewSymbols { found: usize },
    /// A symbol lies outside `MIN_SYMBOL..=MAX_SYMBOL`.
    #[error("symbol {symbol:#04x} is outside the printable range 33..=127")]
    SymbolOutOfRange { symbol: u8 },
    /// The same symbol is used for two digits.
    #[error("symbol {symbol:#04x} appears more than once")]
    DuplicateSymbol { symbol: u8 },
}

// ---------------------------------------------------------------------------
// Alphabet
// ---------------------------------------------------------------------------

/// An immutable 85-symbol alphabet with its inverse lookup table.
///
/// For every digit `d`, `digit(symbol(d)) == Some(d)`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Alphabet {
    forward: [u8; ALPHABET_SIZE],
    inverse: [u8; INVERSE_LEN],
    min_symbol: u8,
    max_symbol: u8,
}

impl Alphabet {
    /// Build an alphabet from exactly 85 symbol bytes, index = digit value.
    ///
    /// Usable in `const` context so preset tables are checked at compile time.
    pub const fn new(forward: [u8; ALPHABET_SIZE]) -> Result<Self, AlphabetError> {
        let mut inverse = [UNUSED; INVERSE_LEN];
        let mut min_symbol = MAX_SYMBOL;
        let mut max_symbol = MIN_SYMBOL;

        let mut digit = 0;
        while digit < ALPHABET_SIZE {
            let symbol = forward[digit];
            if symbol < MIN_SYMBOL || symbol > MAX_SYMBOL {
                return Err(AlphabetError::SymbolOutOfRange { symbol });
            }
            let slot = (symbol - MIN_SYMBOL) as usize;
            if inverse[slot] != UNUSED {
                return Err(AlphabetError::DuplicateSymbol { symbol });
            }
            inverse[slot] = digit as u8;
            if symbol < min_symbol {
                min_symbol = symbol;
            }
            if symbol > max_symbol {
                max_symbol = symbol;
            }
            digit += 1;
        }

        Ok(Self {
            forward,
            inverse,
            min_symbol,
            max_symbol,
        })
    }

    /// Build an alphabet from a symbol slice. Only the first 85 symbols are
    /// used, but every supplied symbol must be at least `MIN_SYMBOL`.
    pub fn from_slice(symbols: &[u8]) -> Result<Self, AlphabetError> {
        if symbols.len() < ALPHABET_SIZE {
            return Err(AlphabetError::TooFewSymbols {
                found: symbols.len(),
            });
        }
        if let Some(&symbol) = symbols.iter().find(|&&s| s < MIN_SYMBOL) {
            return Err(AlphabetError::SymbolOutOfRange { symbol });
        }

        let mut forward = [0u8; ALPHABET_SIZE];
        forward.copy_from_slice(&symbols[..ALPHABET_SIZE]);
        Self::new(forward)
    }

    /// Symbol byte for `digit`.
    ///
    /// # Panics
    ///
    /// Panics if `digit >= 85`.
    #[inline]
    pub const fn symbol(&self, digit: u8) -> u8 {
        self.forward[digit as usize]
    }

    /// Digit value for `symbol`, or `None` if the byte is not in the alphabet.
    #[inline]
    pub fn digit(&self, symbol: u8) -> Option<u8> {
        if symbol < self.min_symbol || symbol > self.max_symbol {
            return None;
        }
        match self.inverse[usize::from(symbol - MIN_SYMBOL)] {
            UNUSED => None,
            digit => Some(digit),
        }
    }

    /// Whether `symbol` is one of the 85 symbols.
    #[inline]
    pub fn contains(&self, symbol: u8) -> bool {
        self.digit(symbol).is_some()
    }

    /// The forward table, index = digit value.
    pub const fn symbols(&self) -> &[u8; ALPHABET_SIZE] {
        &self.forward
    }

    /// Smallest symbol byte used.
    pub const fn min_symbol(&self) -> u8 {
        self.min_symbol
    }

    /// Largest symbol byte used.
    pub const fn max_symbol(&self) -> u8 {
        self.max_symbol
    }
}

impl fmt::Debug for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Alphabet")
            .field(&String::from_utf8_lossy(&self.forward))
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn sequential(start: u8) -> Vec<u8> {
        (start..start + ALPHABET_SIZE as u8).collect()
    }

    #[test]
    fn inverse_matches_forward() {
        let alphabet = Alphabet::from_slice(&sequential(40)).unwrap();
        for digit in 0..ALPHABET_SIZE as u8 {
            assert_eq!(alphabet.digit(alphabet.symbol(digit)), Some(digit));
        }
        assert_eq!(alphabet.min_symbol(), 40);
        assert_eq!(alphabet.max_symbol(), 124);
    }

    #[test]
    fn bytes_outside_alphabet_have_no_digit() {
        let alphabet = Alphabet::from_slice(&sequential(40)).unwrap();
        assert_eq!(alphabet.digit(0), None);
        assert_eq!(alphabet.digit(b' '), None);
        assert_eq!(alphabet.digit(39), None);
        assert_eq!(alphabet.digit(125), None);
        assert_eq!(alphabet.digit(0xFF), None);
    }

    #[test]
    fn unused_slots_inside_range_are_rejected() {
        // Skip '"' (34) so the range 33..=118 has one hole.
        let symbols: Vec<u8> = (33u8..=118).filter(|&b| b != b'"').collect();
        let alphabet = Alphabet::from_slice(&symbols).unwrap();
        assert_eq!(alphabet.digit(b'"'), None);
        assert_eq!(alphabet.digit(b'!'), Some(0));
        assert_eq!(alphabet.digit(b'#'), Some(1));
    }

    #[test]
    fn too_few_symbols() {
        assert_eq!(
            Alphabet::from_slice(&sequential(33)[..84]),
            Err(AlphabetError::TooFewSymbols { found: 84 })
        );
        assert_eq!(
            Alphabet::from_slice(&[]),
            Err(AlphabetError::TooFewSymbols { found: 0 })
        );
    }

    #[test]
    fn symbol_below_range() {
        let mut symbols = sequential(33);
        symbols[10] = b' ';
        assert_eq!(
            Alphabet::from_slice(&symbols),
            Err(AlphabetError::SymbolOutOfRange { symbol: b' ' })
        );
    }

    #[test]
    fn low_symbol_past_first_85_still_rejected() {
        let mut symbols = sequential(33);
        symbols.push(b'\t');
        assert_eq!(
            Alphabet::from_slice(&symbols),
            Err(AlphabetError::SymbolOutOfRange { symbol: b'\t' })
        );
    }

    #[test]
    fn extra_symbols_are_ignored() {
        let mut symbols = sequential(33);
        symbols.extend_from_slice(b"~~~");
        let alphabet = Alphabet::from_slice(&symbols).unwrap();
        assert_eq!(alphabet.symbols()[..], sequential(33)[..]);
        assert!(!alphabet.contains(b'~'));
    }

    #[test]
    fn duplicate_symbol() {
        let mut symbols = sequential(33);
        symbols[84] = b'!';
        assert_eq!(
            Alphabet::from_slice(&symbols),
            Err(AlphabetError::DuplicateSymbol { symbol: b'!' })
        );
    }

    #[test]
    fn symbol_above_range() {
        let mut forward = [0u8; ALPHABET_SIZE];
        forward.copy_from_slice(&sequential(33));
        forward[0] = 0x80;
        assert_eq!(
            Alphabet::new(forward),
            Err(AlphabetError::SymbolOutOfRange { symbol: 0x80 })
        );
    }
}
