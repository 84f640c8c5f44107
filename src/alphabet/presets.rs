// Preset alphabets.
//
// - ASCII85 (`!` through `u`), shared by the plain, btoa and Adobe variants
// - RFC 1924
// - ZeroMQ Z85

use super::table::{ALPHABET_SIZE, Alphabet};

const fn sequential(first: u8) -> [u8; ALPHABET_SIZE] {
    let mut symbols = [0u8; ALPHABET_SIZE];
    let mut digit = 0;
    while digit < ALPHABET_SIZE {
        symbols[digit] = first + digit as u8;
        digit += 1;
    }
    symbols
}

const fn checked(symbols: [u8; ALPHABET_SIZE]) -> Alphabet {
    match Alphabet::new(symbols) {
        Ok(alphabet) => alphabet,
        Err(_) => panic!("invalid preset alphabet"),
    }
}

/// ASCII characters `!` (33) through `u` (117), in order.
pub const ASCII85: Alphabet = checked(sequential(b'!'));

/// RFC 1924 ordering: digits, upper case, lower case, then 23 punctuation marks.
pub const RFC1924: Alphabet = checked(
    *b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz!#$%&()*+-;<=>?@^_`{|}~",
);

/// ZeroMQ Z85 ordering: digits, lower case, upper case, then 23 punctuation marks.
pub const Z85: Alphabet = checked(
    *b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ.-:+=^!/*?&<>()[]{}@%$#",
);
