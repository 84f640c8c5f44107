// Base-85 alphabets.
//
// - `table`: the forward symbol table + fixed inverse table
// - `presets`: ASCII85, RFC 1924 and Z85 symbol orderings

pub mod presets;
pub mod table;

pub use table::{ALPHABET_SIZE, Alphabet, AlphabetError, MAX_SYMBOL, MIN_SYMBOL};
