//! Configurable Base-85 encoding/decoding in Rust.
//!
//! The crate provides:
//! - Alphabet tables with a fixed inverse lookup (`alphabet`)
//! - Encoding descriptors: presets and custom variants (`encoding`)
//! - The byte-level encoder and decoder (`codec`)
//! - Line wrapping, string and serde adapters (`text`)
//! - File-oriented helpers (`io`, `file-io` feature)
//! - An optional CLI (`cli` feature)
//!
//! # Quick Start
//!
//! ```
//! use base85::{Encoding, decode, encode};
//!
//! let data = b"hello world";
//! let encoded = encode(data, &Encoding::ADOBE);
//! assert_eq!(encoded, b"<~BOu!rD]j7BEbo7~>");
//! assert_eq!(decode(&encoded, &Encoding::ADOBE).unwrap(), data);
//! ```
//!
//! Custom alphabets are validated when built:
//!
//! ```
//! use base85::Encoding;
//!
//! let symbols = ('!'..='u').rev();
//! let reversed = Encoding::custom(symbols, None, None, Some('z'), None).unwrap();
//! let encoded = base85::encode(&[0; 8], &reversed);
//! assert_eq!(encoded, b"zuuuuu");
//!
//! assert!(Encoding::custom("too short".chars(), None, None, None, None).is_err());
//! ```

pub mod alphabet;
pub mod codec;
pub mod encoding;
pub mod text;

#[cfg(feature = "file-io")]
pub mod io;

#[cfg(feature = "cli")]
pub mod cli;

pub use alphabet::{Alphabet, AlphabetError};
pub use codec::{DecodeError, decode, encode};
pub use encoding::{Encoding, Preset};
