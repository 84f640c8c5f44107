// File-level helpers for Base-85 encoding/decoding.
//
// Provides `encode_file()` and `decode_file()` convenience functions that
// read the whole input into memory, run the codec, and write the result
// through a `BufWriter`.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use thiserror::Error;

use crate::codec::DecodeError;
use crate::encoding::Encoding;
use crate::text::{self, DecodeOptions, EncodeOptions};

// ---------------------------------------------------------------------------
// Stats
// ---------------------------------------------------------------------------

/// Statistics returned by `encode_file()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeStats {
    /// Raw input size in bytes.
    pub input_size: u64,
    /// Encoded output size in bytes, including framing and line breaks.
    pub output_size: u64,
}

/// Statistics returned by `decode_file()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeStats {
    /// Encoded input size in bytes.
    pub input_size: u64,
    /// Decoded output size in bytes.
    pub output_size: u64,
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Error type for file operations.
#[derive(Debug, Error)]
pub enum Error {
    /// File open, read or write failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    /// The input is not valid Base-85 for the chosen encoding.
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),
}

const BUF_SIZE: usize = 64 * 1024; // 64 KiB

// ---------------------------------------------------------------------------
// encode_file / decode_file
// ---------------------------------------------------------------------------

/// Encode the contents of `input_path` into `output_path`.
pub fn encode_file(
    input_path: &Path,
    output_path: &Path,
    options: EncodeOptions,
    encoding: &Encoding,
) -> Result<EncodeStats, Error> {
    let data = fs::read(input_path)?;
    let encoded = text::encode_with_options(&data, options, encoding);
    write_all(output_path, &encoded)?;

    log::debug!(
        "encoded {} ({} bytes) into {} ({} bytes)",
        input_path.display(),
        data.len(),
        output_path.display(),
        encoded.len()
    );
    Ok(EncodeStats {
        input_size: data.len() as u64,
        output_size: encoded.len() as u64,
    })
}

/// Decode the contents of `input_path` into `output_path`.
///
/// Nothing is written if the input fails to decode.
pub fn decode_file(
    input_path: &Path,
    output_path: &Path,
    options: DecodeOptions,
    encoding: &Encoding,
) -> Result<DecodeStats, Error> {
    let data = fs::read(input_path)?;
    let decoded = text::decode_with_options(&data, options, encoding)?;
    write_all(output_path, &decoded)?;

    log::debug!(
        "decoded {} ({} bytes) into {} ({} bytes)",
        input_path.display(),
        data.len(),
        output_path.display(),
        decoded.len()
    );
    Ok(DecodeStats {
        input_size: data.len() as u64,
        output_size: decoded.len() as u64,
    })
}

fn write_all(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let mut writer = BufWriter::with_capacity(BUF_SIZE, File::create(path)?);
    writer.write_all(bytes)?;
    writer.flush()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
