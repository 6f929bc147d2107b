//! Error types for the lz77 compressor.

use std::io;
use thiserror::Error;

/// Everything that can go wrong while compressing or decompressing.
///
/// Compression of an in-memory buffer never fails. Only decompression and the
/// file wrappers produce errors.
#[derive(Debug, Error)]
pub enum Lz77Error {
    /// Decompression was asked to work on a zero-length buffer
    #[error("Cannot decompress an empty input")]
    EmptyInput,

    /// The compressed stream is truncated or references data that does not exist
    #[error("Malformed stream at bit {bit_offset}: {reason}")]
    MalformedStream { reason: String, bit_offset: usize },

    /// IO error occurred while reading or writing a file
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Result type alias for lz77 operations
pub type Result<T> = std::result::Result<T, Lz77Error>;
