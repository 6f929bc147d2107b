//! Rust LZ77 compressor.
//!
//! A lossless byte compressor using a 4095 byte sliding window and a fixed bit-packed token
//! format: a literal is a `0` bit followed by the byte, a back-reference is a `1` bit
//! followed by a 12 bit distance and a 4 bit length. The stream is zero padded to a whole
//! byte and carries no header.
//!
//! Basic usage:
//!
//! ```
//! let data = b"abc".repeat(100);
//! let packed = lz77::compress(&data);
//! assert_eq!(packed.len(), 46);
//! assert_eq!(lz77::decompress(&packed).unwrap(), data);
//! ```
//!
//! From the command line:
//!
//! `$> lz77 -z test.txt`
//!
//! This will compress the file and create the file test.txt.lz77. The original file is kept.
//!
pub mod bitstream;
pub mod compression;
pub mod error;
pub mod tools;

pub use compression::compress::{compress, compress_file, compress_tokens};
pub use compression::decompress::{decompress, decompress_file};
pub use compression::match_finder::{find_match, wrapped_slice};
pub use compression::token::Token;
pub use error::{Lz77Error, Result};
