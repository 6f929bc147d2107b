//! The compression module holds the LZ77 codec itself.
//!
//! Compression happens in the following steps:
//! - Match finding: for each cursor position, search the previous 4095 bytes for the longest
//!   run (4 to 15 bytes) that equals the upcoming bytes. Ties go to the oldest position.
//! - Tokenizing: a match becomes a back-reference token, anything else a literal token.
//! - Bit packing: literals take 9 bits (`0` + byte), back-references 17 bits
//!   (`1` + 12 bit distance + 4 bit length). The stream is zero padded to a whole byte.
//!
//! Decompression reverses the bit packing and replays the tokens, copying back-references
//! out of the output produced so far.
//!
//! There is no entropy coding stage, no header and no checksum.
//!

pub mod compress;
pub mod decompress;
pub mod match_finder;
pub mod token;

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use log::warn;

use crate::error::Result;

/// Write a finished buffer to `path`.
///
/// Without `overwrite` the file must not exist yet; the check and the create are one
/// operation. If the write fails part-way the partial file is removed.
pub(crate) fn write_output(path: &Path, data: &[u8], overwrite: bool) -> Result<()> {
    let mut options = OpenOptions::new();
    options.write(true);
    if overwrite {
        options.create(true).truncate(true);
    } else {
        options.create_new(true);
    }
    let mut f_out = options.open(path)?;

    let written = f_out.write_all(data).and_then(|_| f_out.flush());
    if let Err(e) = written {
        drop(f_out);
        if let Err(rm) = fs::remove_file(path) {
            warn!("Could not remove partial output {}: {}", path.display(), rm);
        }
        return Err(e.into());
    }
    Ok(())
}
