use std::fs;
use std::path::Path;

use log::{debug, info, log_enabled, trace, Level};

use super::match_finder::find_match;
use super::token::Token;
use super::write_output;
use crate::bitstream::bitwriter::BitWriter;
use crate::error::Result;

/*
    The encoder walks the input once. At every step the match finder is asked for the
    longest earlier run of the upcoming bytes. If it finds one the cursor jumps over the
    whole run, otherwise a single literal is emitted.

    The output has no header and no length field. The decoder relies on the fact that
    the zero padding added by flush() is always shorter than the smallest token.
*/

/// Split the input into the token sequence the encoder would write.
pub fn compress_tokens(data: &[u8]) -> Vec<Token> {
    let mut tokens = Vec::with_capacity(data.len() / 4);
    let mut i = 0;

    while i < data.len() {
        match find_match(data, i) {
            Some((distance, length)) => {
                tokens.push(Token::Match {
                    distance: distance as u16,
                    length: length as u8,
                });
                i += length;
            }
            None => {
                tokens.push(Token::Literal(data[i]));
                i += 1;
            }
        }
    }
    tokens
}

/// Compress a byte buffer. Never fails; an empty input gives an empty output.
pub fn compress(data: &[u8]) -> Vec<u8> {
    let tokens = compress_tokens(data);
    let bits: usize = tokens.iter().map(Token::bit_len).sum();
    let mut bw = BitWriter::new((bits + 7) / 8);

    // Token dump, one line per token, only when someone is listening at trace level
    let verbose = log_enabled!(Level::Trace);
    for token in &tokens {
        token.write(&mut bw);
        if verbose {
            trace!("{} {}", bw.loc(), token);
        }
    }
    bw.flush();

    let matches = tokens
        .iter()
        .filter(|t| matches!(t, Token::Match { .. }))
        .count();
    debug!(
        "Encoded {} tokens ({} matches, {} literals), {} padding bits.",
        tokens.len(),
        matches,
        tokens.len() - matches,
        (8 - bw.last_bits) % 8
    );
    info!(
        "Compressed {} bytes into {} bytes.",
        data.len(),
        bw.output().len()
    );
    bw.into_bytes()
}

/// Compress the file at `input`.
///
/// If `output` is given the result is written there and None is returned. Otherwise the
/// compressed bytes are handed back to the caller. An existing output file is only replaced
/// when `overwrite` is set.
pub fn compress_file(
    input: &Path,
    output: Option<&Path>,
    overwrite: bool,
) -> Result<Option<Vec<u8>>> {
    let data = fs::read(input)?;
    info!("Read {} bytes from {}.", data.len(), input.display());
    let compressed = compress(&data);

    match output {
        Some(path) => {
            write_output(path, &compressed, overwrite)?;
            info!("File was compressed successfully and saved to {}.", path.display());
            Ok(None)
        }
        None => Ok(Some(compressed)),
    }
}
