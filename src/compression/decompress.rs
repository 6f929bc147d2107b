use std::fs;
use std::path::Path;

use log::{error, info, trace};

use super::token::Token;
use super::write_output;
use crate::bitstream::bitreader::BitReader;
use crate::error::{Lz77Error, Result};

/// Decompress a buffer produced by compress().
///
/// Tokens are read until fewer than 9 bits remain; those last bits are the padding from the
/// encoder and are never interpreted. Back-references copy one byte at a time from the
/// growing output, so a match longer than its distance repeats the source run.
pub fn decompress(data: &[u8]) -> Result<Vec<u8>> {
    if data.is_empty() {
        error!("Nothing to decompress.");
        return Err(Lz77Error::EmptyInput);
    }

    let mut br = BitReader::new(data);
    let mut output: Vec<u8> = Vec::with_capacity(data.len() * 2);

    loop {
        let token_at = br.position();
        let token = match Token::read(&mut br)? {
            Some(token) => token,
            None => break,
        };
        trace!("{} {}", br.loc(), token);

        match token {
            Token::Literal(x) => output.push(x),
            Token::Match { distance, length } => {
                let distance = distance as usize;
                if distance == 0 || distance > output.len() {
                    error!(
                        "Back-reference of {} bytes with only {} bytes decoded.",
                        distance,
                        output.len()
                    );
                    return Err(Lz77Error::MalformedStream {
                        reason: format!(
                            "distance {} reaches outside the {} bytes decoded so far",
                            distance,
                            output.len()
                        ),
                        bit_offset: token_at,
                    });
                }
                let begin = output.len() - distance;
                for idx in begin..begin + length as usize {
                    let x = output[idx];
                    output.push(x);
                }
            }
        }
    }

    info!(
        "Decompressed {} bytes into {} bytes.",
        data.len(),
        output.len()
    );
    Ok(output)
}

/// Decompress the file at `input`.
///
/// If `output` is given the result is written there and None is returned. Otherwise the
/// decompressed bytes are handed back to the caller. An existing output file is only replaced
/// when `overwrite` is set.
pub fn decompress_file(
    input: &Path,
    output: Option<&Path>,
    overwrite: bool,
) -> Result<Option<Vec<u8>>> {
    let data = fs::read(input)?;
    info!("Read {} bytes from {}.", data.len(), input.display());
    let decompressed = decompress(&data)?;

    match output {
        Some(path) => {
            write_output(path, &decompressed, overwrite)?;
            info!("File was decompressed successfully and saved to {}.", path.display());
            Ok(None)
        }
        None => Ok(Some(decompressed)),
    }
}
