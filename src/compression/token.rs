use std::fmt::{Display, Formatter};

use crate::bitstream::bitreader::BitReader;
use crate::bitstream::bitwriter::BitWriter;
use crate::error::{Lz77Error, Result};

/// Furthest back a match may reach. Fits the 12 bit distance field.
pub const WINDOW_SIZE: usize = 0xFFF;
/// Longest match. Fits the 4 bit length field.
pub const MAX_MATCH: usize = 0xF;
/// Shortest match worth a 17 bit token rather than a run of 9 bit literals.
pub const MIN_MATCH: usize = 4;
/// Flag bit plus one byte.
pub const LITERAL_BITS: usize = 9;
/// Flag bit plus 12 bit distance plus 4 bit length.
pub const MATCH_BITS: usize = 17;

/// One step of the encoded stream.
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub enum Token {
    Literal(u8),
    Match {
        distance: u16, // 1~4095
        length: u8,    // 4~15 when produced by the encoder
    },
}

impl Token {
    /// Number of bits this token takes on the stream.
    pub fn bit_len(&self) -> usize {
        match self {
            Token::Literal(_) => LITERAL_BITS,
            Token::Match { .. } => MATCH_BITS,
        }
    }

    /// Put the token on the stream.
    ///
    /// A match is packed as `distance >> 4` followed by
    /// `(distance & 0xF) << 4 | length`, which is the same as a single 16 bit field
    /// `distance << 4 | length`.
    pub fn write(&self, bw: &mut BitWriter) {
        match *self {
            Token::Literal(x) => {
                bw.push_bit(false);
                bw.out8(x);
            }
            Token::Match { distance, length } => {
                debug_assert!((1..=WINDOW_SIZE).contains(&(distance as usize)));
                debug_assert!((length as usize) <= MAX_MATCH);
                bw.push_bit(true);
                bw.out16(distance << 4 | length as u16);
            }
        }
    }

    /// Take the next token off the stream.
    ///
    /// Returns Ok(None) once fewer than LITERAL_BITS remain, since whatever is left can only
    /// be padding. A match flag that is not followed by a full 16 bit field is an error.
    pub fn read(br: &mut BitReader<'_>) -> Result<Option<Token>> {
        if br.remaining() < LITERAL_BITS {
            return Ok(None);
        }
        let flag_at = br.position();
        match br.bool_bit() {
            Some(false) => {
                // remaining() >= 9 was checked above, so the byte is there
                let x = br.byte().ok_or_else(|| truncated("literal", flag_at))?;
                Ok(Some(Token::Literal(x)))
            }
            Some(true) => {
                let field = br.bint(16).ok_or_else(|| truncated("match", flag_at))?;
                let byte1 = (field >> 8) as u16;
                let byte2 = (field & 0xFF) as u16;
                Ok(Some(Token::Match {
                    distance: byte1 << 4 | byte2 >> 4,
                    length: (byte2 & 0xF) as u8,
                }))
            }
            None => Ok(None),
        }
    }
}

fn truncated(kind: &str, bit_offset: usize) -> Lz77Error {
    Lz77Error::MalformedStream {
        reason: format!("{} token is truncated", kind),
        bit_offset,
    }
}

/// Verbose rendering: `<0, byte>` for a literal and `<1, distance, length>` for a match.
impl Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::Literal(x) => write!(f, "<0, {}>", x),
            Token::Match { distance, length } => write!(f, "<1, {}, {}>", distance, length),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn literal_layout_test() {
        let mut bw = BitWriter::new(2);
        Token::Literal(b'a').write(&mut bw);
        assert_eq!(bw.bit_len(), LITERAL_BITS);
        assert_eq!(bw.into_bytes(), vec![0b0011_0000, 0b1000_0000]);
    }

    #[test]
    fn match_layout_test() {
        // distance 0xABC, length 7 -> 1 10101011 11000111
        let mut bw = BitWriter::new(3);
        Token::Match {
            distance: 0xABC,
            length: 7,
        }
        .write(&mut bw);
        assert_eq!(bw.bit_len(), MATCH_BITS);
        assert_eq!(bw.into_bytes(), vec![0b1101_0101, 0b1110_0011, 0b1000_0000]);
    }

    #[test]
    fn read_back_test() {
        let tokens = [
            Token::Literal(0xFF),
            Token::Match {
                distance: 1,
                length: 15,
            },
            Token::Match {
                distance: 4095,
                length: 4,
            },
            Token::Literal(0),
        ];
        let mut bw = BitWriter::new(16);
        tokens.iter().for_each(|t| t.write(&mut bw));
        let bytes = bw.into_bytes();

        let mut br = BitReader::new(&bytes);
        for t in tokens.iter() {
            assert_eq!(Token::read(&mut br).unwrap(), Some(*t));
        }
        assert_eq!(Token::read(&mut br).unwrap(), None);
    }

    #[test]
    fn padding_is_ignored_test() {
        // a single zero byte is only 8 bits, too short for any token
        let bytes = [0_u8];
        let mut br = BitReader::new(&bytes);
        assert_eq!(Token::read(&mut br).unwrap(), None);
    }

    #[test]
    fn truncated_match_test() {
        // match flag followed by only 15 bits
        let bytes = [0b1000_0000_u8, 0x00];
        let mut br = BitReader::new(&bytes);
        match Token::read(&mut br) {
            Err(Lz77Error::MalformedStream { bit_offset, .. }) => assert_eq!(bit_offset, 0),
            other => panic!("expected a malformed stream, got {:?}", other),
        }
    }

    #[test]
    fn display_test() {
        assert_eq!(Token::Literal(97).to_string(), "<0, 97>");
        assert_eq!(
            Token::Match {
                distance: 3,
                length: 15
            }
            .to_string(),
            "<1, 3, 15>"
        );
    }
}
