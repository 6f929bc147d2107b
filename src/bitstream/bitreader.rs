//! BitReader: reads back a packed bitstream produced by BitWriter.
//!
//! The reader borrows the whole compressed buffer. Every read first checks that enough bits
//! remain, so a short read returns None and leaves the cursor where it was.
//!

const BIT_MASK: u8 = 0xff;

/// Reads a packed, most significant bit first, bitstream.
#[derive(Debug)]
pub struct BitReader<'a> {
    buffer: &'a [u8],
    cursor: usize,
    bit_index: usize,
}

impl<'a> BitReader<'a> {
    /// Creates a new BitReader positioned on the first bit of the buffer.
    pub fn new(buffer: &'a [u8]) -> Self {
        Self {
            buffer,
            cursor: 0,
            bit_index: 0,
        }
    }

    /// Number of unread bits left in the buffer.
    pub fn remaining(&self) -> usize {
        (self.buffer.len() - self.cursor) * 8 - self.bit_index
    }

    /// Number of bits consumed so far.
    pub fn position(&self) -> usize {
        self.cursor * 8 + self.bit_index
    }

    /// Move the cursor forward by n bits (n is never more than the rest of the current byte).
    fn advance(&mut self, n: usize) {
        self.bit_index += n;
        if self.bit_index / 8 > 0 {
            self.cursor += 1;
        }
        self.bit_index %= 8;
    }

    /// Return bit as Option<usize> (1 or 0), or None if there is no more data to read
    pub fn bit(&mut self) -> Option<usize> {
        if self.remaining() == 0 {
            return None;
        }
        let bit = (self.buffer[self.cursor] >> (7 - self.bit_index)) & 1;
        self.advance(1);
        Some(bit as usize)
    }

    /// Return Option<Bool> *true* if the next bit is 1, *false* if 0, consuming the bit,
    /// or None if there is no more data to read
    pub fn bool_bit(&mut self) -> Option<bool> {
        self.bit().map(|bit| bit == 1)
    }

    /// Return Option<usize> of the next n bits (n <= 32), or None if fewer than n bits remain.
    pub fn bint(&mut self, mut n: usize) -> Option<usize> {
        /*
        Read as many bits as possible per step. First drain whatever is left of a
        partially read byte, then take full bytes, then a partial byte to complete
        the request.
        */
        debug_assert!(n <= 32);
        if n > self.remaining() {
            return None;
        }
        let mut result = 0_usize;

        // Test if we have a partial byte of data. If we do, read from it.
        if self.bit_index > 0 {
            let needed = n.min(8 - self.bit_index);
            result = ((self.buffer[self.cursor] & BIT_MASK >> self.bit_index)
                >> (8 - self.bit_index - needed)) as usize;
            self.advance(needed);
            n -= needed;
        }
        // Get as many full bytes as we need.
        while n >= 8 {
            result = result << 8 | self.buffer[self.cursor] as usize;
            self.cursor += 1;
            n -= 8;
        }
        // If we still need a partial byte, get whatever bits we still need.
        if n > 0 {
            result = result << n | (self.buffer[self.cursor] >> (8 - n)) as usize;
            self.advance(n);
        }
        Some(result)
    }

    /// Returns a byte as an Option<u8>, or None if there is no more data to read. This is
    /// a convenience function, and calls bint(8).
    pub fn byte(&mut self) -> Option<u8> {
        self.bint(8).map(|byte| byte as u8)
    }

    /// Debugging function. Report current position in the buffer.
    pub fn loc(&self) -> String {
        format!("[{}.{}]", self.cursor, self.bit_index)
    }
}
