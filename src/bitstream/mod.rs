//! The bitstream module forms the I/O subsystem of the lz77 compressor.
//!
//! Tokens are 9 or 17 bits wide, so nothing in the compressed format lines up with a byte
//! boundary until the very end of the stream. BitWriter packs the tokens most significant
//! bit first into a byte vector, and BitReader walks that vector back out again.
//!
//! Both sides work on complete in-memory buffers. There is no streaming mode.
//!
pub mod bitreader;
pub mod bitwriter;
