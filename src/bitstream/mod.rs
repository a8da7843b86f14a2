//! The bitstream module forms the bit-level I/O subsystem for the Huffman codec.
//!
//! Huffman codes are variable length, so the payload is written and read one bit at a time. Both
//! sides agree on one bit order: the first bit written lands in the most significant position of the
//! first byte. The final byte is padded with zero bits, which the decoder never reaches because it
//! stops at the end-of-stream code.
//!
pub mod bitreader;
pub mod bitwriter;
