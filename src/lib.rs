//! Lossless byte-stream compression with two independent codecs.
//!
//! - Huffman: a static prefix code built from the byte frequencies of the input. The frequency
//!   table travels in a header in front of the packed payload.
//! - LZW: an adaptive dictionary coder whose output is a list of decimal codes.
//!
//! Both guarantee an exact round trip for any input, the empty input included.
//!
//! ```
//! use huffzip::compression::compress::{huffman_compress, lzw_compress};
//! use huffzip::compression::decompress::{huffman_decompress, lzw_decompress};
//! use huffzip::huffman_coding::header::HeaderFormat;
//!
//! let packed = huffman_compress(b"abracadabra", HeaderFormat::Binary).unwrap();
//! assert_eq!(huffman_decompress(&packed, HeaderFormat::Binary).unwrap(), b"abracadabra");
//!
//! assert_eq!(lzw_compress(b"AAAAAAAAAA"), b"65 256 257 258 ");
//! assert_eq!(lzw_decompress(b"65 256 257 258 ").unwrap(), b"AAAAAAAAAA");
//! ```
//!
//! Basic usage of the command line tool to compress a file is as follows:
//!
//! `$> huffzip -z test.txt`
//!
//! This will compress the file and create the file test.txt.huf.
//! The original file will be deleted unless -k is given.
//!
pub mod bitstream;
pub mod compression;
pub mod error;
pub mod huffman_coding;
pub mod lzw_coding;
pub mod tools;

pub use error::CodecError;
