//! The compression module drives whole compress and decompress runs.
//!
//! Huffman compression happens in the following steps:
//! - Frequency count: count every byte of the input, plus one end-of-stream marker.
//! - Header: write those counts so the decoder can rebuild the same tree.
//! - Tree build: merge the two lightest nodes until one root is left.
//! - Encoding: write each input byte's prefix code, then the end-of-stream code.
//!
//! Decompression reads the header, rebuilds the tree and walks it bit by bit.
//!
//! LZW compression needs no header. The code stream is written as decimal text and read back
//! the same way.
//!
//! Every function here works on byte slices or on Read/Write streams; compress_files() and
//! decompress_files() add the file handling used by the command line.
//!

pub mod compress;
pub mod decompress;
pub mod files;
