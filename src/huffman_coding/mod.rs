//! The huffman_coding module holds the static-tree entropy coder.
//!
//! Compression counts every byte of the input (plus one end-of-stream marker), writes those counts
//! as a header, builds a tree from them and writes one prefix code per input byte followed by the
//! end-of-stream code. Decompression reads the header back, rebuilds the very same tree and walks
//! it bit by bit until it reaches the end-of-stream leaf.
//!
//! The tree is built fresh for every call and dropped when the call is done.
//!

pub mod header;
pub mod huffman;
pub mod symbol;
pub mod tree;
