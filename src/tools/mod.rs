//! The tools module provides helper functions for the codecs.
//!
//! The tools are:
//! - cli: Command line interface and run options.
//! - freq_count: Frequency count of the input bytes for the Huffman tree.
//!
pub mod cli;
pub mod freq_count;
