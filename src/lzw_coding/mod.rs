//! The lzw_coding module holds the adaptive dictionary coder. It shares nothing with the Huffman
//! side.
//!
//! Encoder and decoder each build their own dictionary, seeded with the 256 single bytes. They stay
//! in step only because the decoder replays the encoder's choices from the code stream. There is
//! no cap or reset: the dictionary grows for as long as one call runs.
//!

pub mod codes;
pub mod lzw;
