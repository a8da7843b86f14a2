//! Errors shared by the Huffman and LZW codecs.
//!
//! Every error is fatal for the call that raised it. Nothing is retried and no partial output
//! is promised to the caller.

/// Everything that can go wrong while compressing or decompressing.
#[derive(thiserror::Error, Debug)]
pub enum CodecError {
    /// The Huffman preamble could not be parsed (bad count, bad pair, or cut short).
    #[error("Malformed header: {0}")]
    MalformedHeader(String),

    /// The frequency table cannot describe a usable tree.
    #[error("Invalid frequency table: {0}")]
    InvalidFrequencyTable(String),

    /// The bit source ran dry before the End-Of-Stream symbol was decoded.
    #[error("Stream ended before the end-of-stream marker")]
    TruncatedStream,

    /// LZW decode met a code that is neither defined nor the next free code.
    #[error("Unknown LZW code {code} (next free code is {next})")]
    UnknownCode { code: u32, next: u32 },

    /// The textual LZW code stream holds something that is not a decimal code.
    #[error("Malformed LZW code stream: {0}")]
    MalformedCodeStream(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<CodecError> for std::io::Error {
    fn from(e: CodecError) -> Self {
        match e {
            CodecError::Io(inner) => inner,
            other => std::io::Error::new(std::io::ErrorKind::InvalidData, other.to_string()),
        }
    }
}
