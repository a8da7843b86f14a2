use std::io::{self, BufReader, Read, Write};

use log::{info, warn};

use super::files::{discard_output, finish_input, open_input, open_output};
use crate::bitstream::bitreader::BitReader;
use crate::error::CodecError;
use crate::huffman_coding::header::{read_header, HeaderFormat};
use crate::huffman_coding::huffman::huf_decode;
use crate::huffman_coding::tree::build_tree;
use crate::lzw_coding::codes::{parse_codes, read_codes};
use crate::lzw_coding::lzw::lzw_decode;
use crate::tools::cli::{Codec, Mode, Opts};

/// Undo huffman_compress().
pub fn huffman_decompress(data: &[u8], format: HeaderFormat) -> Result<Vec<u8>, CodecError> {
    let mut input = data;
    let freqs = read_header(format, &mut input)?;
    let tree = build_tree(&freqs)?;
    let mut br = BitReader::new(input);
    huf_decode(&tree, &mut br)
}

/// Read a Huffman header and payload from `input`, and write the decoded bytes to `output`.
/// Returns the number of bytes written.
pub fn huffman_decompress_stream<R: Read, W: Write>(
    input: &mut R,
    output: &mut W,
    format: HeaderFormat,
) -> Result<usize, CodecError> {
    // Header and payload share one buffered reader, so nothing read ahead is lost between them
    let mut reader = BufReader::new(input);
    let freqs = read_header(format, &mut reader)?;
    let tree = build_tree(&freqs)?;
    let mut br = BitReader::new(reader);
    let data = huf_decode(&tree, &mut br)?;
    output.write_all(&data)?;
    output.flush()?;
    Ok(data.len())
}

/// Undo lzw_compress().
pub fn lzw_decompress(data: &[u8]) -> Result<Vec<u8>, CodecError> {
    lzw_decode(&parse_codes(data)?)
}

/// Read a textual LZW code stream from `input`, and write the decoded bytes to `output`.
/// Returns the number of bytes written.
pub fn lzw_decompress_stream<R: Read, W: Write>(input: &mut R, output: &mut W) -> Result<usize, CodecError> {
    let codes = read_codes(input)?;
    let data = lzw_decode(&codes)?;
    output.write_all(&data)?;
    output.flush()?;
    Ok(data.len())
}

/// Decompress (or, in Test mode, just verify) every input file named in opts, or stdin when
/// there are none.
pub fn decompress_files(opts: &Opts) -> Result<(), CodecError> {
    if opts.files.is_empty() {
        let mut input = io::stdin().lock();
        let written = if opts.op_mode == Mode::Test {
            decompress_one(&mut input, &mut io::sink(), opts)?
        } else {
            decompress_one(&mut input, &mut io::BufWriter::new(io::stdout()), opts)?
        };
        info!("Decompressed stdin into {} bytes.", written);
        return Ok(());
    }

    for name in &opts.files {
        if !name.ends_with(opts.codec.extension()) {
            warn!(
                "{} does not end in {}; trying anyway.",
                name,
                opts.codec.extension()
            );
        }
        let mut fin = open_input(name)?;

        if opts.op_mode == Mode::Test {
            let size = decompress_one(&mut fin, &mut io::sink(), opts)?;
            info!("{}: ok ({} bytes)", name, size);
            continue;
        }

        info!("Decompressing {} with {}", name, opts.codec);
        let (mut out, path) = open_output(name, opts)?;
        match decompress_one(&mut fin, &mut out, opts) {
            Ok(written) => {
                drop(out);
                info!("Decompressed {} into {} bytes.", name, written);
                finish_input(name, opts)?;
            }
            Err(e) => {
                drop(out);
                discard_output(path);
                return Err(e);
            }
        }
    }
    Ok(())
}

fn decompress_one<R: Read, W: Write>(
    input: &mut R,
    output: &mut W,
    opts: &Opts,
) -> Result<usize, CodecError> {
    match opts.codec {
        Codec::Huffman => huffman_decompress_stream(input, output, opts.header),
        Codec::Lzw => lzw_decompress_stream(input, output),
    }
}
