use std::io::{self, Cursor, Read, Seek, SeekFrom, Write};

use log::{debug, info};

use super::files::{discard_output, finish_input, open_input, open_output};
use crate::error::CodecError;
use crate::huffman_coding::header::{write_header, HeaderFormat};
use crate::huffman_coding::huffman::huf_encode_stream;
use crate::huffman_coding::tree::build_tree;
use crate::lzw_coding::codes::{format_codes, write_codes};
use crate::lzw_coding::lzw::lzw_encode;
use crate::tools::cli::{Codec, Opts};
use crate::tools::freq_count::freqs_from_reader;

/// Huffman compress a byte slice: frequency header followed by the packed payload.
pub fn huffman_compress(data: &[u8], format: HeaderFormat) -> Result<Vec<u8>, CodecError> {
    let mut out = Vec::with_capacity(data.len() / 2 + 16);
    huffman_compress_stream(&mut Cursor::new(data), &mut out, format)?;
    Ok(out)
}

/// Huffman compress everything from the current position of `input` to its end. The input is read
/// twice: once to count, once to encode. Returns the number of bytes written.
pub fn huffman_compress_stream<R: Read + Seek, W: Write>(
    input: &mut R,
    output: &mut W,
    format: HeaderFormat,
) -> Result<usize, CodecError> {
    let start = input.stream_position()?;
    let freqs = freqs_from_reader(input)?;
    let header_len = write_header(&freqs, format, output)?;

    input.seek(SeekFrom::Start(start))?;
    let tree = build_tree(&freqs)?;
    let payload_len = huf_encode_stream(&tree, input, output)?;
    output.flush()?;

    debug!(
        "Huffman: {} input bytes -> {} header + {} payload bytes.",
        freqs.total() - 1,
        header_len,
        payload_len
    );
    Ok(header_len + payload_len)
}

/// LZW compress a byte slice into its text code stream.
pub fn lzw_compress(data: &[u8]) -> Vec<u8> {
    format_codes(&lzw_encode(data))
}

/// LZW compress everything `input` holds. Returns the number of bytes written.
pub fn lzw_compress_stream<R: Read, W: Write>(input: &mut R, output: &mut W) -> Result<usize, CodecError> {
    let mut data = Vec::new();
    input.read_to_end(&mut data)?;
    let codes = lzw_encode(&data);
    let written = write_codes(&codes, output)?;
    output.flush()?;
    Ok(written)
}

/// Compress every input file named in opts (or stdin when there are none).
pub fn compress_files(opts: &Opts) -> Result<(), CodecError> {
    if opts.files.is_empty() {
        // stdin can't seek, so hold it in memory for the two Huffman passes
        let mut data = Vec::new();
        io::stdin().lock().read_to_end(&mut data)?;
        let mut out = io::BufWriter::new(io::stdout());
        let written = compress_one(&mut Cursor::new(data), &mut out, opts)?;
        info!("Compressed stdin into {} bytes.", written);
        return Ok(());
    }

    for name in &opts.files {
        info!("Compressing {} with {}", name, opts.codec);
        let mut fin = io::BufReader::new(open_input(name)?);
        let (mut out, path) = open_output(name, opts)?;
        match compress_one(&mut fin, &mut out, opts) {
            Ok(written) => {
                drop(out);
                info!("Compressed {} into {} bytes.", name, written);
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

fn compress_one<R: Read + Seek, W: Write>(
    input: &mut R,
    output: &mut W,
    opts: &Opts,
) -> Result<usize, CodecError> {
    match opts.codec {
        Codec::Huffman => huffman_compress_stream(input, output, opts.header),
        Codec::Lzw => lzw_compress_stream(input, output),
    }
}

#[cfg(test)]
mod test {
    use super::{huffman_compress, huffman_compress_stream, lzw_compress, lzw_compress_stream};
    use crate::compression::decompress::lzw_decompress;
    use crate::huffman_coding::header::HeaderFormat;
    use std::io::{Cursor, Read, Seek, SeekFrom};

    #[test]
    fn empty_input_test() {
        // Binary header: zero literals, then the one-bit end-of-stream code padded to a byte
        assert_eq!(huffman_compress(b"", HeaderFormat::Binary).unwrap(), vec![0, 0, 0]);
        assert_eq!(huffman_compress(b"", HeaderFormat::Text).unwrap(), b"0 \x00");
    }

    #[test]
    fn text_layout_test() {
        // A:10 EOS:1 -> EOS is popped first (zero branch), A is on the one branch
        let out = huffman_compress(b"AAAAAAAAAA", HeaderFormat::Text).unwrap();
        assert_eq!(&out[..5], b"1 A10");
        assert_eq!(&out[5..6], b" ");
        // Ten 1 bits then a 0 bit: 11111111 110xxxxx
        assert_eq!(&out[6..], &[0xff, 0xc0]);
    }

    #[test]
    fn stream_position_test() {
        // Compression starts from the current position and rewinds to it, not to zero
        let mut input = Cursor::new(b"skipABAB".to_vec());
        input.seek(SeekFrom::Start(4)).unwrap();
        let mut out = Vec::new();
        let written = huffman_compress_stream(&mut input, &mut out, HeaderFormat::Binary).unwrap();
        assert_eq!(written, out.len());
        assert_eq!(out, huffman_compress(b"ABAB", HeaderFormat::Binary).unwrap());
        let mut rest = Vec::new();
        input.read_to_end(&mut rest).unwrap();
        assert!(rest.is_empty());
    }

    #[test]
    fn lzw_text_test() {
        assert_eq!(lzw_compress(b"AAAAAAAAAA"), b"65 256 257 258 ");
        assert!(lzw_compress(b"").is_empty());
    }

    #[test]
    fn lzw_stream_test() {
        let data = b"TOBEORNOTTOBEORTOBEORNOT".repeat(40);
        let mut out = Vec::new();
        let written = lzw_compress_stream(&mut data.as_slice(), &mut out).unwrap();
        assert_eq!(written, out.len());
        assert_eq!(out, lzw_compress(&data));
        assert!(out.len() < data.len());
        assert_eq!(lzw_decompress(&out).unwrap(), data);

        let mut out = Vec::new();
        assert_eq!(lzw_compress_stream(&mut &b""[..], &mut out).unwrap(), 0);
        assert!(out.is_empty());
    }
}
