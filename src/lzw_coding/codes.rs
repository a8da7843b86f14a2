//! Text form of an LZW code stream: decimal codes, each followed by one space. There is no header;
//! codes 0-255 are always the single bytes.

use std::io::{Read, Write};

use log::debug;

use crate::error::CodecError;

/// Render each code as decimal text followed by a space.
pub fn format_codes(codes: &[u32]) -> Vec<u8> {
    let mut out = Vec::with_capacity(codes.len() * 4);
    for code in codes {
        out.extend_from_slice(code.to_string().as_bytes());
        out.push(b' ');
    }
    out
}

/// Write the text form of `codes` to `writer`. Returns the number of bytes written.
pub fn write_codes<W: Write>(codes: &[u32], writer: &mut W) -> Result<usize, CodecError> {
    let out = format_codes(codes);
    writer.write_all(&out)?;
    Ok(out.len())
}

/// Read a whitespace-delimited list of decimal codes until the end of the input.
pub fn read_codes<R: Read>(reader: &mut R) -> Result<Vec<u32>, CodecError> {
    let mut text = Vec::new();
    reader.read_to_end(&mut text)?;
    let codes = parse_codes(&text)?;
    debug!("Read {} LZW codes from {} bytes.", codes.len(), text.len());
    Ok(codes)
}

/// Parse whitespace-delimited decimal codes from a byte slice.
pub fn parse_codes(text: &[u8]) -> Result<Vec<u32>, CodecError> {
    text.split(|b| b.is_ascii_whitespace())
        .filter(|token| !token.is_empty())
        .map(parse_code)
        .collect()
}

fn parse_code(token: &[u8]) -> Result<u32, CodecError> {
    if !token.iter().all(u8::is_ascii_digit) {
        return Err(CodecError::MalformedCodeStream(format!(
            "'{}' is not a decimal code",
            String::from_utf8_lossy(token)
        )));
    }
    // All ASCII digits, so the only possible failure left is overflow
    std::str::from_utf8(token)
        .ok()
        .and_then(|s| s.parse::<u32>().ok())
        .ok_or_else(|| {
            CodecError::MalformedCodeStream(format!(
                "code {} is too large",
                String::from_utf8_lossy(token)
            ))
        })
}
