//! Reads and writes the frequency table that precedes the Huffman payload.
//!
//! Only literal symbols are written. The end-of-stream count is always 1, so the reader puts it
//! back on its own. Two framings are supported:
//!
//! - Binary: a big-endian u16 symbol count, then one raw byte and a big-endian u64 count per symbol.
//! - Text: `<count> ` then `<raw byte><decimal count> ` per symbol.
//!
//! The text reader always takes exactly one raw byte before it parses digits, so symbols that are
//! themselves digits or spaces read back correctly.
//!

use std::fmt::{Display, Formatter};
use std::io::{self, Read, Write};

use log::debug;

use super::symbol::{FrequencyTable, Symbol};
use crate::error::CodecError;

const MAX_LITERALS: usize = 256;
const DELIMITER: u8 = b' ';

/// Framing used for the frequency table preamble.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum HeaderFormat {
    /// Fixed-width binary framing
    #[default]
    Binary,
    /// Space-delimited text framing
    Text,
}

impl Display for HeaderFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Write the literal counts of `freqs` to `writer`. Returns the number of bytes written.
pub fn write_header<W: Write>(
    freqs: &FrequencyTable,
    format: HeaderFormat,
    writer: &mut W,
) -> Result<usize, CodecError> {
    if !freqs.contains(Symbol::EndOfStream) {
        return Err(CodecError::InvalidFrequencyTable(
            "no end-of-stream symbol defined".to_string(),
        ));
    }
    let literal_count = freqs.len() - 1;

    let mut out = Vec::new();
    match format {
        HeaderFormat::Binary => {
            out.extend_from_slice(&(literal_count as u16).to_be_bytes());
            for (byte, count) in freqs.literals() {
                out.push(byte);
                out.extend_from_slice(&count.to_be_bytes());
            }
        }
        HeaderFormat::Text => {
            out.extend_from_slice(literal_count.to_string().as_bytes());
            out.push(DELIMITER);
            for (byte, count) in freqs.literals() {
                out.push(byte);
                out.extend_from_slice(count.to_string().as_bytes());
                out.push(DELIMITER);
            }
        }
    }
    writer.write_all(&out)?;
    debug!(
        "Wrote {} header: {} symbols in {} bytes.",
        format,
        literal_count,
        out.len()
    );
    Ok(out.len())
}

/// Read a frequency table written by write_header() in the same format, and add the
/// end-of-stream count. Reads nothing past the end of the header.
pub fn read_header<R: Read>(format: HeaderFormat, reader: &mut R) -> Result<FrequencyTable, CodecError> {
    let literal_count = match format {
        HeaderFormat::Binary => u16::from_be_bytes([read_byte(reader)?, read_byte(reader)?]) as usize,
        HeaderFormat::Text => read_decimal(reader)? as usize,
    };
    if literal_count > MAX_LITERALS {
        return Err(CodecError::MalformedHeader(format!(
            "symbol count {} exceeds {}",
            literal_count, MAX_LITERALS
        )));
    }

    let mut freqs = FrequencyTable::new();
    for _ in 0..literal_count {
        let sym = Symbol::Literal(read_byte(reader)?);
        let count = match format {
            HeaderFormat::Binary => {
                let mut buf = [0_u8; 8];
                for b in buf.iter_mut() {
                    *b = read_byte(reader)?;
                }
                u64::from_be_bytes(buf)
            }
            HeaderFormat::Text => read_decimal(reader)?,
        };
        if count == 0 {
            return Err(CodecError::MalformedHeader(format!("{} has a zero count", sym)));
        }
        if freqs.contains(sym) {
            return Err(CodecError::MalformedHeader(format!("{} listed twice", sym)));
        }
        freqs.set(sym, count);
    }
    freqs.set(Symbol::EndOfStream, 1);
    debug!("Read {} header: {} symbols.", format, literal_count);
    Ok(freqs)
}

/// Read one byte. Running out of input inside the header is a malformed header.
fn read_byte<R: Read>(reader: &mut R) -> Result<u8, CodecError> {
    let mut buf = [0_u8; 1];
    match reader.read_exact(&mut buf) {
        Ok(()) => Ok(buf[0]),
        Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => Err(CodecError::MalformedHeader(
            "header ended unexpectedly".to_string(),
        )),
        Err(e) => Err(e.into()),
    }
}

/// Read decimal digits up to (and consuming) the delimiter.
fn read_decimal<R: Read>(reader: &mut R) -> Result<u64, CodecError> {
    let mut value: u64 = 0;
    let mut digits = 0;
    loop {
        let byte = read_byte(reader)?;
        match byte {
            DELIMITER if digits > 0 => return Ok(value),
            b'0'..=b'9' => {
                value = value
                    .checked_mul(10)
                    .and_then(|v| v.checked_add((byte - b'0') as u64))
                    .ok_or_else(|| CodecError::MalformedHeader("number too large".to_string()))?;
                digits += 1;
            }
            other => {
                return Err(CodecError::MalformedHeader(format!(
                    "expected a digit, found byte 0x{:02x}",
                    other
                )))
            }
        }
    }
}
