use std::io::{self, Read};

use log::debug;

use crate::error::CodecError;
use crate::huffman_coding::symbol::{FrequencyTable, Symbol};

const CHUNK_SIZE: usize = 16_000;

/// Returns a frequency count of the input data, plus a single count for the end-of-stream
/// marker. Empty input yields a table holding only the marker.
pub fn freqs(data: &[u8]) -> FrequencyTable {
    let mut counts = [0_u64; 256];
    data.iter().for_each(|&el| counts[el as usize] += 1);
    into_table(&counts)
}

/// Same as freqs(), but pulls the data from a reader in chunks.
pub fn freqs_from_reader<R: Read>(reader: &mut R) -> Result<FrequencyTable, CodecError> {
    let mut counts = [0_u64; 256];
    let mut buf = vec![0_u8; CHUNK_SIZE];
    loop {
        let size = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(size) => size,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        };
        buf[..size].iter().for_each(|&el| counts[el as usize] += 1);
    }
    Ok(into_table(&counts))
}

fn into_table(counts: &[u64; 256]) -> FrequencyTable {
    let mut table: FrequencyTable = counts
        .iter()
        .enumerate()
        .map(|(byte, &count)| (Symbol::Literal(byte as u8), count))
        .collect();
    table.add(Symbol::EndOfStream, 1);
    debug!(
        "Counted {} bytes over {} distinct symbols.",
        table.total() - 1,
        table.len()
    );
    table
}

#[cfg(test)]
mod test {
    use super::{freqs, freqs_from_reader};
    use crate::huffman_coding::symbol::Symbol;

    #[test]
    fn empty_test() {
        let table = freqs(&[]);
        assert_eq!(table.len(), 1);
        assert_eq!(table.get(Symbol::EndOfStream), Some(1));
    }

    #[test]
    fn count_test() {
        let table = freqs(b"abracadabra");
        assert_eq!(table.get(Symbol::Literal(b'a')), Some(5));
        assert_eq!(table.get(Symbol::Literal(b'b')), Some(2));
        assert_eq!(table.get(Symbol::Literal(b'r')), Some(2));
        assert_eq!(table.get(Symbol::Literal(b'c')), Some(1));
        assert_eq!(table.get(Symbol::Literal(b'd')), Some(1));
        assert_eq!(table.get(Symbol::EndOfStream), Some(1));
        assert_eq!(table.len(), 6);
    }

    #[test]
    fn reader_matches_slice_test() {
        let data: Vec<u8> = (0..40_000_u32).map(|i| (i * 7 % 251) as u8).collect();
        let from_reader = freqs_from_reader(&mut data.as_slice()).unwrap();
        assert_eq!(from_reader, freqs(&data));
    }
}
