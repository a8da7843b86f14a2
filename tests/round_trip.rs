use huffzip::compression::compress::{huffman_compress, huffman_compress_stream, lzw_compress};
use huffzip::compression::decompress::{huffman_decompress, lzw_decompress, lzw_decompress_stream};
use huffzip::huffman_coding::header::{read_header, write_header, HeaderFormat};
use huffzip::huffman_coding::huffman::code_table;
use huffzip::huffman_coding::symbol::{FrequencyTable, Symbol};
use huffzip::huffman_coding::tree::build_tree;
use huffzip::lzw_coding::lzw::{lzw_decode, lzw_encode};
use huffzip::tools::freq_count::freqs;
use huffzip::CodecError;

const FORMATS: [HeaderFormat; 2] = [HeaderFormat::Binary, HeaderFormat::Text];

/// A small, fixed pseudo-random generator so the inputs are the same on every run.
fn noise(len: usize, seed: u32) -> Vec<u8> {
    let mut state = seed;
    (0..len)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            (state >> 24) as u8
        })
        .collect()
}

fn samples() -> Vec<Vec<u8>> {
    vec![
        vec![],
        b"A".to_vec(),
        b"AAAAAAAAAA".to_vec(),
        b"aaaa".to_vec(),
        b"abracadabra".to_vec(),
        (0..=255_u8).collect(),
        (0..=255_u8).rev().cycle().take(5000).collect(),
        b"1 22 333 4444 \n\n  5".to_vec(),
        noise(20_000, 0x1234_5678),
        noise(3, 7),
        include_bytes!("round_trip.rs").to_vec(),
    ]
}

#[test]
fn huffman_round_trip() {
    for data in samples() {
        for format in FORMATS {
            let packed = huffman_compress(&data, format).unwrap();
            assert_eq!(
                huffman_decompress(&packed, format).unwrap(),
                data,
                "{:?} round trip failed for {} bytes",
                format,
                data.len()
            );
        }
    }
}

#[test]
fn lzw_round_trip() {
    for data in samples() {
        assert_eq!(lzw_decode(&lzw_encode(&data)).unwrap(), data);
        assert_eq!(lzw_decompress(&lzw_compress(&data)).unwrap(), data);
    }
}

#[test]
fn lzw_stream_round_trip() {
    let data = noise(4096, 99);
    let text = lzw_compress(&data);
    let mut out = Vec::new();
    let written = lzw_decompress_stream(&mut text.as_slice(), &mut out).unwrap();
    assert_eq!(written, data.len());
    assert_eq!(out, data);
}

#[test]
fn empty_input_scenario() {
    let table = freqs(&[]);
    let expected: FrequencyTable = vec![(Symbol::EndOfStream, 1)].into_iter().collect();
    assert_eq!(table, expected);

    // Payload is the end-of-stream code alone
    let packed = huffman_compress(&[], HeaderFormat::Binary).unwrap();
    let tree = build_tree(&table).unwrap();
    let eos = code_table(&tree).get(Symbol::EndOfStream).unwrap().len();
    assert_eq!(eos, 1);
    assert_eq!(packed.len(), 2 + 1);
    assert!(huffman_decompress(&packed, HeaderFormat::Binary).unwrap().is_empty());
}

#[test]
fn repeated_byte_scenario() {
    let data = b"AAAAAAAAAA";
    let codes = lzw_encode(data);
    assert_eq!(codes[0], b'A' as u32);
    assert!(codes[1..].iter().all(|&c| c >= 256));
    assert_eq!(codes.len(), 4);
    assert_eq!(lzw_decode(&codes).unwrap(), data);

    for format in FORMATS {
        let packed = huffman_compress(data, format).unwrap();
        assert_eq!(huffman_decompress(&packed, format).unwrap(), data);
    }
}

#[test]
fn codes_are_deterministic_and_prefix_free() {
    for data in samples() {
        let table = freqs(&data);
        let first = code_table(&build_tree(&table).unwrap());
        let second = code_table(&build_tree(&table).unwrap());
        assert_eq!(first, second);

        if table.len() < 2 {
            continue;
        }
        let codes: Vec<&[bool]> = first.iter().map(|(_, c)| c).collect();
        assert_eq!(codes.len(), table.len());
        for (i, a) in codes.iter().enumerate() {
            for b in codes.iter().skip(i + 1) {
                assert!(!a.starts_with(b) && !b.starts_with(a));
            }
        }
    }
}

#[test]
fn header_round_trip() {
    for data in samples() {
        let table = freqs(&data);
        for format in FORMATS {
            let mut out = Vec::new();
            write_header(&table, format, &mut out).unwrap();
            assert_eq!(read_header(format, &mut out.as_slice()).unwrap(), table);
        }
    }
}

#[test]
fn decoder_rebuilds_encoder_tree() {
    // The decoder only ever sees the header, and must land on the same codes
    let data = noise(10_000, 42);
    let table = freqs(&data);
    let mut header = Vec::new();
    write_header(&table, HeaderFormat::Binary, &mut header).unwrap();
    let rebuilt = read_header(HeaderFormat::Binary, &mut header.as_slice()).unwrap();
    assert_eq!(
        code_table(&build_tree(&table).unwrap()),
        code_table(&build_tree(&rebuilt).unwrap())
    );
}

#[test]
fn file_stream_round_trip() {
    let data = noise(70_000, 5);
    let mut path = std::env::temp_dir();
    path.push(format!("huffzip-stream-{}.bin", std::process::id()));
    std::fs::write(&path, &data).unwrap();

    let mut fin = std::fs::File::open(&path).unwrap();
    let mut packed = Vec::new();
    huffman_compress_stream(&mut fin, &mut packed, HeaderFormat::Text).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(huffman_decompress(&packed, HeaderFormat::Text).unwrap(), data);
}

#[test]
fn errors_surface() {
    assert!(matches!(
        huffman_decompress(b"not a header", HeaderFormat::Text),
        Err(CodecError::MalformedHeader(_))
    ));

    let mut packed = huffman_compress(b"some text to cut short", HeaderFormat::Binary).unwrap();
    let header_len = 2 + 9 * freqs(b"some text to cut short").literals().count();
    packed.truncate(header_len + 1);
    assert!(matches!(
        huffman_decompress(&packed, HeaderFormat::Binary),
        Err(CodecError::TruncatedStream)
    ));

    assert!(matches!(
        lzw_decompress(b"65 66 300"),
        Err(CodecError::UnknownCode { code: 300, next: 257 })
    ));
    assert!(matches!(
        lzw_decompress(b"65 sixty-six"),
        Err(CodecError::MalformedCodeStream(_))
    ));
}
