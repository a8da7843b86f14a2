use std::io::{self, Read, Write};

use log::{debug, trace};

use super::symbol::Symbol;
use super::tree::{HuffmanTree, Node, NodeData};
use crate::bitstream::bitreader::BitReader;
use crate::bitstream::bitwriter::BitWriter;
use crate::error::CodecError;

/// Alphabet size: 256 literal bytes plus end-of-stream.
const ALPHABET: usize = 257;
const CHUNK_SIZE: usize = 64 * 1024;

/// Symbol to bit-code mapping derived from a Huffman tree. `true` is a 1 bit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTable {
    codes: Vec<Option<Vec<bool>>>,
}

impl CodeTable {
    /// The code for `symbol`, or None if the symbol is not in the tree.
    pub fn get(&self, symbol: Symbol) -> Option<&[bool]> {
        self.codes[symbol.ordinal() as usize].as_deref()
    }

    /// Every (symbol, code) pair, in symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (Symbol, &[bool])> + '_ {
        self.codes.iter().enumerate().filter_map(|(i, code)| {
            let sym = match i {
                256 => Symbol::EndOfStream,
                byte => Symbol::Literal(byte as u8),
            };
            code.as_deref().map(|c| (sym, c))
        })
    }

    pub fn len(&self) -> usize {
        self.codes.iter().filter(|c| c.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Walk the tree once and record the path to every leaf. A degenerate tree (the root is a leaf)
/// gives its only symbol the one-bit code 0 so it can still be written and read like any other.
pub fn code_table(tree: &HuffmanTree) -> CodeTable {
    let mut codes = vec![None; ALPHABET];
    if tree.is_degenerate() {
        if let NodeData::Leaf(sym) = tree.root().node_data {
            codes[sym.ordinal() as usize] = Some(vec![false]);
        }
    } else {
        let mut path = Vec::with_capacity(tree.depth());
        return_leaves(tree.root(), &mut path, &mut codes);
    }
    CodeTable { codes }
}

/// Recursively walk the tree, recording the current path as the code of each leaf reached.
fn return_leaves(node: &Node, path: &mut Vec<bool>, codes: &mut [Option<Vec<bool>>]) {
    match &node.node_data {
        NodeData::Kids(zero, one) => {
            path.push(false);
            return_leaves(zero, path, codes);
            path.pop();
            path.push(true);
            return_leaves(one, path, codes);
            path.pop();
        }
        NodeData::Leaf(sym) => {
            codes[sym.ordinal() as usize] = Some(path.clone());
        }
    }
}

/// Encode `data` with the codes of `tree`, then terminate with the end-of-stream code.
pub fn huf_encode(tree: &HuffmanTree, data: &[u8], bw: &mut BitWriter) -> Result<(), CodecError> {
    let table = code_table(tree);
    debug!("Encoding {} bytes with {} codes.", data.len(), table.len());
    put_bytes(&table, data, bw)?;
    put_eos(&table, bw)
}

/// Same as huf_encode(), but pulls the data from `reader` and pushes packed bytes to `writer` as
/// they fill up. Returns the number of bytes written, padding included.
pub fn huf_encode_stream<R: Read, W: Write>(
    tree: &HuffmanTree,
    reader: &mut R,
    writer: &mut W,
) -> Result<usize, CodecError> {
    let table = code_table(tree);
    let mut bw = BitWriter::with_capacity(CHUNK_SIZE);
    let mut buf = vec![0_u8; CHUNK_SIZE];
    let mut written = 0;
    loop {
        let size = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(size) => size,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        };
        put_bytes(&table, &buf[..size], &mut bw)?;
        let packed = bw.take_output();
        writer.write_all(&packed)?;
        written += packed.len();
    }
    put_eos(&table, &mut bw)?;
    let packed = bw.flush();
    writer.write_all(&packed)?;
    written += packed.len();
    debug!("Wrote {} bytes of Huffman payload.", written);
    Ok(written)
}

fn put_bytes(table: &CodeTable, data: &[u8], bw: &mut BitWriter) -> Result<(), CodecError> {
    for &byte in data {
        let code = table.get(Symbol::Literal(byte)).ok_or_else(|| {
            CodecError::InvalidFrequencyTable(format!(
                "byte {} has no code in the tree",
                Symbol::Literal(byte)
            ))
        })?;
        bw.out_bits(code);
    }
    Ok(())
}

fn put_eos(table: &CodeTable, bw: &mut BitWriter) -> Result<(), CodecError> {
    let eos = table.get(Symbol::EndOfStream).ok_or_else(|| {
        CodecError::InvalidFrequencyTable("tree has no end-of-stream symbol".to_string())
    })?;
    trace!("Writing end-of-stream code at {}.", bw.loc());
    bw.out_bits(eos);
    Ok(())
}

/// Decode symbols from `br` until the end-of-stream symbol. Running out of bits first is an error.
/// Anything after the end-of-stream code (byte padding) is left unread.
pub fn huf_decode<R: Read>(tree: &HuffmanTree, br: &mut BitReader<R>) -> Result<Vec<u8>, CodecError> {
    let root = tree.root();
    let mut output = Vec::new();
    let mut node = root;

    loop {
        let bit = br.bit()?.ok_or(CodecError::TruncatedStream)?;
        node = match &node.node_data {
            NodeData::Kids(zero, one) => {
                if bit {
                    &**one
                } else {
                    &**zero
                }
            }
            // Degenerate tree: every code is the single bit read above.
            NodeData::Leaf(_) => node,
        };
        if let NodeData::Leaf(sym) = node.node_data {
            match sym {
                Symbol::EndOfStream => {
                    trace!("Found end-of-stream code at {}.", br.loc());
                    break;
                }
                Symbol::Literal(byte) => output.push(byte),
            }
            node = root;
        }
    }
    debug!("Decoded {} bytes.", output.len());
    Ok(output)
}
