use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

/// A Huffman alphabet entry: one literal byte, or the end-of-stream marker that terminates every
/// payload. Ordered with all literals (by byte value) before EndOfStream.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Symbol {
    Literal(u8),
    EndOfStream,
}

impl Symbol {
    /// Position of the symbol in the alphabet. Bytes keep their value, EndOfStream is 256.
    pub fn ordinal(&self) -> u32 {
        match self {
            Symbol::Literal(byte) => *byte as u32,
            Symbol::EndOfStream => 256,
        }
    }
}

impl Display for Symbol {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Symbol::Literal(byte) if byte.is_ascii_graphic() => write!(f, "'{}'", *byte as char),
            Symbol::Literal(byte) => write!(f, "0x{:02x}", byte),
            Symbol::EndOfStream => write!(f, "EOS"),
        }
    }
}

/// Symbol counts used to build a Huffman tree. Only positive counts are stored, and iteration
/// always runs in symbol order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: BTreeMap<Symbol, u64>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `count` occurrences of `symbol`. Adding zero is a no-op.
    pub fn add(&mut self, symbol: Symbol, count: u64) {
        if count > 0 {
            *self.counts.entry(symbol).or_insert(0) += count;
        }
    }

    /// Set the count for `symbol`, replacing what was there. A zero count removes the symbol.
    pub fn set(&mut self, symbol: Symbol, count: u64) {
        if count == 0 {
            self.counts.remove(&symbol);
        } else {
            self.counts.insert(symbol, count);
        }
    }

    pub fn get(&self, symbol: Symbol) -> Option<u64> {
        self.counts.get(&symbol).copied()
    }

    pub fn contains(&self, symbol: Symbol) -> bool {
        self.counts.contains_key(&symbol)
    }

    /// Number of distinct symbols, EndOfStream included.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Symbol, u64)> + '_ {
        self.counts.iter().map(|(&sym, &count)| (sym, count))
    }

    /// The literal byte entries only, in byte order.
    pub fn literals(&self) -> impl Iterator<Item = (u8, u64)> + '_ {
        self.counts.iter().filter_map(|(sym, &count)| match sym {
            Symbol::Literal(byte) => Some((*byte, count)),
            Symbol::EndOfStream => None,
        })
    }

    /// Sum of all counts, saturating at u64::MAX.
    pub fn total(&self) -> u64 {
        self.counts
            .values()
            .fold(0_u64, |acc, &count| acc.saturating_add(count))
    }
}

impl FromIterator<(Symbol, u64)> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = (Symbol, u64)>>(iter: I) -> Self {
        let mut table = FrequencyTable::new();
        iter.into_iter().for_each(|(sym, count)| table.add(sym, count));
        table
    }
}
