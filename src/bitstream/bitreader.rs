//! BitReader: reads a packed bitstream one bit at a time, most significant bit first.
//!
//! NOTE: This module can read from any I/O source that supports the read() call.
//!

use std::io;

const BUFFER_SIZE: usize = 64 * 1024;
const BIT_MASK: u8 = 0xff;

/// Reads a packed bitstream.
#[derive(Debug)]
pub struct BitReader<R> {
    buffer: Vec<u8>,
    cursor: usize,
    bit_index: usize,
    source: R,
}

impl<R: io::Read> BitReader<R> {
    /// Creates a new BitReader (with a 64k buffer).
    pub fn new(source: R) -> Self {
        Self {
            buffer: vec![0; BUFFER_SIZE],
            cursor: BUFFER_SIZE,
            bit_index: 0,
            source,
        }
    }

    /// Check (and refill) buffer. Returns true if we have data, false if there is no more
    fn have_data(&mut self) -> io::Result<bool> {
        // Only try to read more data when the buffer length is equal to the buffer cursor location
        if self.cursor == self.buffer.len() {
            self.buffer.resize(BUFFER_SIZE, 0);
            let size = loop {
                match self.source.read(&mut self.buffer) {
                    Ok(size) => break size,
                    Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                    Err(e) => return Err(e),
                }
            };
            // If nothing came back from our read attempt, then we have no more data.
            if size == 0 {
                self.buffer.truncate(0);
                self.cursor = 0;
                return Ok(false);
            }
            // Adjust the buffer if we read less than the buffer size
            self.buffer.truncate(size);
            self.cursor = 0;
            self.bit_index = 0;
        }
        Ok(true)
    }

    /// Return the next bit (*true* for 1), or None if there is no more data to read
    pub fn bit(&mut self) -> io::Result<Option<bool>> {
        // If bit_index is == 0, check if we have a byte to read.
        if self.bit_index == 0 && !self.have_data()? {
            return Ok(None);
        }
        let bit =
            (self.buffer[self.cursor] & BIT_MASK >> self.bit_index) >> (7 - self.bit_index);
        self.bit_index += 1;
        self.bit_index %= 8;
        if self.bit_index == 0 {
            self.cursor += 1;
        }
        Ok(Some(bit == 1))
    }

    /// Debugging function. Report current position in the buffer.
    pub fn loc(&self) -> String {
        format!("[{}.{}]", self.cursor, self.bit_index)
    }
}

#[cfg(test)]
mod test {
    use super::BitReader;

    #[test]
    fn basic_test() {
        let x = [0b10000001_u8].as_slice();
        let mut br = BitReader::new(x);
        assert_eq!(br.bit().unwrap(), Some(true));
        for _ in 0..6 {
            assert_eq!(br.bit().unwrap(), Some(false));
        }
        assert_eq!(br.bit().unwrap(), Some(true));
        assert_eq!(br.bit().unwrap(), None);
        // Stays exhausted
        assert_eq!(br.bit().unwrap(), None);
    }

    #[test]
    fn multi_byte_test() {
        let x = [0b01010000_u8, 0b1111_0000].as_slice();
        let mut br = BitReader::new(x);
        let bits: Vec<bool> = std::iter::from_fn(|| br.bit().unwrap()).collect();
        assert_eq!(bits.len(), 16);
        assert_eq!(&bits[..4], &[false, true, false, true]);
        assert_eq!(&bits[8..12], &[true, true, true, true]);
    }

    #[test]
    fn loc_test() {
        let x = "Hello, world!".as_bytes();
        let mut br = BitReader::new(x);
        for _ in 0..41 {
            br.bit().unwrap();
        }
        assert_eq!(br.loc(), "[5.1]");
    }

    #[test]
    fn empty_test() {
        let mut br = BitReader::new([].as_slice());
        assert_eq!(br.bit().unwrap(), None);
    }
}
