/// Packs bits into an in-memory output buffer, most significant bit first.
/// Call flush() to get the packed bytes back.
#[derive(Debug, Default)]
pub struct BitWriter {
    /// Output buffer holding the packed bytes.
    output: Vec<u8>,
    /// Private queue to hold bits that are waiting to be put as bytes into the output buffer.
    queue: u64,
    /// Count of valid bits in the queue.
    q_bits: u8,
    /// Bytes already handed out by take_output().
    taken: usize,
}

impl BitWriter {
    /// Create a new, empty BitWriter.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create a new BitWriter with room for `size` bytes of output.
    pub fn with_capacity(size: usize) -> Self {
        Self {
            output: Vec::with_capacity(size),
            queue: 0,
            q_bits: 0,
            taken: 0,
        }
    }

    /// Drain full bytes from the queue to the output buffer before it overflows.
    fn push_queue(&mut self) {
        // If the queue is nearly full, write all full bytes to the output buffer.
        if self.q_bits > 56 {
            while self.q_bits > 7 {
                let byte = (self.queue >> (self.q_bits - 8)) as u8;
                self.output.push(byte); //push the packed byte out
                self.q_bits -= 8; //adjust the count of bits left in the queue
            }
        }
    }

    /// Put a single bit on the stream.
    pub fn out_bit(&mut self, bit: bool) {
        self.push_queue();
        self.queue <<= 1;
        self.queue |= bit as u64;
        self.q_bits += 1;
    }

    /// Put a run of bits on the stream, first element first.
    pub fn out_bits(&mut self, bits: &[bool]) {
        bits.iter().for_each(|&bit| self.out_bit(bit));
    }

    /// Hand back the complete bytes packed so far. Bits still waiting in the queue stay put and
    /// come out with a later call (or flush).
    pub fn take_output(&mut self) -> Vec<u8> {
        let taken = std::mem::take(&mut self.output);
        self.taken += taken.len();
        taken
    }

    /// Number of bits written so far.
    pub fn bit_len(&self) -> usize {
        (self.taken + self.output.len()) * 8 + self.q_bits as usize
    }

    /// Flushes the remaining bits (1-7) from the queue, padding with 0s in the least
    /// significant bits, and hands back the packed output.
    pub fn flush(mut self) -> Vec<u8> {
        // First push out all the full bytes
        while self.q_bits > 7 {
            let byte = (self.queue >> (self.q_bits - 8)) as u8;
            self.output.push(byte);
            self.q_bits -= 8;
        }
        // Then push out the remaining bits
        if self.q_bits > 0 {
            let mut byte = (self.queue & (0xff >> (8 - self.q_bits)) as u64) as u8;
            byte <<= 8 - self.q_bits;
            self.output.push(byte);
            self.q_bits = 0;
        }
        self.output
    }

    /// Debugging function to return the number of bytes.bits output so far
    pub fn loc(&self) -> String {
        format!("[{}.{}]", self.bit_len() / 8, self.bit_len() % 8)
    }
}
