use std::cmp;

/// Bytes which haven't been split into lines yet, growing towards the front.
///
/// The data lives in `buf[pos..]`. Prepending writes into the free room before `pos` and only
/// reallocates once that room is used up, doubling it each time.
///
/// `unsearched` counts the bytes at the front which may still hold the start of a delimiter;
/// no delimiter starts at or after it.
#[derive(Debug, Default)]
pub struct Buffer {
    buf: Vec<u8>,
    pos: usize,
    unsearched: usize,
}

impl Buffer {
    #[inline]
    pub fn buffer(&self) -> &[u8] {
        &self.buf[self.pos..]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// Makes room for `amount` bytes in front of the buffered ones and returns it.
    pub fn prepend(&mut self, amount: usize) -> &mut [u8] {
        if self.pos < amount {
            let len = self.len();
            // leave as much free room as there's data, so reallocations get rarer
            let front = amount + len;

            let mut grown = Vec::with_capacity(front + len);
            grown.resize(front, 0);
            grown.extend_from_slice(self.buffer());

            self.buf = grown;
            self.pos = front;
        }

        self.pos -= amount;
        self.unsearched += amount;
        &mut self.buf[self.pos..self.pos + amount]
    }

    /// Drops everything after the first `len` bytes.
    pub fn truncate(&mut self, len: usize) {
        self.buf.truncate(self.pos + len);
        self.unsearched = cmp::min(self.unsearched, len);
    }

    /// Returns the front part which has to be searched for a delimiter of `delimiter_len` bytes.
    ///
    /// It reaches `delimiter_len - 1` bytes into the searched part, a delimiter may straddle both.
    pub fn unsearched(&self, delimiter_len: usize) -> &[u8] {
        let end = cmp::min(self.len(), self.unsearched + delimiter_len.saturating_sub(1));
        &self.buffer()[..end]
    }

    /// Marks the whole buffer as free of delimiters.
    pub fn mark_searched(&mut self) {
        self.unsearched = 0;
    }

    /// Empties the buffer and returns its data.
    pub fn take(&mut self) -> Vec<u8> {
        let data = self.buffer().to_vec();
        *self = Self::default();
        data
    }
}
