use std::collections::VecDeque;

/// Confirmed lines, still encoded, in the order they appear in the file.
///
/// Lines are discovered from the back of the file to the front, so new batches are prepended
/// while chunks are taken from the end. Both ends are cheap with a [`VecDeque`].
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LineAccumulator {
    lines: VecDeque<Vec<u8>>,
}

impl LineAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `batch`, which is already in file order, in front of the stored lines.
    pub fn prepend_batch<I>(&mut self, batch: I)
    where
        I: IntoIterator<Item = Vec<u8>>,
        I::IntoIter: DoubleEndedIterator,
    {
        for line in batch.into_iter().rev() {
            self.lines.push_front(line);
        }
    }

    /// Removes and returns the last `k` lines in file order.
    ///
    /// Returns every line if there are fewer than `k`.
    pub fn take_last(&mut self, k: usize) -> Vec<Vec<u8>> {
        let at = self.lines.len().saturating_sub(k);
        self.lines.split_off(at).into()
    }

    /// Removes and returns all lines.
    pub fn drain_all(&mut self) -> Vec<Vec<u8>> {
        std::mem::take(&mut self.lines).into()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
