use std::cmp;

/// A half-open byte range `[start, end)` of the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub start: u64,
    pub end: u64,
}

impl Window {
    /// Returns the amount of bytes covered by the window.
    pub fn len(&self) -> u64 {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Walks a source of `file_size` bytes from its end to its start in steps of `window_size` bytes.
///
/// After each [`advance`] the window to read is `[current, next)` and `prev` is the end of the
/// window before it, so `current <= next <= prev` holds at all times.
///
/// # Example
/// ```
/// use read_tail::{Window, WindowCursor};
///
/// let mut cursor = WindowCursor::new(10, 4);
///
/// assert_eq!(cursor.advance(), Some(Window { start: 6, end: 10 }));
/// assert_eq!(cursor.advance(), Some(Window { start: 2, end: 6 }));
/// assert_eq!(cursor.advance(), Some(Window { start: 0, end: 2 }));
/// assert_eq!(cursor.advance(), None);
/// ```
///
/// [`advance`]: WindowCursor::advance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowCursor {
    file_size: u64,
    window_size: u64,
    prev: u64,
    current: u64,
    next: u64,
}

impl WindowCursor {
    /// Creates a cursor which sits at the end of the source.
    ///
    /// The window size is clamped to the file size. A window size of zero over a non-empty
    /// source is bumped to one byte so the cursor always makes progress.
    pub fn new(file_size: u64, window_size: u64) -> Self {
        let window_size = cmp::min(cmp::max(window_size, 1), cmp::max(file_size, 1));

        Self {
            file_size,
            window_size,
            prev: file_size,
            current: file_size,
            next: file_size,
        }
    }

    /// Moves one window towards the start of the source and returns it.
    ///
    /// Returns `None` once the start has been reached.
    pub fn advance(&mut self) -> Option<Window> {
        if self.is_exhausted() {
            return None;
        }

        self.prev = self.next;
        self.next = self.current;
        self.current = self.current.saturating_sub(self.window_size);

        Some(Window {
            start: self.current,
            end: self.next,
        })
    }

    /// Returns `true` if there's no byte left before the cursor.
    pub fn is_exhausted(&self) -> bool {
        self.current == 0
    }

    pub fn file_size(&self) -> u64 {
        self.file_size
    }

    pub fn window_size(&self) -> u64 {
        self.window_size
    }

    pub fn prev_pos(&self) -> u64 {
        self.prev
    }

    pub fn curr_pos(&self) -> u64 {
        self.current
    }

    pub fn next_pos(&self) -> u64 {
        self.next
    }
}

impl Iterator for WindowCursor {
    type Item = Window;

    fn next(&mut self) -> Option<Self::Item> {
        self.advance()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.current.div_ceil(self.window_size)) {
            Ok(remaining) => (remaining, Some(remaining)),
            Err(_) => (usize::MAX, None),
        }
    }
}
