mod buffer;
mod builder;

pub use builder::{
    TailBuilder, DEFAULT_DELIMITER, DEFAULT_ENCODING, DEFAULT_NLINES, DEFAULT_WINDOW_SIZE,
};

use std::{
    fmt,
    fs::File,
    io::{Seek, SeekFrom},
    iter::FusedIterator,
    path::Path,
};

use encoding_rs::Encoding;

use buffer::Buffer;

use crate::{
    accumulator::LineAccumulator,
    codec::Codec,
    error::{Error, Result},
    window::{Window, WindowCursor},
    ReadBack,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Reading,
    Flushing,
    Done,
    Stopped,
}

/// Walks backwards through a source and yields chunks of `nlines` lines.
///
/// The chunks come from the end of the source to its start, the lines inside of a chunk keep
/// their order. Every chunk except the last one holds exactly `nlines` lines, the last one
/// holds whatever is left. A single delimiter at the very end of the source doesn't count as
/// an empty last line. An empty source yields no chunk at all. A byte order mark of the
/// configured encoding at the start of the source is dropped.
///
/// # Example
/// ```
/// use std::io::Cursor;
/// use read_tail::TailBuilder;
///
/// fn main() -> read_tail::Result<()> {
///     let data = Cursor::new("a\nb\nc\nd\ne\n");
///     let mut tail = TailBuilder::new().nlines(2).window_size(4).from_reader(data)?;
///
///     assert_eq!(tail.next().transpose()?, Some(vec!["d".to_string(), "e".to_string()]));
///     assert_eq!(tail.next().transpose()?, Some(vec!["b".to_string(), "c".to_string()]));
///     assert_eq!(tail.next().transpose()?, Some(vec!["a".to_string()]));
///     assert!(tail.next().is_none());
///     Ok(())
/// }
/// ```
pub struct Tail<R = File> {
    stream: Option<R>,
    cursor: WindowCursor,
    /// Bytes which haven't been split into lines yet. Starts at `cursor.curr_pos()`.
    buf: Buffer,
    lines: LineAccumulator,
    codec: Codec,
    nlines: usize,
    trailing_checked: bool,
    state: State,
}

impl Tail<File> {
    /// Opens the file at `path` with the default options.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        TailBuilder::new().open(path)
    }

    pub fn builder() -> TailBuilder {
        TailBuilder::new()
    }
}

impl<R: ReadBack + Seek> Tail<R> {
    /// Wraps `reader` with the default options.
    pub fn from_reader(reader: R) -> Result<Self> {
        TailBuilder::new().from_reader(reader)
    }

    fn next_chunk(&mut self) -> Result<Option<Vec<String>>> {
        loop {
            if self.lines.len() >= self.nlines {
                let chunk = self.lines.take_last(self.nlines);
                return self.decode(chunk).map(Some);
            }

            if self.split_lines(self.nlines - self.lines.len()) > 0 {
                continue;
            }

            match self.cursor.advance() {
                Some(window) => self.read_window(window)?,
                None => return self.flush(),
            }
        }
    }

    fn read_window(&mut self, window: Window) -> Result<()> {
        log::debug!("{:?}", self);
        let stream = self.stream.as_mut().ok_or(Error::AlreadyClosed)?;

        // reading back from the end of the window leaves the stream at its start
        stream.seek(SeekFrom::Start(window.end))?;
        stream.read_back_exact(self.buf.prepend(window.len() as usize))?;

        let delimiter_len = self.codec.delimiter().len();
        let len = self.buf.len();
        if !self.trailing_checked && len >= delimiter_len {
            self.trailing_checked = true;
            if self
                .codec
                .ends_with_delimiter(self.buf.buffer(), self.cursor.curr_pos())
            {
                self.buf.truncate(len - delimiter_len);
                log::trace!("Stripped the trailing delimiter from the buffer.");
            }
        }

        Ok(())
    }

    fn flush(&mut self) -> Result<Option<Vec<String>>> {
        self.state = State::Flushing;

        if self.cursor.file_size() > 0 {
            self.split_lines(usize::MAX);
            // whatever is left is the first line of the source, even if it's empty
            let mut first = self.buf.take();
            let bom_len = self.codec.bom_len(&first);
            if bom_len > 0 {
                log::trace!("Dropped the byte order mark.");
                first.drain(..bom_len);
            }
            self.lines.prepend_batch([first]);
        }

        let rest = self.lines.drain_all();
        log::trace!("Flushing the remaining {} lines.", rest.len());
        self.release();
        self.state = State::Done;

        if rest.is_empty() {
            return Ok(None);
        }
        self.decode(rest).map(Some)
    }
}

impl<R> Tail<R> {
    pub(crate) fn with_parts(
        stream: R,
        file_size: u64,
        nlines: usize,
        window_size: usize,
        codec: Codec,
    ) -> Self {
        Self {
            stream: Some(stream),
            cursor: WindowCursor::new(file_size, window_size as u64),
            buf: Buffer::default(),
            lines: LineAccumulator::new(),
            codec,
            nlines,
            trailing_checked: false,
            state: State::Reading,
        }
    }

    /// Closes the underlying stream.
    ///
    /// Calling it again, or after the last chunk has been returned, does nothing. Advancing a
    /// stopped tail yields [`Error::AlreadyClosed`] once. It's called on drop as well.
    pub fn stop(&mut self) {
        if self.state == State::Reading {
            self.state = State::Stopped;
        }
        self.release();
    }

    /// Returns `true` if the underlying stream has been released.
    pub fn is_closed(&self) -> bool {
        self.stream.is_none()
    }

    /// Gets a reference to the underlying stream, if it's still open.
    ///
    /// It is inadvisable to directly read from the underlying stream.
    pub fn get_ref(&self) -> Option<&R> {
        self.stream.as_ref()
    }

    /// Returns the bytes which have been read but not yet split into lines.
    ///
    /// Its [`Display`](fmt::Display) output is the same bytes, decoded with malformed parts
    /// replaced.
    pub fn buffer(&self) -> &[u8] {
        self.buf.buffer()
    }

    pub fn cursor(&self) -> &WindowCursor {
        &self.cursor
    }

    pub fn nlines(&self) -> usize {
        self.nlines
    }

    /// Returns the window size after it has been clamped to the size of the source.
    pub fn window_size(&self) -> u64 {
        self.cursor.window_size()
    }

    pub fn file_size(&self) -> u64 {
        self.cursor.file_size()
    }

    /// Returns the delimiter as it's encoded in the source.
    pub fn delimiter(&self) -> &[u8] {
        self.codec.delimiter()
    }

    pub fn encoding(&self) -> &'static Encoding {
        self.codec.encoding()
    }

    /// Splits up to `limit` lines off the end of the buffer, the leftmost fragment stays.
    fn split_lines(&mut self, limit: usize) -> usize {
        let delimiter_len = self.codec.delimiter().len();
        let offset = self.cursor.curr_pos();
        let mut batch = Vec::new();

        while batch.len() < limit {
            // the rest of the buffer has been searched by earlier calls already
            match self
                .codec
                .rfind_delimiter(self.buf.unsearched(delimiter_len), offset)
            {
                Some(pos) => {
                    batch.push(self.buf.buffer()[pos + delimiter_len..].to_vec());
                    self.buf.truncate(pos);
                }
                None => {
                    self.buf.mark_searched();
                    break;
                }
            }
        }

        batch.reverse();
        let amount = batch.len();
        if amount > 0 {
            log::trace!("Split {} lines off the buffer.", amount);
        }
        self.lines.prepend_batch(batch);
        amount
    }

    fn decode(&self, lines: Vec<Vec<u8>>) -> Result<Vec<String>> {
        let chunk = lines
            .iter()
            .map(|line| self.codec.decode(line))
            .collect::<Result<Vec<String>>>()?;

        log::trace!("Returning chunk of len {}", chunk.len());
        Ok(chunk)
    }

    fn release(&mut self) {
        if self.stream.take().is_some() {
            log::debug!("Closed the stream.");
        }
        self.buf = Buffer::default();
        self.lines = LineAccumulator::new();
    }
}

impl<R: ReadBack + Seek> Iterator for Tail<R> {
    type Item = Result<Vec<String>>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.state {
            State::Reading => {}
            State::Flushing | State::Done => return None,
            State::Stopped => {
                self.state = State::Done;
                return Some(Err(Error::AlreadyClosed));
            }
        }

        match self.next_chunk() {
            Ok(chunk) => chunk.map(Ok),
            Err(err) => {
                self.release();
                self.state = State::Done;
                Some(Err(err))
            }
        }
    }
}

impl<R: ReadBack + Seek> FusedIterator for Tail<R> {}

impl<R> Drop for Tail<R> {
    fn drop(&mut self) {
        self.release();
    }
}

impl<R> fmt::Display for Tail<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.codec.decode_lossy(self.buf.buffer()))
    }
}

impl<R> fmt::Debug for Tail<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tail")
            .field("prev", &self.cursor.prev_pos())
            .field("current", &self.cursor.curr_pos())
            .field("next", &self.cursor.next_pos())
            .field("window_size", &self.cursor.window_size())
            .field("buffered", &self.buf.len())
            .field("cached_lines", &self.lines.len())
            .field("state", &self.state)
            .finish()
    }
}
