use std::{
    fs::File,
    io::{ErrorKind, Seek, SeekFrom},
    path::Path,
};

use crate::{
    codec::Codec,
    error::{Error, Result},
    ReadBack, Tail,
};

/// Amount of lines per chunk if nothing else has been set.
pub const DEFAULT_NLINES: usize = 10;
/// Amount of bytes read per window if nothing else has been set.
pub const DEFAULT_WINDOW_SIZE: usize = 1024;
pub const DEFAULT_ENCODING: &str = "utf-8";
pub const DEFAULT_DELIMITER: &str = "\n";

/// Collects the options of a [`Tail`] and validates them before anything is read.
///
/// # Example
/// ```no_run
/// use read_tail::TailBuilder;
///
/// fn main() -> read_tail::Result<()> {
///     let tail = TailBuilder::new()
///         .nlines(100)
///         .window_size(4096)
///         .delimiter("\r\n")
///         .open("export.csv")?;
///
///     for chunk in tail {
///         println!("{}", chunk?.join("\n"));
///     }
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TailBuilder {
    nlines: usize,
    window_size: usize,
    encoding: String,
    delimiter: String,
}

impl Default for TailBuilder {
    fn default() -> Self {
        Self {
            nlines: DEFAULT_NLINES,
            window_size: DEFAULT_WINDOW_SIZE,
            encoding: DEFAULT_ENCODING.to_string(),
            delimiter: DEFAULT_DELIMITER.to_string(),
        }
    }
}

impl TailBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the amount of lines per chunk. Has to be positive.
    pub fn nlines(mut self, nlines: usize) -> Self {
        self.nlines = nlines;
        self
    }

    /// Sets the amount of bytes read per window. Has to be positive, it's clamped to the size of the source.
    pub fn window_size(mut self, window_size: usize) -> Self {
        self.window_size = window_size;
        self
    }

    /// Sets the encoding by its [WHATWG label](https://encoding.spec.whatwg.org/#names-and-labels).
    pub fn encoding(mut self, label: impl Into<String>) -> Self {
        self.encoding = label.into();
        self
    }

    /// Sets the line delimiter. It's encoded with the configured encoding.
    pub fn delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    /// Opens the file at `path` and creates a [`Tail`] which starts at its end.
    pub fn open(&self, path: impl AsRef<Path>) -> Result<Tail<File>> {
        let codec = self.validate()?;
        let path = path.as_ref();

        let file = File::open(path).map_err(|err| match err.kind() {
            ErrorKind::NotFound => Error::NotFound(path.to_path_buf()),
            _ => Error::Io(err),
        })?;

        let metadata = file.metadata()?;
        if !metadata.is_file() {
            return Err(Error::invalid_argument(format!(
                "{} is not a regular file",
                path.display()
            )));
        }

        log::debug!(
            "Opened {} ({} bytes) for reading back",
            path.display(),
            metadata.len()
        );
        Ok(Tail::with_parts(file, metadata.len(), self.nlines, self.window_size, codec))
    }

    /// Creates a [`Tail`] over any seekable source. Its length is found by seeking to its end.
    pub fn from_reader<R: ReadBack + Seek>(&self, mut reader: R) -> Result<Tail<R>> {
        let codec = self.validate()?;
        let size = reader.seek(SeekFrom::End(0))?;

        Ok(Tail::with_parts(reader, size, self.nlines, self.window_size, codec))
    }

    fn validate(&self) -> Result<Codec> {
        if self.nlines == 0 {
            return Err(Error::invalid_argument("nlines has to be positive"));
        }
        if self.window_size == 0 {
            return Err(Error::invalid_argument("the window size has to be positive"));
        }

        Codec::new(&self.encoding, &self.delimiter)
    }
}
