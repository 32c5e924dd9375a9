mod impls;

use std::io::{ErrorKind, Result};

/// A trait to read the bytes which lie *before* the cursor of a source.
///
/// It's the backward twin of [`std::io::Read`]: the bytes land at the end of the
/// destination buffer and the cursor moves back by the amount read.
///
/// # Example
/// ```
/// use std::io::{Cursor, Seek, SeekFrom};
/// use read_tail::ReadBack;
///
/// fn main() -> std::io::Result<()> {
///     let mut data = Cursor::new(*b"tail");
///     data.seek(SeekFrom::End(0))?;
///
///     let mut buffer = [0u8; 2];
///     data.read_back_exact(&mut buffer)?;
///
///     assert_eq!(&buffer, b"il");
///     assert_eq!(data.position(), 2);
///     Ok(())
/// }
/// ```
pub trait ReadBack {
    /// Pull some bytes from this source into the specified buffer, returning how many bytes were read.
    ///
    /// The same conditions have to be met as in [`Read::read`], except that the bytes
    /// are placed at the *end* of `buf` and the cursor is moved back afterwards.
    /// `Ok(0)` means the start of the source has been reached.
    ///
    /// # Example
    /// ```
    /// use std::io::Cursor;
    /// use read_tail::ReadBack;
    ///
    /// fn main() {
    ///     let mut data = Cursor::new([1u8, 2]);
    ///     data.set_position(2);
    ///     let mut buffer: [u8; 3] = [0; 3];
    ///
    ///     assert_eq!(data.read_back(&mut buffer).ok(), Some(2));
    ///     // notice here, that the values are added at the end of the array!
    ///     assert_eq!(&buffer, &[0, 1, 2]);
    ///     assert_eq!(data.read_back(&mut buffer).ok(), Some(0));
    /// }
    /// ```
    ///
    /// [`Read::read`]: std::io::Read::read
    fn read_back(&mut self, buf: &mut [u8]) -> Result<usize>;

    /// Read back the exact number of bytes required to fill `buf`.
    ///
    /// The conditions for [`Read::read_exact`] apply here as well.
    ///
    /// [`Read::read_exact`]: std::io::Read::read_exact
    fn read_back_exact(&mut self, buf: &mut [u8]) -> Result<()> {
        default_read_back_exact(self, buf)
    }
}

fn default_read_back_exact<R: ReadBack + ?Sized>(r: &mut R, mut buf: &mut [u8]) -> Result<()> {
    while !buf.is_empty() {
        match r.read_back(buf) {
            Ok(0) => break,
            Ok(n) => {
                let buf_len = buf.len();
                buf = &mut buf[..buf_len - n];
            }
            Err(ref e) if e.kind() == ErrorKind::Interrupted => {}
            Err(e) => return Err(e),
        }
    }

    if !buf.is_empty() {
        Err(std::io::Error::new(
            ErrorKind::UnexpectedEof,
            "Failed to fill whole buffer.",
        ))
    } else {
        Ok(())
    }
}
