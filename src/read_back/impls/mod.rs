use crate::ReadBack;

mod cursor;
mod file;

impl<R: ReadBack + ?Sized> ReadBack for &mut R {
    fn read_back(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        (**self).read_back(buf)
    }

    fn read_back_exact(&mut self, buf: &mut [u8]) -> std::io::Result<()> {
        (**self).read_back_exact(buf)
    }
}
