use std::{cmp, io::Cursor};

use crate::ReadBack;

impl<T: AsRef<[u8]>> ReadBack for Cursor<T> {
    fn read_back(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        let data = self.get_ref().as_ref();
        // a cursor may point past the end of its data
        let pos = cmp::min(self.position(), data.len() as u64) as usize;
        let amount = cmp::min(pos, buf.len());

        let buf_len = buf.len();
        buf[buf_len - amount..].copy_from_slice(&data[pos - amount..pos]);

        self.set_position((pos - amount) as u64);
        Ok(amount)
    }
}
