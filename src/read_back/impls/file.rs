use std::{
    cmp,
    fs::File,
    io::{Read, Seek, SeekFrom},
};

use crate::ReadBack;

impl ReadBack for File {
    fn read_back(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        let curr_pos = self.stream_position()?;
        let amount = cmp::min(curr_pos, buf.len() as u64);
        let start = curr_pos - amount;

        self.seek(SeekFrom::Start(start))?;
        let buf_len = buf.len();
        self.read_exact(&mut buf[buf_len - amount as usize..])?;
        self.seek(SeekFrom::Start(start))?;

        Ok(amount as usize)
    }
}
