use std::borrow::Cow;

use encoding_rs::{Encoding, REPLACEMENT, UTF_16BE, UTF_16LE};
use memchr::memmem::FinderRev;

use crate::error::{Error, Result};

/// The configured encoding together with the delimiter encoded in it.
///
/// Everything in here works on raw bytes, text only comes into play when decoding.
#[derive(Debug, Clone)]
pub struct Codec {
    encoding: &'static Encoding,
    delimiter: Vec<u8>,
    finder: FinderRev<'static>,
    code_unit: u64,
}

impl Codec {
    /// Resolves the encoding `label` and encodes `delimiter` with it.
    pub fn new(label: &str, delimiter: &str) -> Result<Self> {
        let encoding = Encoding::for_label(label.trim().as_bytes())
            .filter(|&encoding| encoding != REPLACEMENT)
            .ok_or_else(|| Error::UnsupportedEncoding(label.to_string()))?;

        if delimiter.is_empty() {
            return Err(Error::invalid_argument("the delimiter must not be empty"));
        }
        let delimiter = encode(encoding, delimiter)?;
        let finder = FinderRev::new(&delimiter).into_owned();

        let code_unit = if encoding == UTF_16LE || encoding == UTF_16BE {
            2
        } else {
            1
        };

        Ok(Self {
            encoding,
            delimiter,
            finder,
            code_unit,
        })
    }

    pub fn encoding(&self) -> &'static Encoding {
        self.encoding
    }

    pub fn delimiter(&self) -> &[u8] {
        &self.delimiter
    }

    /// Returns the position of the last delimiter in `haystack`.
    ///
    /// `offset` is the position of `haystack` in the file. Matches which don't start on a code
    /// unit boundary are skipped.
    pub fn rfind_delimiter(&self, haystack: &[u8], offset: u64) -> Option<usize> {
        let mut end = haystack.len();

        while let Some(pos) = self.finder.rfind(&haystack[..end]) {
            if self.is_aligned(offset + pos as u64) {
                return Some(pos);
            }
            // keep the tail of the skipped match, an aligned match may overlap it
            end = pos + self.delimiter.len() - 1;
        }

        None
    }

    /// Returns `true` if `buf` ends with a delimiter. `offset` is the position of `buf` in the file.
    pub fn ends_with_delimiter(&self, buf: &[u8], offset: u64) -> bool {
        buf.ends_with(&self.delimiter)
            && self.is_aligned(offset + (buf.len() - self.delimiter.len()) as u64)
    }

    /// Returns the length of the byte order mark at the start of `bytes`, if it's one of the
    /// configured encoding.
    pub fn bom_len(&self, bytes: &[u8]) -> usize {
        match Encoding::for_bom(bytes) {
            Some((encoding, len)) if encoding == self.encoding => len,
            _ => 0,
        }
    }

    /// Decodes a single, complete line.
    pub fn decode(&self, line: &[u8]) -> Result<String> {
        self.encoding
            .decode_without_bom_handling_and_without_replacement(line)
            .map(Cow::into_owned)
            .ok_or(Error::Decode {
                encoding: self.encoding.name(),
            })
    }

    /// Decodes `bytes` which may not be complete, malformed parts are replaced.
    pub fn decode_lossy<'a>(&self, bytes: &'a [u8]) -> Cow<'a, str> {
        self.encoding.decode_without_bom_handling(bytes).0
    }

    fn is_aligned(&self, pos: u64) -> bool {
        pos % self.code_unit == 0
    }
}

fn encode(encoding: &'static Encoding, text: &str) -> Result<Vec<u8>> {
    // encoding_rs only encodes UTF-16 as UTF-8, so those two are done by hand
    if encoding == UTF_16LE {
        return Ok(text.encode_utf16().flat_map(u16::to_le_bytes).collect());
    }
    if encoding == UTF_16BE {
        return Ok(text.encode_utf16().flat_map(u16::to_be_bytes).collect());
    }

    let (bytes, used, unmappable) = encoding.encode(text);
    if unmappable || used != encoding {
        return Err(Error::invalid_argument(format!(
            "the delimiter {:?} can't be encoded as {}",
            text,
            encoding.name()
        )));
    }

    Ok(bytes.into_owned())
}
