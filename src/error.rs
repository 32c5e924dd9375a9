use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong while building or walking a [`Tail`].
///
/// [`Tail`]: crate::Tail
#[derive(Error, Debug)]
pub enum Error {
    #[error("No such file or directory: {}", .0.display())]
    NotFound(PathBuf),
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Unsupported encoding: {0:?}")]
    UnsupportedEncoding(String),
    #[error("Couldn't decode a line as {encoding}")]
    Decode { encoding: &'static str },
    #[error("The tail has already been stopped")]
    AlreadyClosed,
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}
