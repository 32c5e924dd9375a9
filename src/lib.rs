//! Walk backwards through a file in fixed-size windows and get its lines in chunks.
//!
//! ```no_run
//! use read_tail::Tail;
//!
//! fn main() -> read_tail::Result<()> {
//!     // the last ten lines of the log, then the ten before them, ...
//!     for chunk in Tail::open("/var/log/syslog")? {
//!         for line in chunk? {
//!             println!("{}", line);
//!         }
//!     }
//!     Ok(())
//! }
//! ```
mod accumulator;
mod codec;
mod error;
mod read_back;
mod tail;
mod window;

pub use accumulator::LineAccumulator;
pub use encoding_rs;
pub use error::{Error, Result};
pub use read_back::ReadBack;
pub use tail::{
    Tail, TailBuilder, DEFAULT_DELIMITER, DEFAULT_ENCODING, DEFAULT_NLINES, DEFAULT_WINDOW_SIZE,
};
pub use window::{Window, WindowCursor};
