#[macro_use] extern crate lazy_static;

mod types;
pub use crate::types::Frame;
pub use crate::types::FramePayload;
pub use crate::types::ParsedTag;
pub use crate::types::TagHeader;
pub use crate::types::TextEncoding;

mod id3v2;

mod dispatch;
mod tools;


pub use crate::dispatch::parse_file;
pub use crate::id3v2::parse_tag;

use std::io;

#[derive(Debug)]
pub enum Error {
    IOError(io::Error),
    EmptyInput,
    MarkerNotFound,
    TruncatedHeader,
    CorruptFrame,
}

use std::fmt;
impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::IOError(ref e) => write!(f, "IO error: {}", e),
            Error::EmptyInput => write!(f, "Input contains no data"),
            Error::MarkerNotFound => write!(f, "ID3v2 marker not found"),
            Error::TruncatedHeader => write!(f, "ID3v2 header is truncated"),
            Error::CorruptFrame => write!(f, "Frame data lies outside the supplied buffer"),
        }
    }
}

use std::error;
impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match *self {
            Error::IOError(ref e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Error {
        Error::IOError(err)
    }
}
