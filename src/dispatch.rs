use std::fs::File;
use std::io::prelude::*;
use std::path::Path;

use crate::id3v2;
use crate::Error;
use crate::ParsedTag;

// reads the whole file up front; decoding works on the in-memory
// buffer only, and the handle drops on every path
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<ParsedTag, Error> {
    let mut file = File::open(path)?;

    let mut data = Vec::new();
    file.read_to_end(&mut data)?;

    id3v2::parse_tag(&data)
}
