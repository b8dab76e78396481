use crate::Error;
use crate::Frame;
use crate::ParsedTag;

mod read;
mod regex;
mod tools;


pub fn parse_tag(data: &[u8]) -> Result<ParsedTag, Error> {
    if data.is_empty() {
        return Err(Error::EmptyInput);
    }

    // ID3v2/file identifier      "ID3"
    let marker = data
        .windows(3)
        .position(|w| w == b"ID3")
        .ok_or(Error::MarkerNotFound)?;

    let header = read::header(&data[marker + 3..])?;

    // frames start right after the 10-byte header; frame lookup scans
    // the full remainder, not just the declared tag size
    let frames = &data[marker + 10..];

    let title = frame_or_missing("TIT2", frames);
    let album = frame_or_missing("TALB", frames);
    let artist = frame_or_missing("TPE1", frames);
    let year = frame_or_missing("TORY", frames);

    Ok(ParsedTag::new(header, title, album, artist, year))
}

// a single frame pointing outside the buffer never sinks the whole tag
fn frame_or_missing(id: &str, data: &[u8]) -> Frame {
    read::frame(id, data).unwrap_or_else(|_| Frame::missing(id))
}
