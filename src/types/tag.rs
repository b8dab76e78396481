use crate::types::Frame;
use crate::types::FramePayload;
use crate::types::TagHeader;

// everything a successful parse recovered; built whole, never mutated
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedTag {
    header: TagHeader,
    title: Frame,
    album: Frame,
    artist: Frame,
    year: Frame,
}

impl ParsedTag {
    pub(crate) fn new(
        header: TagHeader,
        title: Frame,
        album: Frame,
        artist: Frame,
        year: Frame,
    ) -> ParsedTag {
        ParsedTag {
            header,
            title,
            album,
            artist,
            year,
        }
    }

    pub fn header(&self) -> &TagHeader {
        &self.header
    }

    pub fn title(&self) -> &str {
        text_of(&self.title)
    }

    pub fn album(&self) -> &str {
        text_of(&self.album)
    }

    pub fn artist(&self) -> &str {
        text_of(&self.artist)
    }

    pub fn year(&self) -> i32 {
        match self.year.payload {
            FramePayload::Numeric(y) => y,
            _ => 0,
        }
    }
}

// missing frames and variant mismatches both read as empty
fn text_of(frame: &Frame) -> &str {
    match frame.payload {
        FramePayload::Text(ref s) => s.as_str(),
        _ => "",
    }
}
