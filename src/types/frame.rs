#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TextEncoding {
    Iso8859_1,
    Utf16,
    Unknown,
}

impl Default for TextEncoding {
    fn default() -> TextEncoding {
        TextEncoding::Unknown
    }
}

// which variant a frame carries is fixed by its id, see empty_for
#[derive(Debug, Clone, PartialEq)]
pub enum FramePayload {
    Text(String),
    Numeric(i32),
    Identifier { owner: String, identifier: Vec<u8> },
}

impl FramePayload {
    // the id -> variant mapping, also used for missing-frame sentinels
    pub fn empty_for(id: &str) -> FramePayload {
        if id == "UFID" {
            FramePayload::Identifier {
                owner: String::new(),
                identifier: Vec::new(),
            }
        } else if is_year_frame(id) {
            FramePayload::Numeric(0)
        } else {
            FramePayload::Text(String::new())
        }
    }
}

// year frames carry a numeric string with no leading encoding byte
pub fn is_year_frame(id: &str) -> bool {
    id == "TORY" || id == "TYER"
}

#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub id: String,
    pub size: u32,

    // status flags
    pub preserved_if_tag_altered: bool,
    pub preserved_if_file_altered: bool,
    pub read_only: bool,

    // format flags
    pub is_compressed: bool,
    pub is_encrypted: bool,
    pub has_grouping_identity: bool,

    pub encoding: TextEncoding,
    pub payload: FramePayload,
}

impl Frame {
    // sentinel for a frame id that was not found in the buffer
    pub fn missing(id: &str) -> Frame {
        Frame {
            id: id.to_string(),
            payload: FramePayload::empty_for(id),
            ..Default::default()
        }
    }
}

impl Default for Frame {
    fn default() -> Frame {
        Frame {
            id: String::new(),
            size: 0,
            // preservation flags start set and get cleared by status bits
            preserved_if_tag_altered: true,
            preserved_if_file_altered: true,
            read_only: false,
            is_compressed: false,
            is_encrypted: false,
            has_grouping_identity: false,
            encoding: TextEncoding::Unknown,
            payload: FramePayload::Text(String::new()),
        }
    }
}
