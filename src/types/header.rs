#[derive(Debug, Default, Clone, PartialEq)]
pub struct TagHeader {
    // version bytes are passed through raw, not validated
    pub version: u8,
    pub revision: u8,
    pub size: u32, // frames + padding, excludes the 10-byte header and any footer

    pub is_unsynchronized: bool,
    pub has_extended_header: bool,
    pub is_experimental: bool,
    pub has_footer: bool,
}
