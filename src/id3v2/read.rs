use crate::id3v2::regex;
use crate::id3v2::tools::*;
use crate::tools::encoding::decode_iso_8859_1;
use crate::types::is_year_frame;
use crate::Error;
use crate::Frame;
use crate::FramePayload;
use crate::TextEncoding;

// input starts right after the "ID3" marker
pub fn header(input: &[u8]) -> Result<crate::TagHeader, Error> {
    if input.len() < 10 {
        return Err(Error::TruncatedHeader);
    }

    // ID3v2 flags                %abcd0000
    let flags = input[2];

    Ok(crate::TagHeader {
        version: input[0],
        revision: input[1],

        is_unsynchronized: flags & 0b1000_0000 != 0,
        has_extended_header: flags & 0b0100_0000 != 0,
        is_experimental: flags & 0b0010_0000 != 0,
        has_footer: flags & 0b0001_0000 != 0,

        size: decode_size(&input[3..7]),
    })
}

// locates `id` in `data` by linear scan and decodes the frame there;
// an absent id yields the missing-frame sentinel, only offsets that
// land outside the buffer are an error
pub fn frame(id: &str, data: &[u8]) -> Result<Frame, Error> {
    let pos = match data.windows(4).position(|w| w == id.as_bytes()) {
        Some(p) => p,
        None => return Ok(Frame::missing(id)),
    };

    // 4: Frame ID      $xx xx xx xx  (four characters)
    // 4: Size          $xx xx xx xx
    // 2: Flags         $xx xx
    if data.len() < pos + 10 {
        return Err(Error::CorruptFrame);
    }
    // frame sizes reuse the tag-header weighting unconditionally,
    // even though ID3v2.3 stores them as plain base-256
    let size = decode_size(&data[pos + 4..pos + 8]);
    let flags1 = data[pos + 8];
    let flags2 = data[pos + 9];

    let mut frame = Frame {
        id: id.to_string(),
        size,
        payload: FramePayload::empty_for(id),
        ..Default::default()
    };

    // %ab c0 0000
    if flags1 & 0b1000_0000 != 0 {
        frame.preserved_if_tag_altered = false;
    }
    // bit 6 clears the same flag again; kept for bit-compatible output
    if flags1 & 0b0100_0000 != 0 {
        frame.preserved_if_tag_altered = false;
    }
    if flags1 & 0b0010_0000 != 0 {
        frame.read_only = true;
    }
    // %ij k0 0000
    if flags2 & 0b1000_0000 != 0 {
        frame.is_compressed = true;
    }
    if flags2 & 0b0100_0000 != 0 {
        frame.is_encrypted = true;
    }
    if flags2 & 0b0010_0000 != 0 {
        frame.has_grouping_identity = true;
    }

    // payload window: (flag_end + 1)..(flag_end + size), upper bound
    // exclusive, so the last claimed payload byte is never visited
    let flag_end = pos + 9;
    let end = flag_end
        .checked_add(size as usize)
        .ok_or(Error::CorruptFrame)?;
    if end > data.len() {
        return Err(Error::CorruptFrame);
    }

    frame.payload = if id == "UFID" {
        identifier_payload(&data[(flag_end + 1).min(end)..end])
    } else if is_year_frame(id) {
        // year frames carry no encoding byte
        let digits = decode_iso_8859_1(&printable(&data[(flag_end + 1).min(end)..end]));
        FramePayload::Numeric(regex::leading_int(&digits))
    } else {
        let enc = *data.get(flag_end + 1).ok_or(Error::CorruptFrame)?;
        frame.encoding = match enc {
            0x00 => TextEncoding::Iso8859_1,
            0x01 => TextEncoding::Utf16,
            _ => TextEncoding::Unknown,
        };
        let text = decode_iso_8859_1(&printable(&data[(flag_end + 2).min(end)..end]));
        FramePayload::Text(text)
    };

    Ok(frame)
}

// owner/identifier split on the first NUL; owner bytes fall through
// into the identifier as well, and the NUL itself lands in neither
fn identifier_payload(payload: &[u8]) -> FramePayload {
    let mut owner = Vec::new();
    let mut identifier = Vec::new();

    let mut past_nul = false;
    for &b in payload {
        if !past_nul {
            if b == 0x00 {
                past_nul = true;
                continue;
            }
            owner.push(b);
        }
        identifier.push(b);
    }

    FramePayload::Identifier {
        owner: decode_iso_8859_1(&owner),
        identifier,
    }
}
