// both the tag size and frame sizes are decoded with this weighting:
// b0 * 2^21 + b1 * 2^14 + b2 * 2^7 + b3
// it is the synchsafe scheme when every byte stays below 0x80; high
// bits are not rejected, the byte value just carries into the sum
pub fn decode_size(input: &[u8]) -> u32 {
    if input.len() > 4 {
        panic!(
            "decode_size expected a slice with max length 4, got slice with length {}",
            input.len()
        );
    }
    let mut result: u32 = 0;
    for (i, b) in input.iter().enumerate() {
        result += (*b as u32) << (7 * (input.len() - 1 - i));
    }
    result
}

// keep only printable ASCII [0x20, 0x7E]; encoding bytes, BOMs, NUL
// terminators and multi-byte sequences all fall away
pub fn printable(input: &[u8]) -> Vec<u8> {
    input
        .iter()
        .cloned()
        .filter(|b| *b >= 0x20 && *b <= 0x7E)
        .collect()
}
