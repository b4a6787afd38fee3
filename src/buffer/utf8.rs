//! UTF-8 codec helpers
//!
//! Cursor-based helpers working on raw byte slices. Decoding trusts the
//! leading byte pattern and does not validate continuation bytes; content is
//! only interpreted as UTF-8 when iterated, compared or reversed.

/// One past the largest encodable code point
pub const CODE_POINT_LIMIT: u32 = 0x11_0000;

/// Encode `code` into `buf`, returning the number of bytes written
///
/// Valid input is `1..0x110000`. Zero and anything at or above the limit
/// yield `None`.
pub fn encode(code: u32, buf: &mut [u8; 4]) -> Option<usize> {
    match code {
        0 => None,
        0x01..=0x7F => {
            buf[0] = code as u8;
            Some(1)
        }
        0x80..=0x7FF => {
            buf[0] = 0xC0 | (code >> 6) as u8;
            buf[1] = 0x80 | (code & 0x3F) as u8;
            Some(2)
        }
        0x800..=0xFFFF => {
            buf[0] = 0xE0 | (code >> 12) as u8;
            buf[1] = 0x80 | ((code >> 6) & 0x3F) as u8;
            buf[2] = 0x80 | (code & 0x3F) as u8;
            Some(3)
        }
        0x1_0000..=0x10_FFFF => {
            buf[0] = 0xF0 | (code >> 18) as u8;
            buf[1] = 0x80 | ((code >> 12) & 0x3F) as u8;
            buf[2] = 0x80 | ((code >> 6) & 0x3F) as u8;
            buf[3] = 0x80 | (code & 0x3F) as u8;
            Some(4)
        }
        _ => None,
    }
}

/// Decode the code point starting at `bytes[0]`
///
/// Returns `None` for an empty or truncated sequence, or when the decoded
/// value is at or above [`CODE_POINT_LIMIT`].
pub fn decode(bytes: &[u8]) -> Option<u32> {
    let lead = *bytes.first()?;
    let seq = bytes.get(..sequence_len(lead))?;
    let tail = |b: u8| u32::from(b & 0x3F);

    let code = match seq.len() {
        1 => u32::from(lead),
        2 => u32::from(lead - 0xC0) << 6 | tail(seq[1]),
        3 => u32::from(lead - 0xE0) << 12 | tail(seq[1]) << 6 | tail(seq[2]),
        _ => {
            u32::from(lead - 0xF0) << 18
                | tail(seq[1]) << 12
                | tail(seq[2]) << 6
                | tail(seq[3])
        }
    };

    (code < CODE_POINT_LIMIT).then_some(code)
}

/// Byte length of the sequence introduced by `lead`
pub fn sequence_len(lead: u8) -> usize {
    match lead {
        0x00..=0xBF => 1,
        0xC0..=0xDF => 2,
        0xE0..=0xEF => 3,
        _ => 4,
    }
}

/// True for `0x80..=0xBF`
pub fn is_continuation(byte: u8) -> bool {
    (0x80..0xC0).contains(&byte)
}

/// True when `byte` can start a sequence
pub fn is_boundary(byte: u8) -> bool {
    !is_continuation(byte)
}

/// Advance `cursor` past one whole code point, clamped to `bytes.len()`
pub fn next_boundary(bytes: &[u8], cursor: usize) -> usize {
    match bytes.get(cursor) {
        Some(&lead) => (cursor + sequence_len(lead)).min(bytes.len()),
        None => bytes.len(),
    }
}

/// Step `cursor` back by one whole code point
///
/// Moves back at least one byte, then keeps skipping continuation bytes.
/// Stops at 0.
pub fn prev_boundary(bytes: &[u8], cursor: usize) -> usize {
    let mut at = cursor.min(bytes.len());
    if at == 0 {
        return 0;
    }
    at -= 1;
    while at > 0 && is_continuation(bytes[at]) {
        at -= 1;
    }
    at
}

/// Iterate the byte sequences of each code point in `bytes`
pub fn sequences(bytes: &[u8]) -> Sequences<'_> {
    Sequences { bytes, cursor: 0 }
}

/// Iterator returned by [`sequences`]
#[derive(Debug, Clone)]
pub struct Sequences<'a> {
    bytes: &'a [u8],
    cursor: usize,
}

impl<'a> Iterator for Sequences<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor >= self.bytes.len() {
            return None;
        }
        let start = self.cursor;
        self.cursor = next_boundary(self.bytes, start);
        Some(&self.bytes[start..self.cursor])
    }
}
