use crate::constants::{
    UBX_CHECKSUM_LEN, UBX_HEADER_LEN, UBX_LENGTH_OFFSET, UBX_SYNC_CHAR_1, UBX_SYNC_CHAR_2,
};

/// What the head of a receive buffer holds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferHeadContents {
    /// The first N bytes are garbage
    Garbage(usize),

    /// We think there's a header, but there aren't enough bytes to be sure
    IncompleteHeader,

    /// The buffer requires N more bytes
    Incomplete(usize),

    /// The first N bytes are a candidate frame, hand them to [`parse`](crate::parse)
    /// and advance the buffer
    Frame(usize),
}

/// Locates the next frame at the head of a continuous buffer.
///
/// Only the header is inspected. The checksum and payload are left to the
/// parser so the caller can pick a validation mode.
pub fn scan_buffer(buf: &[u8]) -> BufferHeadContents {
    let start = buf
        .windows(2)
        .position(|w| w == [UBX_SYNC_CHAR_1, UBX_SYNC_CHAR_2]);
    let Some(start) = start else {
        // a lone trailing sync char may be the start of the next frame
        return match buf.last() {
            None => BufferHeadContents::IncompleteHeader,
            Some(&UBX_SYNC_CHAR_1) if buf.len() == 1 => BufferHeadContents::IncompleteHeader,
            Some(&UBX_SYNC_CHAR_1) => BufferHeadContents::Garbage(buf.len() - 1),
            Some(_) => BufferHeadContents::Garbage(buf.len()),
        };
    };
    if start > 0 {
        return BufferHeadContents::Garbage(start);
    }
    if buf.len() < UBX_HEADER_LEN {
        return BufferHeadContents::IncompleteHeader;
    }

    let pack_len =
        usize::from(u16::from_le_bytes([buf[UBX_LENGTH_OFFSET], buf[UBX_LENGTH_OFFSET + 1]]));
    let frame_len = UBX_HEADER_LEN + pack_len + UBX_CHECKSUM_LEN;
    if buf.len() < frame_len {
        return BufferHeadContents::Incomplete(frame_len - buf.len());
    }
    BufferHeadContents::Frame(frame_len)
}
