//! Frame parsing: sync, length and checksum checks, then layout driven
//! payload decoding.

mod checksum;
mod scan;

pub use checksum::{compute, ubx_checksum, verify};
pub(crate) use checksum::UbxChecksumCalc;
pub use scan::{scan_buffer, BufferHeadContents};

use crate::{
    constants::{
        UBX_CHECKSUM_LEN, UBX_CLASS_OFFSET, UBX_HEADER_LEN, UBX_LENGTH_OFFSET, UBX_MSG_ID_OFFSET,
        UBX_SYNC_CHAR_1, UBX_SYNC_CHAR_2, UBX_SYNC_SIZE,
    },
    error::ParserError,
    message::UbxMessage,
    ubx_packets::Direction,
};

/// How a checksum mismatch is handled
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ValidationMode {
    /// Reject the frame with [`ParserError::InvalidChecksum`]
    #[default]
    Strict,
    /// Decode anyway and clear [`UbxMessage::checksum_valid`]
    Lenient,
}

/// Parses one complete frame.
///
/// `data` must hold exactly one frame: sync bytes, header, payload and
/// checksum with nothing before or after. Payloads no layout matches come
/// back as raw messages without fields.
///
/// ```
/// use ubx_codec::{parse, Direction, ValidationMode};
///
/// let frame = [0xb5, 0x62, 0x05, 0x01, 0x02, 0x00, 0x06, 0x01, 0x0f, 0x38];
/// let msg = parse(&frame, ValidationMode::Strict, Direction::Get).unwrap();
/// assert_eq!(msg.identity(), "ACK-ACK");
/// assert_eq!(msg.to_string(), "<UBX(ACK-ACK, clsID=CFG, msgID=CFG-MSG)>");
/// ```
pub fn parse(
    data: &[u8],
    mode: ValidationMode,
    direction: Direction,
) -> Result<UbxMessage, ParserError> {
    if !matches!(data, [UBX_SYNC_CHAR_1, UBX_SYNC_CHAR_2, ..]) {
        return Err(ParserError::InvalidSync {
            got: data.iter().take(UBX_SYNC_SIZE).copied().collect(),
        });
    }
    if data.len() < UBX_HEADER_LEN + UBX_CHECKSUM_LEN {
        return Err(ParserError::InvalidPacketLen {
            expect: UBX_HEADER_LEN + UBX_CHECKSUM_LEN,
            got: data.len(),
        });
    }

    let class = data[UBX_CLASS_OFFSET];
    let msg_id = data[UBX_MSG_ID_OFFSET];
    let pack_len = usize::from(u16::from_le_bytes([
        data[UBX_LENGTH_OFFSET],
        data[UBX_LENGTH_OFFSET + 1],
    ]));
    let frame_len = UBX_HEADER_LEN + pack_len + UBX_CHECKSUM_LEN;
    if data.len() != frame_len {
        return Err(ParserError::InvalidPacketLen {
            expect: frame_len,
            got: data.len(),
        });
    }

    let payload_end = UBX_HEADER_LEN + pack_len;
    let mut calc = UbxChecksumCalc::new();
    calc.update(&data[UBX_CLASS_OFFSET..payload_end]);
    let checksum_valid = match calc.validate_result(data[payload_end], data[payload_end + 1]) {
        Ok(()) => true,
        Err(err) if mode == ValidationMode::Lenient => {
            log::warn!("{err} for class {class:#04x} id {msg_id:#04x}, decoding anyway");
            false
        },
        Err(err) => return Err(err),
    };

    let msg = UbxMessage::decode(
        class,
        msg_id,
        direction,
        data[UBX_HEADER_LEN..payload_end].to_vec(),
        checksum_valid,
    )?;
    log::trace!(
        "parsed {} ({}), {} payload bytes, {} fields",
        msg.identity(),
        direction,
        pack_len,
        msg.fields().len()
    );
    Ok(msg)
}
