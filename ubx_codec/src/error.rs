use crate::ubx_packets::{Direction, FieldType};

/// Error that possible during frame parsing
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParserError {
    /// The frame does not start with `0xb5 0x62`
    #[error("Invalid sync bytes, expect b5 62, got {got:02x?}")]
    InvalidSync { got: Vec<u8> },

    /// Byte count disagrees with the length announced in the header
    #[error("Invalid packet length, expect {expect}, got {got}")]
    InvalidPacketLen { expect: usize, got: usize },

    #[error("Not valid packet's checksum, expect {expect:x}, got {got:x}")]
    InvalidChecksum { expect: u16, got: u16 },

    #[error(transparent)]
    PayloadDecode(#[from] PayloadDecodeError),
}

impl ParserError {
    /// Missing sync bytes or inconsistent byte count
    pub fn is_framing(&self) -> bool {
        matches!(
            self,
            ParserError::InvalidSync { .. } | ParserError::InvalidPacketLen { .. }
        )
    }
}

/// Payload bytes do not fit the layout they were resolved to
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PayloadDecodeError {
    #[error("Field {field} ({width} bytes at offset {offset}) reads past the {len}-byte payload")]
    FieldOutOfBounds {
        field: &'static str,
        offset: usize,
        width: usize,
        len: usize,
    },

    #[error("{remainder} bytes left over after repeating group of {unit} bytes")]
    RepeatRemainder { unit: usize, remainder: usize },

    #[error("Payload length {got} does not match layout length {expect}")]
    LengthMismatch { expect: usize, got: usize },
}

/// No registered layout matches the message key and payload length
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("No {direction} layout for class {class:#04x} id {msg_id:#04x} with {len} payload bytes")]
pub struct UnknownLayoutError {
    pub class: u8,
    pub msg_id: u8,
    pub direction: Direction,
    pub len: usize,
}

/// The field name is not part of the message
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown field {name}")]
pub struct UnknownFieldError {
    pub name: String,
}

/// A supplied value does not fit its declared field type
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FieldEncodeError {
    #[error("Value {value} of field {field} does not fit {ty:?}")]
    OutOfRange {
        field: String,
        ty: FieldType,
        value: String,
    },

    #[error("Field {field} of type {ty:?} can't be built from a {got} value")]
    TypeMismatch {
        field: String,
        ty: FieldType,
        got: &'static str,
    },

    #[error("Field {field} expects {expect} bytes, got {got}")]
    WrongLength {
        field: String,
        expect: usize,
        got: usize,
    },
}

/// Error that possible during frame building
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BuilderError {
    #[error(transparent)]
    UnknownLayout(#[from] UnknownLayoutError),

    #[error(transparent)]
    UnknownField(#[from] UnknownFieldError),

    #[error("Missing value for field {name}")]
    MissingField { name: String },

    #[error(transparent)]
    FieldEncode(#[from] FieldEncodeError),

    #[error("Payload of {len} bytes does not fit the length field")]
    PayloadTooLong { len: usize },
}
