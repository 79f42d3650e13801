//! # ubx_codec
//!
//! A table driven codec for the UBX binary protocol spoken by u-blox GNSS
//! receivers. Frames are decoded into messages with named, typed fields and
//! field values are encoded back into frames, without one Rust type per
//! message.
//!
//! Parsing Frames
//! ==============
//!
//! [`parse`] takes exactly one frame. The layout used for the payload is
//! chosen from the message class, id, [`Direction`] and payload length:
//! ```
//! use ubx_codec::{parse, Direction, FieldValue, ValidationMode};
//!
//! let frame = [
//!     0xb5, 0x62, 0x06, 0x01, 0x08, 0x00, 0xf0, 0x01, 0x00, 0x01, 0x01, 0x01, 0x00, 0x00,
//!     0x03, 0x36,
//! ];
//! let msg = parse(&frame, ValidationMode::Strict, Direction::Get).unwrap();
//! assert_eq!(msg.identity(), "CFG-MSG");
//! assert_eq!(msg.field("rateUART1"), Ok(&FieldValue::Unsigned(1)));
//! assert_eq!(
//!     msg.to_string(),
//!     "<UBX(CFG-MSG, msgClass=NMEA-Standard, msgID=GLL, rateDDC=0, rateUART1=1, \
//!      rateUART2=1, rateUSB=1, rateSPI=0, reserved=0)>"
//! );
//! ```
//! With [`ValidationMode::Lenient`] a frame with a bad checksum is decoded
//! anyway and [`UbxMessage::checksum_valid`] reports the mismatch. Payloads
//! that fit no registered layout come back as raw messages with no fields.
//!
//! Reading a stream is left to the caller; [`scan_buffer`] tells where the
//! next frame starts and how long it is.
//!
//! Building Frames
//! ===============
//!
//! [`build`] picks the layout whose field names match the supplied [`Fields`]:
//! ```
//! use ubx_codec::{build, Direction, Fields};
//!
//! let fields: Fields = [("msgClass", 0xf0u8), ("msgID", 0x01), ("rate", 1)]
//!     .into_iter()
//!     .collect();
//! let frame = build(0x06, 0x01, Direction::Set, &fields).unwrap();
//! assert_eq!(frame.len(), 11);
//! ```

pub use crate::{
    builder::build,
    error::{
        BuilderError, FieldEncodeError, ParserError, PayloadDecodeError, UnknownFieldError,
        UnknownLayoutError,
    },
    message::UbxMessage,
    parser::{compute, parse, scan_buffer, ubx_checksum, verify, BufferHeadContents, ValidationMode},
    ubx_packets::*,
};

mod builder;
pub mod constants;
mod error;
mod message;
mod parser;
mod ubx_packets;
