//! Decoded message model

mod display;

use std::borrow::Cow;

use crate::{
    builder,
    error::{BuilderError, PayloadDecodeError, UnknownFieldError},
    ubx_packets::{decode_payload, Direction, FieldValue, Fields, Registry},
};

/// One decoded UBX message.
///
/// Holds the raw payload next to the fields decoded from it. `Display`
/// gives the concise form `<UBX(NAV-VELNED, iTOW=16:01:50, ...)>`,
/// [`UbxMessage::canonical`] the constructor form.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct UbxMessage {
    class: u8,
    msg_id: u8,
    direction: Direction,
    payload: Vec<u8>,
    checksum_valid: bool,
    fields: Fields,
}

impl UbxMessage {
    /// Decodes `payload` as a message of the given class and id.
    ///
    /// This is the inverse of [`UbxMessage::canonical`].
    pub fn new(
        class: u8,
        msg_id: u8,
        direction: Direction,
        payload: impl Into<Vec<u8>>,
    ) -> Result<Self, PayloadDecodeError> {
        Self::decode(class, msg_id, direction, payload.into(), true)
    }

    pub(crate) fn decode(
        class: u8,
        msg_id: u8,
        direction: Direction,
        payload: Vec<u8>,
        checksum_valid: bool,
    ) -> Result<Self, PayloadDecodeError> {
        let fields = match Registry::global().resolve(class, msg_id, direction, payload.len()) {
            Ok(layout) => decode_payload(&payload, layout)?,
            Err(err) => {
                log::debug!("{err}, keeping raw payload");
                Fields::new()
            },
        };
        Ok(Self {
            class,
            msg_id,
            direction,
            payload,
            checksum_valid,
            fields,
        })
    }

    pub fn class(&self) -> u8 {
        self.class
    }

    pub fn msg_id(&self) -> u8 {
        self.msg_id
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// False only for frames accepted in lenient mode despite a bad checksum
    pub fn checksum_valid(&self) -> bool {
        self.checksum_valid
    }

    /// Decoded fields in wire order, empty for raw messages
    pub fn fields(&self) -> &Fields {
        &self.fields
    }

    pub fn into_fields(self) -> Fields {
        self.fields
    }

    pub fn field(&self, name: &str) -> Result<&FieldValue, UnknownFieldError> {
        self.fields.get(name).ok_or_else(|| UnknownFieldError {
            name: name.to_owned(),
        })
    }

    /// Message name such as `NAV-VELNED`
    pub fn identity(&self) -> Cow<'static, str> {
        Registry::global().identity(self.class, self.msg_id)
    }

    /// Constructor style rendering, e.g.
    /// `UbxMessage(0x05, 0x01, GET, payload=b"\x06\x01")`
    pub fn canonical(&self) -> String {
        let mut out = format!(
            "UbxMessage({:#04x}, {:#04x}, {}",
            self.class, self.msg_id, self.direction
        );
        if !self.payload.is_empty() {
            out.push_str(", payload=b\"");
            out.extend(
                self.payload
                    .iter()
                    .flat_map(|&b| core::ascii::escape_default(b))
                    .map(char::from),
            );
            out.push('"');
        }
        out.push(')');
        out
    }

    /// Wire frame of the stored payload with a freshly computed checksum
    pub fn to_frame(&self) -> Result<Vec<u8>, BuilderError> {
        builder::frame(self.class, self.msg_id, &self.payload)
    }
}
