use crate::{
    constants::{UBX_CHECKSUM_LEN, UBX_CLASS_OFFSET, UBX_HEADER_LEN},
    error::ParserError,
};

/// UBX [Fletcher-16 checksum](https://en.wikipedia.org/wiki/Fletcher%27s_checksum) calculator, fed incrementally
#[derive(Default)]
pub(crate) struct UbxChecksumCalc {
    ck_a: u8,
    ck_b: u8,
}

impl UbxChecksumCalc {
    pub(crate) const fn new() -> Self {
        Self { ck_a: 0, ck_b: 0 }
    }

    /// Update checksum with new bytes
    pub(crate) const fn update(&mut self, bytes: &[u8]) {
        let mut i = 0;
        while i < bytes.len() {
            self.update_byte(bytes[i]);
            i += 1;
        }
    }

    /// Update checksum with a single byte
    pub(crate) const fn update_byte(&mut self, byte: u8) {
        self.ck_a = self.ck_a.wrapping_add(byte);
        self.ck_b = self.ck_b.wrapping_add(self.ck_a);
    }

    /// Get the current checksum result
    pub(crate) const fn result(self) -> (u8, u8) {
        (self.ck_a, self.ck_b)
    }

    /// Validate checksum and return result
    pub(crate) const fn validate_result(
        self,
        received_ck_a: u8,
        received_ck_b: u8,
    ) -> Result<(), ParserError> {
        let is_valid = self.is_valid(received_ck_a, received_ck_b);
        let (calculated_ck_a, calculated_ck_b) = self.result();
        if is_valid {
            Ok(())
        } else {
            Err(ParserError::InvalidChecksum {
                expect: u16::from_le_bytes([received_ck_a, received_ck_b]),
                got: u16::from_le_bytes([calculated_ck_a, calculated_ck_b]),
            })
        }
    }

    const fn is_valid(&self, received_ck_a: u8, received_ck_b: u8) -> bool {
        self.ck_a == received_ck_a && self.ck_b == received_ck_b
    }
}

/// Checksum of `data`, which should start at the class byte
pub const fn ubx_checksum(data: &[u8]) -> (u8, u8) {
    let mut calc = UbxChecksumCalc::new();
    calc.update(data);
    calc.result()
}

/// Checksum over class, id, the little-endian length and the payload
pub const fn compute(class: u8, msg_id: u8, len_bytes: [u8; 2], payload: &[u8]) -> (u8, u8) {
    let mut calc = UbxChecksumCalc::new();
    calc.update(&[class, msg_id, len_bytes[0], len_bytes[1]]);
    calc.update(payload);
    calc.result()
}

/// Does the trailing checksum of a complete frame match its contents?
///
/// Only the checksum is looked at; sync bytes and the length field are the
/// parser's business. Anything shorter than an empty frame is invalid.
pub fn verify(frame: &[u8]) -> bool {
    if frame.len() < UBX_HEADER_LEN + UBX_CHECKSUM_LEN {
        return false;
    }
    let (body, ck) = frame.split_at(frame.len() - UBX_CHECKSUM_LEN);
    let mut calc = UbxChecksumCalc::new();
    calc.update(&body[UBX_CLASS_OFFSET..]);
    calc.is_valid(ck[0], ck[1])
}
