use super::{NONE, POLL_EMPTY};
use crate::ubx_packets::{field, ubx_layout, FieldType::*, MessageDef};

pub(super) static MESSAGES: &[MessageDef] = &[
    MessageDef::named(0x27, 0x01, "SEC-SIGN"),
    MessageDef {
        class: 0x27,
        id: 0x03,
        name: "SEC-UNIQID",
        get: &[ubx_layout!([
            field("version", U1),
            field("reserved1", Bytes(3)),
            field("uniqueId", Bytes(5)),
        ])],
        set: NONE,
        poll: POLL_EMPTY,
    },
];
