use super::{NONE, POLL_EMPTY};
use crate::ubx_packets::{field, ubx_layout, FieldType::*, MessageDef};

pub(super) static MESSAGES: &[MessageDef] = &[
    MessageDef::named(0x13, 0x00, "MGA-GPS"),
    MessageDef::named(0x13, 0x02, "MGA-GAL"),
    MessageDef::named(0x13, 0x03, "MGA-BDS"),
    MessageDef::named(0x13, 0x05, "MGA-QZSS"),
    MessageDef::named(0x13, 0x06, "MGA-GLO"),
    MessageDef::named(0x13, 0x20, "MGA-ANO"),
    // Only the receiver's acknowledgement of flash transfers has a GET form
    MessageDef {
        class: 0x13,
        id: 0x21,
        name: "MGA-FLASH-ACK",
        get: &[ubx_layout!([
            field("type", U1),
            field("version", U1),
            field("ack", U1),
            field("reserved1", U1),
            field("sequence", U2),
        ])],
        set: NONE,
        poll: NONE,
    },
    MessageDef::named(0x13, 0x40, "MGA-INI"),
    MessageDef {
        class: 0x13,
        id: 0x60,
        name: "MGA-ACK",
        get: &[ubx_layout!([
            field("type", U1),
            field("version", U1),
            field("infoCode", U1),
            field("msgId", U1),
            field("msgPayloadStart", Bytes(4)),
        ])],
        set: NONE,
        poll: NONE,
    },
    MessageDef {
        class: 0x13,
        id: 0x80,
        name: "MGA-DBD",
        get: &[ubx_layout!(
            [field("reserved1", Bytes(12))],
            repeat [field("data", U1)]
        )],
        set: NONE,
        poll: POLL_EMPTY,
    },
];
