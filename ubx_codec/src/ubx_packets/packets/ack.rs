use super::NONE;
use crate::ubx_packets::{field, ubx_layout, FieldType::*, MessageDef, MessageLayout};

/// Class and id of the acknowledged message
const ACK: MessageLayout = ubx_layout!([field("clsID", U1), field("msgID", U1)]);

pub(super) static MESSAGES: &[MessageDef] = &[
    MessageDef {
        class: 0x05,
        id: 0x00,
        name: "ACK-NAK",
        get: &[ACK],
        set: NONE,
        poll: NONE,
    },
    MessageDef {
        class: 0x05,
        id: 0x01,
        name: "ACK-ACK",
        get: &[ACK],
        set: NONE,
        poll: NONE,
    },
];
