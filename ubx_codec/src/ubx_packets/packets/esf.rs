use super::{NONE, POLL_EMPTY};
use crate::ubx_packets::{field, ubx_layout, FieldType::*, MessageDef};

pub(super) static MESSAGES: &[MessageDef] = &[
    MessageDef {
        class: 0x10,
        id: 0x02,
        name: "ESF-MEAS",
        // the optional trailing calibTtag is not distinguishable by length
        get: &[ubx_layout!(
            [
                field("timeTag", U4),
                field("flags", X2),
                field("id", U2),
            ],
            repeat [field("data", X4)]
        )],
        set: NONE,
        poll: NONE,
    },
    MessageDef {
        class: 0x10,
        id: 0x03,
        name: "ESF-RAW",
        get: &[ubx_layout!(
            [field("reserved1", Bytes(4))],
            repeat [field("data", X4), field("sTtag", U4)]
        )],
        set: NONE,
        poll: NONE,
    },
    MessageDef::named(0x10, 0x10, "ESF-STATUS"),
    MessageDef::named(0x10, 0x14, "ESF-ALG"),
    MessageDef::named(0x10, 0x15, "ESF-INS"),
    MessageDef {
        class: 0x10,
        id: 0x16,
        name: "ESF-ALG-POLL",
        get: NONE,
        set: NONE,
        poll: POLL_EMPTY,
    },
];
