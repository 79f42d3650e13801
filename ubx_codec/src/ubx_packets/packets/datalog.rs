use super::{NONE, POLL_EMPTY};
use crate::ubx_packets::{field, ubx_layout, FieldType::*, MessageDef, MessageLayout};

pub(super) static MESSAGES: &[MessageDef] = &[
    MessageDef {
        class: 0x21,
        id: 0x03,
        name: "LOG-ERASE",
        get: NONE,
        set: &[MessageLayout::empty()],
        poll: NONE,
    },
    MessageDef::named(0x21, 0x04, "LOG-STRING"),
    MessageDef {
        class: 0x21,
        id: 0x07,
        name: "LOG-CREATE",
        get: NONE,
        set: &[ubx_layout!([
            field("version", U1),
            field("logCfg", X1),
            field("reserved1", U1),
            field("logSize", U1),
            field("userDefinedSize", U4),
        ])],
        poll: NONE,
    },
    MessageDef {
        class: 0x21,
        id: 0x08,
        name: "LOG-INFO",
        get: &[ubx_layout!([
            field("version", U1),
            field("reserved1", Bytes(3)),
            field("filestoreCapacity", U4),
            field("reserved2", Bytes(8)),
            field("currentMaxLogSize", U4),
            field("currentLogSize", U4),
            field("entryCount", U4),
            field("oldestYear", U2),
            field("oldestMonth", U1),
            field("oldestDay", U1),
            field("oldestHour", U1),
            field("oldestMinute", U1),
            field("oldestSecond", U1),
            field("reserved3", U1),
            field("newestYear", U2),
            field("newestMonth", U1),
            field("newestDay", U1),
            field("newestHour", U1),
            field("newestMinute", U1),
            field("newestSecond", U1),
            field("reserved4", U1),
            field("status", X1),
            field("reserved5", Bytes(3)),
        ])],
        set: NONE,
        poll: POLL_EMPTY,
    },
    MessageDef::named(0x21, 0x09, "LOG-RETRIEVE"),
    MessageDef::named(0x21, 0x0b, "LOG-RETRIEVEPOS"),
    MessageDef::named(0x21, 0x0d, "LOG-RETRIEVESTRING"),
    MessageDef::named(0x21, 0x0e, "LOG-FINDTIME"),
];
