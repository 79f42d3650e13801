use super::{NONE, POLL_EMPTY};
use crate::ubx_packets::{field, scaled, ubx_layout, FieldType::*, MessageDef};

pub(super) static MESSAGES: &[MessageDef] = &[
    MessageDef::named(0x28, 0x00, "HNR-PVT"),
    MessageDef {
        class: 0x28,
        id: 0x01,
        name: "HNR-ATT",
        get: &[ubx_layout!([
            field("iTOW", U4),
            field("version", U1),
            field("reserved1", Bytes(3)),
            scaled("roll", I4, 1e-5),
            scaled("pitch", I4, 1e-5),
            scaled("heading", I4, 1e-5),
            scaled("accRoll", U4, 1e-5),
            scaled("accPitch", U4, 1e-5),
            scaled("accHeading", U4, 1e-5),
        ])],
        set: NONE,
        poll: POLL_EMPTY,
    },
    MessageDef {
        class: 0x28,
        id: 0x02,
        name: "HNR-INS",
        get: &[ubx_layout!([
            field("bitfield0", X4),
            field("reserved1", Bytes(4)),
            field("iTOW", U4),
            scaled("xAngRate", I4, 1e-3),
            scaled("yAngRate", I4, 1e-3),
            scaled("zAngRate", I4, 1e-3),
            scaled("xAccel", I4, 1e-2),
            scaled("yAccel", I4, 1e-2),
            scaled("zAccel", I4, 1e-2),
        ])],
        set: NONE,
        poll: POLL_EMPTY,
    },
];
