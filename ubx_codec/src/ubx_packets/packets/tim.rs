use super::{NONE, POLL_EMPTY};
use crate::ubx_packets::{field, scaled, ubx_layout, FieldType::*, MessageDef};

pub(super) static MESSAGES: &[MessageDef] = &[
    MessageDef {
        class: 0x0d,
        id: 0x01,
        name: "TIM-TP",
        get: &[ubx_layout!([
            field("towMS", U4),
            scaled("towSubMS", U4, 1.0 / 4_294_967_296.0),
            field("qErr", I4),
            field("week", U2),
            field("flags", X1),
            field("refInfo", X1),
        ])],
        set: NONE,
        poll: POLL_EMPTY,
    },
    MessageDef {
        class: 0x0d,
        id: 0x03,
        name: "TIM-TM2",
        get: &[ubx_layout!([
            field("ch", U1),
            field("flags", X1),
            field("count", U2),
            field("wnR", U2),
            field("wnF", U2),
            field("towMsR", U4),
            field("towSubMsR", U4),
            field("towMsF", U4),
            field("towSubMsF", U4),
            field("accEst", U4),
        ])],
        set: NONE,
        poll: POLL_EMPTY,
    },
    MessageDef {
        class: 0x0d,
        id: 0x04,
        name: "TIM-SVIN",
        get: &[ubx_layout!([
            field("dur", U4),
            field("meanX", I4),
            field("meanY", I4),
            field("meanZ", I4),
            field("meanV", U4),
            field("obs", U4),
            field("valid", U1),
            field("active", U1),
            field("reserved1", U2),
        ])],
        set: NONE,
        poll: POLL_EMPTY,
    },
    MessageDef {
        class: 0x0d,
        id: 0x06,
        name: "TIM-VRFY",
        get: &[ubx_layout!([
            field("itow", I4),
            field("frac", I4),
            field("deltaMs", I4),
            field("deltaNs", I4),
            field("wno", U2),
            field("flags", X1),
            field("reserved1", U1),
        ])],
        set: NONE,
        poll: POLL_EMPTY,
    },
    MessageDef::named(0x0d, 0x11, "TIM-VCOCAL"),
    MessageDef::named(0x0d, 0x12, "TIM-TOS"),
];
