use super::{NONE, POLL_EMPTY};
use crate::ubx_packets::{field, ubx_layout, FieldType::*, MessageDef};

pub(super) static MESSAGES: &[MessageDef] = &[
    MessageDef {
        class: 0x02,
        id: 0x13,
        name: "RXM-SFRBX",
        get: &[ubx_layout!(
            [
                field("gnssId", U1),
                field("svId", U1),
                field("reserved1", U1),
                field("freqId", U1),
                field("numWords", U1),
                field("chn", U1),
                field("version", U1),
                field("reserved2", U1),
            ],
            repeat [field("dwrd", U4)]
        )],
        set: NONE,
        poll: NONE,
    },
    MessageDef {
        class: 0x02,
        id: 0x15,
        name: "RXM-RAWX",
        get: &[ubx_layout!(
            [
                field("rcvTow", R8),
                field("week", U2),
                field("leapS", I1),
                field("numMeas", U1),
                field("recStat", X1),
                field("reserved1", Bytes(3)),
            ],
            repeat [
                field("prMes", R8),
                field("cpMes", R8),
                field("doMes", R4),
                field("gnssId", U1),
                field("svId", U1),
                field("reserved2", U1),
                field("freqId", U1),
                field("locktime", U2),
                field("cno", U1),
                field("prStdev", X1),
                field("cpStdev", X1),
                field("doStdev", X1),
                field("trkStat", X1),
                field("reserved3", U1),
            ]
        )],
        set: NONE,
        poll: POLL_EMPTY,
    },
    MessageDef::named(0x02, 0x32, "RXM-RTCM"),
    MessageDef {
        class: 0x02,
        id: 0x41,
        name: "RXM-PMREQ",
        get: NONE,
        set: &[
            ubx_layout!([field("duration", U4), field("flags", X4)]),
            ubx_layout!([
                field("version", U1),
                field("reserved1", Bytes(3)),
                field("duration", U4),
                field("flags", X4),
                field("wakeupSources", X4),
            ]),
        ],
        poll: NONE,
    },
    MessageDef::named(0x02, 0x61, "RXM-IMES"),
];
