use super::{NONE, POLL_EMPTY};
use crate::ubx_packets::{field, ubx_layout, FieldType::*, MessageDef};

pub(super) static MESSAGES: &[MessageDef] = &[
    MessageDef {
        class: 0x0a,
        id: 0x02,
        name: "MON-IO",
        // one block per I/O port
        get: &[ubx_layout!(
            [],
            repeat [
                field("rxBytes", U4),
                field("txBytes", U4),
                field("parityErrs", U2),
                field("framingErrs", U2),
                field("overrunErrs", U2),
                field("breakCond", U2),
                field("rxBusy", U1),
                field("txBusy", U1),
                field("reserved1", U2),
            ]
        )],
        set: NONE,
        poll: POLL_EMPTY,
    },
    MessageDef {
        class: 0x0a,
        id: 0x04,
        name: "MON-VER",
        get: &[ubx_layout!(
            [field("swVersion", Chars(30)), field("hwVersion", Chars(10))],
            repeat [field("extension", Chars(30))]
        )],
        set: NONE,
        poll: POLL_EMPTY,
    },
    MessageDef::named(0x0a, 0x06, "MON-MSGPP"),
    MessageDef::named(0x0a, 0x07, "MON-RXBUF"),
    MessageDef::named(0x0a, 0x08, "MON-TXBUF"),
    MessageDef {
        class: 0x0a,
        id: 0x09,
        name: "MON-HW",
        get: &[ubx_layout!([
            field("pinSel", X4),
            field("pinBank", X4),
            field("pinDir", X4),
            field("pinVal", X4),
            field("noisePerMS", U2),
            field("agcCnt", U2),
            field("aStatus", U1),
            field("aPower", U1),
            field("flags", X1),
            field("reserved1", U1),
            field("usedMask", X4),
            field("VP", Bytes(17)),
            field("jamInd", U1),
            field("reserved2", U2),
            field("pinIrq", X4),
            field("pullH", X4),
            field("pullL", X4),
        ])],
        set: NONE,
        poll: POLL_EMPTY,
    },
    MessageDef::named(0x0a, 0x0b, "MON-HW2"),
    MessageDef {
        class: 0x0a,
        id: 0x21,
        name: "MON-RXR",
        get: &[ubx_layout!([field("flags", X1)])],
        set: NONE,
        poll: NONE,
    },
    MessageDef::named(0x0a, 0x27, "MON-PATCH"),
    MessageDef {
        class: 0x0a,
        id: 0x28,
        name: "MON-GNSS",
        get: &[ubx_layout!([
            field("version", U1),
            field("supported", X1),
            field("defaultGnss", X1),
            field("enabled", X1),
            field("simultaneous", U1),
            field("reserved1", Bytes(3)),
        ])],
        set: NONE,
        poll: POLL_EMPTY,
    },
    MessageDef::named(0x0a, 0x2e, "MON-SMGR"),
    MessageDef::named(0x0a, 0x31, "MON-SPAN"),
    MessageDef::named(0x0a, 0x36, "MON-COMMS"),
    MessageDef::named(0x0a, 0x37, "MON-HW3"),
    MessageDef::named(0x0a, 0x38, "MON-RF"),
];
