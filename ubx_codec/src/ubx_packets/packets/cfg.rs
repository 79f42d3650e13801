use super::{NONE, POLL_EMPTY};
use crate::ubx_packets::{field, scaled, ubx_layout, FieldType::*, MessageDef, MessageLayout};

/// Port configuration, the meaning of `mode` depends on `portID`
const CFG_PRT: MessageLayout = ubx_layout!([
    field("portID", U1),
    field("reserved0", U1),
    field("txReady", X2),
    field("mode", X4),
    field("baudRate", U4),
    field("inProtoMask", X2),
    field("outProtoMask", X2),
    field("flags", X2),
    field("reserved5", U2),
]);

/// Message rate on each port
const CFG_MSG: MessageLayout = ubx_layout!([
    field("msgClass", U1),
    field("msgID", U1),
    field("rateDDC", U1),
    field("rateUART1", U1),
    field("rateUART2", U1),
    field("rateUSB", U1),
    field("rateSPI", U1),
    field("reserved", U1),
]);

/// One block per protocol
const CFG_INF: MessageLayout = ubx_layout!(
    [],
    repeat [
        field("protocolID", U1),
        field("reserved1", Bytes(3)),
        field("infMsgMaskDDC", X1),
        field("infMsgMaskUART1", X1),
        field("infMsgMaskUART2", X1),
        field("infMsgMaskUSB", X1),
        field("infMsgMaskSPI", X1),
        field("reserved2", X1),
    ]
);

const CFG_RATE: MessageLayout = ubx_layout!([
    field("measRate", U2),
    field("navRate", U2),
    field("timeRef", U2),
]);

const CFG_RXM: MessageLayout = ubx_layout!([field("reserved1", U1), field("lpMode", U1)]);

const CFG_ANT: MessageLayout = ubx_layout!([field("flags", X2), field("pins", X2)]);

const CFG_SBAS: MessageLayout = ubx_layout!([
    field("mode", X1),
    field("usage", X1),
    field("maxSBAS", U1),
    field("scanmode2", X1),
    field("scanmode1", X4),
]);

/// Legacy NMEA configuration (protocol < 14)
const CFG_NMEA_V0_SHORT: MessageLayout = ubx_layout!([
    field("filter", X1),
    field("nmeaVersion", U1),
    field("numSV", U1),
    field("flags", X1),
]);

const CFG_NMEA_V0: MessageLayout = ubx_layout!([
    field("filter", X1),
    field("nmeaVersion", U1),
    field("numSV", U1),
    field("flags", X1),
    field("gnssToFilter", X4),
    field("svNumbering", U1),
    field("mainTalkerId", U1),
    field("gsvTalkerId", U1),
    field("version", U1),
]);

const CFG_NMEA_V1: MessageLayout = ubx_layout!([
    field("filter", X1),
    field("nmeaVersion", U1),
    field("numSV", U1),
    field("flags", X1),
    field("gnssToFilter", X4),
    field("svNumbering", U1),
    field("mainTalkerId", U1),
    field("gsvTalkerId", U1),
    field("version", U1),
    field("bdsTalkerId", Chars(2)),
    field("reserved1", Bytes(6)),
]);

const CFG_USB: MessageLayout = ubx_layout!([
    field("vendorID", U2),
    field("productID", U2),
    field("reserved1", U2),
    field("reserved2", U2),
    field("powerConsumption", U2),
    field("flags", X2),
    field("vendorString", Chars(32)),
    field("productString", Chars(32)),
    field("serialNumber", Chars(32)),
]);

/// Navigation engine settings
const CFG_NAV5: MessageLayout = ubx_layout!([
    field("mask", X2),
    field("dynModel", U1),
    field("fixMode", U1),
    scaled("fixedAlt", I4, 0.01),
    scaled("fixedAltVar", U4, 0.0001),
    field("minElev", I1),
    field("drLimit", U1),
    scaled("pDop", U2, 0.1),
    scaled("tDop", U2, 0.1),
    field("pAcc", U2),
    field("tAcc", U2),
    field("staticHoldThresh", U1),
    field("dgnssTimeout", U1),
    field("cnoThreshNumSVs", U1),
    field("cnoThresh", U1),
    field("reserved1", U2),
    field("staticHoldMaxDist", U2),
    field("utcStandard", U1),
    field("reserved2", Bytes(5)),
]);

/// Time pulse parameters
const CFG_TP5: MessageLayout = ubx_layout!([
    field("tpIdx", U1),
    field("version", U1),
    field("reserved1", U2),
    field("antCableDelay", I2),
    field("rfGroupDelay", I2),
    field("freqPeriod", U4),
    field("freqPeriodLock", U4),
    field("pulseLenRatio", U4),
    field("pulseLenRatioLock", U4),
    field("userConfigDelay", I4),
    field("flags", X4),
]);

const CFG_ITFM: MessageLayout = ubx_layout!([field("config", X4), field("config2", X4)]);

/// Tracking channel allocation, one block per GNSS
const CFG_GNSS: MessageLayout = ubx_layout!(
    [
        field("msgVer", U1),
        field("numTrkChHw", U1),
        field("numTrkChUse", U1),
        field("numConfigBlocks", U1),
    ],
    repeat [
        field("gnssId", U1),
        field("resTrkCh", U1),
        field("maxTrkCh", U1),
        field("reserved1", U1),
        field("flags", X4),
    ]
);

/// Time mode (survey-in or fixed position)
const CFG_TMODE3: MessageLayout = ubx_layout!([
    field("version", U1),
    field("reserved1", U1),
    field("flags", X2),
    field("ecefXOrLat", I4),
    field("ecefYOrLon", I4),
    field("ecefZOrAlt", I4),
    field("ecefXOrLatHP", I1),
    field("ecefYOrLonHP", I1),
    field("ecefZOrAltHP", I1),
    field("reserved2", U1),
    scaled("fixedPosAcc", U4, 0.1),
    field("svinMinDur", U4),
    scaled("svinAccLimit", U4, 0.1),
    field("reserved3", Bytes(8)),
]);

pub(super) static MESSAGES: &[MessageDef] = &[
    MessageDef {
        class: 0x06,
        id: 0x00,
        name: "CFG-PRT",
        get: &[CFG_PRT],
        set: &[CFG_PRT],
        poll: &[MessageLayout::empty(), ubx_layout!([field("portID", U1)])],
    },
    MessageDef {
        class: 0x06,
        id: 0x01,
        name: "CFG-MSG",
        get: &[CFG_MSG],
        set: &[
            ubx_layout!([
                field("msgClass", U1),
                field("msgID", U1),
                field("rate", U1),
            ]),
            CFG_MSG,
        ],
        poll: &[ubx_layout!([field("msgClass", U1), field("msgID", U1)])],
    },
    MessageDef {
        class: 0x06,
        id: 0x02,
        name: "CFG-INF",
        get: &[CFG_INF],
        set: &[CFG_INF],
        poll: &[ubx_layout!([field("protocolID", U1)])],
    },
    MessageDef {
        class: 0x06,
        id: 0x04,
        name: "CFG-RST",
        get: NONE,
        set: &[ubx_layout!([
            field("navBbrMask", X2),
            field("resetMode", U1),
            field("reserved1", U1),
        ])],
        poll: NONE,
    },
    MessageDef {
        class: 0x06,
        id: 0x06,
        name: "CFG-DAT",
        get: &[ubx_layout!([
            field("datumNum", U2),
            field("datumName", Chars(6)),
            field("majA", R8),
            field("flat", R8),
            field("dX", R4),
            field("dY", R4),
            field("dZ", R4),
            field("rotX", R4),
            field("rotY", R4),
            field("rotZ", R4),
            field("scale", R4),
        ])],
        set: &[ubx_layout!([
            field("majA", R8),
            field("flat", R8),
            field("dX", R4),
            field("dY", R4),
            field("dZ", R4),
            field("rotX", R4),
            field("rotY", R4),
            field("rotZ", R4),
            field("scale", R4),
        ])],
        poll: POLL_EMPTY,
    },
    MessageDef {
        class: 0x06,
        id: 0x08,
        name: "CFG-RATE",
        get: &[CFG_RATE],
        set: &[CFG_RATE],
        poll: POLL_EMPTY,
    },
    MessageDef {
        class: 0x06,
        id: 0x09,
        name: "CFG-CFG",
        get: NONE,
        set: &[
            ubx_layout!([
                field("clearMask", X4),
                field("saveMask", X4),
                field("loadMask", X4),
            ]),
            ubx_layout!([
                field("clearMask", X4),
                field("saveMask", X4),
                field("loadMask", X4),
                field("deviceMask", X1),
            ]),
        ],
        poll: NONE,
    },
    MessageDef {
        class: 0x06,
        id: 0x11,
        name: "CFG-RXM",
        get: &[CFG_RXM],
        set: &[CFG_RXM],
        poll: POLL_EMPTY,
    },
    MessageDef {
        class: 0x06,
        id: 0x13,
        name: "CFG-ANT",
        get: &[CFG_ANT],
        set: &[CFG_ANT],
        poll: POLL_EMPTY,
    },
    MessageDef {
        class: 0x06,
        id: 0x16,
        name: "CFG-SBAS",
        get: &[CFG_SBAS],
        set: &[CFG_SBAS],
        poll: POLL_EMPTY,
    },
    MessageDef {
        class: 0x06,
        id: 0x17,
        name: "CFG-NMEA",
        get: &[CFG_NMEA_V0_SHORT, CFG_NMEA_V0, CFG_NMEA_V1],
        set: &[CFG_NMEA_V0_SHORT, CFG_NMEA_V0, CFG_NMEA_V1],
        poll: POLL_EMPTY,
    },
    MessageDef {
        class: 0x06,
        id: 0x1b,
        name: "CFG-USB",
        get: &[CFG_USB],
        set: &[CFG_USB],
        poll: POLL_EMPTY,
    },
    MessageDef::named(0x06, 0x1d, "CFG-TMODE"),
    MessageDef::named(0x06, 0x1e, "CFG-ODO"),
    MessageDef::named(0x06, 0x23, "CFG-NAVX5"),
    MessageDef {
        class: 0x06,
        id: 0x24,
        name: "CFG-NAV5",
        get: &[CFG_NAV5],
        set: &[CFG_NAV5],
        poll: POLL_EMPTY,
    },
    MessageDef {
        class: 0x06,
        id: 0x31,
        name: "CFG-TP5",
        get: &[CFG_TP5],
        set: &[CFG_TP5],
        poll: &[MessageLayout::empty(), ubx_layout!([field("tpIdx", U1)])],
    },
    MessageDef {
        class: 0x06,
        id: 0x39,
        name: "CFG-ITFM",
        get: &[CFG_ITFM],
        set: &[CFG_ITFM],
        poll: POLL_EMPTY,
    },
    MessageDef::named(0x06, 0x3b, "CFG-PM2"),
    MessageDef::named(0x06, 0x3d, "CFG-TMODE2"),
    MessageDef {
        class: 0x06,
        id: 0x3e,
        name: "CFG-GNSS",
        get: &[CFG_GNSS],
        set: &[CFG_GNSS],
        poll: POLL_EMPTY,
    },
    MessageDef::named(0x06, 0x47, "CFG-LOGFILTER"),
    MessageDef::named(0x06, 0x57, "CFG-PWR"),
    MessageDef::named(0x06, 0x60, "CFG-ESRC"),
    MessageDef {
        class: 0x06,
        id: 0x71,
        name: "CFG-TMODE3",
        get: &[CFG_TMODE3],
        set: &[CFG_TMODE3],
        poll: POLL_EMPTY,
    },
    MessageDef::named(0x06, 0x8a, "CFG-VALSET"),
    MessageDef {
        class: 0x06,
        id: 0x8b,
        name: "CFG-VALGET",
        get: NONE,
        set: NONE,
        // keys only, the response carries variable-width values
        poll: &[ubx_layout!(
            [
                field("version", U1),
                field("layer", U1),
                field("position", U2),
            ],
            repeat [field("keys", X4)]
        )],
    },
    MessageDef {
        class: 0x06,
        id: 0x8c,
        name: "CFG-VALDEL",
        get: NONE,
        set: &[ubx_layout!(
            [
                field("version", U1),
                field("layers", X1),
                field("reserved0", U2),
            ],
            repeat [field("keys", X4)]
        )],
        poll: NONE,
    },
];
