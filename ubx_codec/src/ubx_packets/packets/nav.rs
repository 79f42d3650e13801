use super::{NONE, POLL_EMPTY};
use crate::ubx_packets::{field, scaled, ubx_layout, FieldType::*, MessageDef, MessageLayout};

/// Navigation Position Velocity Time Solution, protocol 15+
const NAV_PVT: MessageLayout = ubx_layout!([
    field("iTOW", U4),
    field("year", U2),
    field("month", U1),
    field("day", U1),
    field("hour", U1),
    field("min", U1),
    field("second", U1),
    field("valid", X1),
    field("tAcc", U4),
    field("nano", I4),
    field("fixType", U1),
    field("flags", X1),
    field("flags2", X1),
    field("numSV", U1),
    scaled("lon", I4, 1e-7),
    scaled("lat", I4, 1e-7),
    field("height", I4),
    field("hMSL", I4),
    field("hAcc", U4),
    field("vAcc", U4),
    field("velN", I4),
    field("velE", I4),
    field("velD", I4),
    field("gSpeed", I4),
    scaled("headMot", I4, 1e-5),
    field("sAcc", U4),
    scaled("headAcc", U4, 1e-5),
    scaled("pDOP", U2, 0.01),
    field("reserved1", Bytes(6)),
    scaled("headVeh", I4, 1e-5),
    scaled("magDec", I2, 1e-2),
    scaled("magAcc", U2, 1e-2),
]);

/// Same solution as emitted by protocol 14 firmware
const NAV_PVT_PROTO14: MessageLayout = ubx_layout!([
    field("iTOW", U4),
    field("year", U2),
    field("month", U1),
    field("day", U1),
    field("hour", U1),
    field("min", U1),
    field("second", U1),
    field("valid", X1),
    field("tAcc", U4),
    field("nano", I4),
    field("fixType", U1),
    field("flags", X1),
    field("reserved1", U1),
    field("numSV", U1),
    scaled("lon", I4, 1e-7),
    scaled("lat", I4, 1e-7),
    field("height", I4),
    field("hMSL", I4),
    field("hAcc", U4),
    field("vAcc", U4),
    field("velN", I4),
    field("velE", I4),
    field("velD", I4),
    field("gSpeed", I4),
    scaled("headMot", I4, 1e-5),
    field("sAcc", U4),
    scaled("headAcc", U4, 1e-5),
    scaled("pDOP", U2, 0.01),
    field("reserved2", U2),
    field("reserved3", U4),
]);

const NAV_RELPOSNED_V0: MessageLayout = ubx_layout!([
    field("version", U1),
    field("reserved1", U1),
    field("refStationId", U2),
    field("iTOW", U4),
    field("relPosN", I4),
    field("relPosE", I4),
    field("relPosD", I4),
    scaled("relPosHPN", I1, 0.1),
    scaled("relPosHPE", I1, 0.1),
    scaled("relPosHPD", I1, 0.1),
    field("reserved2", U1),
    scaled("accN", U4, 0.1),
    scaled("accE", U4, 0.1),
    scaled("accD", U4, 0.1),
    field("flags", X4),
]);

const NAV_RELPOSNED_V1: MessageLayout = ubx_layout!([
    field("version", U1),
    field("reserved0", U1),
    field("refStationId", U2),
    field("iTOW", U4),
    field("relPosN", I4),
    field("relPosE", I4),
    field("relPosD", I4),
    field("relPosLength", I4),
    scaled("relPosHeading", I4, 1e-5),
    field("reserved1", Bytes(4)),
    scaled("relPosHPN", I1, 0.1),
    scaled("relPosHPE", I1, 0.1),
    scaled("relPosHPD", I1, 0.1),
    scaled("relPosHPLength", I1, 0.1),
    scaled("accN", U4, 0.1),
    scaled("accE", U4, 0.1),
    scaled("accD", U4, 0.1),
    scaled("accLength", U4, 0.1),
    scaled("accHeading", U4, 1e-5),
    field("reserved2", Bytes(4)),
    field("flags", X4),
]);

pub(super) static MESSAGES: &[MessageDef] = &[
    MessageDef {
        class: 0x01,
        id: 0x01,
        name: "NAV-POSECEF",
        get: &[ubx_layout!([
            field("iTOW", U4),
            field("ecefX", I4),
            field("ecefY", I4),
            field("ecefZ", I4),
            field("pAcc", U4),
        ])],
        set: NONE,
        poll: POLL_EMPTY,
    },
    MessageDef {
        class: 0x01,
        id: 0x02,
        name: "NAV-POSLLH",
        get: &[ubx_layout!([
            field("iTOW", U4),
            scaled("lon", I4, 1e-7),
            scaled("lat", I4, 1e-7),
            field("height", I4),
            field("hMSL", I4),
            field("hAcc", U4),
            field("vAcc", U4),
        ])],
        set: NONE,
        poll: POLL_EMPTY,
    },
    MessageDef {
        class: 0x01,
        id: 0x03,
        name: "NAV-STATUS",
        get: &[ubx_layout!([
            field("iTOW", U4),
            field("gpsFix", U1),
            field("flags", X1),
            field("fixStat", X1),
            field("flags2", X1),
            field("ttff", U4),
            field("msss", U4),
        ])],
        set: NONE,
        poll: POLL_EMPTY,
    },
    MessageDef {
        class: 0x01,
        id: 0x04,
        name: "NAV-DOP",
        get: &[ubx_layout!([
            field("iTOW", U4),
            scaled("gDOP", U2, 0.01),
            scaled("pDOP", U2, 0.01),
            scaled("tDOP", U2, 0.01),
            scaled("vDOP", U2, 0.01),
            scaled("hDOP", U2, 0.01),
            scaled("nDOP", U2, 0.01),
            scaled("eDOP", U2, 0.01),
        ])],
        set: NONE,
        poll: POLL_EMPTY,
    },
    MessageDef {
        class: 0x01,
        id: 0x05,
        name: "NAV-ATT",
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
        class: 0x01,
        id: 0x06,
        name: "NAV-SOL",
        get: &[ubx_layout!([
            field("iTOW", U4),
            field("fTOW", I4),
            field("week", I2),
            field("gpsFix", U1),
            field("flags", X1),
            field("ecefX", I4),
            field("ecefY", I4),
            field("ecefZ", I4),
            field("pAcc", U4),
            field("ecefVX", I4),
            field("ecefVY", I4),
            field("ecefVZ", I4),
            field("sAcc", U4),
            scaled("pDOP", U2, 0.01),
            field("reserved1", U1),
            field("numSV", U1),
            field("reserved2", U4),
        ])],
        set: NONE,
        poll: POLL_EMPTY,
    },
    MessageDef {
        class: 0x01,
        id: 0x07,
        name: "NAV-PVT",
        get: &[NAV_PVT_PROTO14, NAV_PVT],
        set: NONE,
        poll: POLL_EMPTY,
    },
    MessageDef {
        class: 0x01,
        id: 0x09,
        name: "NAV-ODO",
        get: &[ubx_layout!([
            field("version", U1),
            field("reserved1", Bytes(3)),
            field("iTOW", U4),
            field("distance", U4),
            field("totalDistance", U4),
            field("distanceStd", U4),
        ])],
        set: NONE,
        poll: POLL_EMPTY,
    },
    MessageDef {
        class: 0x01,
        id: 0x10,
        name: "NAV-RESETODO",
        get: NONE,
        set: &[MessageLayout::empty()],
        poll: NONE,
    },
    MessageDef {
        class: 0x01,
        id: 0x11,
        name: "NAV-VELECEF",
        get: &[ubx_layout!([
            field("iTOW", U4),
            field("ecefVX", I4),
            field("ecefVY", I4),
            field("ecefVZ", I4),
            field("sAcc", U4),
        ])],
        set: NONE,
        poll: POLL_EMPTY,
    },
    MessageDef {
        class: 0x01,
        id: 0x12,
        name: "NAV-VELNED",
        get: &[ubx_layout!([
            field("iTOW", U4),
            field("velN", I4),
            field("velE", I4),
            field("velD", I4),
            field("speed", U4),
            field("gSpeed", U4),
            field("heading", I4),
            field("sAcc", U4),
            field("cAcc", U4),
        ])],
        set: NONE,
        poll: POLL_EMPTY,
    },
    MessageDef {
        class: 0x01,
        id: 0x13,
        name: "NAV-HPPOSECEF",
        get: &[ubx_layout!([
            field("version", U1),
            field("reserved1", Bytes(3)),
            field("iTOW", U4),
            field("ecefX", I4),
            field("ecefY", I4),
            field("ecefZ", I4),
            scaled("ecefXHp", I1, 0.1),
            scaled("ecefYHp", I1, 0.1),
            scaled("ecefZHp", I1, 0.1),
            field("flags", X1),
            scaled("pAcc", U4, 0.1),
        ])],
        set: NONE,
        poll: POLL_EMPTY,
    },
    MessageDef {
        class: 0x01,
        id: 0x14,
        name: "NAV-HPPOSLLH",
        get: &[ubx_layout!([
            field("version", U1),
            field("reserved1", Bytes(2)),
            field("flags", X1),
            field("iTOW", U4),
            scaled("lon", I4, 1e-7),
            scaled("lat", I4, 1e-7),
            field("height", I4),
            field("hMSL", I4),
            scaled("lonHp", I1, 1e-9),
            scaled("latHp", I1, 1e-9),
            scaled("heightHp", I1, 0.1),
            scaled("hMSLHp", I1, 0.1),
            scaled("hAcc", U4, 0.1),
            scaled("vAcc", U4, 0.1),
        ])],
        set: NONE,
        poll: POLL_EMPTY,
    },
    MessageDef {
        class: 0x01,
        id: 0x20,
        name: "NAV-TIMEGPS",
        get: &[ubx_layout!([
            field("iTOW", U4),
            field("fTOW", I4),
            field("week", I2),
            field("leapS", I1),
            field("valid", X1),
            field("tAcc", U4),
        ])],
        set: NONE,
        poll: POLL_EMPTY,
    },
    MessageDef {
        class: 0x01,
        id: 0x21,
        name: "NAV-TIMEUTC",
        get: &[ubx_layout!([
            field("iTOW", U4),
            field("tAcc", U4),
            field("nano", I4),
            field("year", U2),
            field("month", U1),
            field("day", U1),
            field("hour", U1),
            field("min", U1),
            field("sec", U1),
            field("validflags", X1),
        ])],
        set: NONE,
        poll: POLL_EMPTY,
    },
    MessageDef {
        class: 0x01,
        id: 0x22,
        name: "NAV-CLOCK",
        get: &[ubx_layout!([
            field("iTOW", U4),
            field("clkB", I4),
            field("clkD", I4),
            field("tAcc", U4),
            field("fAcc", U4),
        ])],
        set: NONE,
        poll: POLL_EMPTY,
    },
    MessageDef::named(0x01, 0x26, "NAV-TIMELS"),
    MessageDef {
        class: 0x01,
        id: 0x30,
        name: "NAV-SVINFO",
        get: &[ubx_layout!(
            [
                field("iTOW", U4),
                field("numCh", U1),
                field("globalFlags", X1),
                field("reserved2", U2),
            ],
            repeat [
                field("chn", U1),
                field("svid", U1),
                field("flags", X1),
                field("quality", X1),
                field("cno", U1),
                field("elev", I1),
                field("azim", I2),
                field("prRes", I4),
            ]
        )],
        set: NONE,
        poll: POLL_EMPTY,
    },
    MessageDef {
        class: 0x01,
        id: 0x32,
        name: "NAV-SBAS",
        get: &[ubx_layout!(
            [
                field("iTOW", U4),
                field("geo", U1),
                field("mode", U1),
                field("sys", I1),
                field("service", X1),
                field("cnt", U1),
                field("reserved0", Bytes(3)),
            ],
            repeat [
                field("svid", U1),
                field("flags", U1),
                field("udre", U1),
                field("svSys", I1),
                field("svService", U1),
                field("reserved1", U1),
                field("prc", I2),
                field("reserved2", U2),
                field("ic", I2),
            ]
        )],
        set: NONE,
        poll: POLL_EMPTY,
    },
    MessageDef {
        class: 0x01,
        id: 0x35,
        name: "NAV-SAT",
        get: &[ubx_layout!(
            [
                field("iTOW", U4),
                field("version", U1),
                field("numSvs", U1),
                field("reserved1", Bytes(2)),
            ],
            repeat [
                field("gnssId", U1),
                field("svId", U1),
                field("cno", U1),
                field("elev", I1),
                field("azim", I2),
                scaled("prRes", I2, 0.1),
                field("flags", X4),
            ]
        )],
        set: NONE,
        poll: POLL_EMPTY,
    },
    MessageDef {
        class: 0x01,
        id: 0x3c,
        name: "NAV-RELPOSNED",
        get: &[NAV_RELPOSNED_V0, NAV_RELPOSNED_V1],
        set: NONE,
        poll: POLL_EMPTY,
    },
    MessageDef {
        class: 0x01,
        id: 0x61,
        name: "NAV-EOE",
        get: &[ubx_layout!([field("iTOW", U4)])],
        set: NONE,
        poll: NONE,
    },
];
