//! Static message catalogue, one module per message class

use super::{MessageDef, MessageLayout};

mod ack;
mod aid;
mod cfg;
mod datalog;
mod esf;
mod hnr;
mod inf;
mod mga;
mod mon;
mod nav;
mod nmea;
mod rxm;
mod sec;
mod tim;
mod upd;

/// No layouts for this direction
const NONE: &[MessageLayout] = &[];

/// Poll request without payload
const POLL_EMPTY: &[MessageLayout] = &[MessageLayout::empty()];

pub(crate) static CLASSES: &[(u8, &str)] = &[
    (0x01, "NAV"),
    (0x02, "RXM"),
    (0x04, "INF"),
    (0x05, "ACK"),
    (0x06, "CFG"),
    (0x09, "UPD"),
    (0x0a, "MON"),
    (0x0b, "AID"),
    (0x0d, "TIM"),
    (0x10, "ESF"),
    (0x13, "MGA"),
    (0x21, "LOG"),
    (0x27, "SEC"),
    (0x28, "HNR"),
    (0xf0, "NMEA-Standard"),
    (0xf1, "NMEA-Proprietary"),
];

pub(crate) static MESSAGES: &[&[MessageDef]] = &[
    nav::MESSAGES,
    rxm::MESSAGES,
    inf::MESSAGES,
    ack::MESSAGES,
    cfg::MESSAGES,
    upd::MESSAGES,
    mon::MESSAGES,
    tim::MESSAGES,
    esf::MESSAGES,
    mga::MESSAGES,
    sec::MESSAGES,
    hnr::MESSAGES,
    aid::MESSAGES,
    datalog::MESSAGES,
    nmea::MESSAGES,
];
