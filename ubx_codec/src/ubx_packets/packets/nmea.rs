//! NMEA sentence ids, used to name the target of CFG-MSG rate settings

use crate::ubx_packets::MessageDef;

pub(super) static MESSAGES: &[MessageDef] = &[
    MessageDef::named(0xf0, 0x00, "GGA"),
    MessageDef::named(0xf0, 0x01, "GLL"),
    MessageDef::named(0xf0, 0x02, "GSA"),
    MessageDef::named(0xf0, 0x03, "GSV"),
    MessageDef::named(0xf0, 0x04, "RMC"),
    MessageDef::named(0xf0, 0x05, "VTG"),
    MessageDef::named(0xf0, 0x06, "GRS"),
    MessageDef::named(0xf0, 0x07, "GST"),
    MessageDef::named(0xf0, 0x08, "ZDA"),
    MessageDef::named(0xf0, 0x09, "GBS"),
    MessageDef::named(0xf0, 0x0a, "DTM"),
    MessageDef::named(0xf0, 0x0d, "GNS"),
    MessageDef::named(0xf0, 0x0f, "VLW"),
    MessageDef::named(0xf0, 0x40, "GPQ"),
    MessageDef::named(0xf0, 0x41, "TXT"),
    MessageDef::named(0xf0, 0x42, "GNQ"),
    MessageDef::named(0xf0, 0x43, "GLQ"),
    MessageDef::named(0xf0, 0x44, "GBQ"),
    MessageDef::named(0xf1, 0x00, "UBX-00"),
    MessageDef::named(0xf1, 0x03, "UBX-03"),
    MessageDef::named(0xf1, 0x04, "UBX-04"),
    MessageDef::named(0xf1, 0x05, "UBX-05"),
    MessageDef::named(0xf1, 0x06, "UBX-06"),
    MessageDef::named(0xf1, 0x40, "UBX-40"),
    MessageDef::named(0xf1, 0x41, "UBX-41"),
];
