use crate::ubx_packets::MessageDef;

// Legacy assistance messages, superseded by MGA
pub(super) static MESSAGES: &[MessageDef] = &[
    MessageDef::named(0x0b, 0x01, "AID-INI"),
    MessageDef::named(0x0b, 0x02, "AID-HUI"),
    MessageDef::named(0x0b, 0x30, "AID-ALM"),
    MessageDef::named(0x0b, 0x31, "AID-EPH"),
    MessageDef::named(0x0b, 0x32, "AID-ALPSRV"),
    MessageDef::named(0x0b, 0x33, "AID-AOP"),
    MessageDef::named(0x0b, 0x50, "AID-ALP"),
];
