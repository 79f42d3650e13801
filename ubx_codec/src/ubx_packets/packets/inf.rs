//! Free-text receiver output. The payload is a plain ASCII string of any
//! length, so these decode as raw messages.

use crate::ubx_packets::MessageDef;

pub(super) static MESSAGES: &[MessageDef] = &[
    MessageDef::named(0x04, 0x00, "INF-ERROR"),
    MessageDef::named(0x04, 0x01, "INF-WARNING"),
    MessageDef::named(0x04, 0x02, "INF-NOTICE"),
    MessageDef::named(0x04, 0x03, "INF-TEST"),
    MessageDef::named(0x04, 0x04, "INF-DEBUG"),
];
