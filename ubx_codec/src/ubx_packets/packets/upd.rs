use super::POLL_EMPTY;
use crate::ubx_packets::{field, ubx_layout, FieldType::*, MessageDef};

pub(super) static MESSAGES: &[MessageDef] = &[MessageDef {
    class: 0x09,
    id: 0x14,
    name: "UPD-SOS",
    get: &[ubx_layout!([
        field("cmd", U1),
        field("reserved1", Bytes(3)),
        field("response", U1),
        field("reserved2", Bytes(3)),
    ])],
    set: &[ubx_layout!([field("cmd", U1), field("reserved1", Bytes(3))])],
    poll: POLL_EMPTY,
}];
