//! A proptest generator for U-Blox MON-IO messages.
//!
//! This module provides a `proptest` strategy to generate byte-level
//! UBX frames containing a MON-IO message. The generated data is
//! structurally correct, including sync words, class/ID, length,
//! a randomized number of port blocks, and a correct checksum.

use byteorder::{LittleEndian, WriteBytesExt};
use proptest::prelude::*;
use ubx_codec::{
    build,
    constants::{UBX_SYNC_CHAR_1, UBX_SYNC_CHAR_2},
    parse, Direction, FieldValue, ValidationMode,
};

/// Represents a single I/O port block in a MON-IO message (20 bytes).
#[derive(Debug, Clone)]
pub struct MonIoPort {
    pub rx_bytes: u32,
    pub tx_bytes: u32,
    pub parity_errs: u16,
    pub framing_errs: u16,
    pub overrun_errs: u16,
    pub break_cond: u16,
    pub rx_busy: u8,
    pub tx_busy: u8,
    pub reserved1: u16,
}

impl MonIoPort {
    /// Serializes this port block into bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut wtr = Vec::with_capacity(20);
        wtr.write_u32::<LittleEndian>(self.rx_bytes).unwrap();
        wtr.write_u32::<LittleEndian>(self.tx_bytes).unwrap();
        wtr.write_u16::<LittleEndian>(self.parity_errs).unwrap();
        wtr.write_u16::<LittleEndian>(self.framing_errs).unwrap();
        wtr.write_u16::<LittleEndian>(self.overrun_errs).unwrap();
        wtr.write_u16::<LittleEndian>(self.break_cond).unwrap();
        wtr.write_u8(self.rx_busy).unwrap();
        wtr.write_u8(self.tx_busy).unwrap();
        wtr.write_u16::<LittleEndian>(self.reserved1).unwrap();
        wtr
    }
}

/// A proptest strategy for generating a single MonIoPort.
fn mon_io_port_strategy() -> impl Strategy<Value = MonIoPort> {
    (
        any::<u32>(),     // rx_bytes
        any::<u32>(),     // tx_bytes
        any::<u16>(),     // parity_errs
        any::<u16>(),     // framing_errs
        any::<u16>(),     // overrun_errs
        any::<u16>(),     // break_cond
        0..=100u8,        // rx_busy [%]
        0..=100u8,        // tx_busy [%]
        Just(0u16),       // reserved1
    )
        .prop_map(
            |(
                rx_bytes,
                tx_bytes,
                parity_errs,
                framing_errs,
                overrun_errs,
                break_cond,
                rx_busy,
                tx_busy,
                reserved1,
            )| {
                MonIoPort {
                    rx_bytes,
                    tx_bytes,
                    parity_errs,
                    framing_errs,
                    overrun_errs,
                    break_cond,
                    rx_busy,
                    tx_busy,
                    reserved1,
                }
            },
        )
}

/// A proptest strategy for generating a vector of MonIoPort blocks.
/// Typical receivers have 6 ports, but we test with 0-6 ports.
fn mon_io_payload_strategy() -> impl Strategy<Value = Vec<MonIoPort>> {
    prop::collection::vec(mon_io_port_strategy(), 0..=6)
}

/// Calculates the 8-bit Fletcher-16 checksum used by U-Blox.
fn calculate_checksum(data: &[u8]) -> (u8, u8) {
    let mut ck_a: u8 = 0;
    let mut ck_b: u8 = 0;
    for byte in data {
        ck_a = ck_a.wrapping_add(*byte);
        ck_b = ck_b.wrapping_add(ck_a);
    }
    (ck_a, ck_b)
}

/// A proptest strategy that generates a complete, valid UBX frame
/// containing a MON-IO message, along with the source port data.
///
/// Returns a tuple of `(Vec<MonIoPort>, Vec<u8>)`.
pub fn ubx_mon_io_frame_strategy() -> impl Strategy<Value = (Vec<MonIoPort>, Vec<u8>)> {
    mon_io_payload_strategy().prop_map(|ports| {
        // Serialize all port blocks
        let mut payload = Vec::new();
        for port in &ports {
            payload.extend_from_slice(&port.to_bytes());
        }

        let class_id = 0x0a;
        let message_id = 0x02;
        let length = payload.len() as u16;

        // Build the frame core (class, id, length, payload)
        let mut frame_core = Vec::with_capacity(4 + payload.len());
        frame_core.push(class_id);
        frame_core.push(message_id);
        frame_core.write_u16::<LittleEndian>(length).unwrap();
        frame_core.extend_from_slice(&payload);

        let (ck_a, ck_b) = calculate_checksum(&frame_core);

        // Assemble the final frame
        let mut final_frame = Vec::with_capacity(8 + payload.len());
        final_frame.push(UBX_SYNC_CHAR_1);
        final_frame.push(UBX_SYNC_CHAR_2);
        final_frame.extend_from_slice(&frame_core);
        final_frame.push(ck_a);
        final_frame.push(ck_b);

        (ports, final_frame)
    })
}

fn unsigned(msg: &ubx_codec::UbxMessage, name: &str) -> u64 {
    msg.field(name).ok().and_then(FieldValue::as_u64).unwrap()
}

proptest! {
    #[test]
    fn test_parser_with_generated_mon_io_frames(
        (expected_ports, frame) in ubx_mon_io_frame_strategy()
    ) {
        let msg = parse(&frame, ValidationMode::Strict, Direction::Get).unwrap();
        prop_assert_eq!(msg.identity(), "MON-IO");

        // Nine fields per port block, nothing else
        prop_assert_eq!(msg.fields().len(), 9 * expected_ports.len());

        for (i, expected) in expected_ports.iter().enumerate() {
            let idx = i + 1;
            prop_assert_eq!(unsigned(&msg, &format!("rxBytes_{:02}", idx)), u64::from(expected.rx_bytes));
            prop_assert_eq!(unsigned(&msg, &format!("txBytes_{:02}", idx)), u64::from(expected.tx_bytes));
            prop_assert_eq!(unsigned(&msg, &format!("parityErrs_{:02}", idx)), u64::from(expected.parity_errs));
            prop_assert_eq!(unsigned(&msg, &format!("framingErrs_{:02}", idx)), u64::from(expected.framing_errs));
            prop_assert_eq!(unsigned(&msg, &format!("overrunErrs_{:02}", idx)), u64::from(expected.overrun_errs));
            prop_assert_eq!(unsigned(&msg, &format!("breakCond_{:02}", idx)), u64::from(expected.break_cond));
            prop_assert_eq!(unsigned(&msg, &format!("rxBusy_{:02}", idx)), u64::from(expected.rx_busy));
            prop_assert_eq!(unsigned(&msg, &format!("txBusy_{:02}", idx)), u64::from(expected.tx_busy));
        }

        let rebuilt = build(0x0a, 0x02, Direction::Get, msg.fields()).unwrap();
        prop_assert_eq!(rebuilt, frame);
    }
}
