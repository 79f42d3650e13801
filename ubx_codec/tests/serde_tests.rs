#![cfg(feature = "serde")]

use serde_json::json;
use ubx_codec::{parse, Direction, ValidationMode};

static ACK_ACK: [u8; 10] = [0xb5, 0x62, 0x05, 0x01, 0x02, 0x00, 0x06, 0x01, 0x0f, 0x38];
static MGA_DBD: [u8; 22] = [
    0xb5, 0x62, 0x13, 0x80, 0x0e, 0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09,
    0x0a, 0x0b, 0x0c, 0x01, 0x02, 0xf2, 0xc2,
];

#[test]
fn test_message_to_json() {
    let msg = parse(&ACK_ACK, ValidationMode::Strict, Direction::Get).unwrap();
    assert_eq!(
        serde_json::to_value(&msg).unwrap(),
        json!({
            "class": 5,
            "msg_id": 1,
            "direction": "Get",
            "payload": [6, 1],
            "checksum_valid": true,
            "fields": { "clsID": 6, "msgID": 1 },
        })
    );
}

#[test]
fn test_fields_keep_wire_order() {
    let msg = parse(&MGA_DBD, ValidationMode::Strict, Direction::Get).unwrap();
    let text = serde_json::to_string(msg.fields()).unwrap();
    assert_eq!(
        text,
        r#"{"reserved1":[1,2,3,4,5,6,7,8,9,10,11,12],"data_01":1,"data_02":2}"#
    );
}

#[test]
fn test_modes_round_trip() {
    let mode: ValidationMode = serde_json::from_str(r#""Lenient""#).unwrap();
    assert_eq!(mode, ValidationMode::Lenient);
    let direction: Direction = serde_json::from_value(json!("Poll")).unwrap();
    assert_eq!(direction, Direction::Poll);
}
