use ubx_codec::{
    build, parse, BuilderError, Direction, FieldEncodeError, FieldValue, Fields, UbxMessage,
    UnknownFieldError, ValidationMode,
};

static ACK_ACK: [u8; 10] = [0xb5, 0x62, 0x05, 0x01, 0x02, 0x00, 0x06, 0x01, 0x0f, 0x38];
static CFG_MSG: [u8; 16] = [
    0xb5, 0x62, 0x06, 0x01, 0x08, 0x00, 0xf0, 0x01, 0x00, 0x01, 0x01, 0x01, 0x00, 0x00, 0x03, 0x36,
];
static NAV_VELNED: [u8; 44] = [
    0xb5, 0x62, 0x01, 0x12, 0x24, 0x00, 0x30, 0x44, 0x0a, 0x18, 0xfd, 0xff, 0xff, 0xff, 0xf1,
    0xff, 0xff, 0xff, 0xfc, 0xff, 0xff, 0xff, 0x10, 0x00, 0x00, 0x00, 0x0f, 0x00, 0x00, 0x00,
    0x83, 0xf5, 0x01, 0x00, 0x41, 0x00, 0x00, 0x00, 0xf0, 0xdf, 0x7a, 0x00, 0xd0, 0xa6,
];
static CFG_NMEA_V0: [u8; 12] = [
    0xb5, 0x62, 0x06, 0x17, 0x04, 0x00, 0x00, 0x00, 0x00, 0x00, 0x21, 0xe9,
];
static CFG_NMEA_V1: [u8; 20] = [
    0xb5, 0x62, 0x06, 0x17, 0x0c, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x29, 0x61,
];
static MGA_DBD: [u8; 22] = [
    0xb5, 0x62, 0x13, 0x80, 0x0e, 0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09,
    0x0a, 0x0b, 0x0c, 0x01, 0x02, 0xf2, 0xc2,
];
static MGA_FLASH_ACK: [u8; 14] = [
    0xb5, 0x62, 0x13, 0x21, 0x06, 0x00, 0x03, 0x01, 0x02, 0x00, 0x00, 0x04, 0x44, 0x3a,
];

#[test]
fn test_decoded_fields_build_the_same_frame() {
    for frame in [
        &ACK_ACK[..],
        &CFG_MSG[..],
        &NAV_VELNED[..],
        &CFG_NMEA_V0[..],
        &CFG_NMEA_V1[..],
        &MGA_DBD[..],
        &MGA_FLASH_ACK[..],
    ] {
        let msg = parse(frame, ValidationMode::Strict, Direction::Get).unwrap();
        let rebuilt = build(msg.class(), msg.msg_id(), msg.direction(), msg.fields()).unwrap();
        assert_eq!(rebuilt, frame, "{}", msg.identity());
    }
}

#[test]
fn test_build_cfg_msg_set_short_form() {
    let fields: Fields = [("msgClass", 0xf0u8), ("msgID", 0x01), ("rate", 0x01)]
        .into_iter()
        .collect();
    let frame = build(0x06, 0x01, Direction::Set, &fields).unwrap();
    assert_eq!(
        frame,
        [0xb5, 0x62, 0x06, 0x01, 0x03, 0x00, 0xf0, 0x01, 0x01, 0xfc, 0x12]
    );

    let msg = parse(&frame, ValidationMode::Strict, Direction::Set).unwrap();
    assert_eq!(
        msg.to_string(),
        "<UBX(CFG-MSG, msgClass=NMEA-Standard, msgID=GLL, rate=1)>"
    );
}

#[test]
fn test_build_empty_poll() {
    let frame = build(0x06, 0x00, Direction::Poll, &Fields::new()).unwrap();
    assert_eq!(frame, [0xb5, 0x62, 0x06, 0x00, 0x00, 0x00, 0x06, 0x18]);
    let frame = build(0x0a, 0x04, Direction::Poll, &Fields::new()).unwrap();
    assert_eq!(frame, [0xb5, 0x62, 0x0a, 0x04, 0x00, 0x00, 0x0e, 0x34]);
}

#[test]
fn test_build_scaled_position() {
    let mut fields = Fields::new();
    fields.insert("iTOW", 403_326_000u32);
    fields.insert("lon", -2.1234567);
    fields.insert("lat", 53.3498053);
    fields.insert("height", 75_000i32);
    fields.insert("hMSL", 23_000i32);
    fields.insert("hAcc", 1_200u32);
    fields.insert("vAcc", 2_100u32);
    let frame = build(0x01, 0x02, Direction::Get, &fields).unwrap();
    assert_eq!(&frame[10..14], &(-21_234_567i32).to_le_bytes());
    assert_eq!(&frame[14..18], &533_498_053i32.to_le_bytes());

    let msg = parse(&frame, ValidationMode::Strict, Direction::Get).unwrap();
    let lat = msg.field("lat").ok().and_then(FieldValue::as_f64).unwrap();
    assert!((lat - 53.3498053).abs() < 1e-9);
    assert_eq!(msg.field("hMSL"), Ok(&FieldValue::Signed(23_000)));
}

#[test]
fn test_build_rejects_bad_values() {
    let mut fields: Fields = [("clsID", 0x06u16), ("msgID", 0x01)].into_iter().collect();
    assert!(build(0x05, 0x01, Direction::Get, &fields).is_ok());

    fields.insert("clsID", 0x106u16);
    assert!(matches!(
        build(0x05, 0x01, Direction::Get, &fields),
        Err(BuilderError::FieldEncode(FieldEncodeError::OutOfRange { ref field, .. })) if field == "clsID"
    ));

    fields.insert("clsID", -1i8);
    assert!(matches!(
        build(0x05, 0x01, Direction::Get, &fields),
        Err(BuilderError::FieldEncode(FieldEncodeError::OutOfRange { .. }))
    ));

    fields.insert("clsID", 6.5);
    assert!(matches!(
        build(0x05, 0x01, Direction::Get, &fields),
        Err(BuilderError::FieldEncode(FieldEncodeError::OutOfRange { .. }))
    ));

    fields.insert("clsID", 0x06u8);
    fields.insert("extra", 0u8);
    assert_eq!(
        build(0x05, 0x01, Direction::Get, &fields),
        Err(BuilderError::UnknownField(UnknownFieldError {
            name: "extra".into()
        }))
    );
}

#[test]
fn test_build_wrong_direction() {
    let fields: Fields = [("clsID", 0x06u8), ("msgID", 0x01)].into_iter().collect();
    assert!(matches!(
        build(0x05, 0x01, Direction::Set, &fields),
        Err(BuilderError::UnknownLayout(_))
    ));
}

#[test]
fn test_build_repeating_keys() {
    let mut fields: Fields = [("version", 0u8), ("layer", 0), ("position", 0)]
        .into_iter()
        .collect();
    fields.insert("keys_01", 0x4065_0001u32);
    fields.insert("keys_02", 0x2091_01b9u32);
    let frame = build(0x06, 0x8b, Direction::Poll, &fields).unwrap();
    assert_eq!(frame.len(), 8 + 4 + 2 * 4);

    let msg = parse(&frame, ValidationMode::Strict, Direction::Poll).unwrap();
    assert_eq!(
        msg.to_string(),
        "<UBX(CFG-VALGET, version=0, layer=0, position=0, keys_01=0x40650001, keys_02=0x209101b9)>"
    );
}

#[test]
fn test_message_to_frame_matches_build() {
    let msg = UbxMessage::new(0x13, 0x80, Direction::Get, MGA_DBD[6..20].to_vec()).unwrap();
    assert_eq!(msg.to_frame().unwrap(), MGA_DBD);
    assert_eq!(
        build(0x13, 0x80, Direction::Get, msg.fields()).unwrap(),
        MGA_DBD
    );
}
