use proptest::prelude::*;
use ubx_codec::{
    parse, scan_buffer, verify, BufferHeadContents, Direction, UbxMessage, ValidationMode,
};

static ACK_ACK: [u8; 10] = [0xb5, 0x62, 0x05, 0x01, 0x02, 0x00, 0x06, 0x01, 0x0f, 0x38];
static CFG_MSG: [u8; 16] = [
    0xb5, 0x62, 0x06, 0x01, 0x08, 0x00, 0xf0, 0x01, 0x00, 0x01, 0x01, 0x01, 0x00, 0x00, 0x03, 0x36,
];
static CFG_PRT: [u8; 8] = [0xb5, 0x62, 0x06, 0x00, 0x00, 0x00, 0x06, 0x18];

/// Drains every complete frame from `buf`, the way a serial reader would
fn drain(buf: &mut Vec<u8>) -> Vec<UbxMessage> {
    let mut out = Vec::new();
    loop {
        match scan_buffer(buf) {
            BufferHeadContents::Garbage(n) => {
                buf.drain(..n);
            },
            BufferHeadContents::Frame(n) => {
                let frame: Vec<u8> = buf.drain(..n).collect();
                if let Ok(msg) = parse(&frame, ValidationMode::Strict, Direction::Get) {
                    out.push(msg);
                }
            },
            BufferHeadContents::IncompleteHeader | BufferHeadContents::Incomplete(_) => break,
        }
        if buf.is_empty() {
            break;
        }
    }
    out
}

#[test]
fn test_frames_between_garbage() {
    let mut buf = vec![0x00, 0xb5, 0x13];
    buf.extend_from_slice(&ACK_ACK);
    buf.extend_from_slice(&[0x62, 0xb5]);
    buf.extend_from_slice(&CFG_MSG);
    buf.extend_from_slice(&CFG_PRT[..5]);

    let msgs = drain(&mut buf);
    let ids: Vec<_> = msgs.iter().map(|m| m.identity().into_owned()).collect();
    assert_eq!(ids, ["ACK-ACK", "CFG-MSG"]);
    assert_eq!(buf, &CFG_PRT[..5]);

    buf.extend_from_slice(&CFG_PRT[5..]);
    let msgs = drain(&mut buf);
    assert_eq!(msgs.len(), 1);
    assert_eq!(msgs[0].to_string(), "<UBX(CFG-PRT)>");
    assert!(buf.is_empty());
}

#[test]
fn test_verify_whole_frames() {
    assert!(verify(&ACK_ACK));
    assert!(verify(&CFG_MSG));
    let mut bad = CFG_MSG;
    bad[8] ^= 0x01;
    assert!(!verify(&bad));
}

proptest! {
    #[test]
    fn test_byte_by_byte_feeding(chunk in 1..20usize) {
        let mut stream = Vec::new();
        for _ in 0..3 {
            stream.extend_from_slice(&ACK_ACK);
            stream.extend_from_slice(&CFG_MSG);
        }
        let mut buf = Vec::new();
        let mut msgs = Vec::new();
        for part in stream.chunks(chunk) {
            buf.extend_from_slice(part);
            msgs.extend(drain(&mut buf));
        }
        prop_assert_eq!(msgs.len(), 6);
        prop_assert!(buf.is_empty());
    }

    #[test]
    fn test_arbitrary_bytes_never_panic(data in prop::collection::vec(any::<u8>(), 0..64)) {
        let _ = parse(&data, ValidationMode::Lenient, Direction::Get);
        let _ = verify(&data);
        match scan_buffer(&data) {
            BufferHeadContents::Garbage(n) => prop_assert!(n > 0 && n <= data.len()),
            BufferHeadContents::Frame(n) => prop_assert!(n <= data.len()),
            BufferHeadContents::Incomplete(n) => prop_assert!(n > 0),
            BufferHeadContents::IncompleteHeader => prop_assert!(data.len() < 6),
        }
    }

    #[test]
    fn test_random_payloads_keep_their_bytes(
        class in any::<u8>(),
        msg_id in any::<u8>(),
        payload in prop::collection::vec(any::<u8>(), 0..128),
    ) {
        // whatever the layout, decoding either fails cleanly or keeps the payload
        if let Ok(msg) = UbxMessage::new(class, msg_id, Direction::Get, payload.clone()) {
            prop_assert_eq!(msg.payload(), &payload[..]);
            let frame = msg.to_frame().unwrap();
            prop_assert!(verify(&frame));
            let again = parse(&frame, ValidationMode::Strict, Direction::Get).unwrap();
            prop_assert_eq!(again.canonical(), msg.canonical());
            prop_assert_eq!(again.fields().len(), msg.fields().len());
        }
    }
}
