//! Frame building from named field values

use crate::{
    constants::{UBX_CHECKSUM_LEN, UBX_CLASS_OFFSET, UBX_HEADER_LEN, UBX_SYNC_CHAR_1, UBX_SYNC_CHAR_2},
    error::{BuilderError, UnknownFieldError, UnknownLayoutError},
    parser::ubx_checksum,
    ubx_packets::{encode_payload, Direction, Fields, MessageLayout, Registry},
};

/// Encodes `fields` into a complete frame.
///
/// The layout is the first one registered for the message and direction
/// whose field names cover exactly what was supplied. Repeating group
/// members are given as `name_01`, `name_02`, ...; the highest index
/// present sets the repetition count and every lower index must be complete.
///
/// ```
/// use ubx_codec::{build, Direction, Fields};
///
/// let fields: Fields = [("clsID", 0x06u8), ("msgID", 0x01)].into_iter().collect();
/// let frame = build(0x05, 0x01, Direction::Get, &fields).unwrap();
/// assert_eq!(frame, [0xb5, 0x62, 0x05, 0x01, 0x02, 0x00, 0x06, 0x01, 0x0f, 0x38]);
/// ```
pub fn build(
    class: u8,
    msg_id: u8,
    direction: Direction,
    fields: &Fields,
) -> Result<Vec<u8>, BuilderError> {
    let registry = Registry::global();
    let layouts = registry.layouts(class, msg_id, direction);
    let (layout, repeats) = select_layout(layouts, fields).map_err(|err| match err {
        Unfit::Missing(name) => BuilderError::MissingField { name },
        Unfit::Foreign(name) => UnknownFieldError { name }.into(),
        Unfit::NoLayout => UnknownLayoutError {
            class,
            msg_id,
            direction,
            len: 0,
        }
        .into(),
    })?;
    let payload = encode_payload(fields, layout, repeats)?;

    // the length must lead a parser back to the same layout
    let resolved = registry.resolve(class, msg_id, direction, payload.len())?;
    let payload = if core::ptr::eq(resolved, layout) {
        payload
    } else {
        log::debug!(
            "{} bytes resolve to another layout of {}, re-encoding",
            payload.len(),
            registry.identity(class, msg_id)
        );
        encode_payload(fields, resolved, resolved.repeat_count(payload.len()))?
    };
    frame(class, msg_id, &payload)
}

/// Wraps a payload into sync bytes, header and checksum
pub(crate) fn frame(class: u8, msg_id: u8, payload: &[u8]) -> Result<Vec<u8>, BuilderError> {
    let len = u16::try_from(payload.len()).map_err(|_| BuilderError::PayloadTooLong {
        len: payload.len(),
    })?;
    let mut out = Vec::with_capacity(UBX_HEADER_LEN + payload.len() + UBX_CHECKSUM_LEN);
    out.extend_from_slice(&[UBX_SYNC_CHAR_1, UBX_SYNC_CHAR_2, class, msg_id]);
    out.extend_from_slice(&len.to_le_bytes());
    out.extend_from_slice(payload);
    let (ck_a, ck_b) = ubx_checksum(&out[UBX_CLASS_OFFSET..]);
    out.push(ck_a);
    out.push(ck_b);
    log::trace!(
        "built frame class {:#04x} id {:#04x}, {} payload bytes",
        class,
        msg_id,
        payload.len()
    );
    Ok(out)
}

/// How well a set of names fits one layout
enum Fit {
    /// Every name belongs to the layout and nothing is missing
    Exact(usize),
    /// Every name belongs to the layout, this one is missing
    Missing(String),
    /// This name is not part of the layout
    Foreign(String),
}

/// Splits `svId_03` into the group member and its 1-based index
fn group_index<'a>(layout: &MessageLayout, name: &'a str) -> Option<(&'a str, usize)> {
    let group = layout.repeat_group()?;
    let (base, index) = name.rsplit_once('_')?;
    if index.len() < 2 || !index.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let index: usize = index.parse().ok()?;
    (index > 0 && group.fields().iter().any(|f| f.name == base)).then_some((base, index))
}

fn fit(layout: &MessageLayout, fields: &Fields) -> Fit {
    let mut repeats = 0;
    for name in fields.names() {
        if layout.fields().iter().any(|f| f.name == name) {
            continue;
        }
        match group_index(layout, name) {
            Some((_, index)) => repeats = repeats.max(index),
            None => return Fit::Foreign(name.to_owned()),
        }
    }
    let missing = layout
        .specs(repeats)
        .map(|(spec, index)| MessageLayout::field_name(spec, index))
        .find(|name| !fields.contains(name));
    match missing {
        Some(name) => Fit::Missing(name),
        None => Fit::Exact(repeats),
    }
}

/// Why no layout accepted the supplied names
#[derive(Debug, PartialEq)]
enum Unfit {
    Missing(String),
    Foreign(String),
    NoLayout,
}

fn select_layout(
    layouts: &'static [MessageLayout],
    fields: &Fields,
) -> Result<(&'static MessageLayout, usize), Unfit> {
    let mut missing = None;
    let mut foreign = None;
    for layout in layouts {
        match fit(layout, fields) {
            Fit::Exact(repeats) => return Ok((layout, repeats)),
            Fit::Missing(name) => {
                missing.get_or_insert(name);
            },
            Fit::Foreign(name) => {
                foreign.get_or_insert(name);
            },
        }
    }
    match (missing, foreign) {
        (Some(name), _) => Err(Unfit::Missing(name)),
        (None, Some(name)) => Err(Unfit::Foreign(name)),
        (None, None) => Err(Unfit::NoLayout),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ubx_packets::FieldValue;

    #[test]
    fn picks_layout_by_supplied_names() {
        let short: Fields = [("msgClass", 0xf0u8), ("msgID", 0x01), ("rate", 1)]
            .into_iter()
            .collect();
        let frame = build(0x06, 0x01, Direction::Set, &short).unwrap();
        assert_eq!(frame.len(), 8 + 3);

        let mut long: Fields = [("msgClass", 0xf0u8), ("msgID", 0x01)].into_iter().collect();
        for name in ["rateDDC", "rateUART1", "rateUART2", "rateUSB", "rateSPI", "reserved"] {
            long.insert(name, 1u8);
        }
        assert_eq!(build(0x06, 0x01, Direction::Set, &long).map(|f| f.len()), Ok(8 + 8));

        let mut bogus = short;
        bogus.insert("bogus", 1u8);
        assert_eq!(
            build(0x06, 0x01, Direction::Set, &bogus),
            Err(BuilderError::UnknownField(UnknownFieldError {
                name: "bogus".into()
            }))
        );
    }

    #[test]
    fn reports_missing_fields() {
        let fields: Fields = [("msgClass", 0xf0u8)].into_iter().collect();
        assert_eq!(
            build(0x06, 0x01, Direction::Poll, &fields),
            Err(BuilderError::MissingField {
                name: "msgID".into()
            })
        );
    }

    #[test]
    fn repeat_count_from_highest_index() {
        let mut fields = Fields::new();
        fields.insert("reserved1", vec![0u8; 12]);
        fields.insert("data_01", 1u8);
        fields.insert("data_02", 2u8);
        fields.insert("data_03", 3u8);
        let frame = build(0x13, 0x80, Direction::Get, &fields).unwrap();
        assert_eq!(frame.len(), 8 + 15);
        assert_eq!(&frame[6 + 12..6 + 15], &[1, 2, 3]);

        fields.insert("data_05", FieldValue::Unsigned(5));
        assert_eq!(
            build(0x13, 0x80, Direction::Get, &fields),
            Err(BuilderError::MissingField {
                name: "data_04".into()
            })
        );
    }

    #[test]
    fn unknown_message_has_no_layout() {
        assert!(matches!(
            build(0x7f, 0x01, Direction::Get, &Fields::new()),
            Err(BuilderError::UnknownLayout(UnknownLayoutError { class: 0x7f, .. }))
        ));
    }

    #[test]
    fn no_candidates_is_not_a_missing_field() {
        assert_eq!(select_layout(&[], &Fields::new()), Err(Unfit::NoLayout));
        // MGA-FLASH-ACK only has a receiver side layout
        assert_eq!(
            build(0x13, 0x21, Direction::Set, &Fields::new()),
            Err(BuilderError::UnknownLayout(UnknownLayoutError {
                class: 0x13,
                msg_id: 0x21,
                direction: Direction::Set,
                len: 0,
            }))
        );
    }

    #[test]
    fn empty_poll() {
        assert_eq!(
            build(0x06, 0x00, Direction::Poll, &Fields::new()).unwrap(),
            [0xb5, 0x62, 0x06, 0x00, 0x00, 0x00, 0x06, 0x18]
        );
    }

    #[test]
    fn oversized_payload() {
        assert_eq!(
            frame(0x02, 0x13, &vec![0; 70_000]),
            Err(BuilderError::PayloadTooLong { len: 70_000 })
        );
    }
}
