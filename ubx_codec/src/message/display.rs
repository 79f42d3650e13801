use core::fmt;

use chrono::NaiveTime;

use super::UbxMessage;
use crate::{
    constants::{GPS_UTC_LEAP_SECONDS, SECONDS_PER_DAY},
    ubx_packets::{FieldType, FieldValue, Registry},
};

/// GPS time of week in milliseconds as a UTC clock time, `H:MM:SS`
pub(crate) fn format_itow(ms: u64) -> Option<String> {
    let day_secs = i64::try_from(ms / 1000).ok()? % SECONDS_PER_DAY;
    let secs = (day_secs - GPS_UTC_LEAP_SECONDS).rem_euclid(SECONDS_PER_DAY);
    let time = NaiveTime::from_num_seconds_from_midnight_opt(u32::try_from(secs).ok()?, 0)?;
    Some(time.format("%-H:%M:%S").to_string())
}

/// Reserved blocks read as one little-endian number
fn le_u128(bytes: &[u8]) -> u128 {
    bytes.iter().rev().fold(0, |acc, &b| (acc << 8) | u128::from(b))
}

fn trim_nul(bytes: &[u8]) -> &[u8] {
    let end = bytes.iter().rposition(|&b| b != 0).map_or(0, |i| i + 1);
    &bytes[..end]
}

impl UbxMessage {
    /// Class byte named by `clsID`/`msgClass`, if the message has one
    fn referenced_class(&self) -> Option<u8> {
        self.fields
            .get("clsID")
            .or_else(|| self.fields.get("msgClass"))
            .and_then(FieldValue::as_u64)
            .and_then(|v| u8::try_from(v).ok())
    }

    fn write_value(
        &self,
        f: &mut fmt::Formatter<'_>,
        name: &str,
        ty: Option<FieldType>,
        value: &FieldValue,
    ) -> fmt::Result {
        let registry = Registry::global();
        match (name, ty, value) {
            ("iTOW", _, FieldValue::Unsigned(ms)) => match format_itow(*ms) {
                Some(time) => f.write_str(&time),
                None => write!(f, "{}", ms),
            },
            ("clsID" | "msgClass", _, FieldValue::Unsigned(cls)) => {
                let known = u8::try_from(*cls).ok().and_then(|c| registry.class_name(c));
                match known {
                    Some(class_name) => f.write_str(class_name),
                    None => write!(f, "{}", cls),
                }
            },
            ("msgID", _, FieldValue::Unsigned(id)) => {
                let known = self
                    .referenced_class()
                    .zip(u8::try_from(*id).ok())
                    .and_then(|(cls, id)| registry.name(cls, id));
                match known {
                    Some(msg_name) => f.write_str(msg_name),
                    None => write!(f, "{}", id),
                }
            },
            ("nmeaVersion", _, FieldValue::Unsigned(v)) => write!(f, "{:x}.{:x}", v >> 4, v & 0xf),
            (_, Some(ty), FieldValue::Unsigned(v)) if ty.is_bitfield() => {
                write!(f, "{:#0width$x}", v, width = 2 + 2 * ty.width())
            },
            (_, Some(FieldType::Chars(_)), FieldValue::Bytes(bytes)) => {
                f.write_str(&String::from_utf8_lossy(trim_nul(bytes)))
            },
            (_, _, FieldValue::Bytes(bytes)) if name.starts_with("reserved") && bytes.len() <= 16 => {
                write!(f, "{}", le_u128(bytes))
            },
            _ => write!(f, "{}", value),
        }
    }
}

impl fmt::Display for UbxMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<UBX({}", self.identity())?;
        // field types come from the layout the payload was decoded with
        let len = self.payload.len();
        let layout = Registry::global()
            .resolve(self.class, self.msg_id, self.direction, len)
            .ok();
        let repeats = layout.map_or(0, |l| l.repeat_count(len));
        let mut specs = layout.into_iter().flat_map(|l| l.specs(repeats));
        for (name, value) in self.fields.iter() {
            let ty = specs.next().map(|(spec, _)| spec.ty);
            write!(f, ", {}=", name)?;
            self.write_value(f, name, ty, value)?;
        }
        f.write_str(")>")
    }
}
