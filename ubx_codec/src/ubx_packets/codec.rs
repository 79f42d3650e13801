use num_traits::ToPrimitive;

use super::{FieldSpec, FieldType, FieldValue, Fields, MessageLayout};
use crate::error::{BuilderError, FieldEncodeError, PayloadDecodeError};

/// Decodes `payload` field by field in layout order.
///
/// The repeating tail, if any, is expanded as many times as the remaining
/// bytes allow; a partial repetition is an error.
pub fn decode_payload(payload: &[u8], layout: &MessageLayout) -> Result<Fields, PayloadDecodeError> {
    let len = payload.len();
    let repeats = match layout.repeat_group() {
        Some(group) if len > layout.fixed_len() && group.unit_len() > 0 => {
            let tail = len - layout.fixed_len();
            let remainder = tail % group.unit_len();
            if remainder != 0 {
                return Err(PayloadDecodeError::RepeatRemainder {
                    unit: group.unit_len(),
                    remainder,
                });
            }
            tail / group.unit_len()
        },
        Some(_) => 0,
        None => {
            if len > layout.fixed_len() {
                return Err(PayloadDecodeError::LengthMismatch {
                    expect: layout.fixed_len(),
                    got: len,
                });
            }
            0
        },
    };

    let mut fields = Fields::with_capacity(layout.fields().len());
    let mut offset = 0;
    for (spec, index) in layout.specs(repeats) {
        let width = spec.width();
        let bytes = payload
            .get(offset..offset + width)
            .ok_or(PayloadDecodeError::FieldOutOfBounds {
                field: spec.name,
                offset,
                width,
                len,
            })?;
        fields.push(MessageLayout::field_name(spec, index), read_field(spec, bytes));
        offset += width;
    }
    Ok(fields)
}

/// Packs `fields` in layout order with `repeats` copies of the repeating tail.
///
/// Every field of the layout must be present; extra names are ignored here
/// and are the caller's business.
pub fn encode_payload(
    fields: &Fields,
    layout: &MessageLayout,
    repeats: usize,
) -> Result<Vec<u8>, BuilderError> {
    let unit = layout.repeat_group().map_or(0, |g| g.unit_len());
    let mut out = Vec::with_capacity(layout.fixed_len() + unit * repeats);
    for (spec, index) in layout.specs(repeats) {
        let name = MessageLayout::field_name(spec, index);
        let value = fields
            .get(&name)
            .ok_or_else(|| BuilderError::MissingField { name: name.clone() })?;
        write_field(&name, spec, value, &mut out)?;
    }
    Ok(out)
}

fn read_unsigned(bytes: &[u8]) -> u64 {
    bytes.iter().rev().fold(0, |acc, &b| (acc << 8) | u64::from(b))
}

fn read_signed(bytes: &[u8]) -> i64 {
    let shift = 64 - 8 * bytes.len() as u32;
    ((read_unsigned(bytes) << shift) as i64) >> shift
}

fn read_field(spec: &FieldSpec, bytes: &[u8]) -> FieldValue {
    let value = match spec.ty {
        FieldType::U1
        | FieldType::U2
        | FieldType::U4
        | FieldType::U8
        | FieldType::X1
        | FieldType::X2
        | FieldType::X4
        | FieldType::X8 => FieldValue::Unsigned(read_unsigned(bytes)),
        FieldType::I1 | FieldType::I2 | FieldType::I4 | FieldType::I8 => {
            FieldValue::Signed(read_signed(bytes))
        },
        FieldType::R4 => FieldValue::Float(f64::from(f32::from_bits(read_unsigned(bytes) as u32))),
        FieldType::R8 => FieldValue::Float(f64::from_bits(read_unsigned(bytes))),
        FieldType::Bytes(_) | FieldType::Chars(_) => FieldValue::Bytes(bytes.to_vec()),
    };
    match (spec.scale, value.as_f64()) {
        (Some(scale), Some(raw)) => FieldValue::Float(raw * scale),
        _ => value,
    }
}

fn out_of_range(name: &str, spec: &FieldSpec, value: &FieldValue) -> FieldEncodeError {
    FieldEncodeError::OutOfRange {
        field: name.to_owned(),
        ty: spec.ty,
        value: value.to_string(),
    }
}

fn type_mismatch(name: &str, spec: &FieldSpec, value: &FieldValue) -> FieldEncodeError {
    FieldEncodeError::TypeMismatch {
        field: name.to_owned(),
        ty: spec.ty,
        got: value.kind(),
    }
}

/// Raw number to pack, with the scale divided out
fn unscaled(spec: &FieldSpec, value: &FieldValue) -> Option<f64> {
    let v = value.as_f64()?;
    Some(match spec.scale {
        Some(scale) => (v / scale).round(),
        None => v,
    })
}

fn unsigned_value(name: &str, spec: &FieldSpec, value: &FieldValue) -> Result<u64, FieldEncodeError> {
    let raw = match (value, spec.scale) {
        (FieldValue::Bytes(_), _) => return Err(type_mismatch(name, spec, value)),
        (FieldValue::Unsigned(v), None) => Some(*v),
        (FieldValue::Signed(v), None) => v.to_u64(),
        _ => unscaled(spec, value)
            .filter(|v| v.fract() == 0.0)
            .and_then(|v| v.to_u64()),
    };
    let width = spec.width();
    raw.filter(|v| width >= 8 || v >> (8 * width) == 0)
        .ok_or_else(|| out_of_range(name, spec, value))
}

fn signed_value(name: &str, spec: &FieldSpec, value: &FieldValue) -> Result<i64, FieldEncodeError> {
    let raw = match (value, spec.scale) {
        (FieldValue::Bytes(_), _) => return Err(type_mismatch(name, spec, value)),
        (FieldValue::Signed(v), None) => Some(*v),
        (FieldValue::Unsigned(v), None) => v.to_i64(),
        _ => unscaled(spec, value)
            .filter(|v| v.fract() == 0.0)
            .and_then(|v| v.to_i64()),
    };
    let bits = 8 * spec.width() as u32;
    raw.filter(|v| bits >= 64 || (*v >= -(1i64 << (bits - 1)) && *v < (1i64 << (bits - 1))))
        .ok_or_else(|| out_of_range(name, spec, value))
}

fn write_field(
    name: &str,
    spec: &FieldSpec,
    value: &FieldValue,
    out: &mut Vec<u8>,
) -> Result<(), FieldEncodeError> {
    let width = spec.width();
    match spec.ty {
        FieldType::U1
        | FieldType::U2
        | FieldType::U4
        | FieldType::U8
        | FieldType::X1
        | FieldType::X2
        | FieldType::X4
        | FieldType::X8 => {
            let v = unsigned_value(name, spec, value)?;
            out.extend_from_slice(&v.to_le_bytes()[..width]);
        },
        FieldType::I1 | FieldType::I2 | FieldType::I4 | FieldType::I8 => {
            let v = signed_value(name, spec, value)?;
            out.extend_from_slice(&v.to_le_bytes()[..width]);
        },
        FieldType::R4 => {
            let v = unscaled(spec, value).ok_or_else(|| type_mismatch(name, spec, value))?;
            let narrow = v.to_f32().filter(|n| n.is_finite() || !v.is_finite());
            let narrow = narrow.ok_or_else(|| out_of_range(name, spec, value))?;
            out.extend_from_slice(&narrow.to_le_bytes());
        },
        FieldType::R8 => {
            let v = unscaled(spec, value).ok_or_else(|| type_mismatch(name, spec, value))?;
            out.extend_from_slice(&v.to_le_bytes());
        },
        FieldType::Bytes(n) => match value {
            FieldValue::Bytes(bytes) if bytes.len() == n => out.extend_from_slice(bytes),
            FieldValue::Bytes(bytes) => {
                return Err(FieldEncodeError::WrongLength {
                    field: name.to_owned(),
                    expect: n,
                    got: bytes.len(),
                })
            },
            // integer form of a reserved block, little-endian and zero extended
            FieldValue::Unsigned(v) => {
                if n < 8 && v >> (8 * n) != 0 {
                    return Err(out_of_range(name, spec, value));
                }
                let le = v.to_le_bytes();
                out.extend((0..n).map(|i| le.get(i).copied().unwrap_or(0)));
            },
            _ => return Err(type_mismatch(name, spec, value)),
        },
        FieldType::Chars(n) => match value {
            FieldValue::Bytes(bytes) if bytes.len() <= n => {
                out.extend_from_slice(bytes);
                out.resize(out.len() + n - bytes.len(), 0);
            },
            FieldValue::Bytes(bytes) => {
                return Err(FieldEncodeError::WrongLength {
                    field: name.to_owned(),
                    expect: n,
                    got: bytes.len(),
                })
            },
            _ => return Err(type_mismatch(name, spec, value)),
        },
    }
    Ok(())
}
