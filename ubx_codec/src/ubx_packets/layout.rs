use super::types::FieldType;

/// One field of a payload layout
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub ty: FieldType,
    /// Logical value = raw integer * scale
    pub scale: Option<f64>,
}

impl FieldSpec {
    pub const fn width(&self) -> usize {
        self.ty.width()
    }
}

/// Plain field
pub const fn field(name: &'static str, ty: FieldType) -> FieldSpec {
    FieldSpec {
        name,
        ty,
        scale: None,
    }
}

/// Fixed-point field
pub const fn scaled(name: &'static str, ty: FieldType, scale: f64) -> FieldSpec {
    FieldSpec {
        name,
        ty,
        scale: Some(scale),
    }
}

const fn fields_len(fields: &[FieldSpec]) -> usize {
    let mut len = 0;
    let mut i = 0;
    while i < fields.len() {
        len += fields[i].width();
        i += 1;
    }
    len
}

/// Trailing group of fields repeated until the payload ends
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RepeatGroup {
    fields: &'static [FieldSpec],
    unit_len: usize,
}

impl RepeatGroup {
    pub const fn fields(&self) -> &'static [FieldSpec] {
        self.fields
    }

    /// Width of one repetition
    pub const fn unit_len(&self) -> usize {
        self.unit_len
    }
}

/// Ordered field schema of one payload shape
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MessageLayout {
    fields: &'static [FieldSpec],
    fixed_len: usize,
    repeat: Option<RepeatGroup>,
}

impl MessageLayout {
    pub const fn new(fields: &'static [FieldSpec]) -> Self {
        Self {
            fields,
            fixed_len: fields_len(fields),
            repeat: None,
        }
    }

    pub const fn with_repeat(fields: &'static [FieldSpec], group: &'static [FieldSpec]) -> Self {
        Self {
            fields,
            fixed_len: fields_len(fields),
            repeat: Some(RepeatGroup {
                fields: group,
                unit_len: fields_len(group),
            }),
        }
    }

    /// Layout of a message without payload
    pub const fn empty() -> Self {
        Self::new(&[])
    }

    /// The non-repeating prefix
    pub const fn fields(&self) -> &'static [FieldSpec] {
        self.fields
    }

    /// Byte length of the non-repeating prefix
    pub const fn fixed_len(&self) -> usize {
        self.fixed_len
    }

    pub const fn repeat_group(&self) -> Option<&RepeatGroup> {
        self.repeat.as_ref()
    }

    /// Does a payload of `len` bytes fit this layout exactly?
    pub fn matches_len(&self, len: usize) -> bool {
        match self.repeat {
            None => len == self.fixed_len,
            Some(ref group) => {
                len >= self.fixed_len
                    && group.unit_len > 0
                    && (len - self.fixed_len) % group.unit_len == 0
            },
        }
    }

    /// Number of group repetitions in a payload of `len` bytes
    pub fn repeat_count(&self, len: usize) -> usize {
        match self.repeat {
            Some(ref group) if group.unit_len > 0 => len.saturating_sub(self.fixed_len) / group.unit_len,
            _ => 0,
        }
    }

    /// Specs in decode order for a given number of repetitions,
    /// paired with the 1-based repetition index (`None` for the prefix)
    pub fn specs(&self, repeats: usize) -> impl Iterator<Item = (&'static FieldSpec, Option<usize>)> {
        let group = self.repeat.map(|g| g.fields).unwrap_or(&[]);
        self.fields.iter().map(|f| (f, None)).chain(
            (1..=repeats).flat_map(move |idx| group.iter().map(move |f| (f, Some(idx)))),
        )
    }

    /// Field name as it appears in a decoded message
    pub fn field_name(spec: &FieldSpec, index: Option<usize>) -> String {
        match index {
            Some(idx) => format!("{}_{:02}", spec.name, idx),
            None => spec.name.to_owned(),
        }
    }
}

/// Declares a static `MessageLayout`.
///
/// ```ignore
/// ubx_layout!([field("iTOW", U4), scaled("lon", I4, 1e-7)])
/// ubx_layout!([field("reserved1", Bytes(12))], repeat [field("data", U1)])
/// ```
macro_rules! ubx_layout {
    ([$($field:expr),* $(,)?]) => {
        $crate::ubx_packets::MessageLayout::new({
            const FIELDS: &[$crate::ubx_packets::FieldSpec] = &[$($field),*];
            FIELDS
        })
    };
    ([$($field:expr),* $(,)?], repeat [$($group:expr),* $(,)?]) => {
        $crate::ubx_packets::MessageLayout::with_repeat(
            {
                const FIELDS: &[$crate::ubx_packets::FieldSpec] = &[$($field),*];
                FIELDS
            },
            {
                const GROUP: &[$crate::ubx_packets::FieldSpec] = &[$($group),*];
                GROUP
            },
        )
    };
}

pub(crate) use ubx_layout;
