use core::fmt;

/// Who sends the message and what for
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    /// Output emitted by the receiver
    #[default]
    Get,
    /// Configuration command issued by the host
    Set,
    /// Host request for the matching `Get` message
    Poll,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Direction::Get => "GET",
            Direction::Set => "SET",
            Direction::Poll => "POLL",
        })
    }
}

/// Wire type of one payload field.
///
/// `U`/`I` are little-endian unsigned/signed integers, `R` IEEE floats,
/// `X` bitfields; the digit is the width in bytes. `Bytes` is an opaque
/// block (reserved areas, identifiers) and `Chars` a zero padded ASCII string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldType {
    U1,
    U2,
    U4,
    U8,
    I1,
    I2,
    I4,
    I8,
    R4,
    R8,
    X1,
    X2,
    X4,
    X8,
    Bytes(usize),
    Chars(usize),
}

impl FieldType {
    /// Number of payload bytes the field occupies
    pub const fn width(self) -> usize {
        match self {
            FieldType::U1 | FieldType::I1 | FieldType::X1 => 1,
            FieldType::U2 | FieldType::I2 | FieldType::X2 => 2,
            FieldType::U4 | FieldType::I4 | FieldType::X4 | FieldType::R4 => 4,
            FieldType::U8 | FieldType::I8 | FieldType::X8 | FieldType::R8 => 8,
            FieldType::Bytes(n) | FieldType::Chars(n) => n,
        }
    }

    pub const fn is_bitfield(self) -> bool {
        matches!(
            self,
            FieldType::X1 | FieldType::X2 | FieldType::X4 | FieldType::X8
        )
    }

    pub const fn is_integer(self) -> bool {
        matches!(
            self,
            FieldType::U1
                | FieldType::U2
                | FieldType::U4
                | FieldType::U8
                | FieldType::I1
                | FieldType::I2
                | FieldType::I4
                | FieldType::I8
        )
    }
}

/// Logical value of a decoded field.
///
/// Scaled fields are stored as `Float` already multiplied by their scale.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Unsigned(u64),
    Signed(i64),
    Float(f64),
    Bytes(Vec<u8>),
}

impl FieldValue {
    pub fn as_u64(&self) -> Option<u64> {
        match *self {
            FieldValue::Unsigned(v) => Some(v),
            FieldValue::Signed(v) => u64::try_from(v).ok(),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            FieldValue::Unsigned(v) => i64::try_from(v).ok(),
            FieldValue::Signed(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            FieldValue::Unsigned(v) => Some(v as f64),
            FieldValue::Signed(v) => Some(v as f64),
            FieldValue::Float(v) => Some(v),
            FieldValue::Bytes(_) => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            FieldValue::Bytes(v) => Some(v),
            _ => None,
        }
    }

    pub(crate) fn kind(&self) -> &'static str {
        match self {
            FieldValue::Unsigned(_) => "unsigned",
            FieldValue::Signed(_) => "signed",
            FieldValue::Float(_) => "float",
            FieldValue::Bytes(_) => "bytes",
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Unsigned(v) => write!(f, "{}", v),
            FieldValue::Signed(v) => write!(f, "{}", v),
            FieldValue::Float(v) => write!(f, "{}", v),
            FieldValue::Bytes(v) => {
                f.write_str("0x")?;
                v.iter().try_for_each(|b| write!(f, "{:02x}", b))
            },
        }
    }
}

macro_rules! impl_from_primitive {
    ($variant:ident, $target:ty, $($t:ty),*) => {
        $(
            impl From<$t> for FieldValue {
                fn from(v: $t) -> Self {
                    FieldValue::$variant(<$target>::from(v))
                }
            }
        )*
    };
}

impl_from_primitive!(Unsigned, u64, u8, u16, u32, u64);
impl_from_primitive!(Signed, i64, i8, i16, i32, i64);
impl_from_primitive!(Float, f64, f32, f64);

impl From<Vec<u8>> for FieldValue {
    fn from(v: Vec<u8>) -> Self {
        FieldValue::Bytes(v)
    }
}

impl From<&[u8]> for FieldValue {
    fn from(v: &[u8]) -> Self {
        FieldValue::Bytes(v.to_vec())
    }
}

impl<const N: usize> From<[u8; N]> for FieldValue {
    fn from(v: [u8; N]) -> Self {
        FieldValue::Bytes(v.to_vec())
    }
}

/// Ordered name to value mapping of a message payload.
///
/// Decoding keeps the wire order; repeating group members carry a 1-based,
/// zero padded index suffix (`svId_01`, `svId_02`, ...).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Fields(Vec<(String, FieldValue)>);

impl Fields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self(Vec::with_capacity(capacity))
    }

    /// Sets `name` to `value`, keeping its position if already present.
    /// Returns the previous value.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        value: impl Into<FieldValue>,
    ) -> Option<FieldValue> {
        let name = name.into();
        let value = value.into();
        match self.0.iter_mut().find(|(n, _)| *n == name) {
            Some((_, slot)) => Some(core::mem::replace(slot, value)),
            None => {
                self.0.push((name, value));
                None
            },
        }
    }

    /// Appends without the duplicate check, names come from a layout
    pub(crate) fn push(&mut self, name: String, value: FieldValue) {
        self.0.push((name, value));
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.0.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.0.iter().map(|(n, v)| (n.as_str(), v))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(n, _)| n.as_str())
    }
}

impl<N, V> FromIterator<(N, V)> for Fields
where
    N: Into<String>,
    V: Into<FieldValue>,
{
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut fields = Fields::new();
        for (name, value) in iter {
            fields.insert(name, value);
        }
        fields
    }
}

impl IntoIterator for Fields {
    type Item = (String, FieldValue);
    type IntoIter = std::vec::IntoIter<(String, FieldValue)>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Fields {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_map(self.iter())
    }
}
