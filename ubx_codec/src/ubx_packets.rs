//! Message schemas and the payload codec driven by them

mod codec;
mod layout;
mod packets;
mod registry;
mod types;

pub use codec::{decode_payload, encode_payload};
pub(crate) use layout::ubx_layout;
pub use layout::{field, scaled, FieldSpec, MessageLayout, RepeatGroup};
pub use registry::{MessageDef, Registry};
pub use types::{Direction, FieldType, FieldValue, Fields};
