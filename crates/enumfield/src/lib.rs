//! enumfield — integer-backed enum fields for persistence layers.
//!
//! Application code sees typed enum members; the external store sees
//! integers. The coercion engine in [`coerce`] normalizes every raw shape
//! that arrives at the field boundary (database integers, form-submitted
//! strings, fixture-serialized `EnumName.MemberName` strings, already
//! resolved members) into the canonical member, and encodes members back
//! to integers on the way out.

// reachability for the `::enumfield` paths emitted by the derive
extern crate self as enumfield;

pub mod coerce;
pub mod def;
pub mod error;
pub mod field;
pub mod raw;
pub mod serialize;
pub mod traits;


pub use crate::traits::IntEnum;
pub use enumfield_derive::IntEnum;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
///

pub mod prelude {
    pub use crate::{
        coerce::{coerce, encode, to_canonical, to_storage},
        def::{EnumDef, EnumMember},
        error::{CoerceError, DefError},
        field::EnumFieldModel,
        raw::RawValue,
        traits::IntEnum,
    };
    pub use enumfield_derive::IntEnum;
}
