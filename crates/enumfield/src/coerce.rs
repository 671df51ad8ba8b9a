//! The coercion engine.
//!
//! Pure, stateless translation between raw boundary values and canonical
//! enum members, and the inverse encoding to storage integers. Dynamic
//! entry points operate on an [`EnumDef`]; typed mirrors operate on any
//! [`IntEnum`]. Resolution order for text is fixed: the dotted
//! `EnumName.MemberName` form is recognized before the integer form, so a
//! fixture string is never misread as a number.

use crate::{
    def::{EnumDef, EnumMember},
    error::CoerceError,
    raw::RawValue,
    traits::IntEnum,
};
use std::fmt;

/// Resolve a raw boundary value to the canonical member of `def`.
///
/// Null passes through as `None`. Members of `def` pass through unchanged.
/// Dotted strings resolve by member name; integers and numeric strings
/// resolve by value. Everything else fails.
pub fn to_canonical(
    def: &EnumDef,
    raw: impl Into<RawValue>,
) -> Result<Option<EnumMember>, CoerceError> {
    match raw.into() {
        RawValue::Null => Ok(None),
        RawValue::Member(member) => {
            if def.contains(&member) {
                Ok(Some(member))
            } else {
                Err(CoerceError::invalid_member(&member, def.name()))
            }
        }
        RawValue::Text(text) => match dotted_member_name(def.name(), &text) {
            Some(member_name) => def
                .member_by_name(member_name)
                .cloned()
                .map(Some)
                .ok_or_else(|| CoerceError::invalid_member(&text, def.name())),
            None => match parse_int(&text) {
                Some(value) => lookup_value(def, value, &text),
                None => Err(CoerceError::invalid_value(&text, def.name())),
            },
        },
        RawValue::Int(value) => lookup_value(def, value, value),
    }
}

/// Encode a canonical member of `def` to its storage integer.
///
/// Null passes through as `None`; a member from any other enum family is
/// rejected rather than silently written.
pub fn to_storage(
    def: &EnumDef,
    canonical: Option<&EnumMember>,
) -> Result<Option<i64>, CoerceError> {
    match canonical {
        None => Ok(None),
        Some(member) if def.contains(member) => Ok(Some(member.value)),
        Some(member) => Err(CoerceError::invalid_member(member, def.name())),
    }
}

/// Typed mirror of [`to_canonical`]: resolve a raw boundary value to a
/// variant of `E`.
pub fn coerce<E: IntEnum>(raw: impl Into<RawValue>) -> Result<Option<E>, CoerceError> {
    match raw.into() {
        RawValue::Null => Ok(None),
        RawValue::Member(member) => {
            if member.enum_name == E::NAME
                && let Some(variant) = E::from_name(&member.name)
                && variant.value() == member.value
            {
                Ok(Some(variant))
            } else {
                Err(CoerceError::invalid_member(&member, E::NAME))
            }
        }
        RawValue::Text(text) => match dotted_member_name(E::NAME, &text) {
            Some(member_name) => E::from_name(member_name)
                .map(Some)
                .ok_or_else(|| CoerceError::invalid_member(&text, E::NAME)),
            None => match parse_int(&text) {
                Some(value) => E::from_value(value)
                    .map(Some)
                    .ok_or_else(|| CoerceError::invalid_value(&text, E::NAME)),
                None => Err(CoerceError::invalid_value(&text, E::NAME)),
            },
        },
        RawValue::Int(value) => E::from_value(value)
            .map(Some)
            .ok_or_else(|| CoerceError::invalid_value(value, E::NAME)),
    }
}

/// Typed mirror of [`to_storage`]. Infallible: membership is proven by the
/// type, so there is no wrong-family case to reject.
#[must_use]
pub fn encode<E: IntEnum>(canonical: Option<E>) -> Option<i64> {
    canonical.map(IntEnum::value)
}

/// Split `"EnumName.MemberName"` into the member name, if the prefix names
/// this enum.
fn dotted_member_name<'a>(enum_name: &str, text: &'a str) -> Option<&'a str> {
    text.strip_prefix(enum_name)?.strip_prefix('.')
}

fn parse_int(text: &str) -> Option<i64> {
    text.trim().parse().ok()
}

fn lookup_value(
    def: &EnumDef,
    value: i64,
    raw: impl fmt::Display,
) -> Result<Option<EnumMember>, CoerceError> {
    def.member_by_value(value)
        .cloned()
        .map(Some)
        .ok_or_else(|| CoerceError::invalid_value(raw, def.name()))
}

///
/// TESTS
///
