use crate::def::EnumMember;
use serde::{Deserialize, Serialize};
use std::fmt;

///
/// RawValue
///
/// Untyped input arriving at the field boundary. Four shapes cover every
/// producer: the store hands back integers, form layers hand in strings,
/// fixture loaders hand in dotted `EnumName.MemberName` strings (which also
/// arrive as `Text`), and application code hands in members it already
/// resolved. Untagged on the wire, so fixture files may carry any shape.
///

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RawValue {
    Null,
    Int(i64),
    Member(EnumMember),
    Text(String),
}

impl RawValue {
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("None"),
            Self::Int(value) => write!(f, "{value}"),
            Self::Member(member) => write!(f, "{member}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

impl From<i64> for RawValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for RawValue {
    fn from(value: i32) -> Self {
        Self::Int(value.into())
    }
}

impl From<&str> for RawValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for RawValue {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<EnumMember> for RawValue {
    fn from(member: EnumMember) -> Self {
        Self::Member(member)
    }
}

impl From<&EnumMember> for RawValue {
    fn from(member: &EnumMember) -> Self {
        Self::Member(member.clone())
    }
}

impl<T> From<Option<T>> for RawValue
where
    T: Into<Self>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversions_cover_all_shapes() {
        assert_eq!(RawValue::from(7i64), RawValue::Int(7));
        assert_eq!(RawValue::from("2"), RawValue::Text("2".to_string()));
        assert_eq!(RawValue::from(None::<i64>), RawValue::Null);
        assert_eq!(RawValue::from(Some(7i64)), RawValue::Int(7));
    }

    #[test]
    fn test_display_matches_offending_input() {
        assert_eq!(RawValue::from(5i64).to_string(), "5");
        assert_eq!(RawValue::from("garbage").to_string(), "garbage");
        assert_eq!(RawValue::Null.to_string(), "None");
    }
}
