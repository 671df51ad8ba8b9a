//! Serde adapters for enum fields.
//!
//! Two `#[serde(with = …)]` modules cover the two external representations:
//! [`fixture`] writes the dotted `EnumName.MemberName` form used by fixture
//! and export tooling, [`storage`] writes the integer form handed to the
//! persistence layer. Both route deserialization through the coercion
//! engine, so either representation (or a numeric string) is accepted on
//! the way in regardless of which module a field declares.

use crate::{raw::RawValue, traits::IntEnum};
use serde::{Deserialize, Deserializer, de::Error as _};

fn raw<'de, E, D>(deserializer: D) -> Result<Option<E>, D::Error>
where
    E: IntEnum,
    D: Deserializer<'de>,
{
    let raw = Option::<RawValue>::deserialize(deserializer)?.unwrap_or(RawValue::Null);

    crate::coerce::coerce(raw).map_err(D::Error::custom)
}

pub mod fixture {
    use super::raw;
    use crate::traits::IntEnum;
    use serde::{Deserializer, Serializer};

    pub fn serialize<E, S>(value: &Option<E>, serializer: S) -> Result<S::Ok, S::Error>
    where
        E: IntEnum,
        S: Serializer,
    {
        match value {
            Some(variant) => {
                serializer.serialize_str(&format!("{}.{}", E::NAME, variant.name()))
            }
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, E, D>(deserializer: D) -> Result<Option<E>, D::Error>
    where
        E: IntEnum,
        D: Deserializer<'de>,
    {
        raw(deserializer)
    }
}

pub mod storage {
    use super::raw;
    use crate::traits::IntEnum;
    use serde::{Deserializer, Serializer};

    pub fn serialize<E, S>(value: &Option<E>, serializer: S) -> Result<S::Ok, S::Error>
    where
        E: IntEnum,
        S: Serializer,
    {
        match value {
            Some(variant) => serializer.serialize_i64(variant.value()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, E, D>(deserializer: D) -> Result<Option<E>, D::Error>
    where
        E: IntEnum,
        D: Deserializer<'de>,
    {
        raw(deserializer)
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use enumfield_derive::IntEnum;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, Copy, Debug, Eq, PartialEq, IntEnum)]
    enum AnimalType {
        Cat = 1,
        Dog = 2,
        Turtle = 3,
    }

    #[derive(Debug, Deserialize, Eq, PartialEq, Serialize)]
    struct Animal {
        #[serde(with = "crate::serialize::fixture")]
        kind: Option<AnimalType>,
    }

    #[derive(Debug, Deserialize, Eq, PartialEq, Serialize)]
    struct AnimalRow {
        #[serde(with = "crate::serialize::storage")]
        kind: Option<AnimalType>,
    }

    #[test]
    fn test_fixture_form_is_the_dotted_string() {
        let animal = Animal {
            kind: Some(AnimalType::Cat),
        };

        let json = serde_json::to_string(&animal).unwrap();
        assert_eq!(json, r#"{"kind":"AnimalType.Cat"}"#);

        let back: Animal = serde_json::from_str(&json).unwrap();
        assert_eq!(back, animal);
    }

    #[test]
    fn test_storage_form_is_the_integer() {
        let row = AnimalRow {
            kind: Some(AnimalType::Turtle),
        };

        let json = serde_json::to_string(&row).unwrap();
        assert_eq!(json, r#"{"kind":3}"#);

        let back: AnimalRow = serde_json::from_str(&json).unwrap();
        assert_eq!(back, row);
    }

    #[test]
    fn test_deserialization_accepts_either_representation() {
        let from_int: Animal = serde_json::from_str(r#"{"kind":2}"#).unwrap();
        assert_eq!(from_int.kind, Some(AnimalType::Dog));

        let from_dotted: AnimalRow =
            serde_json::from_str(r#"{"kind":"AnimalType.Dog"}"#).unwrap();
        assert_eq!(from_dotted.kind, Some(AnimalType::Dog));
    }

    #[test]
    fn test_null_round_trips_as_absent() {
        let animal = Animal { kind: None };

        let json = serde_json::to_string(&animal).unwrap();
        assert_eq!(json, r#"{"kind":null}"#);

        let back: Animal = serde_json::from_str(&json).unwrap();
        assert_eq!(back.kind, None);
    }

    #[test]
    fn test_unknown_values_fail_deserialization() {
        assert!(serde_json::from_str::<Animal>(r#"{"kind":99}"#).is_err());
        assert!(serde_json::from_str::<Animal>(r#"{"kind":"AnimalType.Bird"}"#).is_err());
    }
}
