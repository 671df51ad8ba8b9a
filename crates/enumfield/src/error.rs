use std::fmt;
use thiserror::Error as ThisError;

///
/// CoerceError
///
/// Validation failure at the translation boundary. Both variants carry the
/// offending raw value (display form) and the target enum name so callers
/// can report exactly what was rejected and where it was headed.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum CoerceError {
    /// The value does not belong to the expected enum.
    #[error("'{value}' is not a member of {enum_name}")]
    InvalidMember { value: String, enum_name: String },

    /// The value cannot be resolved to any member of the enum.
    #[error("'{value}' does not resolve to a value of {enum_name}")]
    InvalidValue { value: String, enum_name: String },
}

impl CoerceError {
    pub(crate) fn invalid_member(value: impl fmt::Display, enum_name: &str) -> Self {
        Self::InvalidMember {
            value: value.to_string(),
            enum_name: enum_name.to_string(),
        }
    }

    pub(crate) fn invalid_value(value: impl fmt::Display, enum_name: &str) -> Self {
        Self::InvalidValue {
            value: value.to_string(),
            enum_name: enum_name.to_string(),
        }
    }
}

///
/// DefError
///
/// Invariant violations caught when an enum definition is registered.
/// A definition that fails registration never exists, so the coercion
/// engine only ever sees defs with distinct names and distinct values.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum DefError {
    #[error("enum {enum_name} has no members")]
    Empty { enum_name: String },

    #[error("enum {enum_name} declares member name '{name}' more than once")]
    DuplicateName { enum_name: String, name: String },

    #[error(
        "enum {enum_name} assigns value {value} to both '{first}' and '{second}'"
    )]
    DuplicateValue {
        enum_name: String,
        value: i64,
        first: String,
        second: String,
    },
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coerce_error_display_names_value_and_enum() {
        let err = CoerceError::invalid_value("5", "AnimalType");
        assert_eq!(
            err.to_string(),
            "'5' does not resolve to a value of AnimalType"
        );

        let err = CoerceError::invalid_member("AnimalType.Bird", "AnimalType");
        assert_eq!(
            err.to_string(),
            "'AnimalType.Bird' is not a member of AnimalType"
        );
    }

    #[test]
    fn test_def_error_display_names_both_members() {
        let err = DefError::DuplicateValue {
            enum_name: "AnimalType".to_string(),
            value: 2,
            first: "Dog".to_string(),
            second: "Hound".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "enum AnimalType assigns value 2 to both 'Dog' and 'Hound'"
        );
    }
}
