use crate::{
    coerce::{to_canonical, to_storage},
    def::{EnumDef, EnumMember},
    error::CoerceError,
    raw::RawValue,
};

///
/// EnumFieldModel
///
/// Runtime field metadata binding a column name to an enum definition.
/// The persistence layer integrates here: reads route through [`load`],
/// writes through [`store`], and form layers pull their option list from
/// [`choices`]. Validation happens only at these boundaries.
///
/// [`load`]: EnumFieldModel::load
/// [`store`]: EnumFieldModel::store
/// [`choices`]: EnumFieldModel::choices
///

#[derive(Clone, Debug)]
pub struct EnumFieldModel {
    name: &'static str,
    def: EnumDef,
    default: Option<EnumMember>,
}

impl EnumFieldModel {
    #[must_use]
    pub const fn new(name: &'static str, def: EnumDef) -> Self {
        Self {
            name,
            def,
            default: None,
        }
    }

    /// Register a default applied when a write sees an absent value. The
    /// default is itself coerced, so any raw shape is accepted here.
    pub fn with_default(self, raw: impl Into<RawValue>) -> Result<Self, CoerceError> {
        let default = to_canonical(&self.def, raw)?;

        Ok(Self { default, ..self })
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub const fn def(&self) -> &EnumDef {
        &self.def
    }

    #[must_use]
    pub fn default_member(&self) -> Option<&EnumMember> {
        self.default.as_ref()
    }

    /// Read boundary: stored integer to canonical member.
    pub fn load(&self, stored: Option<i64>) -> Result<Option<EnumMember>, CoerceError> {
        to_canonical(&self.def, stored)
    }

    /// Write boundary: raw value to storage integer. Coerces first, so
    /// serialized and form-shaped values are accepted, then encodes.
    /// Absent input falls back to the registered default.
    pub fn store(&self, raw: impl Into<RawValue>) -> Result<Option<i64>, CoerceError> {
        let canonical = to_canonical(&self.def, raw)?.or_else(|| self.default.clone());

        to_storage(&self.def, canonical.as_ref())
    }

    /// `(value, label)` pairs for form layers.
    pub fn choices(&self) -> impl Iterator<Item = (i64, &str)> {
        self.def.choices()
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use enumfield_derive::IntEnum;

    #[derive(Clone, Copy, Debug, Eq, PartialEq, IntEnum)]
    enum AnimalType {
        Cat = 1,
        Dog = 2,
        Turtle = 3,
    }

    fn field() -> EnumFieldModel {
        EnumFieldModel::new("animal_type", EnumDef::of::<AnimalType>())
    }

    #[test]
    fn test_load_resolves_stored_integers() {
        let field = field();

        let member = field.load(Some(2)).unwrap().unwrap();
        assert_eq!(member.name, "Dog");

        assert_eq!(field.load(None), Ok(None));
        assert!(matches!(
            field.load(Some(99)),
            Err(CoerceError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_store_accepts_every_raw_shape() {
        let field = field();

        assert_eq!(field.store(1), Ok(Some(1)));
        assert_eq!(field.store("2"), Ok(Some(2)));
        assert_eq!(field.store("AnimalType.Turtle"), Ok(Some(3)));
        assert_eq!(field.store(None::<i64>), Ok(None));
    }

    #[test]
    fn test_store_applies_default_on_absent_input() {
        let field = field().with_default("AnimalType.Cat").unwrap();

        assert_eq!(field.store(None::<i64>), Ok(Some(1)));
        assert_eq!(field.store(2), Ok(Some(2)));
    }

    #[test]
    fn test_with_default_rejects_invalid_defaults() {
        let err = field().with_default("AnimalType.Bird").unwrap_err();

        assert!(matches!(err, CoerceError::InvalidMember { .. }));
    }

    #[test]
    fn test_choices_come_from_the_definition() {
        let field = field();

        let labels: Vec<_> = field.choices().map(|(_, label)| label.to_string()).collect();
        assert_eq!(labels, vec!["Cat", "Dog", "Turtle"]);
    }
}
