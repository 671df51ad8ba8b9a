use crate::def::EnumMember;

///
/// IntEnum
///
/// The typed seam of the engine: a closed unit enum whose variants each map
/// to a distinct `i64`. Implementations come from `#[derive(IntEnum)]`,
/// which resolves discriminants and rejects duplicates at expansion time,
/// so `VARIANTS` is guaranteed non-empty with distinct names and values.
///
/// Implementors must be `Copy` unit enums.
///

pub trait IntEnum: Copy + Eq + Sized + 'static {
    /// Enum name as used in the dotted textual form.
    const NAME: &'static str;

    /// All variants, in declaration order.
    const VARIANTS: &'static [Self];

    fn name(self) -> &'static str;

    fn value(self) -> i64;

    #[must_use]
    fn from_value(value: i64) -> Option<Self> {
        Self::VARIANTS.iter().copied().find(|v| v.value() == value)
    }

    #[must_use]
    fn from_name(name: &str) -> Option<Self> {
        Self::VARIANTS.iter().copied().find(|v| v.name() == name)
    }

    /// Bridge into the dynamic layer.
    #[must_use]
    fn to_member(self) -> EnumMember {
        EnumMember {
            enum_name: Self::NAME.to_string(),
            name: self.name().to_string(),
            value: self.value(),
        }
    }
}

///
/// TESTS
///
