use crate::{error::DefError, traits::IntEnum};
use derive_more::Display;
use serde::{Deserialize, Serialize};

///
/// EnumMember
///
/// One resolved member of an enum definition. Carries its owning enum name
/// so the engine can reject members that wandered in from another family.
/// Displays in the canonical textual form, `EnumName.MemberName`.
///

#[derive(Clone, Debug, Display, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[display("{enum_name}.{name}")]
pub struct EnumMember {
    pub enum_name: String,
    pub name: String,
    pub value: i64,
}

///
/// EnumDef
///
/// Closed, named set of integer-valued members, registered explicitly at
/// construction. Uniqueness of names and values is enforced once, here,
/// never at coercion time. Immutable after construction.
///

#[derive(Clone, Debug, Serialize)]
pub struct EnumDef {
    name: String,
    members: Vec<EnumMember>,
}

impl EnumDef {
    /// Register a definition from `(name, value)` pairs, in declaration
    /// order. Fails on an empty set, a repeated member name, or a repeated
    /// value.
    pub fn new<N, S, I>(name: N, members: I) -> Result<Self, DefError>
    where
        N: Into<String>,
        S: Into<String>,
        I: IntoIterator<Item = (S, i64)>,
    {
        let name = name.into();
        let mut resolved: Vec<EnumMember> = Vec::new();

        for (member_name, value) in members {
            let member_name = member_name.into();

            if resolved.iter().any(|m| m.name == member_name) {
                return Err(DefError::DuplicateName {
                    enum_name: name,
                    name: member_name,
                });
            }
            if let Some(prev) = resolved.iter().find(|m| m.value == value) {
                return Err(DefError::DuplicateValue {
                    enum_name: name,
                    value,
                    first: prev.name.clone(),
                    second: member_name,
                });
            }

            resolved.push(EnumMember {
                enum_name: name.clone(),
                name: member_name,
                value,
            });
        }

        if resolved.is_empty() {
            return Err(DefError::Empty { enum_name: name });
        }

        Ok(Self {
            name,
            members: resolved,
        })
    }

    /// Build the definition of a typed enum. Infallible: the derive has
    /// already enforced non-emptiness and distinct discriminants.
    #[must_use]
    pub fn of<E: IntEnum>() -> Self {
        Self {
            name: E::NAME.to_string(),
            members: E::VARIANTS.iter().map(|v| v.to_member()).collect(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Members in registration order.
    #[must_use]
    pub fn members(&self) -> &[EnumMember] {
        &self.members
    }

    #[must_use]
    pub fn member_by_name(&self, name: &str) -> Option<&EnumMember> {
        self.members.iter().find(|m| m.name == name)
    }

    #[must_use]
    pub fn member_by_value(&self, value: i64) -> Option<&EnumMember> {
        self.members.iter().find(|m| m.value == value)
    }

    /// True when `member` belongs to this definition: same enum name, and
    /// its (name, value) pair matches a registered member.
    #[must_use]
    pub fn contains(&self, member: &EnumMember) -> bool {
        member.enum_name == self.name
            && self
                .member_by_name(&member.name)
                .is_some_and(|m| m.value == member.value)
    }

    /// `(value, label)` pairs for form layers, in registration order.
    pub fn choices(&self) -> impl Iterator<Item = (i64, &str)> {
        self.members.iter().map(|m| (m.value, m.name.as_str()))
    }
}

///
/// TESTS
///
