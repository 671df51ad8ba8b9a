//! Derive macros for the enumfield crate.

use proc_macro::TokenStream;

mod int_enum;

/// Derive `IntEnum` for a unit-variant enum with integer discriminants.
///
/// Implicit discriminants follow Rust's successor rule. Duplicate resolved
/// discriminants, data-carrying variants, generic enums, and empty enums
/// are rejected at expansion time, so every generated definition satisfies
/// the registration invariants. Implementors must also be `Copy` and `Eq`.
#[proc_macro_derive(IntEnum)]
pub fn derive_int_enum(input: TokenStream) -> TokenStream {
    int_enum::derive_int_enum(input.into()).into()
}
