use proc_macro2::TokenStream;
use quote::quote;
use std::collections::HashMap;
use syn::{
    Data, DeriveInput, Expr, ExprLit, ExprUnary, Fields, Lit, UnOp, spanned::Spanned,
};

pub fn derive_int_enum(input: TokenStream) -> TokenStream {
    match expand(input) {
        Ok(tokens) => tokens,
        Err(err) => err.to_compile_error(),
    }
}

fn expand(input: TokenStream) -> syn::Result<TokenStream> {
    let input: DeriveInput = syn::parse2(input)?;

    let Data::Enum(data) = &input.data else {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "IntEnum can only be derived for enums",
        ));
    };
    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "IntEnum enums cannot be generic",
        ));
    }
    if data.variants.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "IntEnum enums must declare at least one variant",
        ));
    }

    let mut idents = Vec::new();
    let mut names = Vec::new();
    let mut values = Vec::new();
    let mut seen: HashMap<i64, syn::Ident> = HashMap::new();
    let mut next: Option<i64> = Some(0);

    for variant in &data.variants {
        if !matches!(variant.fields, Fields::Unit) {
            return Err(syn::Error::new_spanned(
                variant,
                "IntEnum variants must be unit variants",
            ));
        }

        let value = match &variant.discriminant {
            Some((_, expr)) => discriminant_value(expr)?,
            None => next.ok_or_else(|| {
                syn::Error::new_spanned(&variant.ident, "implicit discriminant overflows i64")
            })?,
        };

        if let Some(first) = seen.insert(value, variant.ident.clone()) {
            return Err(syn::Error::new_spanned(
                &variant.ident,
                format!(
                    "discriminant {value} is assigned to both `{first}` and `{}`",
                    variant.ident
                ),
            ));
        }

        next = value.checked_add(1);
        idents.push(variant.ident.clone());
        names.push(variant.ident.to_string());
        values.push(value);
    }

    let ident = &input.ident;
    let name = ident.to_string();

    Ok(quote! {
        impl ::enumfield::traits::IntEnum for #ident {
            const NAME: &'static str = #name;
            const VARIANTS: &'static [Self] = &[#(Self::#idents),*];

            fn name(self) -> &'static str {
                match self {
                    #(Self::#idents => #names),*
                }
            }

            fn value(self) -> i64 {
                match self {
                    #(Self::#idents => #values),*
                }
            }
        }
    })
}

fn discriminant_value(expr: &Expr) -> syn::Result<i64> {
    match expr {
        Expr::Lit(ExprLit {
            lit: Lit::Int(lit), ..
        }) => lit.base10_parse(),
        Expr::Unary(ExprUnary {
            op: UnOp::Neg(_),
            expr,
            ..
        }) => discriminant_value(expr)?.checked_neg().ok_or_else(|| {
            syn::Error::new(expr.span(), "discriminant does not fit in i64")
        }),
        _ => Err(syn::Error::new(
            expr.span(),
            "IntEnum discriminants must be integer literals",
        )),
    }
}

///
/// TESTS
///
