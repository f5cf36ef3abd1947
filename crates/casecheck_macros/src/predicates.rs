//! Per-variant boolean predicates.

use convert_case::{Case, Casing};
use proc_macro2::TokenStream;
use quote::{format_ident, quote};

use crate::schema::EnumSchema;

/// One `is_<variant>` method per variant, in declaration order.
///
/// Method names are mechanical: `is_` plus the variant name in snake_case,
/// with no spelling correction (`ThirdOpton` yields `is_third_opton`).
/// `Variant { .. }` patterns match unit, tuple and struct variants alike, so
/// every predicate compares by discriminant only, never by payload.
pub fn predicate_methods(schema: &EnumSchema) -> Vec<TokenStream> {
    schema
        .variants
        .iter()
        .map(|variant| {
            let name = &variant.name;
            let method = format_ident!("is_{}", name.to_string().to_case(Case::Snake));
            let doc = format!("Returns `true` if the value is `{name}`.");
            quote! {
                #[doc = #doc]
                pub fn #method(&self) -> bool {
                    ::core::matches!(self, Self::#name { .. })
                }
            }
        })
        .collect()
}
