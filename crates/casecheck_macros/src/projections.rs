//! Cross-variant named-field projections.

use proc_macro2::TokenStream;
use quote::quote;

use crate::error::MacroError;
use crate::schema::EnumSchema;

/// One optional accessor per distinct named field, sorted by field name.
///
/// Each accessor dispatches on the active variant: variants carrying the
/// field get an arm (in declaration order) binding only that field, every
/// other variant falls through to the `None` arm. Absence is a valid result
/// for every input value; the accessor never panics.
pub fn projection_methods(schema: &EnumSchema) -> Result<Vec<TokenStream>, MacroError> {
    let fields = schema.distinct_fields()?;

    let methods = fields
        .iter()
        .map(|field| {
            let name = &field.name;
            let ty = &field.ty;

            let arms = schema.variants.iter().filter_map(|variant| {
                variant.parameter(name).map(|_| {
                    let variant_name = &variant.name;
                    quote! {
                        Self::#variant_name { #name, .. } => ::core::option::Option::Some(#name),
                    }
                })
            });

            let doc = format!("Returns the `{name}` payload if the active variant carries one.");
            quote! {
                #[doc = #doc]
                pub fn #name(&self) -> ::core::option::Option<&#ty> {
                    match self {
                        #(#arms)*
                        _ => ::core::option::Option::None,
                    }
                }
            }
        })
        .collect();

    Ok(methods)
}
