//! Expansion for `#[derive(CaseCheckable)]`.

use proc_macro2::TokenStream;
use quote::quote;
use syn::DeriveInput;

use crate::predicates::predicate_methods;
use crate::projections::projection_methods;
use crate::schema::EnumSchema;

/// Expand the derive into one `impl` block.
///
/// Fixed concatenation order: predicates in variant declaration order, then
/// projections in sorted field order. Expansion is a pure function of the
/// input tokens; identical input yields identical output.
pub fn expand(input: &DeriveInput) -> syn::Result<TokenStream> {
    let schema = EnumSchema::from_derive_input(input, "CaseCheckable")?;

    let predicates = predicate_methods(&schema);
    let projections = projection_methods(&schema)?;

    let enum_name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics #enum_name #ty_generics #where_clause {
            #(#predicates)*
            #(#projections)*
        }
    })
}
