//! Narrowing conversion from a designated superset enum.

use proc_macro2::TokenStream;
use quote::quote;
use syn::spanned::Spanned;
use syn::{DeriveInput, Path};

use crate::error::MacroError;
use crate::schema::EnumSchema;

/// Expand `#[derive(Subset)]`.
///
/// Emits `fn from_superset(&Superset) -> Option<Self>` with one arm per
/// subset variant, in subset declaration order, keyed by variant name. The
/// superset is an opaque path taken from `#[subset(...)]` and never
/// resolved; `Superset::V { .. }` arms match whatever payload shape the
/// superset variant has. Superset variants absent from the subset fall
/// through to the `None` arm.
pub fn expand(input: &DeriveInput) -> syn::Result<TokenStream> {
    let schema = EnumSchema::from_derive_input(input, "Subset")?;
    let superset = superset_argument(input)?;

    // Narrowing a payload-carrying variant would need a payload conversion
    // story; reject it instead of truncating silently.
    for variant in &schema.variants {
        if !variant.parameters.is_empty() {
            return Err(MacroError::PayloadVariant {
                variant: variant.name.to_string(),
                span: variant.name.span(),
            }
            .into());
        }
    }

    let arms = schema.variants.iter().map(|variant| {
        let name = &variant.name;
        quote! {
            #superset::#name { .. } => ::core::option::Option::Some(Self::#name),
        }
    });

    let enum_name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    let superset_text = quote!(#superset).to_string();
    let doc = format!("Narrows a `{superset_text}` value to this type by variant name.");

    Ok(quote! {
        impl #impl_generics #enum_name #ty_generics #where_clause {
            #[doc = #doc]
            pub fn from_superset(superset: &#superset) -> ::core::option::Option<Self> {
                match superset {
                    #(#arms)*
                    _ => ::core::option::Option::None,
                }
            }
        }
    })
}

/// Extract the superset path from the `#[subset(...)]` helper attribute.
fn superset_argument(input: &DeriveInput) -> syn::Result<Path> {
    for attr in &input.attrs {
        if attr.path().is_ident("subset") {
            return attr.parse_args::<Path>().map_err(|_| {
                MacroError::MissingSupersetType { span: attr.span() }.into()
            });
        }
    }

    Err(MacroError::MissingSupersetType {
        span: input.ident.span(),
    }
    .into())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;
    use quote::quote;
    use syn::parse_quote;

    use super::*;

    #[test]
    fn narrows_by_variant_name() {
        let input: DeriveInput = parse_quote! {
            #[subset(Role)]
            enum StaffRole {
                Admin,
                Moderator,
            }
        };

        let expected = quote! {
            impl StaffRole {
                #[doc = "Narrows a `Role` value to this type by variant name."]
                pub fn from_superset(superset: &Role) -> ::core::option::Option<Self> {
                    match superset {
                        Role::Admin { .. } => ::core::option::Option::Some(Self::Admin),
                        Role::Moderator { .. } => ::core::option::Option::Some(Self::Moderator),
                        _ => ::core::option::Option::None,
                    }
                }
            }
        };
        assert_eq!(expand(&input).unwrap().to_string(), expected.to_string());
    }

    #[test]
    fn superset_path_may_be_qualified() {
        let input: DeriveInput = parse_quote! {
            #[subset(crate::auth::Role)]
            enum StaffRole {
                Admin,
            }
        };
        let rendered = expand(&input).unwrap().to_string();
        assert!(rendered.contains("crate :: auth :: Role"));
    }

    #[test]
    fn missing_superset_argument_is_a_diagnostic() {
        let input: DeriveInput = parse_quote! {
            enum StaffRole {
                Admin,
            }
        };
        let err = expand(&input).unwrap_err();
        assert_eq!(
            err.to_string(),
            "`Subset` requires a superset type argument: `#[subset(SupersetType)]`"
        );
    }

    #[test]
    fn empty_superset_argument_is_a_diagnostic() {
        let input: DeriveInput = parse_quote! {
            #[subset()]
            enum StaffRole {
                Admin,
            }
        };
        assert!(expand(&input).is_err());
    }

    #[test]
    fn payload_variant_is_rejected() {
        let input: DeriveInput = parse_quote! {
            #[subset(Event)]
            enum Narrowed {
                Quit,
                Click { x: i32 },
            }
        };
        let err = expand(&input).unwrap_err();
        assert_eq!(
            err.to_string(),
            "`Subset` cannot narrow variant `Click` because it carries payload fields; \
             only unit variants can be narrowed"
        );
    }

    #[test]
    fn non_enum_is_rejected() {
        let input: DeriveInput = parse_quote! {
            #[subset(Role)]
            struct NotAnEnum;
        };
        let err = expand(&input).unwrap_err();
        assert_eq!(err.to_string(), "`Subset` can only be applied to an enum");
    }
}
