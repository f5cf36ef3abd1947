//! Normalized schema extracted from an enum declaration.
//!
//! Generators never walk the syntax tree directly: the extractor flattens a
//! `DeriveInput` into plain variant/parameter lists and everything downstream
//! works off that view. Extraction is pure and order-preserving; variant and
//! parameter order match the declaration.

use syn::spanned::Spanned;
use syn::{Data, DeriveInput, Fields, Ident, Type};

use crate::error::MacroError;

/// One payload parameter of a variant.
#[derive(Debug, Clone)]
pub struct ParameterSchema {
    /// Field label; `None` for tuple-variant positions.
    pub name: Option<Ident>,
    pub ty: Type,
}

/// One enum variant: its name plus payload parameters in declaration order.
#[derive(Debug, Clone)]
pub struct VariantSchema {
    pub name: Ident,
    pub parameters: Vec<ParameterSchema>,
}

impl VariantSchema {
    /// The parameter labeled `name`, if this variant carries one.
    ///
    /// First match wins; rustc rejects duplicate field names before any
    /// derive expands, so at most one can exist.
    pub fn parameter(&self, name: &Ident) -> Option<&ParameterSchema> {
        self.parameters
            .iter()
            .find(|parameter| parameter.name.as_ref() == Some(name))
    }
}

/// A distinct named field with its representative type.
#[derive(Debug, Clone)]
pub struct FieldSchema {
    pub name: Ident,
    pub ty: Type,
}

/// Ordered view of an enum declaration.
#[derive(Debug, Clone)]
pub struct EnumSchema {
    pub variants: Vec<VariantSchema>,
}

impl EnumSchema {
    /// Flatten a `DeriveInput` into a schema.
    ///
    /// The sole structural precondition: the input must be an enum.
    pub fn from_derive_input(
        input: &DeriveInput,
        macro_name: &'static str,
    ) -> Result<Self, MacroError> {
        let Data::Enum(data) = &input.data else {
            return Err(MacroError::NotAnEnum {
                macro_name,
                span: input.ident.span(),
            });
        };

        let variants = data
            .variants
            .iter()
            .map(|variant| VariantSchema {
                name: variant.ident.clone(),
                parameters: parameters_of(&variant.fields),
            })
            .collect();

        Ok(Self { variants })
    }

    /// The distinct named fields across all variants, sorted by name.
    ///
    /// The representative type comes from the first occurrence in declaration
    /// order. A later occurrence with a different signature is a diagnosed
    /// inconsistency, not a silent pick. Unnamed (tuple) parameters
    /// contribute nothing.
    pub fn distinct_fields(&self) -> Result<Vec<FieldSchema>, MacroError> {
        let mut fields: Vec<FieldSchema> = Vec::new();

        for variant in &self.variants {
            for parameter in &variant.parameters {
                let Some(name) = &parameter.name else { continue };

                match fields.iter().find(|field| &field.name == name) {
                    None => fields.push(FieldSchema {
                        name: name.clone(),
                        ty: parameter.ty.clone(),
                    }),
                    Some(existing) => {
                        let first = type_signature(&existing.ty);
                        let second = type_signature(&parameter.ty);
                        if first != second {
                            return Err(MacroError::ConflictingFieldTypes {
                                field: name.to_string(),
                                first,
                                second,
                                span: parameter.ty.span(),
                            });
                        }
                    }
                }
            }
        }

        fields.sort_by_key(|field| field.name.to_string());
        Ok(fields)
    }
}

/// Token-normalized signature used for opaque type comparison.
fn type_signature(ty: &Type) -> String {
    quote::quote!(#ty).to_string()
}

fn parameters_of(fields: &Fields) -> Vec<ParameterSchema> {
    match fields {
        Fields::Named(named) => named
            .named
            .iter()
            .map(|field| ParameterSchema {
                name: field.ident.clone(),
                ty: field.ty.clone(),
            })
            .collect(),
        Fields::Unnamed(unnamed) => unnamed
            .unnamed
            .iter()
            .map(|field| ParameterSchema {
                name: None,
                ty: field.ty.clone(),
            })
            .collect(),
        Fields::Unit => Vec::new(),
    }
}
