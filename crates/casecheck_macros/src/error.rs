//! Structured failures diagnosed during expansion.
//!
//! Every error carries the span of the offending syntax so the compiler
//! message lands on the declaration that caused it. Failures are scoped to
//! one derive invocation; they surface as `compile_error!` output and never
//! abort expansion of unrelated declarations.

use std::fmt;

use proc_macro2::Span;

/// Everything that can go wrong while expanding one of the derives.
#[derive(Debug)]
pub enum MacroError {
    /// The annotated item is a struct or union.
    NotAnEnum {
        macro_name: &'static str,
        span: Span,
    },
    /// `#[derive(Subset)]` without a usable `#[subset(...)]` argument.
    MissingSupersetType { span: Span },
    /// The same field name appears with two different type signatures.
    ConflictingFieldTypes {
        field: String,
        first: String,
        second: String,
        span: Span,
    },
    /// `Subset` asked to narrow a variant that carries payload fields.
    PayloadVariant { variant: String, span: Span },
}

impl MacroError {
    fn span(&self) -> Span {
        match self {
            Self::NotAnEnum { span, .. }
            | Self::MissingSupersetType { span }
            | Self::ConflictingFieldTypes { span, .. }
            | Self::PayloadVariant { span, .. } => *span,
        }
    }
}

impl fmt::Display for MacroError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAnEnum { macro_name, .. } => {
                write!(f, "`{macro_name}` can only be applied to an enum")
            }
            Self::MissingSupersetType { .. } => {
                write!(
                    f,
                    "`Subset` requires a superset type argument: `#[subset(SupersetType)]`"
                )
            }
            Self::ConflictingFieldTypes {
                field,
                first,
                second,
                ..
            } => {
                write!(
                    f,
                    "field `{field}` is declared as `{first}` in one variant and `{second}` in another; \
                     a projected field must use one type across all variants"
                )
            }
            Self::PayloadVariant { variant, .. } => {
                write!(
                    f,
                    "`Subset` cannot narrow variant `{variant}` because it carries payload fields; \
                     only unit variants can be narrowed"
                )
            }
        }
    }
}

impl From<MacroError> for syn::Error {
    fn from(err: MacroError) -> Self {
        syn::Error::new(err.span(), err.to_string())
    }
}
