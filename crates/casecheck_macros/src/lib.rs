//! Procedural macros for casecheck.
//!
//! This crate provides two derive macros over enums:
//! - `CaseCheckable` generates per-variant predicates and optional accessors
//!   for every distinct named payload field.
//! - `Subset` generates a partial conversion from a designated superset enum,
//!   narrowing by variant name.
//!
//! Both derives are pure functions of the annotated declaration: no I/O, no
//! shared state, byte-identical output for identical input. Diagnosable
//! failures surface as `compile_error!` output scoped to the one declaration
//! being expanded.
//!
//! Use these through the `casecheck` facade crate unless you are wiring the
//! macros directly.

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

mod case_checkable;
mod error;
mod predicates;
mod projections;
mod schema;
mod subset;

/// Derive macro generating case predicates and payload accessors for an enum.
///
/// For every variant `V`, generates `fn is_v(&self) -> bool` (snake_case,
/// mechanical, no spelling correction). For every distinct named payload
/// field `f` of type `T`, generates `fn f(&self) -> Option<&T>` returning the
/// payload when the active variant carries a field named `f` and `None`
/// otherwise.
///
/// # Example
///
/// ```text
/// #[derive(CaseCheckable)]
/// enum Payment {
///     Card { number: String },
///     Cash,
/// }
///
/// // Generated:
/// // fn is_card(&self) -> bool
/// // fn is_cash(&self) -> bool
/// // fn number(&self) -> Option<&String>
/// ```
///
/// # Errors
///
/// - Applying the derive to a struct or union is rejected.
/// - A field name appearing with two different types across variants is
///   rejected; the message names the field and both types.
#[proc_macro_derive(CaseCheckable)]
pub fn derive_case_checkable(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match case_checkable::expand(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

/// Derive macro narrowing a superset enum to the annotated subset enum.
///
/// Requires a `#[subset(SupersetType)]` attribute naming the superset.
/// Generates `fn from_superset(&SupersetType) -> Option<Self>`: superset
/// values whose active variant name appears in the subset convert to the
/// matching subset variant, every other value yields `None`.
///
/// # Example
///
/// ```text
/// enum Role { Admin, Moderator, User, Guest }
///
/// #[derive(Subset)]
/// #[subset(Role)]
/// enum StaffRole { Admin, Moderator }
///
/// // StaffRole::from_superset(&Role::Admin)  => Some(StaffRole::Admin)
/// // StaffRole::from_superset(&Role::Guest)  => None
/// ```
///
/// # Errors
///
/// - Applying the derive to a struct or union is rejected.
/// - A missing or empty `#[subset(...)]` attribute is rejected.
/// - Subset variants carrying payload fields are rejected; only unit
///   variants can be narrowed.
#[proc_macro_derive(Subset, attributes(subset))]
pub fn derive_subset(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match subset::expand(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}
