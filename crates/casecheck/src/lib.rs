//! Boilerplate-free accessors for enums with payload-carrying variants.
//!
//! Two derives are provided:
//!
//! - [`CaseCheckable`] generates a boolean predicate per variant and, for
//!   every distinct named payload field used anywhere in the enum, an
//!   optional accessor returning that field's value when the active variant
//!   carries it.
//! - [`Subset`] generates a partial conversion narrowing a superset enum to
//!   a declared subset of its variants.
//!
//! # Case predicates and payload accessors
//!
//! ```
//! use casecheck::CaseCheckable;
//!
//! #[derive(CaseCheckable)]
//! enum MyEnum {
//!     FirstOption { first_value: String },
//!     SecondOption { second_value: String, third_value: i64 },
//!     ThirdOption { first_value: String, second_value: String },
//!     FourthOption,
//! }
//!
//! let value = MyEnum::ThirdOption {
//!     first_value: "first".to_owned(),
//!     second_value: "second".to_owned(),
//! };
//!
//! assert!(value.is_third_option());
//! assert!(!value.is_first_option());
//! assert_eq!(value.first_value().map(String::as_str), Some("first"));
//! assert_eq!(value.second_value().map(String::as_str), Some("second"));
//! assert_eq!(value.third_value(), None);
//! ```
//!
//! An accessor exists once per field *name*; variants sharing a name share
//! the accessor, and the field must use one type across all variants.
//! Accessing a field the active variant does not carry returns `None` and
//! never panics.
//!
//! # Subset narrowing
//!
//! ```
//! use casecheck::Subset;
//!
//! enum Role {
//!     Admin,
//!     Moderator,
//!     User,
//!     Guest,
//! }
//!
//! #[derive(Subset, Debug, PartialEq)]
//! #[subset(Role)]
//! enum StaffRole {
//!     Admin,
//!     Moderator,
//! }
//!
//! assert_eq!(StaffRole::from_superset(&Role::Admin), Some(StaffRole::Admin));
//! assert_eq!(StaffRole::from_superset(&Role::Guest), None);
//! ```

pub use casecheck_macros::{CaseCheckable, Subset};
