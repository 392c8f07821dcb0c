//! Basics.
//!
//! This module provides the fundamental types for working with RRI data.
//!
//! The native representation of all RRI data is a list of fields, each
//! consisting of a field name and a text value. Field names may appear
//! more than once to express multi-valued fields, and the order of fields
//! is significant. The type [`FieldList`] implements such a list. Nested
//! records, such as verification information attached to a contact, are
//! expressed through entity markers that precede the fields of the record.
//!
//! Field names as well as the other enumerations of the protocol are
//! represented by the types in the [token] module. Each of them knows its
//! canonical form.
//!
//! In addition, the module contains the type [`DenicHandle`] for handles
//! of contacts and the helper [`put_domain`] that adds both the Unicode
//! and the ASCII-compatible form of a domain name to a field list.
//!
//! [`DenicHandle`]: handle::DenicHandle
//! [`FieldList`]: field::FieldList
//! [`put_domain`]: idn::put_domain

#[macro_use]
mod macros;

pub mod field;
pub mod handle;
pub mod idn;
pub mod token;

pub use self::field::{Field, FieldList};
pub use self::handle::DenicHandle;
pub use self::token::{Action, ContactType, Entity, FieldName, Version};
