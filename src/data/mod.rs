//! Structured contact and domain records.
//!
//! The types in this module hold the semantic attributes of the records
//! managed at the registry. They know how to add themselves to a
//! [`FieldList`] in the order the registry expects. This order is part of
//! the protocol since the registry groups repeated fields by it.
//!
//! [`FieldList`]: crate::base::field::FieldList

pub use self::contact::ContactData;
pub use self::domain::DomainData;
pub use self::verification::VerificationInformation;

pub mod contact;
pub mod domain;
pub mod verification;
