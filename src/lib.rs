//! A codec for the DENIC Registry Interface (RRI).
//!
//! The RRI is a line-oriented key/value text protocol used by providers to
//! create, query, and modify domain and contact records at the registry
//! and to drain their message queue. This crate provides the object model
//! for requests of this protocol and the conversion of these requests from
//! and to their textual wire representation.
//!
//! It does not deal with the network connection itself. A transport layer
//! is expected to hand over a complete request string to send via
//! [`Query::encode_kv`] and to interpret received strings via
//! [`Query::parse`] or, for responses, via [`FieldList::parse_kv`].
//!
//! # Modules
//!
//! * [base] contains the fundamental types: the protocol’s enumeration
//!   types, the ordered field container, handles, and the helper for
//!   internationalized domain names,
//! * [data] contains the structured contact and domain records,
//! * [query] contains the request type and its constructors, encoder, and
//!   parser,
//! * [config] contains the protocol configuration shared by all query
//!   constructors.
//!
//!
//! # Reference of Feature Flags
//!
//! * `serde`: Enables serialization and deserialization of the data model
//!   via the [serde](https://serde.rs/) crate.
//! * `std`: support for the Rust std library. This feature is enabled by
//!   default and currently required.
//!
//! [`FieldList::parse_kv`]: base::field::FieldList::parse_kv
//! [`Query::encode_kv`]: query::Query::encode_kv
//! [`Query::parse`]: query::Query::parse

#![allow(renamed_and_removed_lints)]
#![allow(clippy::unknown_clippy_lints)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub use self::config::Config;
pub use self::error::{Error, Result};
pub use self::query::Query;

pub mod base;
pub mod config;
pub mod data;
pub mod error;
pub mod query;
