//! RRI queries.
//!
//! A query is a request sent to the registry. It is a [`FieldList`] whose
//! first two fields are always the protocol version and the action of the
//! query. The remaining fields depend on the action.
//!
//! The type [`Query`] provides a constructor for each action. All of them
//! take a [`Config`] which provides the protocol version to use. A query
//! is converted into its wire representation via [`Query::encode_kv`] and
//! parsed from it via [`Query::parse`].
//!
//! ```
//! use rri::{Config, Query};
//!
//! let query = Query::login(&Config::new(), "alice", "secret");
//! assert_eq!(
//!     query.encode_kv(),
//!     "version: 5.0\naction: LOGIN\nuser: alice\npassword: secret"
//! );
//! ```

use crate::base::field::{FieldList, KvError};
use crate::base::handle::DenicHandle;
use crate::base::idn::put_domain;
use crate::base::token::{Action, FieldName, Version};
use crate::config::Config;
use crate::data::{ContactData, DomainData};
use ring::digest;
use std::fmt;
use std::str::FromStr;
use time::macros::format_description;
use time::Date;
use tracing::{debug, trace};

//------------ Query ---------------------------------------------------------

/// A request to the registry.
///
/// The fields of the query are the only source of truth. Version and
/// action are looked up from them when requested.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Query {
    fields: FieldList,
}

impl Query {
    /// Assembles a query from its version, action, and remaining fields.
    ///
    /// All other constructors end up here. This guarantees that version
    /// and action are present exactly once and come first.
    fn compose(
        version: &Version,
        action: Action,
        fields: Option<FieldList>,
    ) -> Self {
        let mut res = FieldList::new();
        res.add_one(FieldName::VERSION, version.as_str());
        res.add_one(FieldName::ACTION, action.as_str());
        if let Some(fields) = fields {
            fields.copy_to(&mut res);
        }
        Query { fields: res }
    }

    /// Returns the protocol version of the query.
    pub fn version(&self) -> Version {
        Version::new(self.first_field(FieldName::VERSION).to_owned())
    }

    /// Returns the action of the query.
    pub fn action(&self) -> Action {
        Action::new(self.first_field(FieldName::ACTION).to_owned())
    }

    /// Returns all fields of the query.
    pub fn fields(&self) -> &FieldList {
        &self.fields
    }

    /// Returns all values of the given field in order.
    pub fn field(&self, name: impl Into<FieldName>) -> Vec<&str> {
        self.fields.values(name).collect()
    }

    /// Returns the first value of the given field.
    ///
    /// Returns an empty string if the field is missing.
    pub fn first_field(&self, name: impl Into<FieldName>) -> &str {
        self.fields.first_value(name)
    }
}

/// # Session
///
impl Query {
    /// Creates a query to log into a session.
    pub fn login(config: &Config, user: &str, password: &str) -> Self {
        let mut fields = FieldList::new();
        fields.add_one(FieldName::USER, user);
        fields.add_one(FieldName::PASSWORD, password);
        Self::compose(config.version(), Action::LOGIN, Some(fields))
    }

    /// Creates a query to end the session.
    pub fn logout(config: &Config) -> Self {
        Self::compose(config.version(), Action::LOGOUT, None)
    }
}

/// # Contacts
///
impl Query {
    /// Creates a query to create a contact handle.
    pub fn create_contact(
        config: &Config,
        handle: &DenicHandle,
        data: &ContactData,
    ) -> Self {
        Self::compose(
            config.version(),
            Action::CREATE,
            Some(contact_fields(handle, data)),
        )
    }

    /// Creates a query to update a contact handle.
    pub fn update_contact(
        config: &Config,
        handle: &DenicHandle,
        data: &ContactData,
    ) -> Self {
        Self::compose(
            config.version(),
            Action::UPDATE,
            Some(contact_fields(handle, data)),
        )
    }

    /// Creates a query to check a contact or request contact handle.
    pub fn check_handle(config: &Config, handle: &DenicHandle) -> Self {
        Self::compose(
            config.version(),
            Action::CHECK,
            Some(handle_fields(handle)),
        )
    }

    /// Creates a query for information on a contact or request contact
    /// handle.
    pub fn info_handle(config: &Config, handle: &DenicHandle) -> Self {
        Self::compose(
            config.version(),
            Action::INFO,
            Some(handle_fields(handle)),
        )
    }
}

/// # Domains
///
impl Query {
    /// Creates a query to register a domain.
    pub fn create_domain(
        config: &Config,
        domain: &str,
        data: &DomainData,
    ) -> Self {
        Self::compose(
            config.version(),
            Action::CREATE,
            Some(domain_data_fields(domain, data)),
        )
    }

    /// Creates a query to check whether a domain is registered.
    pub fn check_domain(config: &Config, domain: &str) -> Self {
        Self::compose(
            config.version(),
            Action::CHECK,
            Some(domain_fields(domain)),
        )
    }

    /// Creates a query for information on a domain.
    pub fn info_domain(config: &Config, domain: &str) -> Self {
        Self::compose(
            config.version(),
            Action::INFO,
            Some(domain_fields(domain)),
        )
    }

    /// Creates a query to update the data of a domain.
    pub fn update_domain(
        config: &Config,
        domain: &str,
        data: &DomainData,
    ) -> Self {
        Self::compose(
            config.version(),
            Action::UPDATE,
            Some(domain_data_fields(domain, data)),
        )
    }

    /// Creates a query to change the holder of a domain.
    pub fn change_holder(
        config: &Config,
        domain: &str,
        data: &DomainData,
    ) -> Self {
        Self::compose(
            config.version(),
            Action::CHANGE_HOLDER,
            Some(domain_data_fields(domain, data)),
        )
    }

    /// Creates a query to delete a domain.
    pub fn delete_domain(config: &Config, domain: &str) -> Self {
        Self::compose(
            config.version(),
            Action::DELETE,
            Some(domain_fields(domain)),
        )
    }

    /// Creates a query to restore a deleted domain.
    pub fn restore_domain(config: &Config, domain: &str) -> Self {
        Self::compose(
            config.version(),
            Action::RESTORE,
            Some(domain_fields(domain)),
        )
    }

    /// Creates a query to move a domain into the registry’s transit.
    ///
    /// If `disconnect` is `true`, the domain is removed from the DNS.
    pub fn transit_domain(
        config: &Config,
        domain: &str,
        disconnect: bool,
    ) -> Self {
        let mut fields = domain_fields(domain);
        fields.add_one(
            FieldName::DISCONNECT,
            if disconnect { "true" } else { "false" },
        );
        Self::compose(config.version(), Action::TRANSIT, Some(fields))
    }

    /// Creates a query to deposit an AuthInfo for a domain.
    ///
    /// Only the SHA-256 digest of `auth_info` is transmitted. The AuthInfo
    /// is valid until the end of `expire`.
    pub fn create_authinfo1(
        config: &Config,
        domain: &str,
        auth_info: &str,
        expire: Date,
    ) -> Self {
        let mut fields = domain_fields(domain);
        fields.add_one(FieldName::AUTHINFO_HASH, hash_auth_info(auth_info));
        match format_date(expire) {
            Ok(expire) => fields.add_one(FieldName::AUTHINFO_EXPIRE, expire),
            Err(err) => debug!("Omitting AuthInfo expiry: {err}"),
        }
        Self::compose(
            config.version(),
            Action::CREATE_AUTHINFO1,
            Some(fields),
        )
    }

    /// Creates a query to have the registry send an AuthInfo to the holder.
    pub fn create_authinfo2(config: &Config, domain: &str) -> Self {
        Self::compose(
            config.version(),
            Action::CREATE_AUTHINFO2,
            Some(domain_fields(domain)),
        )
    }

    /// Creates a query to move a domain from another provider.
    pub fn change_provider(
        config: &Config,
        domain: &str,
        auth_info: &str,
        data: &DomainData,
    ) -> Self {
        let mut fields = domain_data_fields(domain, data);
        fields.add_one(FieldName::AUTHINFO, auth_info);
        Self::compose(
            config.version(),
            Action::CHANGE_PROVIDER,
            Some(fields),
        )
    }
}

/// # Message Queue
///
impl Query {
    /// Creates a query to read the oldest message from the message queue.
    ///
    /// If `msg_type` is given and not empty, only messages of this type
    /// are considered.
    pub fn queue_read(config: &Config, msg_type: Option<&str>) -> Self {
        let mut fields = FieldList::new();
        put_msg_type(&mut fields, msg_type);
        Self::compose(config.version(), Action::QUEUE_READ, Some(fields))
    }

    /// Creates a query to delete a message from the message queue.
    ///
    /// If `msg_type` is given and not empty, only messages of this type
    /// are considered. This is necessary to delete the oldest message of
    /// a type if it isn’t the oldest message in the queue.
    pub fn queue_delete(
        config: &Config,
        msg_id: &str,
        msg_type: Option<&str>,
    ) -> Self {
        let mut fields = FieldList::new();
        fields.add_one(FieldName::MSG_ID, msg_id);
        put_msg_type(&mut fields, msg_type);
        Self::compose(config.version(), Action::QUEUE_DELETE, Some(fields))
    }
}

/// # Encoding and Parsing
///
impl Query {
    /// Returns the key-value representation used on the wire.
    ///
    /// Each field is written on a line of its own as the field name,
    /// a colon, a space, and the value. Entity markers are written as the
    /// entity name in square brackets. There is no trailing line feed.
    pub fn encode_kv(&self) -> String {
        let res = self.fields.encode_kv();
        trace!(
            "Encoded {} query with {} fields",
            self.action(),
            self.fields.len()
        );
        res
    }

    /// Parses a query in key-value representation.
    ///
    /// In addition to the rules of [`FieldList::parse_kv`], the query must
    /// contain exactly one version and exactly one action field.
    pub fn parse_kv(s: &str) -> Result<Self, ParseError> {
        let fields = FieldList::parse_kv(s)?;
        for name in [FieldName::VERSION, FieldName::ACTION] {
            match fields.values(name.clone()).count() {
                0 => {
                    debug!("Rejecting query without {name} field");
                    return Err(ParseError::MissingField(name));
                }
                1 => {}
                _ => {
                    debug!("Rejecting query with multiple {name} fields");
                    return Err(ParseError::DuplicateField(name));
                }
            }
        }
        Ok(Query { fields })
    }

    /// Parses a query detecting its representation.
    ///
    /// Currently, the key-value representation is the only one supported.
    pub fn parse(s: &str) -> Result<Self, ParseError> {
        Self::parse_kv(s)
    }
}

fn handle_fields(handle: &DenicHandle) -> FieldList {
    let mut fields = FieldList::new();
    fields.add_one(FieldName::HANDLE, handle.to_string());
    fields
}

fn contact_fields(handle: &DenicHandle, data: &ContactData) -> FieldList {
    let mut fields = handle_fields(handle);
    data.put_to_fields(&mut fields);
    fields
}

fn domain_fields(domain: &str) -> FieldList {
    let mut fields = FieldList::new();
    put_domain(&mut fields, domain);
    fields
}

fn domain_data_fields(domain: &str, data: &DomainData) -> FieldList {
    let mut fields = domain_fields(domain);
    data.put_to_fields(&mut fields);
    fields
}

fn put_msg_type(fields: &mut FieldList, msg_type: Option<&str>) {
    if let Some(msg_type) = msg_type.filter(|s| !s.is_empty()) {
        fields.add_one(FieldName::MSG_TYPE, msg_type);
    }
}

/// Returns the lower case hex SHA-256 digest of the AuthInfo.
fn hash_auth_info(auth_info: &str) -> String {
    hex::encode(digest::digest(&digest::SHA256, auth_info.as_bytes()))
}

/// Formats a date as `YYYYMMDD`.
///
/// This only fails if the date cannot provide a component of the format,
/// which a [`Date`] always can.
fn format_date(date: Date) -> Result<String, time::error::Format> {
    date.format(format_description!("[year][month][day]"))
}

//--- FromStr

impl FromStr for Query {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

//--- Display

impl fmt::Display for Query {
    /// Writes a short summary of the query.
    ///
    /// Passwords and other secrets are never included.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let action = self.action();
        if action == Action::LOGIN {
            write!(f, "{}{{{:?}}}", action, self.first_field(FieldName::USER))
        } else {
            write!(f, "{}{{}}", action)
        }
    }
}

//============ Error Types ===================================================

//------------ ParseError ----------------------------------------------------

/// A query could not be parsed.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// The key-value representation was malformed.
    Kv(KvError),

    /// A required field was missing.
    MissingField(FieldName),

    /// A field that must appear once appeared multiple times.
    DuplicateField(FieldName),
}

//--- From

impl From<KvError> for ParseError {
    fn from(err: KvError) -> Self {
        ParseError::Kv(err)
    }
}

//--- Display and Error

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ParseError::Kv(ref err) => err.fmt(f),
            ParseError::MissingField(ref name) => {
                write!(f, "{} key is missing", name)
            }
            ParseError::DuplicateField(ref name) => {
                write!(f, "multiple {} values", name)
            }
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match *self {
            ParseError::Kv(ref err) => Some(err),
            _ => None,
        }
    }
}

//============ Testing =======================================================
