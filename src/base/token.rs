//! The enumeration types of the protocol.
//!
//! All enumerations of the RRI are transmitted as text. Each of them has
//! exactly one canonical form: actions and contact types are upper case,
//! field names and entities are lower case, and versions are kept
//! verbatim.
//!
//! Most of these types are *open:* they accept any text and merely
//! canonicalize it. The protocol is versioned and a client must not choke
//! on actions or field names introduced by a newer server. The exception
//! is [`ContactType`], which only accepts the values it knows because the
//! registry bases business decisions on it. Which kind a type is, is
//! expressed by [`Token::ACCEPTS_UNKNOWN`].

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

//------------ Token ---------------------------------------------------------

/// A protocol enumeration with a canonical text form.
pub trait Token: Sized {
    /// Whether values other than the well-known ones are accepted.
    const ACCEPTS_UNKNOWN: bool;

    /// Returns the canonical form of the value.
    ///
    /// The operation is pure and idempotent.
    fn normalize(&self) -> Self;

    /// Returns the text of the value.
    fn as_str(&self) -> &str;
}

//------------ Case ----------------------------------------------------------

/// The rule for canonicalizing the case of a token.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Case {
    /// The token is upper case.
    Upper,

    /// The token is lower case.
    Lower,

    /// The token is kept as given.
    Verbatim,
}

impl Case {
    /// Applies the rule to a text value.
    ///
    /// Returns `value` unchanged if it already is in canonical form.
    pub fn apply(self, value: Cow<'static, str>) -> Cow<'static, str> {
        let converted = match self {
            Case::Upper => value.to_uppercase(),
            Case::Lower => value.to_lowercase(),
            Case::Verbatim => return value,
        };
        if converted == value {
            value
        } else {
            Cow::Owned(converted)
        }
    }
}

//------------ Version -------------------------------------------------------

open_token! {
    /// The version of the RRI protocol.
    =>
    Version, crate::base::token::Case::Verbatim;

    /// The latest version supported by this crate.
    (LATEST => "5.0")
}

//------------ Action --------------------------------------------------------

open_token! {
    /// The action of a query.
    =>
    Action, crate::base::token::Case::Upper;

    /// Log into a session.
    (LOGIN => "LOGIN")

    /// End a session.
    (LOGOUT => "LOGOUT")

    /// Check whether a domain or handle exists.
    (CHECK => "CHECK")

    /// Retrieve information about a domain or handle.
    (INFO => "INFO")

    /// Create a domain or handle.
    (CREATE => "CREATE")

    /// Update a domain or handle.
    (UPDATE => "UPDATE")

    /// Change the holder of a domain.
    (CHANGE_HOLDER => "CHHOLDER")

    /// Delete a domain.
    (DELETE => "DELETE")

    /// Restore a deleted domain.
    (RESTORE => "RESTORE")

    /// Move a domain into the registry’s transit.
    (TRANSIT => "TRANSIT")

    /// Deposit an AuthInfo for a domain.
    (CREATE_AUTHINFO1 => "CREATE-AUTHINFO1")

    /// Have the registry issue an AuthInfo via mail.
    (CREATE_AUTHINFO2 => "CREATE-AUTHINFO2")

    /// Move a domain to another provider.
    (CHANGE_PROVIDER => "CHPROV")

    /// Read the oldest message from the message queue.
    (QUEUE_READ => "QUEUE-READ")

    /// Delete a message from the message queue.
    (QUEUE_DELETE => "QUEUE-DELETE")
}

//------------ FieldName -----------------------------------------------------

open_token! {
    /// The name of a field.
    =>
    FieldName, crate::base::token::Case::Lower;

    (VERSION => "version")
    (ACTION => "action")
    (USER => "user")
    (PASSWORD => "password")

    /// The domain name in Unicode form.
    (DOMAIN_IDN => "domain")

    /// The domain name in ASCII-compatible encoding.
    (DOMAIN_ACE => "domain-ace")

    (HOLDER => "holder")
    (GENERAL_REQUEST => "generalrequest")
    (ABUSE_CONTACT => "abusecontact")
    (NAME_SERVER => "nserver")
    (HANDLE => "handle")
    (DISCONNECT => "disconnect")
    (AUTHINFO_HASH => "authinfohash")
    (AUTHINFO_EXPIRE => "authinfoexpire")
    (AUTHINFO => "authinfo")
    (TYPE => "type")
    (NAME => "name")
    (ORGANISATION => "organisation")
    (ADDRESS => "address")
    (POSTAL_CODE => "postalcode")
    (CITY => "city")
    (COUNTRY_CODE => "countrycode")
    (EMAIL => "email")
    (MSG_ID => "msgid")
    (MSG_TYPE => "msgtype")
    (PHONE => "phone")
    (VERIFIED_CLAIM => "verifiedclaim")
    (VERIFICATION_RESULT => "verificationresult")
    (VERIFICATION_REFERENCE => "verificationreference")
    (VERIFICATION_TIMESTAMP => "verificationtimestamp")
    (VERIFICATION_EVIDENCE => "verificationevidence")
    (VERIFICATION_METHOD => "verificationmethod")
    (TRUST_FRAMEWORK => "trustframework")
}

//------------ Entity --------------------------------------------------------

open_token! {
    /// The kind of a nested record within a field list.
    ///
    /// On the wire, an entity is written as its name in square brackets on
    /// a line of its own.
    =>
    Entity, crate::base::token::Case::Lower;

    /// Verification information attached to a contact.
    (VERIFICATION_INFORMATION => "verificationinformation")
}

impl Entity {
    /// Returns the wire representation of the entity marker.
    pub fn marker(&self) -> String {
        format!("[{}]", self.as_str())
    }
}

//------------ ContactType ---------------------------------------------------

/// The type of a contact handle.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum ContactType {
    /// A natural person.
    Person,

    /// An organisation.
    Organisation,

    /// A request contact.
    ///
    /// This value is known but cannot be parsed from text since request
    /// contacts aren’t created through the contact operations.
    Request,
}

impl ContactType {
    /// Returns the canonical text of the contact type.
    pub const fn as_str(self) -> &'static str {
        match self {
            ContactType::Person => "PERSON",
            ContactType::Organisation => "ORG",
            ContactType::Request => "REQUEST",
        }
    }
}

//--- Token

impl Token for ContactType {
    const ACCEPTS_UNKNOWN: bool = false;

    fn normalize(&self) -> Self {
        *self
    }

    fn as_str(&self) -> &str {
        ContactType::as_str(*self)
    }
}

//--- FromStr

impl FromStr for ContactType {
    type Err = ContactTypeError;

    /// Parses a contact type ignoring case.
    ///
    /// Only `PERSON` and `ORG` are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("PERSON") {
            Ok(ContactType::Person)
        } else if s.eq_ignore_ascii_case("ORG") {
            Ok(ContactType::Organisation)
        } else {
            Err(ContactTypeError)
        }
    }
}

//--- Display

impl fmt::Display for ContactType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

//--- Serialize and Deserialize

#[cfg(feature = "serde")]
impl serde::Serialize for ContactType {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for ContactType {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Self, D::Error> {
        let s = <std::string::String as serde::Deserialize>::deserialize(
            deserializer,
        )?;
        // Unlike `FromStr`, this accepts every value `serialize` produces.
        if s.eq_ignore_ascii_case(ContactType::Request.as_str()) {
            Ok(ContactType::Request)
        } else {
            s.parse().map_err(serde::de::Error::custom)
        }
    }
}

//============ Error Types ===================================================

//------------ ContactTypeError ----------------------------------------------

/// A string was not a valid contact type.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ContactTypeError;

//--- Display and Error

impl fmt::Display for ContactTypeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("invalid contact type")
    }
}

impl std::error::Error for ContactTypeError {}

//============ Testing =======================================================
