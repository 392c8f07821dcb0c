//! Handles of contacts.
//!
//! Contacts and request contacts at the registry are identified by a
//! handle such as `DENIC-1000006-SOME-CODE`. It consists of the literal
//! prefix `DENIC`, the registrar account the contact belongs to, and a
//! contact code chosen by the provider.

use std::fmt;
use std::str::FromStr;

//------------ DenicHandle ---------------------------------------------------

/// A handle of a contact.
///
/// The contact code is always kept in upper case.
///
/// A handle with account zero and an empty code is the empty handle. It
/// stands for an unset handle and has the empty string as its textual
/// representation.
#[derive(Clone, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct DenicHandle {
    /// The registrar account of the contact.
    reg_acc_id: u64,

    /// The contact code in upper case.
    contact_code: String,
}

impl DenicHandle {
    /// The literal prefix of all handles.
    pub const PREFIX: &'static str = "DENIC";

    /// The empty handle.
    pub const EMPTY: DenicHandle = DenicHandle {
        reg_acc_id: 0,
        contact_code: String::new(),
    };

    /// Creates a new handle from its components.
    pub fn new(reg_acc_id: u64, contact_code: &str) -> Self {
        DenicHandle {
            reg_acc_id,
            contact_code: contact_code.to_uppercase(),
        }
    }

    /// Returns the registrar account of the handle.
    pub fn reg_acc_id(&self) -> u64 {
        self.reg_acc_id
    }

    /// Returns the contact code of the handle.
    pub fn contact_code(&self) -> &str {
        &self.contact_code
    }

    /// Returns whether this is the empty handle.
    pub fn is_empty(&self) -> bool {
        self.reg_acc_id == 0 && self.contact_code.is_empty()
    }
}

//--- FromStr

impl FromStr for DenicHandle {
    type Err = HandleError;

    /// Parses a handle.
    ///
    /// The empty string results in the empty handle. Otherwise, the string
    /// has to consist of the prefix (ignoring case), the decimal account,
    /// and the contact code, separated by hyphens. The contact code may
    /// contain further hyphens.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Ok(DenicHandle::EMPTY);
        }

        let mut parts = s.splitn(3, '-');
        let (prefix, account, code) =
            match (parts.next(), parts.next(), parts.next()) {
                (Some(prefix), Some(account), Some(code)) => {
                    (prefix, account, code)
                }
                _ => return Err(HandleError::SegmentCount),
            };
        if !prefix.eq_ignore_ascii_case(Self::PREFIX) {
            return Err(HandleError::Prefix);
        }
        let reg_acc_id =
            account.parse::<u64>().map_err(|_| HandleError::AccountId)?;
        Ok(DenicHandle::new(reg_acc_id, code))
    }
}

//--- Display

impl fmt::Display for DenicHandle {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_empty() {
            return Ok(());
        }
        write!(f, "{}-{}-{}", Self::PREFIX, self.reg_acc_id, self.contact_code)
    }
}

//--- Serialize and Deserialize

#[cfg(feature = "serde")]
impl serde::Serialize for DenicHandle {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for DenicHandle {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Self, D::Error> {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

//============ Error Types ===================================================

//------------ HandleError ---------------------------------------------------

/// A string was not a valid handle.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum HandleError {
    /// The handle did not consist of three hyphen-separated parts.
    SegmentCount,

    /// The handle did not start with the correct prefix.
    Prefix,

    /// The registrar account was not a decimal number.
    AccountId,
}

//--- Display and Error

impl fmt::Display for HandleError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match *self {
            HandleError::SegmentCount => "invalid handle: missing components",
            HandleError::Prefix => "invalid handle: wrong prefix",
            HandleError::AccountId => "invalid handle: illegal account",
        })
    }
}

impl std::error::Error for HandleError {}

//============ Testing =======================================================
