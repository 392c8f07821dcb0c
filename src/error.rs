//! High-level error type.
//!
//! Each module reports its own, specific error type. The type [`Error`]
//! combines all of them for callers that don’t need to tell them apart.

use crate::base::field::KvError;
use crate::base::handle::HandleError;
use crate::base::token::ContactTypeError;
use crate::query::ParseError;
use std::{error, fmt, result};

pub type Result<T> = result::Result<T, Error>;

//------------ Error ---------------------------------------------------------

/// Any error that can happen while processing RRI data.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// A contact type was not recognized.
    ContactType(ContactTypeError),

    /// A handle was malformed.
    Handle(HandleError),

    /// A query could not be parsed.
    Parse(ParseError),
}

//--- From

impl From<ContactTypeError> for Error {
    fn from(err: ContactTypeError) -> Self {
        Error::ContactType(err)
    }
}

impl From<HandleError> for Error {
    fn from(err: HandleError) -> Self {
        Error::Handle(err)
    }
}

impl From<ParseError> for Error {
    fn from(err: ParseError) -> Self {
        Error::Parse(err)
    }
}

impl From<KvError> for Error {
    fn from(err: KvError) -> Self {
        Error::Parse(err.into())
    }
}

//--- Display and Error

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::ContactType(ref err) => err.fmt(f),
            Error::Handle(ref err) => err.fmt(f),
            Error::Parse(ref err) => err.fmt(f),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match *self {
            Error::ContactType(ref err) => Some(err),
            Error::Handle(ref err) => Some(err),
            Error::Parse(ref err) => Some(err),
        }
    }
}

//============ Testing =======================================================
