//! Configuration of the protocol dialect.

use crate::base::token::Version;

//------------ Config --------------------------------------------------------

/// The configuration shared by all query constructors.
///
/// A value of this type is passed to every typed constructor of
/// [`Query`][crate::query::Query]. Keeping one per connection allows the
/// version to be negotiated per connection.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    /// The protocol version placed into queries.
    version: Version,
}

impl Config {
    /// Creates a new, default config.
    ///
    /// The config uses the latest protocol version.
    pub fn new() -> Self {
        Default::default()
    }

    /// Creates a config for the given protocol version.
    pub fn with_version(version: impl Into<Version>) -> Self {
        Config {
            version: version.into(),
        }
    }

    /// Returns the protocol version.
    pub fn version(&self) -> &Version {
        &self.version
    }

    /// Sets the protocol version.
    pub fn set_version(&mut self, version: impl Into<Version>) {
        self.version = version.into()
    }
}

//--- Default

impl Default for Config {
    fn default() -> Self {
        Self {
            version: Version::LATEST,
        }
    }
}

//============ Testing =======================================================
