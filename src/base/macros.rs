//! Macros making implementing token types easier.

/// Creates an open token type wrapping a text value.
///
/// The type stores its value in canonical form as determined by the
/// [`Case`] given as the second argument. Any text is accepted and
/// canonicalized; the listed values become associated constants.
///
/// This adds impls for `Token`, `From<&str>`, `From<String>`, `AsRef<str>`,
/// `Borrow<str>`, `PartialEq<str>`, and `Display`.
///
/// [`Case`]: crate::base::token::Case
macro_rules! open_token {
    ( $(#[$attr:meta])* =>
      $tokentype:ident, $case:expr;
      $( $(#[$variant_attr:meta])* ( $variant:ident => $value:literal ) )* ) => {
        $(#[$attr])*
        #[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
        pub struct $tokentype(::std::borrow::Cow<'static, str>);

        impl $tokentype {
            $(
                $(#[$variant_attr])*
                pub const $variant: $tokentype = $tokentype(
                    ::std::borrow::Cow::Borrowed($value)
                );
            )*
        }

        impl $tokentype {
            /// Creates a value from text, canonicalizing it.
            pub fn new(
                value: impl Into<::std::borrow::Cow<'static, str>>
            ) -> Self {
                Self($case.apply(value.into()))
            }

            /// Returns the canonical text of the value.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Returns whether the value is one of the well-known values.
            pub fn is_well_known(&self) -> bool {
                matches!(self.as_str(), $( $value )|*)
            }
        }

        //--- Token

        impl $crate::base::token::Token for $tokentype {
            const ACCEPTS_UNKNOWN: bool = true;

            fn normalize(&self) -> Self {
                Self::new(self.0.clone())
            }

            fn as_str(&self) -> &str {
                &self.0
            }
        }

        //--- From

        impl From<&str> for $tokentype {
            fn from(value: &str) -> Self {
                Self::new(value.to_owned())
            }
        }

        impl From<String> for $tokentype {
            fn from(value: String) -> Self {
                Self::new(value)
            }
        }

        impl From<&$tokentype> for $tokentype {
            fn from(value: &$tokentype) -> Self {
                value.clone()
            }
        }

        //--- AsRef and Borrow

        impl AsRef<str> for $tokentype {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl ::std::borrow::Borrow<str> for $tokentype {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        //--- PartialEq

        impl PartialEq<str> for $tokentype {
            fn eq(&self, other: &str) -> bool {
                self.as_str() == other
            }
        }

        impl PartialEq<&str> for $tokentype {
            fn eq(&self, other: &&str) -> bool {
                self.as_str() == *other
            }
        }

        //--- Display

        impl ::std::fmt::Display for $tokentype {
            fn fmt(
                &self,
                f: &mut ::std::fmt::Formatter,
            ) -> ::std::fmt::Result {
                f.write_str(&self.0)
            }
        }
    }
}
