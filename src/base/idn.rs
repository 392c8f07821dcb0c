//! Internationalized domain names.
//!
//! Queries concerning a domain carry the domain’s name twice: once in its
//! Unicode form in the `domain` field and once in its ASCII-compatible
//! encoding in the `domain-ace` field. The function [`put_domain`] adds
//! both, starting from whichever form it is given.
//!
//! The conversion between the two forms is performed by an [`IdnaCodec`].
//! The default codec [`Uts46`] uses the [idna] crate.

use super::field::FieldList;
use super::token::FieldName;
use tracing::debug;

/// The prefix of labels in ASCII-compatible encoding.
pub const ACE_PREFIX: &str = "xn--";

//------------ IdnaCodec -----------------------------------------------------

/// A converter between the two forms of a domain name.
///
/// Both directions can fail. A failure is reported as `None`.
pub trait IdnaCodec {
    /// Converts a domain name into its ASCII-compatible encoding.
    fn to_ascii(&self, domain: &str) -> Option<String>;

    /// Converts a domain name into its Unicode form.
    fn to_unicode(&self, domain: &str) -> Option<String>;
}

//------------ Uts46 ---------------------------------------------------------

/// The IDNA codec as defined by Unicode Technical Standard #46.
#[derive(Clone, Copy, Debug, Default)]
pub struct Uts46;

impl IdnaCodec for Uts46 {
    fn to_ascii(&self, domain: &str) -> Option<String> {
        idna::domain_to_ascii(domain).ok()
    }

    fn to_unicode(&self, domain: &str) -> Option<String> {
        match idna::domain_to_unicode(domain) {
            (unicode, Ok(())) => Some(unicode),
            (_, Err(_)) => None,
        }
    }
}

//------------ put_domain ----------------------------------------------------

/// Adds the domain name in both of its forms to a field list.
///
/// Uses the default codec. See [`put_domain_with`] for details.
pub fn put_domain(fields: &mut FieldList, domain: &str) {
    put_domain_with(fields, domain, &Uts46)
}

/// Adds the domain name in both of its forms using the given codec.
///
/// If `domain` starts with the ACE prefix (ignoring case), it is added as
/// the `domain-ace` field and its Unicode form, if it can be decoded, as
/// the `domain` field. Otherwise, it is added as the `domain` field and its
/// ASCII-compatible encoding, if it can be encoded, as the `domain-ace`
/// field.
///
/// A failed conversion is not an error. The given form alone is still a
/// valid request, so the converted field is merely left out.
pub fn put_domain_with<C: IdnaCodec + ?Sized>(
    fields: &mut FieldList,
    domain: &str,
    codec: &C,
) {
    if has_ace_prefix(domain) {
        fields.add_one(FieldName::DOMAIN_ACE, domain);
        match codec.to_unicode(domain) {
            Some(idn) => fields.add_one(FieldName::DOMAIN_IDN, idn),
            None => debug!("Cannot decode {domain}, omitting Unicode form"),
        }
    } else {
        fields.add_one(FieldName::DOMAIN_IDN, domain);
        match codec.to_ascii(domain) {
            Some(ace) => fields.add_one(FieldName::DOMAIN_ACE, ace),
            None => debug!("Cannot encode {domain}, omitting ACE form"),
        }
    }
}

/// Returns whether the domain starts with the ACE prefix ignoring case.
fn has_ace_prefix(domain: &str) -> bool {
    domain
        .get(..ACE_PREFIX.len())
        .map_or(false, |prefix| prefix.eq_ignore_ascii_case(ACE_PREFIX))
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;

    struct Failing;

    impl IdnaCodec for Failing {
        fn to_ascii(&self, _: &str) -> Option<String> {
            None
        }

        fn to_unicode(&self, _: &str) -> Option<String> {
            None
        }
    }

    #[test]
    fn ace_prefix() {
        assert!(has_ace_prefix("xn--mnchen-3ya.de"));
        assert!(has_ace_prefix("XN--MNCHEN-3YA.DE"));
        assert!(!has_ace_prefix("xn-"));
        assert!(!has_ace_prefix("münchen.de"));
        assert!(!has_ace_prefix("ü"));
        assert!(!has_ace_prefix("www.xn--mnchen-3ya.de"));
    }

    #[test]
    fn from_ace() {
        let mut fields = FieldList::new();
        put_domain(&mut fields, "xn--mnchen-3ya.de");
        assert_eq!(fields.len(), 2);
        assert_eq!(fields.first_value("domain-ace"), "xn--mnchen-3ya.de");
        assert_eq!(fields.first_value("domain"), "münchen.de");
    }

    #[test]
    fn from_idn() {
        let mut fields = FieldList::new();
        put_domain(&mut fields, "münchen.de");
        assert_eq!(fields.len(), 2);
        assert_eq!(fields.first_value("domain"), "münchen.de");
        assert_eq!(fields.first_value("domain-ace"), "xn--mnchen-3ya.de");
    }

    #[test]
    fn ascii_only() {
        let mut fields = FieldList::new();
        put_domain(&mut fields, "example.de");
        assert_eq!(fields.first_value("domain"), "example.de");
        assert_eq!(fields.first_value("domain-ace"), "example.de");
    }

    #[test]
    fn failed_conversion() {
        let mut fields = FieldList::new();
        put_domain_with(&mut fields, "münchen.de", &Failing);
        assert_eq!(fields.len(), 1);
        assert_eq!(fields.first_value("domain"), "münchen.de");
        assert_eq!(fields.values("domain-ace").count(), 0);

        let mut fields = FieldList::new();
        put_domain_with(&mut fields, "xn--mnchen-3ya.de", &Failing);
        assert_eq!(fields.len(), 1);
        assert_eq!(fields.first_value("domain-ace"), "xn--mnchen-3ya.de");
        assert_eq!(fields.values("domain").count(), 0);
    }
}
