//! Contact records.

use super::verification::VerificationInformation;
use crate::base::field::FieldList;
use crate::base::token::{ContactType, FieldName};

//------------ ContactData ---------------------------------------------------

/// The data of a contact handle.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContactData {
    /// The type of the contact.
    pub contact_type: ContactType,

    /// The name of the contact.
    pub name: String,

    /// The organisation of the contact.
    ///
    /// This may span multiple lines.
    pub organisation: String,

    /// The street address of the contact.
    ///
    /// This may span multiple lines.
    pub address: String,

    /// The postal code.
    pub postal_code: String,

    /// The city.
    pub city: String,

    /// The two-letter country code.
    pub country_code: String,

    /// The email addresses of the contact.
    pub email: Vec<String>,

    /// The phone number of the contact.
    pub phone: String,

    /// Information on how the data was verified.
    pub verification_information: Vec<VerificationInformation>,
}

impl ContactData {
    /// Creates contact data of the given type with all other members empty.
    pub fn new(contact_type: ContactType) -> Self {
        ContactData {
            contact_type,
            name: String::new(),
            organisation: String::new(),
            address: String::new(),
            postal_code: String::new(),
            city: String::new(),
            country_code: String::new(),
            email: Vec::new(),
            phone: String::new(),
            verification_information: Vec::new(),
        }
    }

    /// Adds the contact data to a field list.
    ///
    /// Each line of the organisation and the address becomes a field of
    /// its own. The verification information is added last, each record
    /// as a nested entity.
    pub fn put_to_fields(&self, fields: &mut FieldList) {
        fields.add_one(FieldName::TYPE, self.contact_type.as_str());
        fields.add_one(FieldName::NAME, self.name.as_str());
        fields.add(FieldName::ORGANISATION, split_lines(&self.organisation));
        fields.add(FieldName::ADDRESS, split_lines(&self.address));
        fields.add_one(FieldName::POSTAL_CODE, self.postal_code.as_str());
        fields.add_one(FieldName::CITY, self.city.as_str());
        fields.add_one(FieldName::COUNTRY_CODE, self.country_code.as_str());
        fields.add(FieldName::EMAIL, self.email.iter().cloned());
        fields.add_one(FieldName::PHONE, self.phone.as_str());

        for info in &self.verification_information {
            info.put_to_fields(fields);
        }
    }
}

/// Splits text into lines accepting any line break convention.
///
/// An empty string results in a single empty line.
fn split_lines(s: &str) -> impl Iterator<Item = &str> {
    let mut lines = Vec::new();
    let mut rest = s;
    while let Some(pos) = rest.find(['\r', '\n']) {
        lines.push(&rest[..pos]);
        let skip = if rest[pos..].starts_with("\r\n") { 2 } else { 1 };
        rest = &rest[pos + skip..];
    }
    lines.push(rest);
    lines.into_iter()
}

//============ Testing =======================================================
