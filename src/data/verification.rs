//! Verification information of contacts.
//!
//! A contact may carry any number of records describing how its data was
//! verified. Each record is a nested entity within the contact’s fields.

use crate::base::field::FieldList;
use crate::base::token::{Entity, FieldName};
use time::macros::format_description;
use time::{OffsetDateTime, UtcOffset};
use tracing::debug;

//------------ VerificationInformation ---------------------------------------

/// A record on the verification of a contact’s data.
///
/// Members that are empty or unset are not transmitted.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VerificationInformation {
    /// The data items that were verified, such as `name` or `address`.
    pub verified_claims: Vec<String>,

    /// The outcome of the verification.
    pub result: String,

    /// The provider’s reference for the verification.
    pub reference: String,

    /// The point in time of the verification.
    pub timestamp: Option<OffsetDateTime>,

    /// The evidence the verification was based on.
    pub evidence: String,

    /// The method used for the verification.
    pub method: String,

    /// The trust framework the verification followed.
    pub trust_framework: String,
}

impl VerificationInformation {
    /// Adds the record as a nested entity to a field list.
    pub fn put_to_fields(&self, fields: &mut FieldList) {
        let mut entity = fields.add_entity(Entity::VERIFICATION_INFORMATION);
        entity.add(
            FieldName::VERIFIED_CLAIM,
            self.verified_claims
                .iter()
                .filter(|claim| !claim.is_empty())
                .cloned(),
        );
        for (name, value) in [
            (FieldName::VERIFICATION_RESULT, &self.result),
            (FieldName::VERIFICATION_REFERENCE, &self.reference),
        ] {
            if !value.is_empty() {
                entity.add_one(name, value.as_str());
            }
        }
        if let Some(timestamp) = self.timestamp {
            match format_timestamp(timestamp) {
                Ok(timestamp) => entity
                    .add_one(FieldName::VERIFICATION_TIMESTAMP, timestamp),
                Err(err) => debug!("Omitting verification timestamp: {err}"),
            }
        }
        for (name, value) in [
            (FieldName::VERIFICATION_EVIDENCE, &self.evidence),
            (FieldName::VERIFICATION_METHOD, &self.method),
            (FieldName::TRUST_FRAMEWORK, &self.trust_framework),
        ] {
            if !value.is_empty() {
                entity.add_one(name, value.as_str());
            }
        }
    }
}

/// Formats a timestamp as `YYYY-MM-DDTHH:MM:SSZ` in UTC.
///
/// This only fails if the timestamp cannot provide a component of the
/// format, which an [`OffsetDateTime`] always can.
fn format_timestamp(
    timestamp: OffsetDateTime,
) -> Result<String, time::error::Format> {
    timestamp.to_offset(UtcOffset::UTC).format(format_description!(
        "[year]-[month]-[day]T[hour]:[minute]:[second]Z"
    ))
}

//============ Testing =======================================================
