//! Domain records.

use crate::base::field::FieldList;
use crate::base::handle::DenicHandle;
use crate::base::token::FieldName;

//------------ DomainData ----------------------------------------------------

/// The data of a domain.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DomainData {
    /// The holders of the domain.
    pub holder_handles: Vec<DenicHandle>,

    /// The contacts for general requests.
    pub general_request_handles: Vec<DenicHandle>,

    /// The contacts for abuse reports.
    pub abuse_contact_handles: Vec<DenicHandle>,

    /// The host names of the name servers.
    pub name_servers: Vec<String>,
}

impl DomainData {
    /// Adds the domain data to a field list.
    ///
    /// Adds holders, general request contacts, abuse contacts, and name
    /// servers in that order. Empty handles are skipped.
    pub fn put_to_fields(&self, fields: &mut FieldList) {
        put_handles(fields, FieldName::HOLDER, &self.holder_handles);
        put_handles(
            fields,
            FieldName::GENERAL_REQUEST,
            &self.general_request_handles,
        );
        put_handles(
            fields,
            FieldName::ABUSE_CONTACT,
            &self.abuse_contact_handles,
        );
        fields.add(FieldName::NAME_SERVER, self.name_servers.iter().cloned());
    }
}

fn put_handles(
    fields: &mut FieldList,
    name: FieldName,
    handles: &[DenicHandle],
) {
    fields.add(
        name,
        handles
            .iter()
            .filter(|handle| !handle.is_empty())
            .map(ToString::to_string),
    );
}

//============ Testing =======================================================
