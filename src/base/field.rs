//! Ordered lists of fields.
//!
//! The native representation of all RRI data is an ordered list of fields.
//! Each field has a name and a text value. A name may appear any number of
//! times, which is how multi-valued fields such as the name servers of a
//! domain are expressed. The order of the fields is significant and is
//! preserved by all operations.
//!
//! A list may also contain nested records. Such a record is introduced by
//! an entity marker, written on the wire as the entity’s name in square
//! brackets, followed by the fields of the record. Records are not nested,
//! the fields of two records never interleave, and all records follow the
//! top-level fields. The type [`EntityFields`] returned by
//! [`FieldList::add_entity`] and the placement of top-level fields by
//! [`FieldList::add`] guarantee this when building a list.
//!
//! The text representation of a list is one field per line with the name
//! and value separated by a colon. The same representation is used by
//! queries and responses, so [`FieldList::parse_kv`] serves both.

use super::token::{Entity, FieldName};
use std::fmt::Write;
use std::{fmt, slice};
use tracing::{debug, trace};

//------------ Field ---------------------------------------------------------

/// A single entry of a field list.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum Field {
    /// A field with a name and a value.
    Value {
        /// The canonical name of the field.
        name: FieldName,

        /// The value of the field. It may be empty.
        value: String,
    },

    /// A marker introducing the fields of a nested record.
    Entity(Entity),
}

impl Field {
    /// Returns the name and value if this is a regular field.
    pub fn as_value(&self) -> Option<(&FieldName, &str)> {
        match self {
            Field::Value { name, value } => Some((name, value.as_str())),
            Field::Entity(_) => None,
        }
    }

    /// Returns whether this is an entity marker.
    pub fn is_entity(&self) -> bool {
        matches!(self, Field::Entity(_))
    }
}

//--- Display

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Field::Value { name, value } => write!(f, "{}: {}", name, value),
            Field::Entity(entity) => f.write_str(&entity.marker()),
        }
    }
}

//------------ FieldList -----------------------------------------------------

/// An ordered list of fields.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct FieldList {
    fields: Vec<Field>,
}

impl FieldList {
    /// Creates a new, empty field list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of entries including entity markers.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns an iterator over all entries in order.
    pub fn iter(&self) -> slice::Iter<'_, Field> {
        self.fields.iter()
    }

    /// Adds one top-level field for each of the values.
    ///
    /// The fields are added in the order of the values after all existing
    /// top-level fields. If the list already contains nested records, the
    /// fields go before the first of them so they never become part of a
    /// record. If `values` is empty, nothing is added.
    pub fn add<V>(&mut self, name: impl Into<FieldName>, values: V)
    where
        V: IntoIterator,
        V::Item: Into<String>,
    {
        let name = name.into();
        let at = self.top_level_len();
        self.fields.splice(
            at..at,
            values.into_iter().map(|value| Field::Value {
                name: name.clone(),
                value: value.into(),
            }),
        );
    }

    /// Adds a single top-level field.
    ///
    /// Like [`add`][Self::add], the field goes before any nested records.
    pub fn add_one(
        &mut self,
        name: impl Into<FieldName>,
        value: impl Into<String>,
    ) {
        let at = self.top_level_len();
        self.fields.insert(
            at,
            Field::Value {
                name: name.into(),
                value: value.into(),
            },
        )
    }

    /// Appends a field to the end of the list.
    ///
    /// If the list ends in a nested record, the field becomes part of it.
    fn push_value(&mut self, name: FieldName, value: String) {
        self.fields.push(Field::Value { name, value })
    }

    /// Starts a nested record of the given entity.
    ///
    /// Appends the entity marker and returns a value through which the
    /// fields of the record are added. While it is alive, the list cannot
    /// be otherwise modified, so the record’s fields follow its marker
    /// without interruption.
    pub fn add_entity(
        &mut self,
        entity: impl Into<Entity>,
    ) -> EntityFields<'_> {
        self.fields.push(Field::Entity(entity.into()));
        EntityFields { list: self }
    }

    /// Returns all values for the field name in order.
    ///
    /// The iterator is empty if there are no such fields. Fields inside
    /// nested records are included.
    pub fn values(
        &self,
        name: impl Into<FieldName>,
    ) -> impl Iterator<Item = &str> + '_ {
        let name = name.into();
        self.fields.iter().filter_map(move |field| match field {
            Field::Value { name: item, value } if *item == name => {
                Some(value.as_str())
            }
            _ => None,
        })
    }

    /// Returns the first value for the field name.
    ///
    /// Returns an empty string if there is no such field. Thus, a missing
    /// field and a field with an empty value cannot be told apart.
    pub fn first_value(&self, name: impl Into<FieldName>) -> &str {
        self.values(name).next().unwrap_or("")
    }

    /// Copies all entries of `self` into `other`.
    ///
    /// The top-level fields of `self` are added after the top-level fields
    /// of `other` and the nested records of `self` are appended after the
    /// records of `other`. Entity markers are copied along with their
    /// fields so that the records keep their shape. The order within each
    /// part is preserved and `self` is left unchanged.
    pub fn copy_to(&self, other: &mut FieldList) {
        let (top, records) = self.fields.split_at(self.top_level_len());
        let at = other.top_level_len();
        other.fields.splice(at..at, top.iter().cloned());
        other.fields.extend(records.iter().cloned());
    }

    /// Returns an iterator over the nested records of the list.
    pub fn entity_blocks(&self) -> EntityBlocks<'_> {
        EntityBlocks {
            fields: &self.fields[self.top_level_len()..],
        }
    }

    /// Returns the top-level fields preceding the first nested record.
    pub fn top_level(&self) -> &[Field] {
        &self.fields[..self.top_level_len()]
    }

    /// Returns the index of the first entity marker or the list’s length.
    fn top_level_len(&self) -> usize {
        self.fields
            .iter()
            .position(Field::is_entity)
            .unwrap_or(self.fields.len())
    }
}

/// # Key-Value Encoding
///
impl FieldList {
    /// Parses the key-value representation of a field list.
    ///
    /// Lines are trimmed and empty lines are skipped. Every other line
    /// must either be an entity marker, i.e., an entity name enclosed in
    /// square brackets, or contain a colon. The first colon separates the
    /// field name from the value, both of which are trimmed.
    pub fn parse_kv(s: &str) -> Result<Self, KvError> {
        let mut res = FieldList::new();
        for (idx, line) in s.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let lineno = idx + 1;

            if let Some(entity) = entity_marker(line) {
                if entity.is_empty() {
                    debug!("Rejecting empty entity marker in line {lineno}");
                    return Err(KvError::EmptyEntity { line: lineno });
                }
                trace!("Entity marker [{entity}] in line {lineno}");
                res.fields.push(Field::Entity(entity.into()));
                continue;
            }

            let (key, value) = match line.split_once(':') {
                Some(parts) => parts,
                None => {
                    debug!("Rejecting line {lineno} without separator");
                    return Err(KvError::MalformedLine { line: lineno });
                }
            };
            let key = key.trim();
            trace!("Field {key} in line {lineno}");
            res.push_value(key.into(), value.trim().to_owned());
        }
        Ok(res)
    }

    /// Returns the key-value representation of the field list.
    ///
    /// Each entry is written on a line of its own. There is no trailing
    /// line feed.
    pub fn encode_kv(&self) -> String {
        let mut res = String::new();
        for field in &self.fields {
            if !res.is_empty() {
                res.push('\n');
            }
            // Writing to a string never fails.
            let _ = write!(res, "{}", field);
        }
        res
    }
}

/// Returns the entity name if the line is an entity marker.
fn entity_marker(line: &str) -> Option<&str> {
    let name = line.strip_prefix('[')?.strip_suffix(']')?;
    if name.contains(':') {
        None
    } else {
        Some(name.trim())
    }
}

//--- IntoIterator

impl<'a> IntoIterator for &'a FieldList {
    type Item = &'a Field;
    type IntoIter = slice::Iter<'a, Field>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

//--- Display

impl fmt::Display for FieldList {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.encode_kv())
    }
}

//------------ EntityFields --------------------------------------------------

/// The fields of a nested record being added to a field list.
///
/// A value of this type is returned by [`FieldList::add_entity`].
pub struct EntityFields<'a> {
    list: &'a mut FieldList,
}

impl EntityFields<'_> {
    /// Appends one field of the record for each of the values.
    pub fn add<V>(&mut self, name: impl Into<FieldName>, values: V)
    where
        V: IntoIterator,
        V::Item: Into<String>,
    {
        let name = name.into();
        for value in values {
            self.list.push_value(name.clone(), value.into())
        }
    }

    /// Appends a single field of the record.
    pub fn add_one(
        &mut self,
        name: impl Into<FieldName>,
        value: impl Into<String>,
    ) {
        self.list.push_value(name.into(), value.into())
    }
}

//------------ EntityBlocks --------------------------------------------------

/// An iterator over the nested records of a field list.
///
/// Each item is the entity and the fields following its marker up to the
/// next marker or the end of the list.
pub struct EntityBlocks<'a> {
    fields: &'a [Field],
}

impl<'a> Iterator for EntityBlocks<'a> {
    type Item = (&'a Entity, &'a [Field]);

    fn next(&mut self) -> Option<Self::Item> {
        let (first, rest) = self.fields.split_first()?;
        let entity = match first {
            Field::Entity(entity) => entity,
            Field::Value { .. } => return None,
        };
        let end = rest.iter().position(Field::is_entity).unwrap_or(rest.len());
        let (block, tail) = rest.split_at(end);
        self.fields = tail;
        Some((entity, block))
    }
}

//============ Error Types ===================================================

//------------ KvError -------------------------------------------------------

/// The key-value representation of a field list was malformed.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum KvError {
    /// A line contained neither a separator nor an entity marker.
    MalformedLine {
        /// The number of the offending line, starting at 1.
        line: usize,
    },

    /// An entity marker without a name.
    EmptyEntity {
        /// The number of the offending line, starting at 1.
        line: usize,
    },
}

//--- Display and Error

impl fmt::Display for KvError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            KvError::MalformedLine { line } => write!(
                f, "line {}: must be key-value separated by ':'", line
            ),
            KvError::EmptyEntity { line } => {
                write!(f, "line {}: empty entity name", line)
            }
        }
    }
}

impl std::error::Error for KvError {}

//============ Testing =======================================================
