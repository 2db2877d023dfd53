//! Type definitions for parsed CSV records

use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

/// One data row keyed by header name
///
/// Keys are exactly the header list of the parse, in header order. A key whose
/// column was missing from a short row maps to `None`. Duplicate header names
/// share one key: the later column's value wins and the key keeps its first
/// position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    fields: IndexMap<String, Option<String>>,
}

impl Record {
    /// Create an empty record
    pub fn new() -> Self {
        Self::default()
    }

    /// Zip a header list against the fields of one row
    ///
    /// Extra fields beyond the header count are dropped.
    pub fn from_row(headers: &[String], row: Vec<String>) -> Self {
        let mut values = row.into_iter();
        let mut record = Record {
            fields: IndexMap::with_capacity(headers.len()),
        };
        for header in headers {
            record.insert(header.clone(), values.next());
        }
        record
    }

    /// Set the value for a key, overwriting any previous value
    pub fn insert(&mut self, key: String, value: Option<String>) {
        self.fields.insert(key, value);
    }

    /// Value for a key, `None` if the key is unknown or its value is absent
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(|v| v.as_deref())
    }

    /// Check whether the key belongs to this record (present or absent)
    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Check whether the key has a value
    pub fn is_present(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Keys in header order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Key/value pairs in header order
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_deref()))
    }

    /// Number of keys
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if the record has no keys
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

// Absent values are left out of the map, so a short row renders without
// the trailing keys.
impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let present = self.fields.values().filter(|v| v.is_some()).count();
        let mut map = serializer.serialize_map(Some(present))?;
        for (key, value) in &self.fields {
            if let Some(value) = value {
                map.serialize_entry(key, value)?;
            }
        }
        map.end()
    }
}

/// Ordered records of one document together with its header list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordSet {
    headers: Vec<String>,
    records: Vec<Record>,
}

impl RecordSet {
    /// Create a record set with no records yet
    pub fn new(headers: Vec<String>) -> Self {
        RecordSet {
            headers,
            records: Vec::new(),
        }
    }

    /// Zip a row against the headers and append it
    pub fn push_row(&mut self, row: Vec<String>) {
        let record = Record::from_row(&self.headers, row);
        self.records.push(record);
    }

    /// Header list from the first row
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Records in row order
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Iterate over records in row order
    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Get record at index
    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if there are no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Consume into the records
    pub fn into_records(self) -> Vec<Record> {
        self.records
    }
}

impl<'a> IntoIterator for &'a RecordSet {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

// Serialized as the bare array of records; headers only shape the keys.
impl Serialize for RecordSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.records.len()))?;
        for record in &self.records {
            seq.serialize_element(record)?;
        }
        seq.end()
    }
}
