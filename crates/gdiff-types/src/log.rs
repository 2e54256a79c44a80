//! The ordered, append-only log of one comparison run.

use serde::{Deserialize, Serialize};

use crate::record::Record;

/// Ordered accumulation of [`Record`]s for a single comparison run.
///
/// Created empty at the start of a run, appended to as findings are made,
/// and handed back to the caller as an immutable snapshot. Records are
/// never removed or reordered, and logs are never merged across runs.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DifferenceLog {
    records: Vec<Record>,
}

impl DifferenceLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record, preserving insertion order.
    pub fn push(&mut self, record: Record) {
        self.records.push(record);
    }

    /// Append an `Info` record.
    pub fn info(&mut self, message: impl Into<String>) {
        self.push(Record::Info {
            message: message.into(),
        });
    }

    /// Append a `Warning` record.
    pub fn warning(&mut self, message: impl Into<String>) {
        self.push(Record::Warning {
            message: message.into(),
        });
    }

    /// Append an `Error` record.
    pub fn error(&mut self, message: impl Into<String>) {
        self.push(Record::Error {
            message: message.into(),
        });
    }

    /// Append a `Difference` record.
    pub fn difference(
        &mut self,
        path_a: impl Into<String>,
        path_b: impl Into<String>,
        kind: impl Into<String>,
        value_a: impl Into<String>,
        value_b: impl Into<String>,
    ) {
        self.push(Record::Difference {
            path_a: path_a.into(),
            path_b: path_b.into(),
            kind: kind.into(),
            value_a: value_a.into(),
            value_b: value_b.into(),
        });
    }

    /// The full accumulated sequence, in insertion order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Consume the log, yielding the record sequence.
    pub fn into_records(self) -> Vec<Record> {
        self.records
    }

    /// Iterate over records in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Total number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of `Difference` records.
    pub fn differences(&self) -> usize {
        self.records.iter().filter(|r| r.is_difference()).count()
    }

    /// Number of `Warning` records.
    pub fn warnings(&self) -> usize {
        self.records.iter().filter(|r| r.is_warning()).count()
    }

    /// Number of `Error` records.
    pub fn errors(&self) -> usize {
        self.records.iter().filter(|r| r.is_error()).count()
    }

    /// Number of `Info` records.
    pub fn infos(&self) -> usize {
        self.records.iter().filter(|r| r.is_info()).count()
    }
}

impl<'a> IntoIterator for &'a DifferenceLog {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
