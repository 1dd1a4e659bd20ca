use serde::{Deserialize, Serialize};

/// One row of the source table: an ordered, fixed-arity sequence of field
/// values in the untyped textual domain. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Record {
    fields: Vec<String>,
}

impl Record {
    pub fn new(fields: Vec<String>) -> Self {
        Self { fields }
    }

    /// Number of fields in this record.
    pub fn arity(&self) -> usize {
        self.fields.len()
    }

    pub fn field(&self, index: usize) -> Option<&str> {
        self.fields.get(index).map(String::as_str)
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }
}

impl From<Vec<String>> for Record {
    fn from(fields: Vec<String>) -> Self {
        Self::new(fields)
    }
}

/// The full in-memory record set for one run, created once at load time and
/// never mutated afterwards. Partitioning indexes into it rather than
/// cloning records.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dataset {
    header: Option<Vec<String>>,
    records: Vec<Record>,
}

impl Dataset {
    pub fn new(records: Vec<Record>) -> Self {
        Self {
            header: None,
            records,
        }
    }

    #[must_use]
    pub fn with_header(mut self, header: Vec<String>) -> Self {
        self.header = Some(header);
        self
    }

    /// The source header row, when one was present and skipped on load.
    pub fn header(&self) -> Option<&[String]> {
        self.header.as_deref()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Field arity shared by all records, or `None` for an empty dataset.
    pub fn arity(&self) -> Option<usize> {
        self.records.first().map(Record::arity)
    }
}
