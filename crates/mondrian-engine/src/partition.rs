use std::collections::BTreeSet;

use mondrian_model::{Dataset, Record};

/// A multiset of records within one dataset, held as row indices so that
/// records are never cloned while the partition tree is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition {
    rows: Vec<usize>,
}

impl Partition {
    pub fn new(rows: Vec<usize>) -> Self {
        Self { rows }
    }

    /// The partition covering the whole dataset.
    pub fn root(dataset: &Dataset) -> Self {
        Self {
            rows: (0..dataset.len()).collect(),
        }
    }

    pub fn rows(&self) -> &[usize] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterate the partition's records in row order.
    pub fn records<'a>(&'a self, dataset: &'a Dataset) -> impl Iterator<Item = &'a Record> + 'a {
        self.rows.iter().map(move |&row| &dataset.records()[row])
    }

    /// Number of distinguishable records, deduplicated by full record
    /// content. The split validity check counts these, not rows: duplicate
    /// rows contribute once.
    pub fn distinct_len(&self, dataset: &Dataset) -> usize {
        self.records(dataset).collect::<BTreeSet<_>>().len()
    }
}
