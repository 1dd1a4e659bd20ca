//! Configuration options for a single anonymization run.

use serde::{Deserialize, Serialize};

use crate::error::{AnonymizeError, Result};
use crate::record::Dataset;

/// Splitting strategy used by the partition engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Strategy {
    /// All records at or below the median domain index go to one side.
    /// Refuses to split when the median falls on the last domain value.
    #[default]
    Strict,
    /// Records tied at the median value are distributed across both sides
    /// up to the median rank, yielding more balanced partitions.
    Relaxed,
}

/// Options controlling one anonymization run.
///
/// `qids` is the global quasi-identifier set: column indices into each
/// record, fixed for the whole run. Iteration order matters for attribute
/// selection tie-breaks and is preserved as given.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnonymizeOptions {
    pub qids: Vec<usize>,
    pub k: usize,
    pub strategy: Strategy,
}

impl AnonymizeOptions {
    pub fn new(qids: Vec<usize>, k: usize) -> Self {
        Self {
            qids,
            k,
            strategy: Strategy::default(),
        }
    }

    #[must_use]
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Check configuration against a loaded dataset before partitioning.
    ///
    /// # Errors
    ///
    /// Returns `InvalidK` when k < 1, `EmptyQidSet` when no quasi-identifier
    /// indices were supplied, and `QidOutOfRange` when an index does not fit
    /// the dataset's record arity.
    pub fn validate(&self, dataset: &Dataset) -> Result<()> {
        if self.k < 1 {
            return Err(AnonymizeError::InvalidK { k: self.k });
        }
        if self.qids.is_empty() {
            return Err(AnonymizeError::EmptyQidSet);
        }
        if let Some(arity) = dataset.arity() {
            for &qid in &self.qids {
                if qid >= arity {
                    return Err(AnonymizeError::QidOutOfRange { qid, arity });
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Record;

    fn dataset() -> Dataset {
        Dataset::new(vec![Record::new(vec![
            "a".to_string(),
            "b".to_string(),
            "c".to_string(),
        ])])
    }

    #[test]
    fn rejects_zero_k() {
        let options = AnonymizeOptions::new(vec![0], 0);
        assert!(matches!(
            options.validate(&dataset()),
            Err(AnonymizeError::InvalidK { k: 0 })
        ));
    }

    #[test]
    fn rejects_empty_qid_set() {
        let options = AnonymizeOptions::new(Vec::new(), 2);
        assert!(matches!(
            options.validate(&dataset()),
            Err(AnonymizeError::EmptyQidSet)
        ));
    }

    #[test]
    fn rejects_out_of_range_qid() {
        let options = AnonymizeOptions::new(vec![0, 3], 2);
        assert!(matches!(
            options.validate(&dataset()),
            Err(AnonymizeError::QidOutOfRange { qid: 3, arity: 3 })
        ));
    }

    #[test]
    fn accepts_valid_configuration() {
        let options = AnonymizeOptions::new(vec![0, 2], 2).with_strategy(Strategy::Relaxed);
        assert!(options.validate(&dataset()).is_ok());
    }
}
