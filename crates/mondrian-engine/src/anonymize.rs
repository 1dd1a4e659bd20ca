//! The end-to-end anonymization entry point.

use rayon::prelude::{IntoParallelRefIterator, ParallelIterator};
use tracing::{debug, info};

use mondrian_model::{AnonymizeError, AnonymizeOptions, Dataset, GeneralizedRecord, Result};

use crate::engine;
use crate::generalize::generalize_partition;
use crate::partition::Partition;

/// The outcome of a successful run: the leaf partitions and, parallel to
/// them, the generalized records of each equivalence class.
#[derive(Debug)]
pub struct Anonymization {
    leaves: Vec<Partition>,
    groups: Vec<Vec<GeneralizedRecord>>,
}

impl Anonymization {
    pub fn leaves(&self) -> &[Partition] {
        &self.leaves
    }

    pub fn groups(&self) -> &[Vec<GeneralizedRecord>] {
        &self.groups
    }

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    pub fn record_count(&self) -> usize {
        self.groups.iter().map(Vec::len).sum()
    }

    /// All generalized records, flattened across equivalence classes.
    pub fn records(&self) -> impl Iterator<Item = &GeneralizedRecord> {
        self.groups.iter().flatten()
    }
}

/// Anonymize `dataset` under the given options.
///
/// Validates the configuration, builds the partition tree, generalizes every
/// leaf, and enforces the k-anonymity guarantee. Any equivalence class below
/// k fails the whole run: no partial output exists.
///
/// # Errors
///
/// Configuration errors (`InvalidK`, `EmptyQidSet`, `QidOutOfRange`) are
/// detected before partitioning. `EmptyResult` means partitioning yielded no
/// non-empty groups; `InsufficientGroupSize` reports the first undersized
/// group observed after generalization.
pub fn anonymize(dataset: &Dataset, options: &AnonymizeOptions) -> Result<Anonymization> {
    options.validate(dataset)?;
    info!(
        records = dataset.len(),
        qids = options.qids.len(),
        k = options.k,
        strategy = ?options.strategy,
        "partitioning"
    );

    let leaves: Vec<Partition> = engine::partition(dataset, options)
        .into_iter()
        .filter(|leaf| !leaf.is_empty())
        .collect();
    if leaves.is_empty() {
        return Err(AnonymizeError::EmptyResult);
    }
    debug!(groups = leaves.len(), "partitioning complete");

    // Leaves are disjoint, so each one generalizes independently.
    let groups: Vec<Vec<GeneralizedRecord>> = leaves
        .par_iter()
        .map(|leaf| generalize_partition(dataset, leaf, &options.qids))
        .collect();

    for group in &groups {
        if group.len() < options.k {
            return Err(AnonymizeError::InsufficientGroupSize {
                size: group.len(),
                k: options.k,
            });
        }
    }

    info!(
        groups = groups.len(),
        records = groups.iter().map(Vec::len).sum::<usize>(),
        "anonymization complete"
    );
    Ok(Anonymization { leaves, groups })
}

#[cfg(test)]
mod tests {
    use super::*;
    use mondrian_model::{Record, Strategy};

    fn dataset(rows: &[&[&str]]) -> Dataset {
        Dataset::new(
            rows.iter()
                .map(|row| Record::new(row.iter().map(ToString::to_string).collect()))
                .collect(),
        )
    }

    #[test]
    fn undersized_group_fails_the_whole_run() {
        // A single record with k = 2: the only leaf has size k - 1.
        let dataset = dataset(&[&["a"]]);
        let options = AnonymizeOptions::new(vec![0], 2);
        let result = anonymize(&dataset, &options);
        assert!(matches!(
            result,
            Err(AnonymizeError::InsufficientGroupSize { size: 1, k: 2 })
        ));
    }

    #[test]
    fn empty_dataset_is_an_empty_result() {
        let dataset = Dataset::new(Vec::new());
        let options = AnonymizeOptions::new(vec![0], 2);
        assert!(matches!(
            anonymize(&dataset, &options),
            Err(AnonymizeError::EmptyResult)
        ));
    }

    #[test]
    fn groups_carry_identical_generalized_qids() {
        let dataset = dataset(&[
            &["20", "m"],
            &["25", "m"],
            &["60", "f"],
            &["65", "f"],
        ]);
        let options = AnonymizeOptions::new(vec![0, 1], 2).with_strategy(Strategy::Strict);
        let result = anonymize(&dataset, &options).expect("anonymizes");
        assert_eq!(result.record_count(), 4);
        for group in result.groups() {
            assert!(group.len() >= 2);
            let first = group[0].fields();
            for record in group {
                assert_eq!(record.fields(), first);
            }
        }
    }
}
