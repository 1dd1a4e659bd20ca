//! Attribute domains and frequency tables.
//!
//! The domain of an attribute within a partition is its sorted list of
//! distinct values. Ordering here is always lexicographic on the raw
//! textual value, even for numeric-looking fields: the median and the
//! split boundaries depend on this ordering, and generalization's
//! numeric-aware sort must not leak into it.

use std::collections::BTreeMap;

use mondrian_model::Dataset;

use crate::partition::Partition;

/// Sorted distinct values of one quasi-identifier within one partition.
///
/// QID indices are validated against the record arity before partitioning
/// starts; a missing field contributes the empty string.
pub fn attribute_domain(dataset: &Dataset, partition: &Partition, qid: usize) -> Vec<String> {
    let mut values: Vec<&str> = partition
        .records(dataset)
        .map(|record| record.field(qid).unwrap_or_default())
        .collect();
    values.sort_unstable();
    values.dedup();
    values.into_iter().map(ToString::to_string).collect()
}

/// Occurrence count per domain value, parallel to `domain`'s order.
pub fn frequency_table(
    dataset: &Dataset,
    partition: &Partition,
    qid: usize,
    domain: &[String],
) -> Vec<usize> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for record in partition.records(dataset) {
        *counts.entry(record.field(qid).unwrap_or_default()).or_insert(0) += 1;
    }
    domain
        .iter()
        .map(|value| counts.get(value.as_str()).copied().unwrap_or(0))
        .collect()
}
