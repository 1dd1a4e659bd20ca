//! The two splitting strategies.

use std::collections::BTreeMap;

use mondrian_model::Dataset;

use crate::median::Median;
use crate::partition::Partition;

fn domain_index<'a>(domain: &'a [String]) -> BTreeMap<&'a str, usize> {
    domain
        .iter()
        .enumerate()
        .map(|(i, value)| (value.as_str(), i))
        .collect()
}

/// Strict split: records at or below the median domain index go left, the
/// rest go right. The caller must have ruled out a median on the last
/// domain value, where every record would land left.
pub fn strict_split(
    dataset: &Dataset,
    partition: &Partition,
    qid: usize,
    domain: &[String],
    median: Median,
) -> (Partition, Partition) {
    let index_of = domain_index(domain);
    let mut left = Vec::new();
    let mut right = Vec::new();
    for &row in partition.rows() {
        let value = dataset.records()[row].field(qid).unwrap_or_default();
        if index_of[value] <= median.index {
            left.push(row);
        } else {
            right.push(row);
        }
    }
    (Partition::new(left), Partition::new(right))
}

/// Relaxed split: records strictly below the median index go left, strictly
/// above go right, and records tied at the median are pooled. Pool records
/// are then dealt out in partition order: a running count starts at the
/// left bucket's size, increments per pool record, and sends the record
/// left while the count stays at or below the median rank.
pub fn relaxed_split(
    dataset: &Dataset,
    partition: &Partition,
    qid: usize,
    domain: &[String],
    median: Median,
) -> (Partition, Partition) {
    let index_of = domain_index(domain);
    let mut left = Vec::new();
    let mut right = Vec::new();
    let mut pool = Vec::new();
    for &row in partition.rows() {
        let value = dataset.records()[row].field(qid).unwrap_or_default();
        let index = index_of[value];
        if index < median.index {
            left.push(row);
        } else if index > median.index {
            right.push(row);
        } else {
            pool.push(row);
        }
    }

    let mut running = left.len();
    for row in pool {
        running += 1;
        if running <= median.rank {
            left.push(row);
        } else {
            right.push(row);
        }
    }
    (Partition::new(left), Partition::new(right))
}
