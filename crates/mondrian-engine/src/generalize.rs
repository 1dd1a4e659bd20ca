//! Generalization of leaf partitions.
//!
//! Unlike splitting, which always orders domains lexicographically, the
//! generalized value set is sorted numerically when every member is numeric
//! text. The two orderings are deliberately independent: unifying them
//! would change which values the engine picks as medians.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use mondrian_model::{Dataset, GeneralizedRecord, GeneralizedValue};

use crate::partition::Partition;

/// True for non-empty, all-ASCII-digit values.
fn is_numeric(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}

/// Magnitude order for all-digit values without parsing: a shorter digit
/// string is always the smaller number, equal lengths compare bytewise.
fn compare_numeric(a: &str, b: &str) -> Ordering {
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

/// Compute the generalized QID summary values for one leaf partition.
fn summarize(dataset: &Dataset, leaf: &Partition, qids: &[usize]) -> Vec<GeneralizedValue> {
    qids.iter()
        .map(|&qid| {
            let distinct: BTreeSet<&str> = leaf
                .records(dataset)
                .map(|record| record.field(qid).unwrap_or_default())
                .collect();
            if distinct.len() == 1 {
                let only = distinct.into_iter().next().unwrap_or_default();
                GeneralizedValue::Scalar(only.to_string())
            } else {
                let mut values: Vec<String> = distinct.into_iter().map(ToString::to_string).collect();
                if values.iter().all(|value| is_numeric(value)) {
                    values.sort_by(|a, b| compare_numeric(a, b));
                }
                GeneralizedValue::Set(values)
            }
        })
        .collect()
}

/// Produce one generalized record per original record in the leaf, with
/// each QID field replaced by the leaf's summary value and every other
/// field carried through untouched.
pub fn generalize_partition(
    dataset: &Dataset,
    leaf: &Partition,
    qids: &[usize],
) -> Vec<GeneralizedRecord> {
    let summaries = summarize(dataset, leaf, qids);
    leaf.records(dataset)
        .map(|record| {
            let fields = record
                .fields()
                .iter()
                .enumerate()
                .map(|(index, value)| {
                    match qids.iter().position(|&qid| qid == index) {
                        Some(summary) => summaries[summary].clone(),
                        None => GeneralizedValue::Scalar(value.clone()),
                    }
                })
                .collect();
            GeneralizedRecord::new(fields)
        })
        .collect()
}
