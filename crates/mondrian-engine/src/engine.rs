//! The recursive partitioning controller, flattened onto an explicit
//! work list so deep trees cannot overflow the call stack.

use tracing::debug;

use mondrian_model::{AnonymizeOptions, Dataset, Strategy};

use crate::domain::frequency_table;
use crate::median::locate_median;
use crate::partition::Partition;
use crate::select::best_attribute;
use crate::split::{relaxed_split, strict_split};

enum SplitOutcome {
    Leaf,
    Accepted(Partition, Partition),
}

/// Build the partition tree and return its leaves.
///
/// Every work item starts from the full global QID set; backtracking
/// shrinks a local candidate copy only within that item's split decision,
/// so QID exhaustion is never inherited by descendants. The returned list
/// covers the input exactly: each row of the dataset appears in exactly
/// one leaf.
pub fn partition(dataset: &Dataset, options: &AnonymizeOptions) -> Vec<Partition> {
    let mut leaves = Vec::new();
    let mut work = vec![Partition::root(dataset)];
    while let Some(current) = work.pop() {
        match try_split(dataset, &current, options) {
            SplitOutcome::Leaf => leaves.push(current),
            SplitOutcome::Accepted(left, right) => {
                // Left processed first; leaf order is irrelevant to
                // anonymity but kept deterministic.
                work.push(right);
                work.push(left);
            }
        }
    }
    leaves
}

/// One split decision: select an attribute, locate its median, split, and
/// validate. On failure the attribute is removed from the candidate set and
/// selection retried; exhausting the candidates makes the partition a leaf.
fn try_split(dataset: &Dataset, current: &Partition, options: &AnonymizeOptions) -> SplitOutcome {
    if current.len() < 2 * options.k {
        return SplitOutcome::Leaf;
    }

    let mut candidates = options.qids.clone();
    while !candidates.is_empty() {
        let Some(selection) = best_attribute(dataset, current, &candidates) else {
            break;
        };
        let frequencies = frequency_table(dataset, current, selection.qid, &selection.domain);
        let median = locate_median(&frequencies);

        if options.strategy == Strategy::Strict && median.index == selection.domain.len() - 1 {
            // All remaining mass sits at or before the median bucket; a
            // strict split along this attribute would leave the right side
            // empty.
            debug!(
                qid = selection.qid,
                rows = current.len(),
                "median on last domain value, dropping attribute"
            );
            candidates.retain(|&qid| qid != selection.qid);
            continue;
        }

        let (left, right) = match options.strategy {
            Strategy::Strict => {
                strict_split(dataset, current, selection.qid, &selection.domain, median)
            }
            Strategy::Relaxed => {
                relaxed_split(dataset, current, selection.qid, &selection.domain, median)
            }
        };

        // Validity counts distinguishable records, not rows.
        if left.distinct_len(dataset) < options.k || right.distinct_len(dataset) < options.k {
            debug!(
                qid = selection.qid,
                left = left.len(),
                right = right.len(),
                "split below k distinct records, dropping attribute"
            );
            candidates.retain(|&qid| qid != selection.qid);
            continue;
        }

        return SplitOutcome::Accepted(left, right);
    }

    debug!(rows = current.len(), "candidates exhausted, keeping leaf");
    SplitOutcome::Leaf
}
