//! Attribute selection: which dimension to split next.

use mondrian_model::Dataset;

use crate::domain::attribute_domain;
use crate::partition::Partition;

/// The chosen quasi-identifier together with its domain, so the caller
/// never recomputes the domain it was selected on.
#[derive(Debug, Clone)]
pub struct Selection {
    pub qid: usize,
    pub domain: Vec<String>,
}

/// Pick the candidate whose domain has the strictly largest distinct-value
/// count. Ties keep the earliest candidate in iteration order: a later
/// candidate replaces the current best only when strictly larger.
///
/// Returns `None` only for an empty candidate set.
pub fn best_attribute(
    dataset: &Dataset,
    partition: &Partition,
    candidates: &[usize],
) -> Option<Selection> {
    let mut best: Option<Selection> = None;
    for &qid in candidates {
        let domain = attribute_domain(dataset, partition, qid);
        let replace = match &best {
            Some(current) => domain.len() > current.domain.len(),
            None => true,
        };
        if replace {
            best = Some(Selection { qid, domain });
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use mondrian_model::Record;

    fn dataset(rows: &[&[&str]]) -> Dataset {
        Dataset::new(
            rows.iter()
                .map(|row| Record::new(row.iter().map(ToString::to_string).collect()))
                .collect(),
        )
    }

    #[test]
    fn widest_domain_wins() {
        let dataset = dataset(&[&["a", "x"], &["a", "y"], &["b", "z"]]);
        let root = Partition::root(&dataset);
        let selection = best_attribute(&dataset, &root, &[0, 1]).expect("non-empty candidates");
        assert_eq!(selection.qid, 1);
        assert_eq!(selection.domain, ["x", "y", "z"]);
    }

    #[test]
    fn tie_keeps_first_candidate_in_iteration_order() {
        let dataset = dataset(&[&["a", "x"], &["b", "y"]]);
        let root = Partition::root(&dataset);
        let selection = best_attribute(&dataset, &root, &[1, 0]).expect("non-empty candidates");
        assert_eq!(selection.qid, 1);
    }

    #[test]
    fn empty_candidate_set_selects_nothing() {
        let dataset = dataset(&[&["a"]]);
        let root = Partition::root(&dataset);
        assert!(best_attribute(&dataset, &root, &[]).is_none());
    }
}
