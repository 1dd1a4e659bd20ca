//! Property tests for the partition engine and the end-to-end run.

use proptest::prelude::{Strategy as PropStrategy, prop, prop_assume, proptest};

use mondrian_engine::{anonymize, engine};
use mondrian_model::{AnonymizeOptions, Dataset, Record, Strategy};

const ARITY: usize = 3;

fn arb_dataset() -> impl PropStrategy<Value = Dataset> {
    let cell = prop::sample::select(vec!["a", "b", "c", "1", "2", "30", "100"]);
    prop::collection::vec(prop::collection::vec(cell, ARITY), 0..40).prop_map(|rows| {
        Dataset::new(
            rows.into_iter()
                .map(|row| Record::new(row.into_iter().map(String::from).collect()))
                .collect(),
        )
    })
}

fn arb_options() -> impl PropStrategy<Value = AnonymizeOptions> {
    (
        prop::sample::subsequence(vec![0usize, 1, 2], 1..=ARITY),
        1usize..=3,
        prop::bool::ANY,
    )
        .prop_map(|(qids, k, relaxed)| {
            AnonymizeOptions::new(qids, k).with_strategy(if relaxed {
                Strategy::Relaxed
            } else {
                Strategy::Strict
            })
        })
}

proptest! {
    /// Leaves partition the input: every row index appears in exactly one
    /// leaf, none is created or dropped.
    #[test]
    fn leaves_cover_the_input((dataset, options) in (arb_dataset(), arb_options())) {
        let leaves = engine::partition(&dataset, &options);
        let mut rows: Vec<usize> = leaves.iter().flat_map(|leaf| leaf.rows().to_vec()).collect();
        rows.sort_unstable();
        let expected: Vec<usize> = (0..dataset.len()).collect();
        assert_eq!(rows, expected);
    }

    /// A successful run never emits a group below k.
    #[test]
    fn successful_runs_respect_k((dataset, options) in (arb_dataset(), arb_options())) {
        if let Ok(result) = anonymize(&dataset, &options) {
            for group in result.groups() {
                assert!(group.len() >= options.k);
            }
            assert_eq!(result.record_count(), dataset.len());
        }
    }

    /// Re-running with identical inputs yields the identical partitioning
    /// and generalization.
    #[test]
    fn runs_are_deterministic((dataset, options) in (arb_dataset(), arb_options())) {
        let first = anonymize(&dataset, &options);
        let second = anonymize(&dataset, &options);
        match (first, second) {
            (Ok(a), Ok(b)) => {
                assert_eq!(a.leaves(), b.leaves());
                assert_eq!(a.groups(), b.groups());
            }
            (Err(a), Err(b)) => assert_eq!(a.to_string(), b.to_string()),
            (a, b) => panic!("divergent outcomes: {a:?} vs {b:?}"),
        }
    }

    /// Within one group every generalized record agrees on the QID fields.
    #[test]
    fn groups_are_indistinguishable_on_qids((dataset, options) in (arb_dataset(), arb_options())) {
        if let Ok(result) = anonymize(&dataset, &options) {
            for group in result.groups() {
                let Some(first) = group.first() else { continue };
                for record in group {
                    for &qid in &options.qids {
                        assert_eq!(record.fields()[qid], first.fields()[qid]);
                    }
                }
            }
        }
    }
}

proptest! {
    /// The median rank lands on the smallest domain value whose cumulative
    /// frequency reaches it, for both parities of n.
    #[test]
    fn median_is_cumulative_threshold(frequencies in prop::collection::vec(0usize..5, 1..10)) {
        let total: usize = frequencies.iter().sum();
        prop_assume!(total > 0);
        let median = mondrian_engine::locate_median(&frequencies);
        let expected_rank = if total % 2 != 0 {
            (total + 1) / 2
        } else {
            (total / 2 + total / 2 + 1) / 2
        };
        assert_eq!(median.rank, expected_rank);

        let mut cumulative = 0usize;
        for (index, &count) in frequencies.iter().enumerate() {
            cumulative += count;
            if cumulative >= median.rank {
                assert_eq!(median.index, index);
                break;
            }
        }
    }
}
