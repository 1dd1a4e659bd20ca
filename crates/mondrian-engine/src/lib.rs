//! Mondrian multidimensional k-anonymity engine.
//!
//! Recursively splits a dataset into equivalence classes of at least K
//! records along their quasi-identifying attributes, then generalizes each
//! class's QID values to the set of distinct values observed within it.
//!
//! Based on: LeFevre, K. et al. 2006. Mondrian Multidimensional
//! k-Anonymity. ICDE'06.

pub mod anonymize;
pub mod domain;
pub mod engine;
pub mod generalize;
pub mod median;
pub mod partition;
pub mod select;
pub mod split;

pub use anonymize::{Anonymization, anonymize};
pub use domain::{attribute_domain, frequency_table};
pub use generalize::generalize_partition;
pub use median::{Median, locate_median};
pub use partition::Partition;
pub use select::{Selection, best_attribute};
pub use split::{relaxed_split, strict_split};
