//! Median location over a frequency table.

/// The median of a partition along one attribute: the numeric median rank
/// over the record count, and the index of the domain value that rank
/// falls on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Median {
    pub rank: usize,
    pub index: usize,
}

/// Locate the median over `frequencies`, which must be in domain order.
///
/// With n = total count, the rank is (n+1)/2 for odd n and the floor of the
/// average of the two central ranks for even n. The median domain value is
/// the first one whose cumulative frequency reaches the rank.
pub fn locate_median(frequencies: &[usize]) -> Median {
    let total: usize = frequencies.iter().sum();
    let rank = if total % 2 != 0 {
        (total + 1) / 2
    } else {
        let lower = total / 2;
        let upper = total / 2 + 1;
        (lower + upper) / 2
    };

    let mut remaining = rank as i64;
    let mut index = 0;
    for (i, &count) in frequencies.iter().enumerate() {
        remaining -= count as i64;
        if remaining <= 0 {
            index = i;
            break;
        }
    }
    Median { rank, index }
}
