//! Maximum content children
//!
//! Each child has a greed factor and each cookie a size. A child is content
//! when given one cookie whose size is at least its greed factor; a cookie
//! feeds at most one child. Both functions sort private copies of their
//! inputs, so callers keep their original ordering.

/// Smallest-first greedy matching
///
/// Sort both sides ascending and walk them together. The least greedy child
/// takes the smallest cookie that satisfies it; a cookie too small for the
/// current child is too small for every later child and is skipped.
///
/// # Examples
/// ```
/// use greedy_allocation::solver::max_content_ascending;
///
/// assert_eq!(max_content_ascending(&[1, 2, 3], &[1, 1]), 1);
/// assert_eq!(max_content_ascending(&[1, 2], &[1, 2, 3]), 2);
/// ```
#[must_use]
pub fn max_content_ascending(greed: &[i64], supply: &[i64]) -> usize {
    let greed = sorted(greed);
    let supply = sorted(supply);

    let mut count = 0;
    let mut i = 0;
    let mut j = 0;

    while i < greed.len() && j < supply.len() {
        if supply[j] >= greed[i] {
            count += 1;
            i += 1;
        }
        j += 1;
    }

    count
}

/// Largest-first greedy matching
///
/// Sort both sides descending. Each child in turn, greediest first, takes the
/// largest remaining cookie if it is big enough. A child that cannot be fed is
/// skipped and the cookie stays available for the next one; the walk always
/// visits every child.
///
/// # Examples
/// ```
/// use greedy_allocation::solver::max_content_descending;
///
/// assert_eq!(max_content_descending(&[3, 2, 1], &[3, 2, 1]), 3);
/// assert_eq!(max_content_descending(&[10, 20, 30], &[1, 2, 3]), 0);
/// ```
#[must_use]
pub fn max_content_descending(greed: &[i64], supply: &[i64]) -> usize {
    if greed.is_empty() || supply.is_empty() {
        return 0;
    }

    let mut greed = greed.to_vec();
    let mut supply = supply.to_vec();
    greed.sort_unstable_by(|a, b| b.cmp(a));
    supply.sort_unstable_by(|a, b| b.cmp(a));

    let mut count = 0;
    let mut j = 0;

    for &want in &greed {
        if j < supply.len() && supply[j] >= want {
            count += 1;
            j += 1;
        }
    }

    count
}

/// Maximum number of content children (smallest-first matching)
#[must_use]
pub fn max_content(greed: &[i64], supply: &[i64]) -> usize {
    max_content_ascending(greed, supply)
}

fn sorted(values: &[i64]) -> Vec<i64> {
    let mut copy = values.to_vec();
    copy.sort_unstable();
    copy
}
