//! Minimum candy distribution
//!
//! Every child gets at least one candy, and a child rated strictly higher than
//! an adjacent neighbour gets strictly more candy than that neighbour.
//!
//! # Algorithm
//! Two greedy passes over a vector initialised to all ones:
//! 1. Left to right: a child rated above its left neighbour gets one more than it.
//! 2. Right to left: a child rated above its right neighbour gets
//!    `max(current, right + 1)`. The `max` keeps what the first pass established.
//!
//! Equal ratings never force an increase, so each position ends at the smallest
//! value both passes allow. O(n) time, O(n) space.

use crate::core::Allocation;

/// Compute the minimal candy allocation for `ratings`
///
/// # Examples
/// ```
/// use greedy_allocation::solver::candy_allocation;
///
/// let allocation = candy_allocation(&[1, 0, 2]);
/// assert_eq!(allocation.counts(), &[2, 1, 2]);
/// assert!(allocation.satisfies(&[1, 0, 2]));
/// ```
#[must_use]
pub fn candy_allocation(ratings: &[i64]) -> Allocation {
    let n = ratings.len();
    let mut candies = vec![1_usize; n];

    for i in 1..n {
        if ratings[i] > ratings[i - 1] {
            candies[i] = candies[i - 1] + 1;
        }
    }

    for i in (0..n.saturating_sub(1)).rev() {
        if ratings[i] > ratings[i + 1] {
            candies[i] = candies[i].max(candies[i + 1] + 1);
        }
    }

    Allocation::new(candies)
}

/// Minimum total candy needed for `ratings`
///
/// Empty input needs no candy; a single child needs one.
///
/// # Examples
/// ```
/// use greedy_allocation::solver::minimum_candies;
///
/// assert_eq!(minimum_candies(&[1, 0, 2]), 5);
/// assert_eq!(minimum_candies(&[1, 2, 2]), 4);
/// assert_eq!(minimum_candies(&[]), 0);
/// ```
#[must_use]
pub fn minimum_candies(ratings: &[i64]) -> usize {
    match ratings.len() {
        0 => 0,
        1 => 1,
        _ => candy_allocation(ratings).total(),
    }
}
