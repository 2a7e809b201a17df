//! Candy distribution command
//!
//! Computes the minimal allocation for one ratings sequence.

use crate::core::{Allocation, parse_sequence};
use crate::solver::candy_allocation;

/// Result of distributing candy over one ratings sequence
pub struct DistributeResult {
    pub ratings: Vec<i64>,
    pub allocation: Allocation,
    pub total: usize,
}

/// Parse `ratings` and compute the minimal allocation
///
/// # Errors
///
/// Returns an error if the ratings are not a comma/space separated list of integers.
pub fn distribute(ratings: &str) -> Result<DistributeResult, String> {
    let ratings = parse_sequence(ratings).map_err(|e| format!("Invalid ratings: {e}"))?;

    let allocation = candy_allocation(&ratings);
    let total = allocation.total();

    Ok(DistributeResult {
        ratings,
        allocation,
        total,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distribute_valid_ratings() {
        let result = distribute("1,0,2").unwrap();

        assert_eq!(result.ratings, vec![1, 0, 2]);
        assert_eq!(result.allocation.counts(), &[2, 1, 2]);
        assert_eq!(result.total, 5);
    }

    #[test]
    fn distribute_empty_ratings() {
        let result = distribute("").unwrap();

        assert!(result.ratings.is_empty());
        assert_eq!(result.total, 0);
    }

    #[test]
    fn distribute_invalid_ratings() {
        let result = distribute("1,2,three");
        assert!(result.is_err());
        assert!(result.err().unwrap().starts_with("Invalid ratings"));
    }

    #[test]
    fn total_matches_allocation() {
        let result = distribute("1 3 2 2 1").unwrap();

        assert_eq!(result.total, 7);
        assert_eq!(result.total, result.allocation.total());
        assert!(result.allocation.satisfies(&result.ratings));
    }
}
