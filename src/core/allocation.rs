//! Candy allocation
//!
//! The per-child candy counts produced by the distributor, together with the
//! neighbour rules they must satisfy against the ratings they came from.

use std::fmt;

/// Candy count for every child, in rating order
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Allocation(Vec<usize>);

/// A broken allocation rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    /// Allocation and ratings have different lengths
    LengthMismatch { ratings: usize, allocation: usize },
    /// A child received no candy
    Empty { position: usize },
    /// Rated higher than the left neighbour but not given more
    LeftNeighbour { position: usize },
    /// Rated higher than the right neighbour but not given more
    RightNeighbour { position: usize },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch {
                ratings,
                allocation,
            } => write!(f, "{allocation} allocations for {ratings} ratings"),
            Self::Empty { position } => write!(f, "child {position} has no candy"),
            Self::LeftNeighbour { position } => {
                write!(f, "child {position} outranks its left neighbour without more candy")
            }
            Self::RightNeighbour { position } => {
                write!(f, "child {position} outranks its right neighbour without more candy")
            }
        }
    }
}

impl Allocation {
    /// Wrap raw candy counts
    #[must_use]
    pub const fn new(counts: Vec<usize>) -> Self {
        Self(counts)
    }

    /// Candy counts as a slice
    #[inline]
    #[must_use]
    pub fn counts(&self) -> &[usize] {
        &self.0
    }

    /// Number of children
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Total candy handed out
    #[must_use]
    pub fn total(&self) -> usize {
        self.0.iter().sum()
    }

    /// Largest single allocation (0 when empty)
    #[must_use]
    pub fn max(&self) -> usize {
        self.0.iter().copied().max().unwrap_or(0)
    }

    /// Check every rule against `ratings`
    ///
    /// # Examples
    /// ```
    /// use greedy_allocation::core::Allocation;
    ///
    /// let ok = Allocation::new(vec![2, 1, 2]);
    /// assert!(ok.satisfies(&[1, 0, 2]));
    ///
    /// let bad = Allocation::new(vec![1, 1, 1]);
    /// assert!(!bad.satisfies(&[1, 0, 2]));
    /// ```
    #[must_use]
    pub fn satisfies(&self, ratings: &[i64]) -> bool {
        self.violations(ratings).is_empty()
    }

    /// List every broken rule, in position order
    #[must_use]
    pub fn violations(&self, ratings: &[i64]) -> Vec<Violation> {
        if ratings.len() != self.0.len() {
            return vec![Violation::LengthMismatch {
                ratings: ratings.len(),
                allocation: self.0.len(),
            }];
        }

        let n = ratings.len();
        let mut found = Vec::new();

        for i in 0..n {
            if self.0[i] == 0 {
                found.push(Violation::Empty { position: i });
            }
            if i > 0 && ratings[i] > ratings[i - 1] && self.0[i] <= self.0[i - 1] {
                found.push(Violation::LeftNeighbour { position: i });
            }
            if i + 1 < n && ratings[i] > ratings[i + 1] && self.0[i] <= self.0[i + 1] {
                found.push(Violation::RightNeighbour { position: i });
            }
        }

        found
    }
}

impl From<Vec<usize>> for Allocation {
    fn from(counts: Vec<usize>) -> Self {
        Self(counts)
    }
}
