//! Cookie assignment strategies
//!
//! Defines the `AssignStrategy` trait and the two greedy implementations.

use super::cookies::{max_content_ascending, max_content_descending};

/// A strategy for matching cookies to children
pub trait AssignStrategy {
    /// Maximum number of children that can be made content
    fn max_content(&self, greed: &[i64], supply: &[i64]) -> usize;

    /// Short display name
    fn name(&self) -> &'static str;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyType {
    /// Smallest greed first, smallest sufficient cookie (default)
    Ascending(AscendingStrategy),
    /// Largest greed first, largest remaining cookie
    Descending(DescendingStrategy),
}

impl AssignStrategy for StrategyType {
    fn max_content(&self, greed: &[i64], supply: &[i64]) -> usize {
        match self {
            Self::Ascending(s) => s.max_content(greed, supply),
            Self::Descending(s) => s.max_content(greed, supply),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Self::Ascending(s) => s.name(),
            Self::Descending(s) => s.name(),
        }
    }
}

impl StrategyType {
    /// Every strategy, in report order
    pub const ALL: [Self; 2] = [
        Self::Ascending(AscendingStrategy),
        Self::Descending(DescendingStrategy),
    ];

    /// Create strategy from name string
    ///
    /// Supported names: "ascending", "asc", "smallest-first", "descending",
    /// "desc", "largest-first", "reversed".
    /// Defaults to ascending if name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "descending" | "desc" | "largest-first" | "reversed" => {
                Self::Descending(DescendingStrategy)
            }
            _ => Self::Ascending(AscendingStrategy),
        }
    }
}

impl Default for StrategyType {
    fn default() -> Self {
        Self::Ascending(AscendingStrategy)
    }
}

/// Smallest-to-largest two-pointer matching
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AscendingStrategy;

impl AssignStrategy for AscendingStrategy {
    fn max_content(&self, greed: &[i64], supply: &[i64]) -> usize {
        max_content_ascending(greed, supply)
    }

    fn name(&self) -> &'static str {
        "ascending"
    }
}

/// Largest-to-smallest matching that skips children it cannot feed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DescendingStrategy;

impl AssignStrategy for DescendingStrategy {
    fn max_content(&self, greed: &[i64], supply: &[i64]) -> usize {
        max_content_descending(greed, supply)
    }

    fn name(&self) -> &'static str {
        "descending"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_name_selects_descending() {
        for name in ["descending", "desc", "largest-first", "reversed"] {
            assert_eq!(
                StrategyType::from_name(name),
                StrategyType::Descending(DescendingStrategy)
            );
        }
    }

    #[test]
    fn from_name_defaults_to_ascending() {
        for name in ["ascending", "asc", "smallest-first", "nonsense", ""] {
            assert_eq!(
                StrategyType::from_name(name),
                StrategyType::Ascending(AscendingStrategy)
            );
        }
        assert_eq!(StrategyType::default(), StrategyType::from_name("asc"));
    }

    #[test]
    fn wrapper_dispatches_to_inner_strategy() {
        let greed = [1, 2, 3];
        let supply = [1, 1];

        for strategy in StrategyType::ALL {
            assert_eq!(strategy.max_content(&greed, &supply), 1);
        }
    }

    #[test]
    fn names() {
        assert_eq!(AscendingStrategy.name(), "ascending");
        assert_eq!(DescendingStrategy.name(), "descending");
        assert_eq!(StrategyType::from_name("reversed").name(), "descending");
    }

    #[test]
    fn strategies_agree() {
        let greed = [7, 1, 4, 4, 9, 2];
        let supply = [3, 8, 4, 1, 10];

        assert_eq!(
            AscendingStrategy.max_content(&greed, &supply),
            DescendingStrategy.max_content(&greed, &supply)
        );
    }
}
