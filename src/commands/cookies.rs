//! Cookie assignment command
//!
//! Runs one or more matching strategies over a greed/supply pair.

use crate::core::parse_sequence;
use crate::solver::{AssignStrategy, StrategyType};

/// Match count produced by one strategy
pub struct StrategyOutcome {
    pub strategy: &'static str,
    pub content: usize,
}

/// Result of assigning cookies
pub struct AssignResult {
    pub greed: Vec<i64>,
    pub supply: Vec<i64>,
    pub outcomes: Vec<StrategyOutcome>,
}

impl AssignResult {
    /// True when every strategy produced the same count
    #[must_use]
    pub fn strategies_agree(&self) -> bool {
        self.outcomes
            .windows(2)
            .all(|pair| pair[0].content == pair[1].content)
    }

    /// Upper bound on any matching: `min(children, cookies)`
    #[must_use]
    pub fn upper_bound(&self) -> usize {
        self.greed.len().min(self.supply.len())
    }
}

/// Parse `greed` and `supply` and run each strategy over them
///
/// # Errors
///
/// Returns an error if either sequence is not a comma/space separated list of integers.
pub fn assign(
    greed: &str,
    supply: &str,
    strategies: &[StrategyType],
) -> Result<AssignResult, String> {
    let greed = parse_sequence(greed).map_err(|e| format!("Invalid greed factors: {e}"))?;
    let supply = parse_sequence(supply).map_err(|e| format!("Invalid cookie sizes: {e}"))?;

    let outcomes = strategies
        .iter()
        .map(|strategy| StrategyOutcome {
            strategy: strategy.name(),
            content: strategy.max_content(&greed, &supply),
        })
        .collect();

    Ok(AssignResult {
        greed,
        supply,
        outcomes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assign_with_single_strategy() {
        let result = assign("1,2,3", "1,1", &[StrategyType::default()]).unwrap();

        assert_eq!(result.outcomes.len(), 1);
        assert_eq!(result.outcomes[0].strategy, "ascending");
        assert_eq!(result.outcomes[0].content, 1);
    }

    #[test]
    fn assign_with_both_strategies() {
        let result = assign("1,2", "1,2,3,4,5", &StrategyType::ALL).unwrap();

        assert_eq!(result.outcomes.len(), 2);
        assert!(result.strategies_agree());
        assert_eq!(result.outcomes[1].content, 2);
        assert_eq!(result.upper_bound(), 2);
    }

    #[test]
    fn assign_empty_supply() {
        let result = assign("1,2,3", "", &StrategyType::ALL).unwrap();

        assert!(result.outcomes.iter().all(|o| o.content == 0));
        assert_eq!(result.upper_bound(), 0);
    }

    #[test]
    fn assign_invalid_input() {
        assert!(assign("1,a", "1", &StrategyType::ALL).is_err());
        assert!(assign("1", "b", &StrategyType::ALL).is_err());
    }

    #[test]
    fn agreement_with_no_outcomes() {
        let result = assign("1", "1", &[]).unwrap();
        assert!(result.strategies_agree());
    }
}
