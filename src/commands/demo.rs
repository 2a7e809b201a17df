//! Demonstration battery
//!
//! Runs every embedded case and records pass/fail per case and per strategy.

use crate::cases::{CANDY_CASES, COOKIE_CASES, CandyCase, CookieCase};
use crate::core::Allocation;
use crate::solver::{AssignStrategy, StrategyType, candy_allocation, minimum_candies};

/// Which halves of the battery to run
pub struct DemoConfig {
    pub candy: bool,
    pub cookies: bool,
}

impl DemoConfig {
    /// Run both batteries
    #[must_use]
    pub const fn new() -> Self {
        Self {
            candy: true,
            cookies: true,
        }
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Outcome of one candy case
pub struct CandyOutcome {
    pub case: CandyCase,
    pub actual: usize,
    pub allocation: Allocation,
}

impl CandyOutcome {
    #[must_use]
    pub const fn passed(&self) -> bool {
        self.actual == self.case.expected
    }
}

/// Outcome of one cookie case under one strategy
pub struct CookieOutcome {
    pub case: CookieCase,
    pub strategy: &'static str,
    pub actual: usize,
}

impl CookieOutcome {
    #[must_use]
    pub const fn passed(&self) -> bool {
        self.actual == self.case.expected
    }
}

/// Everything the demo produced
pub struct DemoReport {
    pub candy: Vec<CandyOutcome>,
    pub cookies: Vec<CookieOutcome>,
}

impl DemoReport {
    /// Number of passing checks
    #[must_use]
    pub fn passed(&self) -> usize {
        self.candy.iter().filter(|o| o.passed()).count()
            + self.cookies.iter().filter(|o| o.passed()).count()
    }

    /// Number of failing checks
    #[must_use]
    pub fn failed(&self) -> usize {
        self.total() - self.passed()
    }

    /// Number of checks run
    #[must_use]
    pub fn total(&self) -> usize {
        self.candy.len() + self.cookies.len()
    }

    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.failed() == 0
    }
}

/// Run the embedded battery
///
/// Cookie cases run once per strategy, grouped by strategy in `StrategyType::ALL` order.
#[must_use]
pub fn run_demo(config: &DemoConfig) -> DemoReport {
    let candy = if config.candy {
        CANDY_CASES
            .iter()
            .map(|&case| CandyOutcome {
                case,
                actual: minimum_candies(case.ratings),
                allocation: candy_allocation(case.ratings),
            })
            .collect()
    } else {
        Vec::new()
    };

    let cookies = if config.cookies {
        StrategyType::ALL
            .iter()
            .flat_map(|strategy| {
                COOKIE_CASES.iter().map(move |&case| CookieOutcome {
                    case,
                    strategy: strategy.name(),
                    actual: strategy.max_content(case.greed, case.supply),
                })
            })
            .collect()
    } else {
        Vec::new()
    };

    DemoReport { candy, cookies }
}
