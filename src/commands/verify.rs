//! Randomized verification
//!
//! Generates random inputs and checks that every candy allocation obeys its
//! rules and that both cookie strategies agree and respect the `min(len)` bound.

use crate::core::Violation;
use crate::solver::{candy_allocation, max_content_ascending, max_content_descending};
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Failures kept for display; further failures are only counted
const MAX_REPORTED: usize = 10;

/// Configuration for a verification run
pub struct VerifyConfig {
    pub trials: usize,
    pub max_len: usize,
    pub max_value: u32,
    pub seed: u64,
    pub show_progress: bool,
}

impl VerifyConfig {
    #[must_use]
    pub const fn new(trials: usize) -> Self {
        Self {
            trials,
            max_len: 12,
            max_value: 10,
            seed: 0x5EED,
            show_progress: true,
        }
    }
}

/// A candy allocation that broke a rule
#[derive(Debug, Clone)]
pub struct CandyFailure {
    pub ratings: Vec<i64>,
    pub violations: Vec<Violation>,
}

/// A cookie pair where the strategies disagree or exceed the bound
#[derive(Debug, Clone)]
pub struct CookieFailure {
    pub greed: Vec<i64>,
    pub supply: Vec<i64>,
    pub ascending: usize,
    pub descending: usize,
}

/// Result of a verification run
pub struct VerifyResult {
    pub trials: usize,
    pub candy_failures: usize,
    pub cookie_failures: usize,
    pub candy_examples: Vec<CandyFailure>,
    pub cookie_examples: Vec<CookieFailure>,
    /// How many trials ended with each match count
    pub content_distribution: FxHashMap<usize, usize>,
    pub duration: Duration,
    pub trials_per_second: f64,
}

impl VerifyResult {
    #[must_use]
    pub const fn is_clean(&self) -> bool {
        self.candy_failures == 0 && self.cookie_failures == 0
    }
}

struct TrialOutcome {
    candy: Option<CandyFailure>,
    cookie: Option<CookieFailure>,
    content: usize,
}

/// Run `config.trials` randomized checks in parallel
///
/// A master RNG seeded from `config.seed` draws one independent seed per trial
/// before the parallel loop starts, so a run is reproducible regardless of
/// thread scheduling and neighbouring seeds test unrelated inputs.
///
/// # Panics
///
/// Panics if the progress bar template is malformed.
#[must_use]
pub fn run_verify(config: &VerifyConfig) -> VerifyResult {
    let start = Instant::now();

    let pb = if config.show_progress {
        let pb = ProgressBar::new(config.trials as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
                .unwrap()
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let outcomes: Vec<TrialOutcome> = trial_seeds(config.seed, config.trials)
        .into_par_iter()
        .map(|trial_seed| {
            let outcome = run_trial(config, trial_seed);
            pb.inc(1);
            outcome
        })
        .collect();

    pb.finish_with_message("Complete!");

    let mut candy_failures = 0;
    let mut cookie_failures = 0;
    let mut candy_examples = Vec::new();
    let mut cookie_examples = Vec::new();
    let mut content_distribution: FxHashMap<usize, usize> = FxHashMap::default();

    for outcome in outcomes {
        *content_distribution.entry(outcome.content).or_insert(0) += 1;

        if let Some(failure) = outcome.candy {
            candy_failures += 1;
            if candy_examples.len() < MAX_REPORTED {
                candy_examples.push(failure);
            }
        }

        if let Some(failure) = outcome.cookie {
            cookie_failures += 1;
            if cookie_examples.len() < MAX_REPORTED {
                cookie_examples.push(failure);
            }
        }
    }

    let duration = start.elapsed();

    VerifyResult {
        trials: config.trials,
        candy_failures,
        cookie_failures,
        candy_examples,
        cookie_examples,
        content_distribution,
        duration,
        trials_per_second: if duration.is_zero() {
            0.0
        } else {
            config.trials as f64 / duration.as_secs_f64()
        },
    }
}

/// One seed per trial, drawn from a single stream seeded with `seed`
fn trial_seeds(seed: u64, trials: usize) -> Vec<u64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..trials).map(|_| rng.random::<u64>()).collect()
}

/// Ratings, greed factors and cookie sizes for one trial
fn trial_inputs(config: &VerifyConfig, trial_seed: u64) -> (Vec<i64>, Vec<i64>, Vec<i64>) {
    let mut rng = StdRng::seed_from_u64(trial_seed);
    let max_value = i64::from(config.max_value);

    // Ratings may be negative; greed factors and cookie sizes may not.
    let ratings = random_sequence(&mut rng, config.max_len, -max_value, max_value);
    let greed = random_sequence(&mut rng, config.max_len, 0, max_value);
    let supply = random_sequence(&mut rng, config.max_len, 0, max_value);

    (ratings, greed, supply)
}

fn run_trial(config: &VerifyConfig, trial_seed: u64) -> TrialOutcome {
    let (ratings, greed, supply) = trial_inputs(config, trial_seed);

    let allocation = candy_allocation(&ratings);
    let violations = allocation.violations(&ratings);
    let candy = if violations.is_empty() && allocation.total() >= ratings.len() {
        None
    } else {
        Some(CandyFailure {
            ratings,
            violations,
        })
    };

    let ascending = max_content_ascending(&greed, &supply);
    let descending = max_content_descending(&greed, &supply);
    let bound = greed.len().min(supply.len());
    let cookie = if ascending == descending && ascending <= bound {
        None
    } else {
        Some(CookieFailure {
            greed,
            supply,
            ascending,
            descending,
        })
    };

    TrialOutcome {
        candy,
        cookie,
        content: ascending,
    }
}

fn random_sequence(rng: &mut StdRng, max_len: usize, low: i64, high: i64) -> Vec<i64> {
    let len = rng.random_range(0..=max_len);
    (0..len).map(|_| rng.random_range(low..=high)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiet(trials: usize) -> VerifyConfig {
        let mut config = VerifyConfig::new(trials);
        config.show_progress = false;
        config
    }

    #[test]
    fn verify_finds_no_failures() {
        let result = run_verify(&quiet(500));

        assert_eq!(result.trials, 500);
        assert!(result.is_clean());
        assert!(result.candy_examples.is_empty());
        assert!(result.cookie_examples.is_empty());
    }

    #[test]
    fn distribution_sums_to_trials() {
        let result = run_verify(&quiet(200));

        let sum: usize = result.content_distribution.values().sum();
        assert_eq!(sum, result.trials);
        assert!(
            result
                .content_distribution
                .keys()
                .all(|&content| content <= 12)
        );
    }

    #[test]
    fn same_seed_same_distribution() {
        let first = run_verify(&quiet(100));
        let second = run_verify(&quiet(100));

        assert_eq!(first.content_distribution, second.content_distribution);
    }

    #[test]
    fn zero_trials() {
        let result = run_verify(&quiet(0));

        assert_eq!(result.trials, 0);
        assert!(result.is_clean());
        assert!(result.content_distribution.is_empty());
        assert!(result.trials_per_second.is_finite());
        assert!(result.trials_per_second >= 0.0);
    }

    #[test]
    fn trial_seeds_are_reproducible() {
        assert_eq!(trial_seeds(100, 50), trial_seeds(100, 50));
        assert_eq!(trial_seeds(100, 50)[..10], trial_seeds(100, 10)[..]);
    }

    #[test]
    fn adjacent_seeds_do_not_share_trials() {
        let config = quiet(1000);
        let first = trial_seeds(100, config.trials);
        let second = trial_seeds(101, config.trials);

        // Trial t under one seed must not replay trial t-1 under the next.
        let shifted = first[1..]
            .iter()
            .zip(&second[..config.trials - 1])
            .filter(|(a, b)| a == b)
            .count();
        assert_eq!(shifted, 0);

        let first_inputs: Vec<_> = first.iter().map(|&s| trial_inputs(&config, s)).collect();
        let second_inputs: Vec<_> = second.iter().map(|&s| trial_inputs(&config, s)).collect();
        let shared = first_inputs[1..]
            .iter()
            .zip(&second_inputs[..config.trials - 1])
            .filter(|(a, b)| a == b)
            .count();
        assert!(shared < 50, "{shared} shifted trials share inputs");
        assert_ne!(first_inputs, second_inputs);
    }

    #[test]
    fn adjacent_seeds_change_distribution() {
        let mut config = quiet(1000);
        config.seed = 100;
        let first = run_verify(&config);
        config.seed = 101;
        let second = run_verify(&config);

        assert_ne!(first.content_distribution, second.content_distribution);
    }

    #[test]
    fn zero_length_inputs() {
        let mut config = quiet(50);
        config.max_len = 0;

        let result = run_verify(&config);

        assert!(result.is_clean());
        assert_eq!(result.content_distribution.get(&0), Some(&50));
    }

    #[test]
    fn random_sequence_respects_bounds() {
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..100 {
            let values = random_sequence(&mut rng, 5, -3, 3);
            assert!(values.len() <= 5);
            assert!(values.iter().all(|v| (-3..=3).contains(v)));
        }
    }
}
