//! Greedy Allocation - CLI
//!
//! Runs the candy and cookie greedy exercises from the command line.
//! With no subcommand, runs the demonstration battery.

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use greedy_allocation::{
    commands::{DemoConfig, VerifyConfig, assign, distribute, run_demo, run_verify},
    output::{print_assign_result, print_demo_report, print_distribute_result, print_verify_result},
    solver::StrategyType,
};

#[derive(Parser)]
#[command(
    name = "greedy",
    about = "Minimum candy distribution and maximum cookie assignment via greedy algorithms",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the built-in test battery (default)
    Demo {
        /// Only run the candy cases
        #[arg(long, conflicts_with = "cookies_only")]
        candy_only: bool,

        /// Only run the cookie cases
        #[arg(long)]
        cookies_only: bool,
    },

    /// Minimum candy for a ratings sequence, e.g. "1,0,2"
    Candy {
        /// Ratings separated by commas or spaces
        #[arg(allow_hyphen_values = true)]
        ratings: String,

        /// Show the per-child allocation
        #[arg(short, long)]
        verbose: bool,
    },

    /// Maximum content children for greed factors and cookie sizes
    Cookies {
        /// Greed factors separated by commas or spaces
        #[arg(allow_hyphen_values = true)]
        greed: String,

        /// Cookie sizes separated by commas or spaces
        #[arg(allow_hyphen_values = true)]
        supply: String,

        /// Strategy: ascending (default), descending, both
        #[arg(
            short,
            long,
            default_value = "ascending",
            value_parser = [
                "ascending", "asc", "smallest-first",
                "descending", "desc", "largest-first", "reversed",
                "both",
            ]
        )]
        strategy: String,
    },

    /// Check invariants and strategy agreement on random inputs
    Verify {
        /// Number of random trials
        #[arg(short = 'n', long, default_value = "10000")]
        trials: usize,

        /// Longest generated sequence
        #[arg(long, default_value = "12")]
        max_len: usize,

        /// Largest generated magnitude
        #[arg(long, default_value = "10")]
        max_value: u32,

        /// RNG seed
        #[arg(long, default_value = "24301")]
        seed: u64,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to the demo battery if no command given
    let command = cli.command.unwrap_or(Commands::Demo {
        candy_only: false,
        cookies_only: false,
    });

    match command {
        Commands::Demo {
            candy_only,
            cookies_only,
        } => run_demo_command(candy_only, cookies_only),
        Commands::Candy { ratings, verbose } => run_candy_command(&ratings, verbose),
        Commands::Cookies {
            greed,
            supply,
            strategy,
        } => run_cookies_command(&greed, &supply, &strategy),
        Commands::Verify {
            trials,
            max_len,
            max_value,
            seed,
        } => {
            let mut config = VerifyConfig::new(trials);
            config.max_len = max_len;
            config.max_value = max_value;
            config.seed = seed;
            run_verify_command(&config)
        }
    }
}

fn run_demo_command(candy_only: bool, cookies_only: bool) -> Result<()> {
    let config = DemoConfig {
        candy: !cookies_only,
        cookies: !candy_only,
    };

    let report = run_demo(&config);
    print_demo_report(&report);

    if !report.all_passed() {
        bail!("{} of {} checks failed", report.failed(), report.total());
    }
    Ok(())
}

fn run_candy_command(ratings: &str, verbose: bool) -> Result<()> {
    let result = distribute(ratings).map_err(|e| anyhow::anyhow!(e))?;
    print_distribute_result(&result, verbose);
    Ok(())
}

fn run_cookies_command(greed: &str, supply: &str, strategy_name: &str) -> Result<()> {
    let strategies = if strategy_name == "both" {
        StrategyType::ALL.to_vec()
    } else {
        vec![StrategyType::from_name(strategy_name)]
    };

    let result = assign(greed, supply, &strategies).map_err(|e| anyhow::anyhow!(e))?;
    print_assign_result(&result);
    Ok(())
}

fn run_verify_command(config: &VerifyConfig) -> Result<()> {
    println!(
        "🎯 Verifying {} random trials (seed {})...",
        config.trials, config.seed
    );

    let result = run_verify(config);
    print_verify_result(&result);

    if !result.is_clean() {
        bail!(
            "{} candy and {} cookie failures",
            result.candy_failures,
            result.cookie_failures
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cookies_accepts_known_strategies() {
        for name in ["ascending", "desc", "reversed", "both"] {
            let cli = Cli::try_parse_from(["greedy", "cookies", "1,2", "1", "-s", name]).unwrap();
            assert!(matches!(
                cli.command,
                Some(Commands::Cookies { strategy, .. }) if strategy == name
            ));
        }
    }

    #[test]
    fn cookies_rejects_misspelled_strategy() {
        let result = Cli::try_parse_from(["greedy", "cookies", "1,2", "1", "-s", "decending"]);
        assert!(result.is_err());
    }

    #[test]
    fn cookies_defaults_to_ascending() {
        let cli = Cli::try_parse_from(["greedy", "cookies", "-1,2", "1"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Cookies { strategy, greed, .. }) if strategy == "ascending" && greed == "-1,2"
        ));
    }

    #[test]
    fn no_subcommand_is_demo() {
        let cli = Cli::try_parse_from(["greedy"]).unwrap();
        assert!(cli.command.is_none());
    }
}
