//! Display functions for command results

use super::formatters::{allocation_bars, status_label};
use crate::commands::{AssignResult, DemoReport, DistributeResult, VerifyResult};
use crate::core::format_sequence;
use colored::Colorize;

/// Print the result of distributing candy
pub fn print_distribute_result(result: &DistributeResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Ratings: {}",
        format_sequence(&result.ratings).bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    println!(
        "\n  Allocation:    {}",
        format_sequence(result.allocation.counts())
    );
    println!(
        "  Total candy:   {}",
        result.total.to_string().bright_yellow().bold()
    );

    if verbose && !result.allocation.is_empty() {
        println!("\n🍬 {}", "Per child:".bright_cyan().bold());
        let bars = allocation_bars(&result.allocation, 30);
        for (i, bar) in bars.iter().enumerate() {
            println!(
                "   {i:3} rating {:>6}: {} {}",
                result.ratings[i],
                bar.green(),
                result.allocation.counts()[i]
            );
        }
    }
}

/// Print the result of assigning cookies
pub fn print_assign_result(result: &AssignResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("Greed:   {}", format_sequence(&result.greed).bright_yellow());
    println!("Cookies: {}", format_sequence(&result.supply).bright_yellow());
    println!("{}", "─".repeat(60).cyan());

    println!();
    for outcome in &result.outcomes {
        println!(
            "  {:<12} {} content {}",
            outcome.strategy,
            outcome.content.to_string().bright_yellow().bold(),
            if outcome.content == 1 { "child" } else { "children" }
        );
    }
    println!("  Upper bound:  {}", result.upper_bound());

    if result.outcomes.len() > 1 {
        println!();
        if result.strategies_agree() {
            println!("{}", "✅ Strategies agree".green().bold());
        } else {
            println!("{}", "❌ Strategies disagree".red().bold());
        }
    }
}

/// Print the demo battery, case by case, followed by a summary
pub fn print_demo_report(report: &DemoReport) {
    if !report.candy.is_empty() {
        println!("\n{}", "═".repeat(60).cyan());
        println!(" {} ", "CANDY DISTRIBUTION".bright_cyan().bold());
        println!("{}", "═".repeat(60).cyan());

        for (i, outcome) in report.candy.iter().enumerate() {
            println!("\nTest {}: {}", i + 1, outcome.case.description);
            println!("Input:    {}", format_sequence(outcome.case.ratings));
            println!("Expected: {}", outcome.case.expected);
            println!("Actual:   {}", outcome.actual);
            print_status(outcome.passed());

            if !outcome.passed() && !outcome.allocation.is_empty() {
                println!(
                    "Candy distribution: {}",
                    format_sequence(outcome.allocation.counts())
                );
            }
        }
    }

    if !report.cookies.is_empty() {
        println!("\n{}", "═".repeat(60).cyan());
        println!(" {} ", "COOKIE ASSIGNMENT".bright_cyan().bold());
        println!("{}", "═".repeat(60).cyan());

        let mut current = "";
        let mut index = 0;
        for outcome in &report.cookies {
            if outcome.strategy != current {
                current = outcome.strategy;
                index = 0;
                println!(
                    "\n📐 {}",
                    format!("Strategy: {current}").bright_cyan().bold()
                );
            }
            index += 1;

            println!(
                "  Test {index}: {:<28} {} / {} → {} (Expected: {}) {}",
                outcome.case.description,
                format_sequence(outcome.case.greed),
                format_sequence(outcome.case.supply),
                outcome.actual,
                outcome.case.expected,
                status_label(outcome.passed())
            );
        }
    }

    println!("\n{}", "═".repeat(60).cyan());
    println!(
        "  Checks: {}  Passed: {}  Failed: {}",
        report.total(),
        report.passed().to_string().green(),
        report.failed().to_string().red()
    );
    if report.all_passed() {
        println!("{}", "🎉 All tests passed!".green().bold());
    } else {
        println!(
            "{}",
            "❌ Some tests failed. Please review the implementation."
                .red()
                .bold()
        );
    }
}

fn print_status(passed: bool) {
    let label = status_label(passed);
    if passed {
        println!("Status:   {}", label.green());
    } else {
        println!("Status:   {}", label.red());
    }
}

/// Print the result of a randomized verification run
pub fn print_verify_result(result: &VerifyResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "VERIFICATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Summary:".bright_cyan().bold());
    println!("   Trials:            {}", result.trials);
    println!(
        "   Candy failures:    {}",
        colored_count(result.candy_failures)
    );
    println!(
        "   Cookie failures:   {}",
        colored_count(result.cookie_failures)
    );
    println!("   Time taken:        {:.2}s", result.duration.as_secs_f64());
    println!("   Trials/second:     {:.1}", result.trials_per_second);

    if result.trials > 0 {
        println!("\n📈 {}", "Content children per trial:".bright_cyan().bold());
        let mut counts: Vec<_> = result.content_distribution.iter().collect();
        counts.sort_by_key(|(content, _)| **content);

        for (content, &count) in counts {
            let pct = (count as f64 / result.trials as f64) * 100.0;
            let bar_width = (pct / 2.5) as usize;
            let bar = format!(
                "{}{}",
                "█".repeat(bar_width).green(),
                "░"
                    .repeat(40_usize.saturating_sub(bar_width))
                    .bright_black()
            );
            println!("   {content:3}: {bar} {count:6} ({pct:5.1}%)");
        }
    }

    for failure in &result.candy_examples {
        println!(
            "\n{} {}",
            "Candy failure:".red().bold(),
            format_sequence(&failure.ratings)
        );
        for violation in &failure.violations {
            println!("   - {violation}");
        }
    }

    for failure in &result.cookie_examples {
        println!(
            "\n{} greed {} cookies {} (ascending {}, descending {})",
            "Cookie failure:".red().bold(),
            format_sequence(&failure.greed),
            format_sequence(&failure.supply),
            failure.ascending,
            failure.descending
        );
    }

    println!();
    if result.is_clean() {
        println!("{}", "✅ All invariants held".green().bold());
    } else {
        println!("{}", "❌ Invariant violations found".red().bold());
    }
}

fn colored_count(count: usize) -> colored::ColoredString {
    if count == 0 {
        count.to_string().green()
    } else {
        count.to_string().red().bold()
    }
}
