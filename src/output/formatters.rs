//! Formatting utilities for terminal output

use crate::core::Allocation;

/// Status label for a check
#[must_use]
pub const fn status_label(passed: bool) -> &'static str {
    if passed { "✅ Pass" } else { "❌ Fail" }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// One bar per child, scaled to the largest allocation
#[must_use]
pub fn allocation_bars(allocation: &Allocation, width: usize) -> Vec<String> {
    let max = allocation.max() as f64;

    allocation
        .counts()
        .iter()
        .map(|&count| create_progress_bar(count as f64, max, width))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_labels() {
        assert_eq!(status_label(true), "✅ Pass");
        assert_eq!(status_label(false), "❌ Fail");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn allocation_bars_scale_to_max() {
        let bars = allocation_bars(&Allocation::new(vec![2, 1, 2]), 4);
        assert_eq!(bars, vec!["████", "██░░", "████"]);
    }

    #[test]
    fn allocation_bars_empty() {
        assert!(allocation_bars(&Allocation::default(), 4).is_empty());
    }
}
