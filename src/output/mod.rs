//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_assign_result, print_demo_report, print_distribute_result, print_verify_result,
};
