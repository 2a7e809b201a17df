//! Demonstration cases
//!
//! The literal inputs and expected answers run by the `demo` command,
//! compiled into the binary.

mod embedded;

pub use embedded::{CANDY_CASES, COOKIE_CASES};

/// A candy distribution case with its expected minimum total
#[derive(Debug, Clone, Copy)]
pub struct CandyCase {
    pub description: &'static str,
    pub ratings: &'static [i64],
    pub expected: usize,
}

/// A cookie assignment case with its expected match count
#[derive(Debug, Clone, Copy)]
pub struct CookieCase {
    pub description: &'static str,
    pub greed: &'static [i64],
    pub supply: &'static [i64],
    pub expected: usize,
}
