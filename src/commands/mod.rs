//! Command implementations

pub mod candy;
pub mod cookies;
pub mod demo;
pub mod verify;

pub use candy::{DistributeResult, distribute};
pub use cookies::{AssignResult, StrategyOutcome, assign};
pub use demo::{CandyOutcome, CookieOutcome, DemoConfig, DemoReport, run_demo};
pub use verify::{VerifyConfig, VerifyResult, run_verify};
