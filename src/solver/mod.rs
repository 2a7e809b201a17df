//! Greedy solving algorithms
//!
//! Candy distribution and the two cookie assignment strategies.

mod candy;
mod cookies;
pub mod strategy;

pub use candy::{candy_allocation, minimum_candies};
pub use cookies::{max_content, max_content_ascending, max_content_descending};
pub use strategy::{AscendingStrategy, AssignStrategy, DescendingStrategy, StrategyType};
