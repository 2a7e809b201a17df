//! Greedy Allocation
//!
//! Two greedy exercises: the minimum candy needed so that every child rated
//! above a neighbour gets more than that neighbour, and the maximum number of
//! children that can be fed from a set of cookies.
//!
//! # Quick Start
//!
//! ```rust
//! use greedy_allocation::solver::{
//!     AssignStrategy, DescendingStrategy, max_content, minimum_candies,
//! };
//!
//! assert_eq!(minimum_candies(&[1, 0, 2]), 5);
//!
//! let greed = [1, 2, 3];
//! let cookies = [1, 1];
//! assert_eq!(max_content(&greed, &cookies), 1);
//! assert_eq!(DescendingStrategy.max_content(&greed, &cookies), 1);
//! ```

// Core domain types
pub mod core;

// Greedy algorithms
pub mod solver;

// Demonstration cases
pub mod cases;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
