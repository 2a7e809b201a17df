//! Core domain types
//!
//! Input sequences and the candy allocation value type. Everything here is pure
//! with zero external dependencies.

mod allocation;
mod sequence;

pub use allocation::{Allocation, Violation};
pub use sequence::{SequenceError, format_sequence, parse_sequence};
