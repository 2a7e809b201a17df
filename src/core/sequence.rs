//! Integer sequence parsing
//!
//! Ratings, greed factors and cookie sizes all arrive as plain integer
//! sequences. On the command line they are written as `1,0,2` or `1 0 2`.

use std::fmt;

/// Error type for malformed sequences
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SequenceError {
    /// A token that is not a valid `i64`
    InvalidInteger { position: usize, token: String },
}

impl fmt::Display for SequenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInteger { position, token } => {
                write!(f, "Invalid integer '{token}' at position {position}")
            }
        }
    }
}

impl std::error::Error for SequenceError {}

/// Parse a sequence of integers separated by commas and/or whitespace
///
/// An empty (or all-separator) string yields the empty sequence. Negative
/// values are accepted.
///
/// # Errors
/// Returns `SequenceError::InvalidInteger` for the first token that does not
/// parse as an `i64`. Positions are zero-based over the non-empty tokens.
///
/// # Examples
/// ```
/// use greedy_allocation::core::parse_sequence;
///
/// assert_eq!(parse_sequence("1,0,2").unwrap(), vec![1, 0, 2]);
/// assert_eq!(parse_sequence("3 -2, 7").unwrap(), vec![3, -2, 7]);
/// assert!(parse_sequence("").unwrap().is_empty());
/// assert!(parse_sequence("1,x").is_err());
/// ```
pub fn parse_sequence(input: &str) -> Result<Vec<i64>, SequenceError> {
    input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .enumerate()
        .map(|(position, token)| {
            token
                .parse::<i64>()
                .map_err(|_| SequenceError::InvalidInteger {
                    position,
                    token: token.to_string(),
                })
        })
        .collect()
}

/// Format a sequence the way it is echoed back in reports: `[1, 0, 2]`
#[must_use]
pub fn format_sequence<T: fmt::Display>(values: &[T]) -> String {
    let body = values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{body}]")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_comma_separated() {
        assert_eq!(
            parse_sequence("1,2,87,87,87,2,1").unwrap(),
            vec![1, 2, 87, 87, 87, 2, 1]
        );
    }

    #[test]
    fn parses_whitespace_and_mixed_separators() {
        assert_eq!(parse_sequence("1 2  3").unwrap(), vec![1, 2, 3]);
        assert_eq!(parse_sequence(" 1, 2 ,3 ").unwrap(), vec![1, 2, 3]);
        assert_eq!(parse_sequence("4,,5").unwrap(), vec![4, 5]);
    }

    #[test]
    fn parses_negative_values() {
        assert_eq!(parse_sequence("-1,0,-7").unwrap(), vec![-1, 0, -7]);
    }

    #[test]
    fn empty_input_is_empty_sequence() {
        assert!(parse_sequence("").unwrap().is_empty());
        assert!(parse_sequence(" , ").unwrap().is_empty());
    }

    #[test]
    fn rejects_non_integer_tokens() {
        assert_eq!(
            parse_sequence("1,two,3"),
            Err(SequenceError::InvalidInteger {
                position: 1,
                token: "two".to_string()
            })
        );
        assert!(parse_sequence("1.5").is_err());
        assert!(parse_sequence("99999999999999999999").is_err());
    }

    #[test]
    fn error_display_names_token() {
        let err = parse_sequence("1,a").unwrap_err();
        assert_eq!(err.to_string(), "Invalid integer 'a' at position 1");
    }

    #[test]
    fn format_sequence_brackets() {
        assert_eq!(format_sequence(&[1, 0, 2]), "[1, 0, 2]");
        assert_eq!(format_sequence::<i64>(&[]), "[]");
    }
}
