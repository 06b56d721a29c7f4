//! The [`Prefix`] value object: a trimmed criterion token produced by the
//! sort command parser.

use std::fmt::{Display, Formatter, Result as FmtResult};

/// Errors raised when constructing a [`Prefix`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrefixError {
    /// The criterion text was empty after trimming.
    Empty,
}

impl Display for PrefixError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            PrefixError::Empty => write!(f, "Sort criterion must not be empty"),
        }
    }
}

impl std::error::Error for PrefixError {}

/// A parsed criterion token.
///
/// The prefix wraps the raw argument text with surrounding whitespace
/// removed, so `"  n/Alex Yeoh  "` and `"n/Alex Yeoh"` construct equal
/// prefixes. Construction fails fast only on empty input; whether the
/// content names a valid criterion is decided by the consuming command.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Prefix(String);

impl Prefix {
    /// Wraps a criterion token, trimming surrounding whitespace.
    pub fn new(token: &str) -> Result<Self, PrefixError> {
        let trimmed = token.trim();
        if trimmed.is_empty() {
            return Err(PrefixError::Empty);
        }
        Ok(Prefix(trimmed.to_string()))
    }

    /// The trimmed criterion text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Prefix {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(
            Prefix::new("  n/Alex Yeoh  ").unwrap(),
            Prefix::new("n/Alex Yeoh").unwrap()
        );
    }

    #[test]
    fn empty_input_fails_fast() {
        assert_eq!(Prefix::new(""), Err(PrefixError::Empty));
        assert_eq!(Prefix::new("   "), Err(PrefixError::Empty));
    }

    #[test]
    fn content_is_not_validated_at_construction() {
        assert!(Prefix::new("definitely not a criterion").is_ok());
    }
}
