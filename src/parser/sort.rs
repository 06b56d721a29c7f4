//! Parser for the sort command: trims the raw argument, wraps it in a
//! [`Prefix`], and constructs a [`SortCommand`]. Prefix construction
//! failures surface as parse failures with the original message.

use crate::commands::SortCommand;
use crate::parser::{ParseError, Prefix};

/// Parses sort command arguments.
pub struct SortCommandParser;

impl SortCommandParser {
    /// Parses the raw argument text into a sort command.
    pub fn parse(args: &str) -> Result<SortCommand, ParseError> {
        let input = args.trim();
        let prefix = Prefix::new(input)?;
        Ok(SortCommand::new(prefix))
    }
}
