//! Parser for the find command: a single `IDENTIFIER_TYPE/KEYWORD`
//! argument.

use crate::commands::FindCommand;
use crate::parser::{ParseError, parse_identifier};

/// Parses find command arguments.
pub struct FindCommandParser;

impl FindCommandParser {
    /// Parses the raw argument text into a find command.
    pub fn parse(args: &str) -> Result<FindCommand, ParseError> {
        let predicate = parse_identifier(args)?;
        Ok(FindCommand::new(predicate))
    }
}
