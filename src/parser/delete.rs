//! Parser for the delete command: a single `IDENTIFIER_TYPE/KEYWORD`
//! argument.

use crate::commands::DeleteCommand;
use crate::parser::{ParseError, parse_identifier};

/// Parses delete command arguments.
pub struct DeleteCommandParser;

impl DeleteCommandParser {
    /// Parses the raw argument text into a delete command.
    pub fn parse(args: &str) -> Result<DeleteCommand, ParseError> {
        let predicate = parse_identifier(args)?;
        Ok(DeleteCommand::new(predicate))
    }
}
