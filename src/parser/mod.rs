//! # Command Text Parsing
//!
//! This module converts raw command text into command objects. Parsing is a
//! straight line: the top-level [`RolodexParser`] splits off the command
//! word and hands the argument text to the per-command parser, which
//! produces the command object or a [`ParseError`].
//!
//! Every internal failure (field validation, prefix construction) is
//! translated into a `ParseError` carrying the original failure's message
//! verbatim; parse failures are recovered at the CLI boundary by not
//! executing the command.

use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::applicant::FieldError;
use crate::commands::{self, ClearCommand, Command, ListCommand};
use crate::{IdentifierField, IdentifierPredicate};

pub mod add;
pub mod delete;
pub mod find;
pub mod prefix;
pub mod sort;
pub mod update;

pub use add::AddCommandParser;
pub use delete::DeleteCommandParser;
pub use find::FindCommandParser;
pub use prefix::{Prefix, PrefixError};
pub use sort::SortCommandParser;
pub use update::UpdateCommandParser;

/// Message used when command text is empty or structurally malformed.
pub const MESSAGE_INVALID_COMMAND_FORMAT: &str = "Invalid command format!";

/// A parse-time failure carrying a human-readable message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    message: String,
}

impl ParseError {
    /// Wraps a failure message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The failure message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ParseError {}

// Internal failures surface with their message intact.

impl From<PrefixError> for ParseError {
    fn from(e: PrefixError) -> Self {
        ParseError::new(e.to_string())
    }
}

impl From<FieldError> for ParseError {
    fn from(e: FieldError) -> Self {
        ParseError::new(e.to_string())
    }
}

/// Top-level parser: resolves the command word and dispatches the argument
/// text to the matching command parser.
pub struct RolodexParser;

impl RolodexParser {
    /// Parses one line of command text into an executable command.
    pub fn parse_command(input: &str) -> Result<Box<dyn Command>, ParseError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(ParseError::new(MESSAGE_INVALID_COMMAND_FORMAT));
        }
        let (word, args) = match input.split_once(char::is_whitespace) {
            Some((word, args)) => (word, args),
            None => (input, ""),
        };
        match word {
            commands::add::COMMAND_WORD => Ok(Box::new(AddCommandParser::parse(args)?)),
            commands::delete::COMMAND_WORD => Ok(Box::new(DeleteCommandParser::parse(args)?)),
            commands::find::COMMAND_WORD => Ok(Box::new(FindCommandParser::parse(args)?)),
            commands::list::COMMAND_WORD => Ok(Box::new(ListCommand)),
            commands::clear::COMMAND_WORD => Ok(Box::new(ClearCommand)),
            commands::sort::COMMAND_WORD => Ok(Box::new(SortCommandParser::parse(args)?)),
            commands::update::COMMAND_WORD => Ok(Box::new(UpdateCommandParser::parse(args)?)),
            _ => Err(ParseError::new(format!(
                "Unknown command '{}'. Available commands: add, delete, find, list, clear, sort, update",
                word
            ))),
        }
    }
}

/// Parses an `IDENTIFIER_TYPE/KEYWORD` token pair into a predicate.
pub(crate) fn parse_identifier(text: &str) -> Result<IdentifierPredicate, ParseError> {
    let text = text.trim();
    for field in [
        IdentifierField::Name,
        IdentifierField::Email,
        IdentifierField::Phone,
    ] {
        if let Some(keyword) = text.strip_prefix(field.prefix()) {
            let keyword = keyword.trim();
            if keyword.is_empty() {
                return Err(ParseError::new(format!(
                    "Identifier keyword after '{}' must not be empty",
                    field.prefix()
                )));
            }
            return Ok(IdentifierPredicate::new(field, keyword));
        }
    }
    Err(ParseError::new(format!(
        "Expected an identifier of the form n/KEYWORD, e/KEYWORD, or p/KEYWORD, got '{}'",
        text
    )))
}
