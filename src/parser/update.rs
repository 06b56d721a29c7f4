//! Parser for the update command.
//!
//! Grammar: `IDENTIFIER_TYPE/KEYWORD [--custom] STATUS`. Without `--custom`
//! the final whitespace-separated token must name a known pipeline stage and
//! everything before it is the identifier. With `--custom`, the text after
//! the flag is taken verbatim as a free-form status.

use crate::commands::{UpdateCommand, update::MESSAGE_USAGE};
use crate::parser::{MESSAGE_INVALID_COMMAND_FORMAT, ParseError, parse_identifier};
use crate::Status;

const CUSTOM_FLAG: &str = "--custom";

/// Parses update command arguments.
pub struct UpdateCommandParser;

impl UpdateCommandParser {
    /// Parses the raw argument text into an update command.
    pub fn parse(args: &str) -> Result<UpdateCommand, ParseError> {
        let input = args.trim();
        if input.is_empty() {
            return Err(ParseError::new(format!(
                "{}\n{}",
                MESSAGE_INVALID_COMMAND_FORMAT, MESSAGE_USAGE
            )));
        }

        if let Some((identifier, status_text)) = input.split_once(CUSTOM_FLAG) {
            let status_text = status_text.trim();
            if status_text.is_empty() {
                return Err(ParseError::new(
                    "Custom status after --custom must not be empty",
                ));
            }
            let predicate = parse_identifier(identifier)?;
            return Ok(UpdateCommand::new(predicate, Status::custom(status_text)));
        }

        let (identifier, status_token) = input
            .rsplit_once(char::is_whitespace)
            .ok_or_else(|| {
                ParseError::new(format!(
                    "{}\n{}",
                    MESSAGE_INVALID_COMMAND_FORMAT, MESSAGE_USAGE
                ))
            })?;
        let status = Status::parse_known(status_token).ok_or_else(|| {
            ParseError::new(format!(
                "Unknown status '{}'. Known statuses: Applied, Screening, Interview, Offered, \
                 Accepted, Rejected; pass --custom for a free-form status",
                status_token
            ))
        })?;
        let predicate = parse_identifier(identifier)?;
        Ok(UpdateCommand::new(predicate, status))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{IdentifierField, IdentifierPredicate};

    #[test]
    fn known_status_at_the_tail() {
        let command = UpdateCommandParser::parse("n/Alex Yeoh Offered").unwrap();
        assert_eq!(
            command.predicate(),
            &IdentifierPredicate::new(IdentifierField::Name, "Alex Yeoh")
        );
        assert_eq!(command.status(), &Status::Offered);
    }

    #[test]
    fn known_status_is_case_insensitive() {
        let command = UpdateCommandParser::parse("p/87438807 rejected").unwrap();
        assert_eq!(command.status(), &Status::Rejected);
    }

    #[test]
    fn custom_status_keeps_text_verbatim() {
        let command =
            UpdateCommandParser::parse("n/Alex Yeoh --custom Awaiting references").unwrap();
        assert_eq!(command.status(), &Status::custom("Awaiting references"));
        assert_eq!(
            command.predicate(),
            &IdentifierPredicate::new(IdentifierField::Name, "Alex Yeoh")
        );
    }

    #[test]
    fn empty_custom_status_fails() {
        let err = UpdateCommandParser::parse("n/Alex Yeoh --custom   ").unwrap_err();
        assert!(err.message().contains("must not be empty"));
    }

    #[test]
    fn unknown_status_without_custom_flag_fails() {
        let err = UpdateCommandParser::parse("n/Alex Yeoh Shortlisted").unwrap_err();
        assert!(err.message().contains("Unknown status 'Shortlisted'"));
    }

    #[test]
    fn missing_status_fails_with_usage() {
        let err = UpdateCommandParser::parse("n/AlexYeoh").unwrap_err();
        assert!(err.message().contains("Invalid command format!"));
    }

    #[test]
    fn identifier_errors_pass_through() {
        let err = UpdateCommandParser::parse("x/Alex Yeoh Offered").unwrap_err();
        assert!(err.message().contains("Expected an identifier"));
    }

    #[test]
    fn empty_arguments_fail() {
        assert!(UpdateCommandParser::parse("   ").is_err());
    }
}
