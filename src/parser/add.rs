//! Parser for the add command.
//!
//! Grammar: `n/NAME p/PHONE e/EMAIL [s/STATUS]`, prefixes in any order.
//! Values may contain spaces; a value runs until the next prefixed token.
//! Field validation failures surface with their original messages.

use std::collections::HashMap;

use crate::applicant::{Email, Name, Phone};
use crate::commands::{AddCommand, add::MESSAGE_USAGE};
use crate::parser::{MESSAGE_INVALID_COMMAND_FORMAT, ParseError};
use crate::{Applicant, Status};

const PREFIXES: &[&str] = &["n/", "p/", "e/", "s/"];

/// Parses add command arguments.
pub struct AddCommandParser;

impl AddCommandParser {
    /// Parses the raw argument text into an add command.
    pub fn parse(args: &str) -> Result<AddCommand, ParseError> {
        let values = tokenize(args)?;
        let name = Name::new(require(&values, "n/")?)?;
        let phone = Phone::new(require(&values, "p/")?)?;
        let email = Email::new(require(&values, "e/")?)?;
        let status = match values.get("s/") {
            Some(text) => {
                Status::parse_known(text).unwrap_or_else(|| Status::custom(text.as_str()))
            }
            None => Status::Applied,
        };
        Ok(AddCommand::new(Applicant::new(name, phone, email, status)))
    }
}

fn require<'a>(values: &'a HashMap<&'static str, String>, prefix: &str) -> Result<&'a str, ParseError> {
    values
        .get(prefix)
        .map(String::as_str)
        .ok_or_else(|| ParseError::new(format!("Missing required field '{}'\n{}", prefix, MESSAGE_USAGE)))
}

/// Splits the argument text into per-prefix values.
fn tokenize(args: &str) -> Result<HashMap<&'static str, String>, ParseError> {
    let mut values: HashMap<&'static str, String> = HashMap::new();
    let mut current: Option<&'static str> = None;
    for token in args.split_whitespace() {
        match PREFIXES
            .iter()
            .find(|prefix| token.starts_with(**prefix))
        {
            Some(prefix) => {
                if values.contains_key(*prefix) {
                    return Err(ParseError::new(format!("Repeated prefix '{}'", prefix)));
                }
                values.insert(*prefix, token[prefix.len()..].to_string());
                current = Some(*prefix);
            }
            None => {
                let Some(prefix) = current else {
                    return Err(ParseError::new(format!(
                        "{}\n{}",
                        MESSAGE_INVALID_COMMAND_FORMAT, MESSAGE_USAGE
                    )));
                };
                let value = values.get_mut(prefix).expect("current prefix has a value");
                if !value.is_empty() {
                    value.push(' ');
                }
                value.push_str(token);
            }
        }
    }
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_fields() {
        let command = AddCommandParser::parse(
            "n/Alex Yeoh p/87438807 e/alexyeoh@example.com s/Screening",
        )
        .unwrap();
        let applicant = command.applicant();
        assert_eq!(applicant.name().as_str(), "Alex Yeoh");
        assert_eq!(applicant.phone().as_str(), "87438807");
        assert_eq!(applicant.email().as_str(), "alexyeoh@example.com");
        assert_eq!(applicant.status(), &Status::Screening);
    }

    #[test]
    fn status_defaults_to_applied() {
        let command =
            AddCommandParser::parse("n/Alex Yeoh p/87438807 e/alexyeoh@example.com").unwrap();
        assert_eq!(command.applicant().status(), &Status::Applied);
    }

    #[test]
    fn unknown_status_text_becomes_custom() {
        let command = AddCommandParser::parse(
            "n/Alex Yeoh p/87438807 e/alexyeoh@example.com s/Referred by Bernice",
        )
        .unwrap();
        assert_eq!(
            command.applicant().status(),
            &Status::custom("Referred by Bernice")
        );
    }

    #[test]
    fn prefixes_in_any_order() {
        let command =
            AddCommandParser::parse("e/alexyeoh@example.com n/Alex Yeoh p/87438807").unwrap();
        assert_eq!(command.applicant().name().as_str(), "Alex Yeoh");
    }

    #[test]
    fn missing_required_field_fails() {
        let err = AddCommandParser::parse("n/Alex Yeoh p/87438807").unwrap_err();
        assert!(err.message().contains("Missing required field 'e/'"));
    }

    #[test]
    fn repeated_prefix_fails() {
        let err =
            AddCommandParser::parse("n/Alex n/Yeoh p/87438807 e/alexyeoh@example.com").unwrap_err();
        assert!(err.message().contains("Repeated prefix 'n/'"));
    }

    #[test]
    fn field_validation_messages_pass_through() {
        let err =
            AddCommandParser::parse("n/Alex Yeoh p/12 e/alexyeoh@example.com").unwrap_err();
        assert_eq!(
            err.message(),
            crate::applicant::FieldError::InvalidPhone("12".to_string()).to_string()
        );
    }

    #[test]
    fn text_before_any_prefix_fails() {
        let err = AddCommandParser::parse("Alex n/Alex Yeoh").unwrap_err();
        assert!(err.message().contains("Invalid command format!"));
    }
}
