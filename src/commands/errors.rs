//! # Command Error Handling
//!
//! Execute-time errors for commands, with `handled`-based extraction of
//! user-friendly messages and usage hints for the CLI boundary.

use handled::Handle;

use crate::AddressBookError;

/// User-friendly error information extracted from command errors.
#[derive(Debug, Clone)]
pub struct UserError {
    /// The main error message to display to the user.
    pub message: String,
    /// Optional usage hint to help the user correct the error.
    pub usage_hint: Option<String>,
}

impl std::fmt::Display for UserError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Handle<UserError> for UserError {
    fn handle(&self) -> Option<UserError> {
        Some(self.clone())
    }
}

/// Errors raised while executing a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// The command would create a second record for an applicant already in
    /// the book.
    DuplicateApplicant(String),
    /// The targeted applicant disappeared between filtering and mutation.
    ApplicantNotFound(String),
    /// The sort criterion token does not name a sortable field.
    UnknownSortCriterion(String),
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandError::DuplicateApplicant(name) => {
                write!(f, "Applicant '{}' already exists in the address book", name)
            }
            CommandError::ApplicantNotFound(name) => {
                write!(f, "Applicant '{}' is not in the address book", name)
            }
            CommandError::UnknownSortCriterion(token) => {
                write!(f, "Unknown sort criterion '{}'", token)
            }
        }
    }
}

impl std::error::Error for CommandError {}

impl From<AddressBookError> for CommandError {
    fn from(e: AddressBookError) -> Self {
        match e {
            AddressBookError::DuplicateApplicant(name) => CommandError::DuplicateApplicant(name),
            AddressBookError::ApplicantNotFound(name) => CommandError::ApplicantNotFound(name),
        }
    }
}

impl Handle<UserError> for CommandError {
    fn handle(&self) -> Option<UserError> {
        let usage_hint = match self {
            CommandError::DuplicateApplicant(_) => {
                Some("Applicant names must be unique. Use 'update' to change an existing record.".to_string())
            }
            CommandError::ApplicantNotFound(_) => None,
            CommandError::UnknownSortCriterion(_) => Some(
                "Sort criteria: n/ (name), e/ (email), p/ (phone), s/ (status)".to_string(),
            ),
        };
        Some(UserError {
            message: self.to_string(),
            usage_hint,
        })
    }
}

/// Enhanced error formatting for CLI output.
pub fn format_cli_error<E>(error: &E) -> String
where
    E: Handle<UserError> + std::fmt::Display,
{
    if let Some(user_error) = error.handle() {
        let mut output = format!("Error: {}", user_error.message);
        if let Some(hint) = user_error.usage_hint {
            output.push_str(&format!("\nHint: {}", hint));
        }
        output
    } else {
        format!("Error: {}", error)
    }
}
