//! # Commands
//!
//! Every user action is a command: a small object holding the parsed
//! parameters of one operation, executed synchronously against the model.
//! Execution returns a [`CommandResult`] carrying the feedback message shown
//! to the user, or a [`CommandError`](errors::CommandError) for failures
//! that are programming-level rather than expected user-input conditions.
//!
//! Zero or multiple predicate matches are NOT errors: they are ordinary
//! results with dedicated messages, since the user is expected to retry with
//! a more specific keyword.

use crate::Model;

pub mod add;
pub mod clear;
pub mod delete;
pub mod errors;
pub mod find;
pub mod list;
pub mod sort;
pub mod update;

pub use add::AddCommand;
pub use clear::ClearCommand;
pub use delete::DeleteCommand;
pub use errors::CommandError;
pub use find::FindCommand;
pub use list::ListCommand;
pub use sort::SortCommand;
pub use update::UpdateCommand;

/// Result message when a predicate matched no applicant.
pub const MESSAGE_NO_MATCHES: &str = "No person matches provided keyword!";

/// Result message when a predicate matched more than one applicant.
pub fn multiple_matches_message(count: usize) -> String {
    format!("{} persons matched keyword. Please be more specific!", count)
}

/// The outcome of a successfully executed command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    feedback: String,
}

impl CommandResult {
    /// Wraps a feedback message.
    pub fn new(feedback: impl Into<String>) -> Self {
        Self {
            feedback: feedback.into(),
        }
    }

    /// The message to show the user.
    pub fn feedback(&self) -> &str {
        &self.feedback
    }
}

/// A user action executable against the model.
pub trait Command: std::fmt::Debug {
    /// Executes the command, mutating the model where the operation calls
    /// for it and returning the feedback to render.
    fn execute(&self, model: &mut dyn Model) -> Result<CommandResult, CommandError>;
}

/// Renders a numbered applicant listing, one record per line.
pub(crate) fn render_listing(applicants: &[crate::Applicant]) -> String {
    applicants
        .iter()
        .enumerate()
        .map(|(i, applicant)| format!("{}. {}", i + 1, applicant))
        .collect::<Vec<_>>()
        .join("\n")
}
