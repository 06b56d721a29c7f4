//! The find command: narrows the filtered view to the applicants matching an
//! identifier predicate and lists them.

use crate::commands::{Command, CommandError, CommandResult, render_listing};
use crate::{IdentifierPredicate, Model};

/// Command word for the find command.
pub const COMMAND_WORD: &str = "find";

/// Usage text for the find command.
pub const MESSAGE_USAGE: &str = "find: Lists the persons matching the specified contact \
identifier (name, email, or phone).\n\
Parameters: IDENTIFIER_TYPE/KEYWORD\n\
Example: find p/87438807";

/// Filters the applicant list by a contact identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindCommand {
    predicate: IdentifierPredicate,
}

impl FindCommand {
    /// Constructs a find command from the match predicate.
    pub fn new(predicate: IdentifierPredicate) -> Self {
        Self { predicate }
    }

    /// The predicate applicants are matched against.
    pub fn predicate(&self) -> &IdentifierPredicate {
        &self.predicate
    }
}

impl Command for FindCommand {
    fn execute(&self, model: &mut dyn Model) -> Result<CommandResult, CommandError> {
        model.update_filtered_applicant_list(self.predicate.clone());
        let matched = model.filtered_applicant_list();
        let mut feedback = format!("{} persons listed!", matched.len());
        if !matched.is_empty() {
            feedback.push('\n');
            feedback.push_str(&render_listing(&matched));
        }
        Ok(CommandResult::new(feedback))
    }
}
