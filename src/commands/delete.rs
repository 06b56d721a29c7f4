//! The delete command: removes the applicant uniquely identified by an
//! identifier predicate. Match-count branching mirrors the update command:
//! zero and multiple matches are ordinary results, not errors.

use crate::commands::{
    Command, CommandError, CommandResult, MESSAGE_NO_MATCHES, multiple_matches_message,
};
use crate::{IdentifierPredicate, Model};

/// Command word for the delete command.
pub const COMMAND_WORD: &str = "delete";

/// Usage text for the delete command.
pub const MESSAGE_USAGE: &str = "delete: Deletes the person identified by the specified contact \
identifier (name, email, or phone).\n\
Parameters: IDENTIFIER_TYPE/KEYWORD\n\
Example: delete n/Alex Yeoh";

/// Deletes the applicant identified by a contact identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteCommand {
    predicate: IdentifierPredicate,
}

impl DeleteCommand {
    /// Constructs a delete command from the predicate identifying the target.
    pub fn new(predicate: IdentifierPredicate) -> Self {
        Self { predicate }
    }

    /// The predicate identifying the applicant to delete.
    pub fn predicate(&self) -> &IdentifierPredicate {
        &self.predicate
    }
}

impl Command for DeleteCommand {
    fn execute(&self, model: &mut dyn Model) -> Result<CommandResult, CommandError> {
        model.update_filtered_applicant_list(self.predicate.clone());
        let matches = model.filtered_applicant_list_size();
        if matches == 0 {
            return Ok(CommandResult::new(MESSAGE_NO_MATCHES));
        }
        if matches > 1 {
            return Ok(CommandResult::new(multiple_matches_message(matches)));
        }
        let target = model.filtered_applicant_list()[0].clone();
        model.delete_applicant(&target)?;
        model.clear_filter();
        Ok(CommandResult::new(format!("Deleted applicant: {}", target)))
    }
}
