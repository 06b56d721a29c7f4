//! # The Update Command
//!
//! Sets the status of the applicant uniquely identified by an identifier
//! predicate. The filtered view is narrowed to the predicate's matches, and
//! the match count decides the outcome:
//!
//! - zero matches: a "no matches" result, model unchanged.
//! - more than one match: a "be more specific" result with the count
//!   interpolated, model unchanged.
//! - exactly one match: that applicant's status is set and the success
//!   message names the updated record.

use crate::commands::{
    Command, CommandError, CommandResult, MESSAGE_NO_MATCHES, multiple_matches_message,
};
use crate::{IdentifierPredicate, Model, Status};

/// Command word for the update command.
pub const COMMAND_WORD: &str = "update";

/// Usage text for the update command.
pub const MESSAGE_USAGE: &str = "update: Sets the application status of the person identified by \
the specified contact identifier (name, email, or phone).\n\
Parameters: IDENTIFIER_TYPE/KEYWORD [--custom] STATUS\n\
Example: update n/Alex Yeoh Offered";

/// Sets the [`Status`] of the applicant identified by a contact identifier.
#[derive(Debug, Clone)]
pub struct UpdateCommand {
    predicate: IdentifierPredicate,
    status: Status,
}

impl UpdateCommand {
    /// Constructs an update command from the predicate identifying the
    /// target and the status to set.
    pub fn new(predicate: IdentifierPredicate, status: Status) -> Self {
        Self { predicate, status }
    }

    /// The predicate identifying the applicant to update.
    pub fn predicate(&self) -> &IdentifierPredicate {
        &self.predicate
    }

    /// The status the matched applicant will be set to.
    pub fn status(&self) -> &Status {
        &self.status
    }
}

impl Command for UpdateCommand {
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
        let updated = model.set_status(&target, self.status.clone())?;
        Ok(CommandResult::new(format!(
            "Updated status of: {}",
            updated
        )))
    }
}

// Equality is by predicate only; the status is deliberately excluded. Two
// update commands targeting the same applicant compare equal even when they
// would set different statuses.
impl PartialEq for UpdateCommand {
    fn eq(&self, other: &Self) -> bool {
        self.predicate == other.predicate
    }
}

impl Eq for UpdateCommand {}
