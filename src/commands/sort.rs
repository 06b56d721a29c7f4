//! The sort command: reorders the address book by a criterion named by a
//! parsed [`Prefix`].

use crate::commands::{Command, CommandError, CommandResult};
use crate::parser::Prefix;
use crate::{Model, SortCriterion};

/// Command word for the sort command.
pub const COMMAND_WORD: &str = "sort";

/// Usage text for the sort command.
pub const MESSAGE_USAGE: &str = "sort: Sorts the applicant list by the given criterion.\n\
Parameters: CRITERION (one of n/, e/, p/, s/)\n\
Example: sort n/";

/// Sorts the applicant list by the criterion carried in a prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortCommand {
    prefix: Prefix,
}

impl SortCommand {
    /// Constructs a sort command from the parsed criterion prefix.
    pub fn new(prefix: Prefix) -> Self {
        Self { prefix }
    }

    /// The criterion prefix this command sorts by.
    pub fn prefix(&self) -> &Prefix {
        &self.prefix
    }

    fn criterion(&self) -> Result<SortCriterion, CommandError> {
        // The prefix wraps the trimmed raw token; content is validated here,
        // at execute time, not at parse time.
        let token = self.prefix.as_str();
        let criterion = match token.split('/').next() {
            Some("n") => SortCriterion::Name,
            Some("e") => SortCriterion::Email,
            Some("p") => SortCriterion::Phone,
            Some("s") => SortCriterion::Status,
            _ => return Err(CommandError::UnknownSortCriterion(token.to_string())),
        };
        Ok(criterion)
    }
}

impl Command for SortCommand {
    fn execute(&self, model: &mut dyn Model) -> Result<CommandResult, CommandError> {
        let criterion = self.criterion()?;
        model.sort_applicants(criterion);
        Ok(CommandResult::new(format!(
            "Sorted applicants by {}",
            criterion
        )))
    }
}
