//! The add command: appends a new applicant to the address book.

use crate::commands::{Command, CommandError, CommandResult};
use crate::{Applicant, Model};

/// Command word for the add command.
pub const COMMAND_WORD: &str = "add";

/// Usage text for the add command.
pub const MESSAGE_USAGE: &str = "add: Adds an applicant to the address book.\n\
Parameters: n/NAME p/PHONE e/EMAIL [s/STATUS]\n\
Example: add n/Alex Yeoh p/87438807 e/alexyeoh@example.com";

/// Adds an applicant to the address book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddCommand {
    applicant: Applicant,
}

impl AddCommand {
    /// Constructs an add command for the given applicant.
    pub fn new(applicant: Applicant) -> Self {
        Self { applicant }
    }

    /// The applicant to be added.
    pub fn applicant(&self) -> &Applicant {
        &self.applicant
    }
}

impl Command for AddCommand {
    fn execute(&self, model: &mut dyn Model) -> Result<CommandResult, CommandError> {
        model.add_applicant(self.applicant.clone())?;
        Ok(CommandResult::new(format!(
            "New applicant added: {}",
            self.applicant
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::test_helpers::{applicant, sample_book};
    use crate::{ModelManager, ReadOnlyAddressBook};

    #[test]
    fn adds_to_the_book() {
        let mut model = ModelManager::new(sample_book());
        let david = applicant("David Li", "91031282", "lidavid@example.com", "Applied");

        let result = AddCommand::new(david.clone()).execute(&mut model).unwrap();

        assert_eq!(
            result.feedback(),
            format!("New applicant added: {}", david)
        );
        assert_eq!(model.address_book().applicants().len(), 4);
    }

    #[test]
    fn duplicate_is_an_error() {
        let mut model = ModelManager::new(sample_book());
        let duplicate = applicant("Alex Yeoh", "11111111", "elsewhere@example.com", "Applied");

        let result = AddCommand::new(duplicate).execute(&mut model);

        assert_eq!(
            result,
            Err(CommandError::DuplicateApplicant("Alex Yeoh".to_string()))
        );
        assert_eq!(model.address_book().applicants().len(), 3);
    }
}
