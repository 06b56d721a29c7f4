//! The clear command: empties the address book.

use crate::commands::{Command, CommandError, CommandResult};
use crate::Model;

/// Command word for the clear command.
pub const COMMAND_WORD: &str = "clear";

/// Removes every applicant from the address book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClearCommand;

impl Command for ClearCommand {
    fn execute(&self, model: &mut dyn Model) -> Result<CommandResult, CommandError> {
        model.clear();
        model.clear_filter();
        Ok(CommandResult::new("Address book has been cleared!"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::test_helpers::sample_book;
    use crate::{ModelManager, ReadOnlyAddressBook};

    #[test]
    fn clears_the_book() {
        let mut model = ModelManager::new(sample_book());
        let result = ClearCommand.execute(&mut model).unwrap();
        assert_eq!(result.feedback(), "Address book has been cleared!");
        assert!(model.address_book().applicants().is_empty());
    }
}
