//! The list command: clears the filter and lists every applicant.

use crate::commands::{Command, CommandError, CommandResult, render_listing};
use crate::Model;

/// Command word for the list command.
pub const COMMAND_WORD: &str = "list";

/// Lists all applicants in the address book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ListCommand;

impl Command for ListCommand {
    fn execute(&self, model: &mut dyn Model) -> Result<CommandResult, CommandError> {
        model.clear_filter();
        let applicants = model.filtered_applicant_list();
        let mut feedback = "Listed all persons".to_string();
        if !applicants.is_empty() {
            feedback.push('\n');
            feedback.push_str(&render_listing(&applicants));
        }
        Ok(CommandResult::new(feedback))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::test_helpers::sample_book;
    use crate::{IdentifierField, IdentifierPredicate, ModelManager};

    #[test]
    fn lists_everyone_and_clears_filter() {
        let mut model = ModelManager::new(sample_book());
        model.update_filtered_applicant_list(IdentifierPredicate::new(
            IdentifierField::Name,
            "Alex Yeoh",
        ));

        let result = ListCommand.execute(&mut model).unwrap();

        assert!(result.feedback().starts_with("Listed all persons\n"));
        assert_eq!(model.filtered_applicant_list_size(), 3);
    }

    #[test]
    fn empty_book_lists_header_only() {
        let mut model = ModelManager::new(crate::AddressBook::new());
        let result = ListCommand.execute(&mut model).unwrap();
        assert_eq!(result.feedback(), "Listed all persons");
    }
}
