//! # Rolodex: Applicant Tracking for Hiring Pipelines
//!
//! Rolodex stores a duplicate-free list of applicants, lets a user filter
//! them by an identifier predicate (name, email, or phone keyword), and
//! mutate the status of the uniquely matched record. Commands execute
//! synchronously against an in-memory model; results are plain message
//! strings rendered by the CLI layer.
//!
//! ## Core Concepts
//!
//! ### Applicants
//! An applicant is a contact record with a validated name, phone number,
//! and email address, plus a mutable [`Status`] tracking their stage in the
//! hiring pipeline. No two records in the book refer to the same applicant.
//!
//! ### Predicates
//! An [`IdentifierPredicate`] tests one identifying field against a keyword
//! by exact equality. Commands that target a single applicant filter with a
//! predicate first and branch on the match count: zero or multiple matches
//! are ordinary results telling the user to be more specific, never errors.
//!
//! ### Commands and Parsing
//! Raw text flows through a straight line:
//!
//! ```text
//! raw text -> RolodexParser -> Command -> Command::execute(model) -> CommandResult
//! ```
//!
//! There is no feedback, retry, or concurrency anywhere on that path.
//!
//! ## Usage Examples
//!
//! ```rust
//! use rolodex::commands::Command;
//! use rolodex::parser::RolodexParser;
//! use rolodex::{AddressBook, Model, ModelManager, ReadOnlyAddressBook};
//!
//! let mut model = ModelManager::new(AddressBook::new());
//!
//! let add = RolodexParser::parse_command(
//!     "add n/Alex Yeoh p/87438807 e/alexyeoh@example.com",
//! )
//! .unwrap();
//! add.execute(&mut model).unwrap();
//!
//! let update = RolodexParser::parse_command("update n/Alex Yeoh Offered").unwrap();
//! let result = update.execute(&mut model).unwrap();
//! assert!(result.feedback().starts_with("Updated status of: Alex Yeoh"));
//! assert_eq!(model.address_book().applicants().len(), 1);
//! ```

#![deny(missing_docs)]

mod address_book;
mod applicant;
mod model;
mod predicate;
mod savefile;
mod status;
mod test_utils;

/// Command-line interface utilities for program termination and output
/// formatting.
pub mod cli_utils;

/// User actions: command objects executed synchronously against the model.
pub mod commands;

/// Conversion of raw command text into command objects.
pub mod parser;

pub use address_book::{AddressBook, AddressBookError, ReadOnlyAddressBook, SortCriterion};
pub use applicant::{Applicant, Email, FieldError, Name, Phone};
pub use commands::{Command, CommandError, CommandResult};
pub use model::{Model, ModelManager, ModelObserver};
pub use parser::{ParseError, Prefix, PrefixError, RolodexParser};
pub use predicate::{IdentifierField, IdentifierPredicate};
pub use savefile::{SaveFile, SavefileError, SavefileManager};
pub use status::Status;
