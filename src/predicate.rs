//! Identifier predicates for selecting applicants.
//!
//! A predicate tests a single identifying field of an applicant against a
//! keyword. Matching is by exact field equality: `n/Alex Yeoh` selects the
//! applicants whose name is exactly `Alex Yeoh`.

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

use crate::Applicant;

/// The identifying field a predicate tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IdentifierField {
    /// Match against the applicant's name (`n/`).
    Name,
    /// Match against the applicant's email (`e/`).
    Email,
    /// Match against the applicant's phone number (`p/`).
    Phone,
}

impl IdentifierField {
    /// The command-text prefix that selects this field.
    pub fn prefix(&self) -> &'static str {
        match self {
            IdentifierField::Name => "n/",
            IdentifierField::Email => "e/",
            IdentifierField::Phone => "p/",
        }
    }

    /// Resolves a command-text prefix to a field.
    pub fn from_prefix(prefix: &str) -> Option<IdentifierField> {
        match prefix {
            "n/" => Some(IdentifierField::Name),
            "e/" => Some(IdentifierField::Email),
            "p/" => Some(IdentifierField::Phone),
            _ => None,
        }
    }
}

impl Display for IdentifierField {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            IdentifierField::Name => write!(f, "name"),
            IdentifierField::Email => write!(f, "email"),
            IdentifierField::Phone => write!(f, "phone"),
        }
    }
}

/// A boolean-valued matching function over an applicant.
///
/// Two predicates are equal when they test the same field against the same
/// keyword.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentifierPredicate {
    field: IdentifierField,
    keyword: String,
}

impl IdentifierPredicate {
    /// Constructs a predicate testing `field` against `keyword`.
    pub fn new(field: IdentifierField, keyword: impl Into<String>) -> Self {
        Self {
            field,
            keyword: keyword.into(),
        }
    }

    /// The field this predicate tests.
    pub fn field(&self) -> IdentifierField {
        self.field
    }

    /// The keyword this predicate tests against.
    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    /// Tests the predicate against an applicant.
    pub fn matches(&self, applicant: &Applicant) -> bool {
        let value = match self.field {
            IdentifierField::Name => applicant.name().as_str(),
            IdentifierField::Email => applicant.email().as_str(),
            IdentifierField::Phone => applicant.phone().as_str(),
        };
        value == self.keyword
    }
}

impl Display for IdentifierPredicate {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}{}", self.field.prefix(), self.keyword)
    }
}
