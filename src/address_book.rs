//! # The Address Book
//!
//! This module provides the ordered, duplicate-free collection of applicants
//! that the rest of the system operates on. Consumers that only need to read
//! the list go through the [`ReadOnlyAddressBook`] trait; mutation is owned
//! by the model layer.
//!
//! Duplicate detection uses the applicant identity rule
//! ([`Applicant::is_same_applicant`]): no two records in the book may refer
//! to the same applicant.

use std::cmp::Ordering;
use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

use crate::Applicant;

/// Errors that can occur when mutating the address book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddressBookError {
    /// The operation would put two records for the same applicant in the book.
    DuplicateApplicant(String),
    /// The targeted applicant is not in the book.
    ApplicantNotFound(String),
}

impl Display for AddressBookError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            AddressBookError::DuplicateApplicant(name) => {
                write!(f, "Applicant '{}' already exists in the address book", name)
            }
            AddressBookError::ApplicantNotFound(name) => {
                write!(f, "Applicant '{}' is not in the address book", name)
            }
        }
    }
}

impl std::error::Error for AddressBookError {}

/// A criterion the address book can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortCriterion {
    /// Sort by name, case-insensitively.
    Name,
    /// Sort by email, case-insensitively.
    Email,
    /// Sort by phone number.
    Phone,
    /// Sort by status display name.
    Status,
}

impl Display for SortCriterion {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            SortCriterion::Name => write!(f, "name"),
            SortCriterion::Email => write!(f, "email"),
            SortCriterion::Phone => write!(f, "phone"),
            SortCriterion::Status => write!(f, "status"),
        }
    }
}

/// Read-only view of an address book.
///
/// The sequence is ordered and contains no two records for the same
/// applicant. There are no mutation methods; the backing collection is owned
/// and mutated elsewhere.
pub trait ReadOnlyAddressBook {
    /// The ordered, duplicate-free applicant sequence.
    fn applicants(&self) -> &[Applicant];
}

/// The mutable applicant collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressBook {
    applicants: Vec<Applicant>,
}

impl AddressBook {
    /// Creates an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a book from a list of applicants, rejecting duplicates.
    pub fn from_applicants(applicants: Vec<Applicant>) -> Result<Self, AddressBookError> {
        let mut book = Self::new();
        for applicant in applicants {
            book.add_applicant(applicant)?;
        }
        Ok(book)
    }

    /// Number of applicants in the book.
    pub fn len(&self) -> usize {
        self.applicants.len()
    }

    /// Whether the book is empty.
    pub fn is_empty(&self) -> bool {
        self.applicants.is_empty()
    }

    /// Whether the book already holds a record for the same applicant.
    pub fn contains_same_applicant(&self, applicant: &Applicant) -> bool {
        self.applicants
            .iter()
            .any(|existing| existing.is_same_applicant(applicant))
    }

    /// Appends an applicant to the book.
    pub fn add_applicant(&mut self, applicant: Applicant) -> Result<(), AddressBookError> {
        if self.contains_same_applicant(&applicant) {
            return Err(AddressBookError::DuplicateApplicant(
                applicant.name().as_str().to_string(),
            ));
        }
        self.applicants.push(applicant);
        Ok(())
    }

    /// Removes the record equal to `target`.
    ///
    /// Returns an error when no record in the book equals the target.
    pub fn remove_applicant(&mut self, target: &Applicant) -> Result<(), AddressBookError> {
        let index = self
            .applicants
            .iter()
            .position(|existing| existing == target)
            .ok_or_else(|| {
                AddressBookError::ApplicantNotFound(target.name().as_str().to_string())
            })?;
        self.applicants.remove(index);
        Ok(())
    }

    /// Replaces the record equal to `target` with `replacement`, keeping its
    /// position in the ordering.
    ///
    /// The replacement may not collide with a different record under the
    /// applicant identity rule.
    pub fn replace_applicant(
        &mut self,
        target: &Applicant,
        replacement: Applicant,
    ) -> Result<(), AddressBookError> {
        let index = self
            .applicants
            .iter()
            .position(|existing| existing == target)
            .ok_or_else(|| {
                AddressBookError::ApplicantNotFound(target.name().as_str().to_string())
            })?;
        let collides = self
            .applicants
            .iter()
            .enumerate()
            .any(|(i, existing)| i != index && existing.is_same_applicant(&replacement));
        if collides {
            return Err(AddressBookError::DuplicateApplicant(
                replacement.name().as_str().to_string(),
            ));
        }
        self.applicants[index] = replacement;
        Ok(())
    }

    /// Sorts the book in place by the given criterion.
    pub fn sort_by_criterion(&mut self, criterion: SortCriterion) {
        self.applicants.sort_by(|a, b| compare(a, b, criterion));
    }

    /// Removes every applicant from the book.
    pub fn clear(&mut self) {
        self.applicants.clear();
    }
}

impl ReadOnlyAddressBook for AddressBook {
    fn applicants(&self) -> &[Applicant] {
        &self.applicants
    }
}

fn compare(a: &Applicant, b: &Applicant, criterion: SortCriterion) -> Ordering {
    match criterion {
        SortCriterion::Name => a
            .name()
            .as_str()
            .to_lowercase()
            .cmp(&b.name().as_str().to_lowercase()),
        SortCriterion::Email => a
            .email()
            .as_str()
            .to_lowercase()
            .cmp(&b.email().as_str().to_lowercase()),
        SortCriterion::Phone => a.phone().as_str().cmp(b.phone().as_str()),
        SortCriterion::Status => a.status().as_str().cmp(b.status().as_str()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::test_helpers::{applicant, sample_book};

    #[test]
    fn add_and_read_back() {
        let mut book = AddressBook::new();
        let alex = applicant("Alex Yeoh", "87438807", "alexyeoh@example.com", "Applied");
        book.add_applicant(alex.clone()).unwrap();
        assert_eq!(book.applicants(), &[alex]);
    }

    #[test]
    fn add_rejects_same_applicant() {
        let mut book = AddressBook::new();
        book.add_applicant(applicant(
            "Alex Yeoh",
            "87438807",
            "alexyeoh@example.com",
            "Applied",
        ))
        .unwrap();
        let duplicate = applicant("Alex Yeoh", "99999999", "other@example.com", "Rejected");
        assert_eq!(
            book.add_applicant(duplicate),
            Err(AddressBookError::DuplicateApplicant(
                "Alex Yeoh".to_string()
            ))
        );
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn from_applicants_rejects_duplicates() {
        let applicants = vec![
            applicant("Alex Yeoh", "87438807", "alexyeoh@example.com", "Applied"),
            applicant("Alex Yeoh", "99999999", "other@example.com", "Applied"),
        ];
        assert!(AddressBook::from_applicants(applicants).is_err());
    }

    #[test]
    fn remove_applicant() {
        let mut book = sample_book();
        let alex = book.applicants()[0].clone();
        book.remove_applicant(&alex).unwrap();
        assert!(!book.contains_same_applicant(&alex));
    }

    #[test]
    fn remove_missing_applicant_fails() {
        let mut book = AddressBook::new();
        let alex = applicant("Alex Yeoh", "87438807", "alexyeoh@example.com", "Applied");
        assert_eq!(
            book.remove_applicant(&alex),
            Err(AddressBookError::ApplicantNotFound("Alex Yeoh".to_string()))
        );
    }

    #[test]
    fn replace_keeps_position() {
        let mut book = sample_book();
        let bernice = book.applicants()[1].clone();
        let updated = bernice.with_status(crate::Status::Offered);
        book.replace_applicant(&bernice, updated.clone()).unwrap();
        assert_eq!(&book.applicants()[1], &updated);
    }

    #[test]
    fn replace_rejects_identity_collision() {
        let mut book = sample_book();
        let bernice = book.applicants()[1].clone();
        let imposter = applicant("Alex Yeoh", "99272758", "berniceyu@example.com", "Applied");
        assert!(matches!(
            book.replace_applicant(&bernice, imposter),
            Err(AddressBookError::DuplicateApplicant(_))
        ));
    }

    #[test]
    fn sort_by_name() {
        let mut book = AddressBook::new();
        book.add_applicant(applicant(
            "Charlotte Oliveiro",
            "93210283",
            "charlotte@example.com",
            "Applied",
        ))
        .unwrap();
        book.add_applicant(applicant(
            "alex yeoh",
            "87438807",
            "alexyeoh@example.com",
            "Applied",
        ))
        .unwrap();
        book.sort_by_criterion(SortCriterion::Name);
        assert_eq!(book.applicants()[0].name().as_str(), "alex yeoh");
    }

    #[test]
    fn sort_by_status() {
        let mut book = sample_book();
        book.sort_by_criterion(SortCriterion::Status);
        let statuses: Vec<&str> = book
            .applicants()
            .iter()
            .map(|a| a.status().as_str())
            .collect();
        let mut sorted = statuses.clone();
        sorted.sort();
        assert_eq!(statuses, sorted);
    }

    #[test]
    fn clear_empties_the_book() {
        let mut book = sample_book();
        book.clear();
        assert!(book.is_empty());
    }
}
