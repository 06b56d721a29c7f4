//! # The Model Layer
//!
//! This module defines the [`Model`] trait consumed by commands and its
//! in-memory implementation, [`ModelManager`]. The model owns the address
//! book and a current filter; commands narrow the filtered view with an
//! identifier predicate, inspect the matches, and mutate through the model's
//! operations.
//!
//! UI layers observe the model through the explicit [`ModelObserver`]
//! publish/subscribe interface rather than any implicit framework binding:
//! every mutation ends with a change notification carrying the read-only
//! book view.

use crate::{
    AddressBook, AddressBookError, Applicant, IdentifierPredicate, ReadOnlyAddressBook,
    SortCriterion, Status,
};

/// Receives change notifications from a [`ModelManager`].
pub trait ModelObserver {
    /// Called after any mutation of the applicant list.
    fn applicants_changed(&self, book: &dyn ReadOnlyAddressBook);
}

/// The interface commands execute against.
///
/// Filtering and reading are side-effect-free; `set_status`,
/// `add_applicant`, `delete_applicant`, `sort_applicants`, and `clear` are
/// the only mutations.
pub trait Model {
    /// Narrows the filtered applicant view to the records matching `predicate`.
    fn update_filtered_applicant_list(&mut self, predicate: IdentifierPredicate);

    /// Resets the filtered view to the whole book.
    fn clear_filter(&mut self);

    /// Number of applicants in the current filtered view.
    fn filtered_applicant_list_size(&self) -> usize;

    /// The applicants in the current filtered view, in book order.
    fn filtered_applicant_list(&self) -> Vec<Applicant>;

    /// Sets `target`'s status, returning the updated record.
    fn set_status(
        &mut self,
        target: &Applicant,
        status: Status,
    ) -> Result<Applicant, AddressBookError>;

    /// Adds an applicant to the book.
    fn add_applicant(&mut self, applicant: Applicant) -> Result<(), AddressBookError>;

    /// Removes the record equal to `target` from the book.
    fn delete_applicant(&mut self, target: &Applicant) -> Result<(), AddressBookError>;

    /// Reorders the book by the given criterion.
    fn sort_applicants(&mut self, criterion: SortCriterion);

    /// Empties the book.
    fn clear(&mut self);

    /// Read-only view of the whole book.
    fn address_book(&self) -> &dyn ReadOnlyAddressBook;
}

/// In-memory [`Model`] implementation.
pub struct ModelManager {
    book: AddressBook,
    filter: Option<IdentifierPredicate>,
    observers: Vec<Box<dyn ModelObserver>>,
}

impl ModelManager {
    /// Creates a model over the given address book with no filter applied.
    pub fn new(book: AddressBook) -> Self {
        Self {
            book,
            filter: None,
            observers: Vec::new(),
        }
    }

    /// Registers an observer to be notified after every mutation.
    pub fn subscribe(&mut self, observer: Box<dyn ModelObserver>) {
        self.observers.push(observer);
    }

    /// Consumes the model, returning the address book for persistence.
    pub fn into_address_book(self) -> AddressBook {
        self.book
    }

    fn notify(&self) {
        for observer in &self.observers {
            observer.applicants_changed(&self.book);
        }
    }
}

impl Model for ModelManager {
    fn update_filtered_applicant_list(&mut self, predicate: IdentifierPredicate) {
        self.filter = Some(predicate);
    }

    fn clear_filter(&mut self) {
        self.filter = None;
    }

    fn filtered_applicant_list_size(&self) -> usize {
        self.filtered_applicant_list().len()
    }

    fn filtered_applicant_list(&self) -> Vec<Applicant> {
        match &self.filter {
            Some(predicate) => self
                .book
                .applicants()
                .iter()
                .filter(|applicant| predicate.matches(applicant))
                .cloned()
                .collect(),
            None => self.book.applicants().to_vec(),
        }
    }

    fn set_status(
        &mut self,
        target: &Applicant,
        status: Status,
    ) -> Result<Applicant, AddressBookError> {
        let updated = target.with_status(status);
        self.book.replace_applicant(target, updated.clone())?;
        self.notify();
        Ok(updated)
    }

    fn add_applicant(&mut self, applicant: Applicant) -> Result<(), AddressBookError> {
        self.book.add_applicant(applicant)?;
        self.notify();
        Ok(())
    }

    fn delete_applicant(&mut self, target: &Applicant) -> Result<(), AddressBookError> {
        self.book.remove_applicant(target)?;
        self.notify();
        Ok(())
    }

    fn sort_applicants(&mut self, criterion: SortCriterion) {
        self.book.sort_by_criterion(criterion);
        self.notify();
    }

    fn clear(&mut self) {
        self.book.clear();
        self.notify();
    }

    fn address_book(&self) -> &dyn ReadOnlyAddressBook {
        &self.book
    }
}
