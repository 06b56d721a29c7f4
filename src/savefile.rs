//! # Address Book Persistence
//!
//! This module stores the address book as a JSON savefile. The file holds a
//! single envelope with a UTC timestamp of the last save and the applicant
//! list; loading a file that violates the duplicate-free invariant is a
//! corruption error, not a silent repair.
//!
//! A missing savefile is not an error: it loads as an empty book, so first
//! runs need no setup step.

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{AddressBook, Applicant, ReadOnlyAddressBook};

/// Errors that can occur while loading or saving the address book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SavefileError {
    /// An I/O operation on the savefile failed.
    Io(String),
    /// The savefile contents could not be serialized or deserialized.
    Serialization(String),
    /// The savefile deserialized but violates an address book invariant.
    Corrupt(String),
}

impl Display for SavefileError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            SavefileError::Io(msg) => write!(f, "IO error: {}", msg),
            SavefileError::Serialization(msg) => write!(f, "Serialization error: {}", msg),
            SavefileError::Corrupt(msg) => write!(f, "Corrupt savefile: {}", msg),
        }
    }
}

impl std::error::Error for SavefileError {}

/// The on-disk envelope: when the book was last saved, and its applicants.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveFile {
    /// Timestamp of the save that produced this file.
    pub saved_at: DateTime<Utc>,
    /// The applicants in book order.
    pub applicants: Vec<Applicant>,
}

/// Loads and saves the address book at a fixed path.
#[derive(Debug, Clone)]
pub struct SavefileManager {
    path: PathBuf,
}

impl SavefileManager {
    /// Creates a manager for the savefile at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The savefile path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the address book, returning an empty book when the savefile
    /// does not exist yet.
    pub fn load(&self) -> Result<AddressBook, SavefileError> {
        if !self.path.exists() {
            return Ok(AddressBook::new());
        }
        let contents = std::fs::read_to_string(&self.path)
            .map_err(|e| SavefileError::Io(e.to_string()))?;
        let savefile: SaveFile = serde_json::from_str(&contents)
            .map_err(|e| SavefileError::Serialization(e.to_string()))?;
        AddressBook::from_applicants(savefile.applicants)
            .map_err(|e| SavefileError::Corrupt(e.to_string()))
    }

    /// Writes the address book to the savefile, stamping the current time.
    pub fn save(&self, book: &dyn ReadOnlyAddressBook) -> Result<(), SavefileError> {
        let savefile = SaveFile {
            saved_at: Utc::now(),
            applicants: book.applicants().to_vec(),
        };
        let contents = serde_json::to_string_pretty(&savefile)
            .map_err(|e| SavefileError::Serialization(e.to_string()))?;
        std::fs::write(&self.path, contents).map_err(|e| SavefileError::Io(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use std::process;
    use std::time::{SystemTime, UNIX_EPOCH};

    use super::*;
    use crate::test_utils::test_helpers::sample_book;

    fn temp_savefile(suffix: &str) -> PathBuf {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_millis();
        std::env::temp_dir().join(format!(
            "rolodex_test_{}_{}_{}.json",
            process::id(),
            timestamp,
            suffix
        ))
    }

    #[test]
    fn missing_file_loads_as_empty_book() {
        let manager = SavefileManager::new(temp_savefile("missing"));
        let book = manager.load().unwrap();
        assert!(book.is_empty());
    }

    #[test]
    fn save_and_load_round_trip() {
        let path = temp_savefile("round_trip");
        let manager = SavefileManager::new(path.clone());
        let book = sample_book();

        manager.save(&book).unwrap();
        let loaded = manager.load().unwrap();

        assert_eq!(loaded, book);
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn malformed_json_is_a_serialization_error() {
        let path = temp_savefile("malformed");
        std::fs::write(&path, "not json").unwrap();
        let manager = SavefileManager::new(path.clone());

        assert!(matches!(
            manager.load(),
            Err(SavefileError::Serialization(_))
        ));
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn duplicate_applicants_are_a_corruption_error() {
        let path = temp_savefile("duplicates");
        let alex = crate::test_utils::test_helpers::applicant(
            "Alex Yeoh",
            "87438807",
            "alexyeoh@example.com",
            "Applied",
        );
        let savefile = SaveFile {
            saved_at: Utc::now(),
            applicants: vec![alex.clone(), alex.with_status(crate::Status::Rejected)],
        };
        std::fs::write(&path, serde_json::to_string(&savefile).unwrap()).unwrap();
        let manager = SavefileManager::new(path.clone());

        assert!(matches!(manager.load(), Err(SavefileError::Corrupt(_))));
        std::fs::remove_file(path).ok();
    }
}
