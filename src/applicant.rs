//! # Applicant Records
//!
//! This module defines the applicant record and its validated identifying
//! fields. An applicant is a contact with a name, phone number, and email
//! address, plus a mutable [`Status`](crate::Status) tracking where they are
//! in the hiring pipeline.
//!
//! Field values are validated at construction time, so any `Name`, `Phone`,
//! or `Email` held by an `Applicant` is known to be well formed.

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::Status;

static NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9 ]*$").expect("static name pattern"));
static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{3,}$").expect("static phone pattern"));
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9+_.-]+@[A-Za-z0-9][A-Za-z0-9.-]*$").expect("static email pattern")
});

//////////////////////////////////////////// FieldError ////////////////////////////////////////////

/// Errors produced when constructing an applicant field from raw text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// The name was empty or contained characters outside alphanumerics and spaces.
    InvalidName(String),
    /// The phone number was not at least three digits.
    InvalidPhone(String),
    /// The email did not have a `local@domain` shape.
    InvalidEmail(String),
}

impl Display for FieldError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            FieldError::InvalidName(value) => write!(
                f,
                "Invalid name '{}': names should only contain alphanumeric characters and spaces, and should not be blank",
                value
            ),
            FieldError::InvalidPhone(value) => write!(
                f,
                "Invalid phone '{}': phone numbers should only contain digits, and should be at least 3 digits long",
                value
            ),
            FieldError::InvalidEmail(value) => write!(
                f,
                "Invalid email '{}': emails should be of the form local-part@domain",
                value
            ),
        }
    }
}

impl std::error::Error for FieldError {}

////////////////////////////////////////////// Fields //////////////////////////////////////////////

/// An applicant's name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Name(String);

impl Name {
    /// Constructs a name, validating the raw text.
    pub fn new(value: &str) -> Result<Self, FieldError> {
        if NAME_PATTERN.is_match(value) {
            Ok(Name(value.to_string()))
        } else {
            Err(FieldError::InvalidName(value.to_string()))
        }
    }

    /// The name as text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Name {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.0)
    }
}

/// An applicant's phone number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Phone(String);

impl Phone {
    /// Constructs a phone number, validating the raw text.
    pub fn new(value: &str) -> Result<Self, FieldError> {
        if PHONE_PATTERN.is_match(value) {
            Ok(Phone(value.to_string()))
        } else {
            Err(FieldError::InvalidPhone(value.to_string()))
        }
    }

    /// The phone number as text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Phone {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.0)
    }
}

/// An applicant's email address.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Email(String);

impl Email {
    /// Constructs an email address, validating the raw text.
    pub fn new(value: &str) -> Result<Self, FieldError> {
        if EMAIL_PATTERN.is_match(value) {
            Ok(Email(value.to_string()))
        } else {
            Err(FieldError::InvalidEmail(value.to_string()))
        }
    }

    /// The email address as text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Email {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.0)
    }
}

///////////////////////////////////////////// Applicant ////////////////////////////////////////////

/// A contact record tracked by the address book.
///
/// Two applicants are compared with full structural equality. Whether two
/// records count as "the same applicant" for duplicate detection is a looser
/// rule, see [`Applicant::is_same_applicant`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Applicant {
    name: Name,
    phone: Phone,
    email: Email,
    status: Status,
}

impl Applicant {
    /// Constructs an applicant from validated fields.
    pub fn new(name: Name, phone: Phone, email: Email, status: Status) -> Self {
        Self {
            name,
            phone,
            email,
            status,
        }
    }

    /// The applicant's name.
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// The applicant's phone number.
    pub fn phone(&self) -> &Phone {
        &self.phone
    }

    /// The applicant's email address.
    pub fn email(&self) -> &Email {
        &self.email
    }

    /// The applicant's current status.
    pub fn status(&self) -> &Status {
        &self.status
    }

    /// Returns a copy of this applicant with the status replaced.
    pub fn with_status(&self, status: Status) -> Self {
        Self {
            name: self.name.clone(),
            phone: self.phone.clone(),
            email: self.email.clone(),
            status,
        }
    }

    /// The identity rule used for duplicate detection: two records refer to
    /// the same applicant when their names are equal.
    pub fn is_same_applicant(&self, other: &Applicant) -> bool {
        self.name == other.name
    }
}

impl Display for Applicant {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(
            f,
            "{}; Phone: {}; Email: {}; Status: {}",
            self.name, self.phone, self.email, self.status
        )
    }
}
