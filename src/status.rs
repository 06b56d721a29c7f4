//! Application status for applicants.
//!
//! A status is either one of the known pipeline stages or a free-form custom
//! value. Known stages parse case-insensitively; custom statuses are entered
//! through the `--custom` flag of the update command and kept verbatim.

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

/// The stage an applicant has reached in the hiring pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    /// Application received.
    Applied,
    /// Resume screening in progress.
    Screening,
    /// Interviewing.
    Interview,
    /// Offer extended.
    Offered,
    /// Offer accepted.
    Accepted,
    /// Application rejected.
    Rejected,
    /// A free-form status outside the known pipeline stages.
    Custom(String),
}

impl Status {
    /// All known pipeline stages, in pipeline order.
    pub const KNOWN: &'static [Status] = &[
        Status::Applied,
        Status::Screening,
        Status::Interview,
        Status::Offered,
        Status::Accepted,
        Status::Rejected,
    ];

    /// Parses a known pipeline stage, case-insensitively.
    ///
    /// Returns `None` when the text does not name a known stage; callers
    /// decide whether that is an error or grounds for a custom status.
    pub fn parse_known(text: &str) -> Option<Status> {
        let lowered = text.trim().to_lowercase();
        Status::KNOWN
            .iter()
            .find(|status| status.as_str().to_lowercase() == lowered)
            .cloned()
    }

    /// Constructs a free-form custom status.
    pub fn custom(text: impl Into<String>) -> Status {
        Status::Custom(text.into())
    }

    /// The display name of this status.
    pub fn as_str(&self) -> &str {
        match self {
            Status::Applied => "Applied",
            Status::Screening => "Screening",
            Status::Interview => "Interview",
            Status::Offered => "Offered",
            Status::Accepted => "Accepted",
            Status::Rejected => "Rejected",
            Status::Custom(text) => text,
        }
    }
}

impl Display for Status {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_str())
    }
}
