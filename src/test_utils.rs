#[cfg(test)]
pub mod test_helpers {
    use crate::{AddressBook, Applicant, Email, Name, Phone, Status};

    /// Builds an applicant from raw field text, panicking on invalid input.
    pub fn applicant(name: &str, phone: &str, email: &str, status: &str) -> Applicant {
        let status = Status::parse_known(status).unwrap_or_else(|| Status::custom(status));
        Applicant::new(
            Name::new(name).unwrap(),
            Phone::new(phone).unwrap(),
            Email::new(email).unwrap(),
            status,
        )
    }

    /// A three-applicant book with distinct names, phones, and emails.
    pub fn sample_book() -> AddressBook {
        AddressBook::from_applicants(vec![
            applicant("Alex Yeoh", "87438807", "alexyeoh@example.com", "Applied"),
            applicant(
                "Bernice Yu",
                "99272758",
                "berniceyu@example.com",
                "Screening",
            ),
            applicant(
                "Charlotte Oliveiro",
                "93210283",
                "charlotte@example.com",
                "Interview",
            ),
        ])
        .unwrap()
    }
}
