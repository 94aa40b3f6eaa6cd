//! Contact form validation.
//!
//! Independent of the basket: four required fields plus an email format
//! check, with every failing field reported at once.

use thiserror::Error;

use uplift_core::Email;

/// Raw contact form input, as received from the user.
#[derive(Debug, Clone)]
pub struct ContactForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub message: String,
}

/// A validated, whitespace-trimmed contact enquiry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedContact {
    pub first_name: String,
    pub last_name: String,
    pub email: Email,
    pub message: String,
}

/// Field-level validation failures.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ContactFieldError {
    #[error("first name is required")]
    MissingFirstName,

    #[error("last name is required")]
    MissingLastName,

    #[error("please enter a valid email address")]
    InvalidEmail,

    #[error("message is required")]
    MissingMessage,
}

impl ContactForm {
    /// Validate the form, reporting every failing field.
    ///
    /// # Errors
    ///
    /// Returns one [`ContactFieldError`] per failing field, in field
    /// order.
    pub fn validate(&self) -> Result<ValidatedContact, Vec<ContactFieldError>> {
        let mut errors = Vec::new();

        let first_name = self.first_name.trim();
        if first_name.is_empty() {
            errors.push(ContactFieldError::MissingFirstName);
        }

        let last_name = self.last_name.trim();
        if last_name.is_empty() {
            errors.push(ContactFieldError::MissingLastName);
        }

        let email = Email::parse(&self.email.trim().to_lowercase());
        if email.is_err() {
            errors.push(ContactFieldError::InvalidEmail);
        }

        let message = self.message.trim();
        if message.is_empty() {
            errors.push(ContactFieldError::MissingMessage);
        }

        match email {
            Ok(email) if errors.is_empty() => Ok(ValidatedContact {
                first_name: first_name.to_owned(),
                last_name: last_name.to_owned(),
                email,
                message: message.to_owned(),
            }),
            _ => Err(errors),
        }
    }
}
