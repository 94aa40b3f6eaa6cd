//! Contact subcommand.

use thiserror::Error;

use crate::contact::ContactForm;
use crate::views;

/// Errors from the contact subcommand.
#[derive(Debug, Error)]
pub enum ContactCommandError {
    #[error("contact form has {0} invalid field(s)")]
    Invalid(usize),
}

/// Validate the enquiry and acknowledge it.
///
/// Field errors are printed one per line before the command fails.
pub fn submit(form: &ContactForm) -> Result<(), ContactCommandError> {
    match form.validate() {
        Ok(contact) => {
            tracing::info!(email = %contact.email, "contact enquiry accepted");
            views::notify("Thank you for your message! We'll be in touch soon.");
            Ok(())
        }
        Err(errors) => {
            for error in &errors {
                println!("  - {error}");
            }
            Err(ContactCommandError::Invalid(errors.len()))
        }
    }
}
