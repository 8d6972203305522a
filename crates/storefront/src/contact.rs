//! # Contact Form
//!
//! Validation for the storefront's contact form. A valid submission is acknowledged with a
//! [`ContactReceipt`] and logged; nothing is sent anywhere.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;
use validator::Validate;

/// Text shown to the visitor after a successful submission.
pub const CONFIRMATION: &str = "Demande de contact envoyée avec succès";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct ContactForm {
    #[validate(
        length(min = 1, code = "required", message = "email is required"),
        email(message = "email is not a valid address")
    )]
    pub email: String,
    #[validate(length(
        min = 1,
        max = 300,
        message = "message is required and limited to 300 characters"
    ))]
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactReceipt {
    pub email: String,
    pub confirmation: &'static str,
}

#[derive(Debug, Error)]
pub enum ContactError {
    #[error("Invalid contact form: {0}")]
    Invalid(#[from] validator::ValidationErrors),
}

impl ContactForm {
    pub fn new(email: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            message: message.into(),
        }
    }

    /// Validates the form and acknowledges it.
    pub fn submit(self) -> Result<ContactReceipt, ContactError> {
        self.validate()?;
        info!(email = %self.email, chars = self.message.chars().count(), "Contact form submitted");
        Ok(ContactReceipt {
            email: self.email,
            confirmation: CONFIRMATION,
        })
    }
}
