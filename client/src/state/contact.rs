//! Contact form validation and live character counter.
//!
//! DESIGN
//! ======
//! Each field runs its rules in order and stops at the first failure; the two
//! fields are always checked independently. A submit pass starts from a clean
//! slate, so nothing here is incremental except the counter, which is derived
//! from the raw message on every keystroke.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use std::sync::LazyLock;

use regex::Regex;

use crate::state::modal::ModalState;

/// Longest accepted message, in UTF-16 code units (what the browser reports
/// as the input's length).
pub const MAX_MESSAGE_LENGTH: usize = 300;

/// Modal text after a successful submit.
pub const SUCCESS_MESSAGE: &str = "Form validation passed! Your message has been accepted.";

pub const COUNTER_NORMAL_COLOR: &str = "black";
pub const COUNTER_ALERT_COLOR: &str = "red";

static VALID_EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

static ILLEGAL_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z0-9@._-]").expect("illegal-character pattern compiles"));

/// A single field's validation failure. `Display` is the user-facing text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("Email is required.")]
    EmailRequired,
    #[error("Invalid email format.")]
    EmailFormat,
    #[error("Email contains illegal characters.")]
    EmailIllegalCharacters,
    #[error("Message is required.")]
    MessageRequired,
    #[error("Message contains illegal characters.")]
    MessageIllegalCharacters,
    #[error("Message exceeds the maximum length of {max} characters.", max = MAX_MESSAGE_LENGTH)]
    MessageTooLong,
}

/// Validate the email field: required, then shape, then character set.
///
/// # Errors
///
/// Returns the first rule the trimmed value breaks.
pub fn validate_email(raw: &str) -> Result<(), FieldError> {
    let email = raw.trim();
    if email.is_empty() {
        return Err(FieldError::EmailRequired);
    }
    if !VALID_EMAIL.is_match(email) {
        return Err(FieldError::EmailFormat);
    }
    if ILLEGAL_CHARS.is_match(email) {
        return Err(FieldError::EmailIllegalCharacters);
    }
    Ok(())
}

/// Validate the message field: required, then character set, then length.
///
/// # Errors
///
/// Returns the first rule the trimmed value breaks.
pub fn validate_message(raw: &str) -> Result<(), FieldError> {
    let message = raw.trim();
    if message.is_empty() {
        return Err(FieldError::MessageRequired);
    }
    if ILLEGAL_CHARS.is_match(message) {
        return Err(FieldError::MessageIllegalCharacters);
    }
    if input_length(message) > MAX_MESSAGE_LENGTH {
        return Err(FieldError::MessageTooLong);
    }
    Ok(())
}

/// Length as the browser counts it, so astral-plane characters count twice.
fn input_length(value: &str) -> usize {
    value.encode_utf16().count()
}

/// Outcome of one submit pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub email: Option<FieldError>,
    pub message: Option<FieldError>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.email.is_none() && self.message.is_none()
    }
}

pub fn validate(email: &str, message: &str) -> ValidationReport {
    ValidationReport { email: validate_email(email).err(), message: validate_message(message).err() }
}

/// Live "Characters: n/300" readout under the message field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CharacterCounter {
    pub length: usize,
}

impl CharacterCounter {
    /// Counts the raw input, untrimmed, as typed.
    pub fn for_input(message: &str) -> Self {
        Self { length: input_length(message) }
    }

    pub fn over_limit(&self) -> bool {
        self.length > MAX_MESSAGE_LENGTH
    }

    pub fn text(&self) -> String {
        format!("Characters: {}/{MAX_MESSAGE_LENGTH}", self.length)
    }

    pub fn color(&self) -> &'static str {
        if self.over_limit() { COUNTER_ALERT_COLOR } else { COUNTER_NORMAL_COLOR }
    }
}

/// Form field values plus the errors from the last submit.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactState {
    pub email: String,
    pub message: String,
    pub counter: CharacterCounter,
    pub email_error: Option<FieldError>,
    pub message_error: Option<FieldError>,
}

impl ContactState {
    pub fn set_email(&mut self, value: String) {
        self.email = value;
    }

    /// Store the message and refresh the counter in the same step.
    pub fn set_message(&mut self, value: String) {
        self.counter = CharacterCounter::for_input(&value);
        self.message = value;
    }

    /// Run a full validation pass. Prior errors are cleared first; returns
    /// whether both fields passed.
    pub fn submit(&mut self) -> bool {
        self.email_error = None;
        self.message_error = None;

        let report = validate(&self.email, &self.message);
        self.email_error = report.email;
        self.message_error = report.message;
        report.is_valid()
    }
}

/// Validate the form and, when it passes, open the modal with the success
/// message. An invalid form leaves the modal untouched.
pub fn submit_contact(contact: &mut ContactState, modal: &mut ModalState) -> bool {
    let valid = contact.submit();
    if valid {
        modal.show(SUCCESS_MESSAGE);
    }
    valid
}
