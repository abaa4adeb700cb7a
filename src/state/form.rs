#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use crate::net::types::{LoginRequest, RegisterRequest};

/// The six editable fields of the account page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Phone,
    Password,
    ConfirmPassword,
}

/// Transient draft of the registration/login form fields.
///
/// Owned by the account page signal, mutated on every input event, and
/// reset to empty after a successful registration. The confirmation
/// password never leaves the draft; it only feeds [`passwords_match`].
///
/// [`passwords_match`]: AccountDraft::passwords_match
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AccountDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub confirm_password: String,
}

impl AccountDraft {
    /// Replace the value of one field, leaving the others untouched.
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::FirstName => self.first_name = value,
            Field::LastName => self.last_name = value,
            Field::Email => self.email = value,
            Field::Phone => self.phone = value,
            Field::Password => self.password = value,
            Field::ConfirmPassword => self.confirm_password = value,
        }
    }

    /// Read the current value of one field.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Password => &self.password,
            Field::ConfirmPassword => &self.confirm_password,
        }
    }

    /// Reset all six fields to empty strings.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Whether the password and its confirmation agree.
    pub fn passwords_match(&self) -> bool {
        self.password == self.confirm_password
    }

    /// Registration payload: the five non-confirmation fields.
    pub fn to_register_request(&self) -> RegisterRequest {
        RegisterRequest {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            password: self.password.clone(),
        }
    }

    /// Login payload: email and password only.
    pub fn to_login_request(&self) -> LoginRequest {
        LoginRequest {
            email: self.email.clone(),
            password: self.password.clone(),
        }
    }
}

/// Lifecycle of a form submission.
///
/// `Submitting` acts as the in-flight guard: submit handlers bail out and
/// the submit button is disabled until the request settles.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Submitting,
    Done,
    Failed,
}

impl SubmitPhase {
    /// Whether a request is currently in flight.
    pub fn in_flight(self) -> bool {
        matches!(self, Self::Submitting)
    }
}
