//! Editable local copy of the merchant settings
//!
//! The form keeps the three settings fields and the derived email validity in
//! one value. Every setter re-derives the email error, so the flag can never
//! disagree with the fields it describes.

use once_cell::sync::Lazy;
use regex::Regex;

use super::SettingsRecord;

/// `local@domain.tld`, no whitespace, exactly one `@`, dotted domain with non-empty labels
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@.]+(\.[^\s@.]+)+$").expect("email pattern is a valid regex")
});

/// Why the notification email blocks submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EmailError {
    #[error("Enter an email address to receive review notifications")]
    Required,

    #[error("Enter a valid email address, like name@example.com")]
    Invalid,
}

impl EmailError {
    /// Validate an email against the notification toggle.
    ///
    /// An empty address is only acceptable while notifications are off.
    pub fn check(email: &str, email_notifications: bool) -> Option<Self> {
        let email = email.trim();
        if email.is_empty() {
            return email_notifications.then_some(Self::Required);
        }
        if EMAIL_PATTERN.is_match(email) {
            None
        } else {
            Some(Self::Invalid)
        }
    }
}

/// Result of a submit attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The payload was handed to the update operation
    Submitted,
    /// Nothing was sent because the email field is invalid
    Blocked(EmailError),
}

/// Local form state for the settings page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsForm {
    values: SettingsRecord,
    /// Last record confirmed by the server
    baseline: SettingsRecord,
    email_error: Option<EmailError>,
}

impl SettingsForm {
    /// Create a form mirroring a record fetched from the server
    pub fn from_record(record: SettingsRecord) -> Self {
        let email_error = EmailError::check(&record.email, record.email_notifications);
        Self {
            baseline: record.clone(),
            values: record,
            email_error,
        }
    }

    pub fn values(&self) -> &SettingsRecord {
        &self.values
    }

    pub fn email_error(&self) -> Option<EmailError> {
        self.email_error
    }

    pub fn has_email_error(&self) -> bool {
        self.email_error.is_some()
    }

    pub fn set_auto_publish(&mut self, auto_publish: bool) {
        self.values.auto_publish = auto_publish;
    }

    pub fn set_email_notifications(&mut self, email_notifications: bool) {
        self.values.email_notifications = email_notifications;
        self.revalidate();
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.values.email = email.into();
        self.revalidate();
    }

    /// True when the local copy differs from what the server last confirmed
    pub fn is_dirty(&self) -> bool {
        self.values != self.baseline
    }

    /// Discard local edits
    pub fn reset(&mut self) {
        self.values = self.baseline.clone();
        self.revalidate();
    }

    /// Adopt the record returned by a successful update
    pub fn accept_saved(&mut self, record: SettingsRecord) {
        self.baseline = record.clone();
        self.values = record;
        self.revalidate();
    }

    /// The record that would be sent on submit
    pub fn payload(&self) -> SettingsRecord {
        SettingsRecord {
            email: self.values.email.trim().to_string(),
            ..self.values.clone()
        }
    }

    /// Forward the current values to `on_submit`, unless the email is invalid.
    ///
    /// `on_submit` runs at most once. A blocked submit does not call it at all
    /// and returns the reason so the caller can show it.
    pub fn submit<F>(&self, on_submit: F) -> SubmitOutcome
    where
        F: FnOnce(SettingsRecord),
    {
        if let Some(error) = self.email_error {
            return SubmitOutcome::Blocked(error);
        }
        on_submit(self.payload());
        SubmitOutcome::Submitted
    }

    fn revalidate(&mut self) {
        self.email_error = EmailError::check(&self.values.email, self.values.email_notifications);
    }
}
