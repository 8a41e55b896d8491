//! Contact and newsletter forms.
//!
//! Nothing is sent anywhere: a submission waits for a fixed delay, writes its
//! payload to the browser console and reports success.

use gloo_timers::future::TimeoutFuture;
use log::{info, warn};
use serde::Serialize;
use thiserror::Error;

pub const MIN_MESSAGE_LEN: usize = 10;

pub const BUDGET_OPTIONS: [&str; 4] = ["< $10k", "$10k - $25k", "$25k - $50k", "$50k+"];

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please tell us your name.")]
    MissingName,
    #[error("Please enter your email address.")]
    MissingEmail,
    #[error("\"{0}\" doesn't look like an email address.")]
    InvalidEmail(String),
    #[error("Tell us a little more about your project (at least {min} characters).")]
    MessageTooShort { min: usize },
}

impl ValidationError {
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::MissingName => "name",
            ValidationError::MissingEmail | ValidationError::InvalidEmail(_) => "email",
            ValidationError::MessageTooShort { .. } => "message",
        }
    }
}

/// Loose shape check: one `@`, a non-empty local part and a dotted domain.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

fn check_email(email: &str, errors: &mut Vec<ValidationError>) {
    let email = email.trim();
    if email.is_empty() {
        errors.push(ValidationError::MissingEmail);
    } else if !is_valid_email(email) {
        errors.push(ValidationError::InvalidEmail(email.to_string()));
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub company: String,
    pub budget: String,
    pub message: String,
}

impl ContactForm {
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();
        if self.name.trim().is_empty() {
            errors.push(ValidationError::MissingName);
        }
        check_email(&self.email, &mut errors);
        if self.message.trim().chars().count() < MIN_MESSAGE_LEN {
            errors.push(ValidationError::MessageTooShort {
                min: MIN_MESSAGE_LEN,
            });
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    pub fn trimmed(&self) -> ContactForm {
        ContactForm {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            company: self.company.trim().to_string(),
            budget: self.budget.clone(),
            message: self.message.trim().to_string(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct NewsletterForm {
    pub email: String,
}

impl NewsletterForm {
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();
        check_email(&self.email, &mut errors);
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum SubmissionStatus {
    Idle,
    Submitting,
    Succeeded,
    Invalid(Vec<ValidationError>),
}

impl SubmissionStatus {
    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmissionStatus::Submitting)
    }

    pub fn errors(&self) -> &[ValidationError] {
        match self {
            SubmissionStatus::Invalid(errors) => errors,
            _ => &[],
        }
    }
}

/// Waits `delay_ms`, logs the payload locally and always succeeds.
pub async fn simulate_submission<T: Serialize>(kind: &str, payload: &T, delay_ms: u32) {
    TimeoutFuture::new(delay_ms).await;
    match serde_json::to_string(payload) {
        Ok(json) => gloo_console::log!(format!("{} submission (not sent): {}", kind, json)),
        Err(err) => warn!("could not serialize {} submission: {}", kind, err),
    }
    info!("{} submission accepted", kind);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Ada Lovelace".to_string(),
            email: "ada@analytical.engines".to_string(),
            company: "".to_string(),
            budget: BUDGET_OPTIONS[1].to_string(),
            message: "We need a new marketing site by spring.".to_string(),
        }
    }

    #[test]
    fn accepts_a_complete_form() {
        assert_eq!(filled().validate(), Ok(()));
    }

    #[test]
    fn reports_every_problem_in_field_order() {
        let form = ContactForm {
            name: "   ".to_string(),
            email: "nope".to_string(),
            message: "hi".to_string(),
            ..filled()
        };
        assert_eq!(
            form.validate(),
            Err(vec![
                ValidationError::MissingName,
                ValidationError::InvalidEmail("nope".to_string()),
                ValidationError::MessageTooShort { min: MIN_MESSAGE_LEN },
            ])
        );
    }

    #[test]
    fn errors_map_to_fields() {
        let fields: Vec<_> = ContactForm::default()
            .validate()
            .unwrap_err()
            .iter()
            .map(ValidationError::field)
            .collect();
        assert_eq!(fields, vec!["name", "email", "message"]);
    }

    #[test]
    fn email_shapes() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last+tag@sub.example.org"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("@b.co"));
        assert!(!is_valid_email("a@.co"));
        assert!(!is_valid_email("a@b.co."));
        assert!(!is_valid_email("a@@b.co"));
        assert!(!is_valid_email("a b@c.co"));
    }

    #[test]
    fn newsletter_requires_email() {
        assert_eq!(
            NewsletterForm::default().validate(),
            Err(vec![ValidationError::MissingEmail])
        );
        let form = NewsletterForm {
            email: " reader@example.com ".to_string(),
        };
        assert_eq!(form.validate(), Ok(()));
    }

    #[test]
    fn trimmed_payload_serializes() {
        let form = ContactForm {
            name: "  Ada ".to_string(),
            ..filled()
        };
        let json = serde_json::to_value(form.trimmed()).unwrap();
        assert_eq!(json["name"], "Ada");
        assert_eq!(json["budget"], "$10k - $25k");
    }

    #[test]
    fn status_errors() {
        let status = SubmissionStatus::Invalid(vec![ValidationError::MissingName]);
        assert_eq!(status.errors().len(), 1);
        assert!(SubmissionStatus::Idle.errors().is_empty());
        assert!(SubmissionStatus::Submitting.is_submitting());
        assert_eq!(
            ValidationError::MessageTooShort { min: 10 }.to_string(),
            "Tell us a little more about your project (at least 10 characters)."
        );
    }
}
