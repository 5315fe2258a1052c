use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

static EMAIL_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    TextArea,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

pub static CONTACT_FIELDS: [FieldSpec; 4] = [
    FieldSpec {
        name: "name",
        label: "Name",
        kind: FieldKind::Text,
        required: true,
    },
    FieldSpec {
        name: "email",
        label: "Email",
        kind: FieldKind::Email,
        required: true,
    },
    FieldSpec {
        name: "subject",
        label: "Subject",
        kind: FieldKind::Text,
        required: false,
    },
    FieldSpec {
        name: "message",
        label: "Message",
        kind: FieldKind::TextArea,
        required: true,
    },
];

pub const SUBMIT_LABEL: &str = "Send Message";
pub const SENDING_LABEL: &str = "Sending...";
pub const THANK_YOU: &str = "Thank you for your message! I'll get back to you soon.";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("Please enter your {0}")]
    Missing(&'static str),
    #[error("Please enter a valid email address")]
    InvalidEmail,
}

impl FieldSpec {
    pub fn validate(&self, value: &str) -> Result<(), FieldError> {
        if self.required && value.trim().is_empty() {
            return Err(FieldError::Missing(self.name));
        }
        if self.kind == FieldKind::Email && !value.is_empty() && !EMAIL_SHAPE.is_match(value) {
            return Err(FieldError::InvalidEmail);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct FieldState {
    spec: FieldSpec,
    value: String,
    error: Option<FieldError>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitState {
    Idle,
    Sending,
}

#[derive(Debug, Clone)]
pub struct ContactForm {
    fields: Vec<FieldState>,
    submit: SubmitState,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new(&CONTACT_FIELDS)
    }
}

impl ContactForm {
    pub fn new(specs: &[FieldSpec]) -> Self {
        let fields = specs
            .iter()
            .map(|spec| FieldState {
                spec: spec.clone(),
                value: String::new(),
                error: None,
            })
            .collect();
        Self {
            fields,
            submit: SubmitState::Idle,
        }
    }

    fn field_mut(&mut self, name: &str) -> Option<&mut FieldState> {
        self.fields.iter_mut().find(|f| f.spec.name == name)
    }

    pub fn set_value(&mut self, name: &str, value: &str) {
        if let Some(f) = self.field_mut(name) {
            f.value = value.to_string();
        }
    }

    pub fn value(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.spec.name == name)
            .map(|f| f.value.as_str())
    }

    pub fn error(&self, name: &str) -> Option<&FieldError> {
        self.fields
            .iter()
            .find(|f| f.spec.name == name)
            .and_then(|f| f.error.as_ref())
    }

    /// Re-checks one field and records the outcome. Unknown names count as valid.
    pub fn validate_field(&mut self, name: &str) -> bool {
        let Some(f) = self.field_mut(name) else {
            return true;
        };
        f.error = f.spec.validate(&f.value).err();
        f.error.is_none()
    }

    /// Validates every field so all messages show at once.
    pub fn validate_all(&mut self) -> bool {
        let names = self.fields.iter().map(|f| f.spec.name).collect::<Vec<_>>();
        names
            .into_iter()
            .fold(true, |ok, name| self.validate_field(name) && ok)
    }

    pub fn submit_state(&self) -> SubmitState {
        self.submit
    }

    pub fn submit_label(&self) -> &'static str {
        match self.submit {
            SubmitState::Idle => SUBMIT_LABEL,
            SubmitState::Sending => SENDING_LABEL,
        }
    }

    pub fn begin_sending(&mut self) {
        self.submit = SubmitState::Sending;
    }

    /// Clears values and restores the submit control.
    pub fn reset(&mut self) {
        for f in self.fields.iter_mut() {
            f.value.clear();
            f.error = None;
        }
        self.submit = SubmitState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(name: &'static str) -> &'static FieldSpec {
        CONTACT_FIELDS
            .iter()
            .find(|f| f.name == name)
            .expect("field should exist")
    }

    #[test]
    fn test_required_empty_fails() {
        assert_eq!(spec("name").validate(""), Err(FieldError::Missing("name")));
        assert_eq!(
            spec("message").validate("   \n"),
            Err(FieldError::Missing("message"))
        );
    }

    #[test]
    fn test_required_non_empty_passes() {
        assert_eq!(spec("name").validate("Ada"), Ok(()));
    }

    #[test]
    fn test_optional_empty_passes() {
        assert_eq!(spec("subject").validate(""), Ok(()));
    }

    #[test]
    fn test_email_shape() {
        assert_eq!(
            spec("email").validate("not-an-email"),
            Err(FieldError::InvalidEmail)
        );
        assert_eq!(spec("email").validate("a@b.co"), Ok(()));
        assert_eq!(
            spec("email").validate("a b@c.de"),
            Err(FieldError::InvalidEmail)
        );
    }

    #[test]
    fn test_missing_wins_over_email() {
        assert_eq!(spec("email").validate(" "), Err(FieldError::Missing("email")));
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            FieldError::Missing("email").to_string(),
            "Please enter your email"
        );
        assert_eq!(
            FieldError::InvalidEmail.to_string(),
            "Please enter a valid email address"
        );
    }

    #[test]
    fn test_validate_all_reports_every_field() {
        let mut form = ContactForm::default();
        form.set_value("email", "nope");
        assert!(!form.validate_all());
        assert!(form.error("name").is_some());
        assert_eq!(form.error("email"), Some(&FieldError::InvalidEmail));
        assert!(form.error("subject").is_none());
        assert!(form.error("message").is_some());
    }

    #[test]
    fn test_fixing_a_field_clears_its_error() {
        let mut form = ContactForm::default();
        assert!(!form.validate_field("name"));
        form.set_value("name", "Ada");
        assert!(form.validate_field("name"));
        assert!(form.error("name").is_none());
    }

    #[test]
    fn test_reset_restores_idle() {
        let mut form = ContactForm::default();
        form.set_value("name", "Ada");
        form.begin_sending();
        assert_eq!(form.submit_label(), SENDING_LABEL);
        form.reset();
        assert_eq!(form.value("name"), Some(""));
        assert_eq!(form.submit_state(), SubmitState::Idle);
        assert_eq!(form.submit_label(), SUBMIT_LABEL);
    }
}
