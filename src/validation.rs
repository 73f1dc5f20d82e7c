//! Field-level checks for submitted forms.

use crate::error::{AppError, FieldErrors};

pub const MAX_EMAIL_LEN: usize = 254;

#[derive(Debug, Default)]
pub struct Validator {
    errors: FieldErrors,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.errors
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    /// Non-blank and at most `max_len` characters.
    pub fn required(&mut self, field: &str, value: &str, max_len: usize) -> &mut Self {
        if value.trim().is_empty() {
            self.add(field, "This field is required.");
        } else {
            self.max_len(field, value, max_len);
        }
        self
    }

    pub fn max_len(&mut self, field: &str, value: &str, max_len: usize) -> &mut Self {
        let len = value.chars().count();
        if len > max_len {
            self.add(
                field,
                format!("Ensure this value has at most {max_len} characters (it has {len})."),
            );
        }
        self
    }

    /// Required, email shaped, and short enough for the 254-character column.
    pub fn email(&mut self, field: &str, value: &str) -> &mut Self {
        if value.trim().is_empty() {
            self.add(field, "This field is required.");
        } else if !is_email(value.trim()) {
            self.add(field, "Enter a valid email address.");
        } else {
            self.max_len(field, value.trim(), MAX_EMAIL_LEN);
        }
        self
    }

    pub fn rating(&mut self, field: &str, value: i32) -> &mut Self {
        if !crate::entity::testimonials::is_valid_rating(value) {
            self.add(
                field,
                format!("Select a valid choice. {value} is not one of the available choices."),
            );
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn finish(self) -> Result<(), AppError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(AppError::Validation(self.errors))
        }
    }
}

/// Shape check only: one `@`, a non-empty local part, and a dotted domain.
pub fn is_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') || value.chars().any(char::is_whitespace) {
        return false;
    }
    let labels: Vec<&str> = domain.split('.').collect();
    labels.len() >= 2 && labels.iter().all(|label| !label.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_shapes() {
        assert!(is_email("student@example.com"));
        assert!(is_email("a.b+c@mail.example.uz"));
        assert!(!is_email("no-at-sign"));
        assert!(!is_email("@example.com"));
        assert!(!is_email("user@localhost"));
        assert!(!is_email("user@exa mple.com"));
        assert!(!is_email("user@@example.com"));
        assert!(!is_email("user@example..com"));
    }

    #[test]
    fn blank_required_field_is_reported() {
        let mut v = Validator::new();
        v.required("name", "   ", 100);
        let Err(AppError::Validation(errors)) = v.finish() else {
            panic!("expected validation error");
        };
        assert_eq!(errors["name"], vec!["This field is required.".to_string()]);
    }

    #[test]
    fn overlong_email_is_reported() {
        let mut v = Validator::new();
        v.email("email", &format!("{}@example.com", "a".repeat(300)));
        let Err(AppError::Validation(errors)) = v.finish() else {
            panic!("expected validation error");
        };
        assert!(errors["email"][0].starts_with("Ensure this value has at most 254"));
    }

    #[test]
    fn too_long_value_is_reported() {
        let mut v = Validator::new();
        v.required("subject", &"x".repeat(201), 200);
        assert!(!v.is_empty());
    }

    #[test]
    fn clean_input_passes() {
        let mut v = Validator::new();
        v.required("name", "Aziza", 100)
            .email("email", "aziza@example.com")
            .rating("rating", 4);
        assert!(v.finish().is_ok());
    }
}
